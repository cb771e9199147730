use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use specter::{Config, OffsetTable};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod input;
mod shutdown;

use shutdown::StopSignal;

#[derive(Parser)]
#[command(name = "specter")]
#[command(about = "Entity overlay for a running game process")]
struct Args {
    /// Configuration file (JSON)
    #[arg(short, long, default_value = "specter.json")]
    config: PathBuf,

    /// Offset table file (JSON)
    #[arg(short, long, default_value = "offsets.json")]
    offsets: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("specter=info".parse()?))
        .init();

    let args = Args::parse();

    info!("Specter starting...");

    let config = match Config::load(&args.config) {
        Ok(c) => {
            info!("Loaded config from {:?}", args.config);
            c
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    };

    let offsets = match specter::load_offsets(&args.offsets) {
        Ok(o) => {
            info!("Loaded offsets version: {}", o.version);
            o
        }
        Err(e) => {
            warn!("Failed to load offsets: {}, using built-in table", e);
            OffsetTable::default()
        }
    };

    let stop = Arc::new(StopSignal::new());
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.request())?;
    }
    let key_watcher = input::spawn_key_watcher(Arc::clone(&stop));

    let outcome = run_overlay(&config, &offsets, &stop);

    stop.request();
    let _ = key_watcher.join();

    info!("Specter stopped");
    outcome
}

#[cfg(target_os = "windows")]
fn run_overlay(config: &Config, offsets: &OffsetTable, stop: &StopSignal) -> Result<()> {
    use std::time::Duration;

    use specter::{GdiOverlay, MemoryReader, ProcessHandle, Specter};
    use tracing::{debug, error};

    // Delay between attach attempts while the target window is absent.
    const RECONNECT_DELAY: Duration = Duration::from_secs(5);

    loop {
        if stop.is_requested() {
            return Ok(());
        }

        match ProcessHandle::find_and_open(&config.window.title) {
            Ok(process) => {
                info!(pid = process.pid(), "Found target window");

                let reader = MemoryReader::new(&process);
                let mut sink = GdiOverlay::new(process.window(), config.display.text_color);
                let specter = Specter::new(offsets.clone(), config.clone());

                // A sink error usually means the window went away; fall
                // through to the reconnect wait and try again.
                if let Err(e) = specter.run(&reader, &mut sink, stop.flag()) {
                    error!("Overlay error: {e}");
                }

                info!("Detached from target");
            }
            Err(e) => {
                debug!("Target not available: {e}");
            }
        }

        if stop.wait(RECONNECT_DELAY) {
            return Ok(());
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn run_overlay(_config: &Config, _offsets: &OffsetTable, _stop: &StopSignal) -> Result<()> {
    anyhow::bail!("the live overlay requires a Windows target; no process attachment backend exists on this platform")
}
