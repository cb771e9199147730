//! Application context and tick loop.
//!
//! `Specter` owns everything a run needs — configuration, offset table,
//! start instant — and threads it through each tick explicitly. There are
//! no process-wide singletons; two instances with different tables can
//! coexist in one process.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::memory::ReadMemory;
use crate::offset::OffsetTable;
use crate::overlay::{DrawInstruction, FrameComposer};
use crate::render::RenderSink;

/// The overlay application.
pub struct Specter {
    composer: FrameComposer,
    started: Instant,
}

impl Specter {
    pub fn new(offsets: OffsetTable, config: Config) -> Self {
        Self {
            composer: FrameComposer::new(offsets, config),
            started: Instant::now(),
        }
    }

    pub fn config(&self) -> &Config {
        self.composer.config()
    }

    pub fn offsets(&self) -> &OffsetTable {
        self.composer.offsets()
    }

    /// Compose one frame against the current target state.
    pub fn tick<R: ReadMemory + ?Sized>(&self, reader: &R) -> Vec<DrawInstruction> {
        self.composer.compose(reader, self.started.elapsed())
    }

    /// Drive the overlay until `running` clears.
    ///
    /// Single cooperative loop: each iteration checks the stop flag,
    /// composes a frame, hands every instruction to the sink in order,
    /// then sleeps the configured interval. Read failures never end the
    /// loop; a sink error does, so the caller can decide whether to
    /// re-attach.
    pub fn run<R, S>(&self, reader: &R, sink: &mut S, running: &AtomicBool) -> Result<()>
    where
        R: ReadMemory + ?Sized,
        S: RenderSink,
    {
        let interval = self.config().performance.update_interval();
        info!(version = %self.offsets().version, "Overlay loop started");

        let mut ticks: u64 = 0;
        while running.load(Ordering::SeqCst) {
            let instructions = self.tick(reader);

            sink.begin_frame()?;
            for instruction in &instructions {
                sink.draw(instruction)?;
            }
            sink.end_frame()?;

            ticks += 1;
            thread::sleep(interval);
        }

        debug!(ticks, "Overlay loop stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    use crate::memory::MockMemoryBuilder;
    use crate::render::RecordingSink;

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.display.show_startup_message = false;
        config.performance.max_entities = 1;
        config
    }

    #[test]
    fn test_run_returns_when_flag_already_clear() {
        let reader = MockMemoryBuilder::new().build();
        let mut sink = RecordingSink::default();
        let specter = Specter::new(OffsetTable::default(), quiet_config());

        let running = AtomicBool::new(false);
        specter.run(&reader, &mut sink, &running).unwrap();
        assert!(sink.frames.is_empty());
    }

    #[test]
    fn test_run_feeds_sink_until_stopped() {
        let reader = MockMemoryBuilder::new().build();
        let specter = Arc::new(Specter::new(OffsetTable::default(), quiet_config()));
        let running = Arc::new(AtomicBool::new(true));

        let handle = {
            let specter = Arc::clone(&specter);
            let running = Arc::clone(&running);
            thread::spawn(move || {
                let mut sink = RecordingSink::default();
                specter.run(&reader, &mut sink, &running).unwrap();
                sink.frames.len()
            })
        };

        thread::sleep(Duration::from_millis(50));
        running.store(false, Ordering::SeqCst);
        let frames = handle.join().unwrap();

        // The unreadable mock world composes empty frames, but the sink
        // must still see one begin/end pair per tick.
        assert!(frames > 0);
    }
}
