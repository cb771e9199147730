mod reader;

#[cfg(target_os = "windows")]
mod process;

#[cfg(test)]
pub mod mock;

pub use reader::ReadMemory;

#[cfg(target_os = "windows")]
pub use process::ProcessHandle;
#[cfg(target_os = "windows")]
pub use reader::MemoryReader;

#[cfg(test)]
pub use mock::{MockMemoryBuilder, MockMemoryReader};
