mod local;
#[cfg(target_os = "windows")]
mod process;
mod reader;

#[cfg(test)]
pub mod mock;

pub use local::{LocalMemory, current_module_base};
#[cfg(target_os = "windows")]
pub use process::{GAME_EXECUTABLE, MemoryReader, ProcessHandle};
pub use reader::{MAX_TEXT_LEN, ReadMemory, decode_text};

#[cfg(test)]
pub use mock::{MockMemoryBuilder, MockMemoryReader};
