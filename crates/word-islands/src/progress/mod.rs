pub mod record;
pub mod storage;
pub mod store;

pub use record::{ProgressRecord, PROGRESS_KEY};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{CompletionRecorder, ProgressStore};
