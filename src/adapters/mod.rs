//! Concrete implementations of the crate's ports

pub mod in_memory_stats;
pub mod json_stats;
pub mod recording_pointer;
pub mod replay_screen;

pub use in_memory_stats::InMemoryStatsRepository;
pub use json_stats::JsonStatsRepository;
pub use recording_pointer::{PointerAction, RecordingPointer};
pub use replay_screen::ReplayScreen;
