//! Trait boundaries to external collaborators
//!
//! The perception and decision loop calls three capabilities it does not
//! implement: reading screen pixels, issuing synthetic pointer actions, and
//! persisting the score record. Each is a port; concrete implementations
//! live in [`crate::adapters`] or in downstream integrations.

pub mod pointer;
pub mod screen;
pub mod stats;

pub use pointer::PointerActuator;
pub use screen::{Region, ScreenSource};
pub use stats::StatsRepository;
