//! Screen-playing Tic-Tac-Toe bot
//!
//! This crate watches the screen, infers the game state from pixels via
//! template matching, chooses a provably optimal move through exhaustive
//! adversarial search, and issues synthetic pointer actions to play it,
//! repeatedly, until the match ends, at which point it resets the game and
//! updates a persisted score record.
//!
//! The crate provides:
//! - Board state model with terminal predicates
//! - Vision pipeline: board location, cell classification, result banners
//! - Decision engine: immediate-win/block shortcuts plus alpha-beta minimax
//! - Loop controller threading state through explicit ports for screen
//!   capture, pointer actuation, and stats persistence

pub mod adapters;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod ports;
pub mod session;
pub mod stats;
pub mod vision;

pub use board::{Board, Cell, MatchOutcome, Player};
pub use config::Settings;
pub use engine::{choose_move, Decision, Tier};
pub use error::{Error, Result};
pub use session::{CycleOutcome, Session};
pub use stats::SessionStats;
pub use vision::GridGeometry;
