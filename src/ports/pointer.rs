//! Pointer actuation port

use std::time::Duration;

use crate::Result;

/// Port for issuing synthetic pointer actions.
///
/// The loop controller always moves the cursor to the target first and then
/// issues a double-click, both for playing a cell and for the reset click.
pub trait PointerActuator {
    /// Move the cursor to absolute screen coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Actuation`]; the failed cycle is abandoned
    /// but the loop continues on the next iteration.
    fn move_cursor(&mut self, x: u32, y: u32) -> Result<()>;

    /// Click at absolute screen coordinates, `count` times, pausing
    /// `interval` between clicks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Actuation`]; the failed cycle is abandoned
    /// but the loop continues on the next iteration.
    fn click(&mut self, x: u32, y: u32, count: u32, interval: Duration) -> Result<()>;
}
