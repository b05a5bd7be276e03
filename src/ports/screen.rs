//! Screen capture port

use image::RgbaImage;

use crate::Result;

/// A sub-rectangle of the screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Port for reading screen pixels.
///
/// A capture is a point-in-time read with no other side effects. The call
/// is effectively blocking with no timeout; a hang stalls the whole loop,
/// which is an accepted design limit for a single-operator system.
pub trait ScreenSource {
    /// Grab the current screen contents, optionally restricted to a
    /// sub-rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Capture`] when no frame can be produced;
    /// capture failure is fatal to the loop.
    fn capture(&mut self, region: Option<Region>) -> Result<RgbaImage>;
}
