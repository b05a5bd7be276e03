//! Frame-sequence screen source
//!
//! Serves a pre-recorded sequence of frames in order, one per capture.
//! Drives the replay harness and the integration tests; a live OS capture
//! adapter implements the same port downstream.

use std::collections::VecDeque;

use image::{imageops, RgbaImage};

use crate::{
    error::Error,
    ports::{Region, ScreenSource},
    Result,
};

/// Screen source backed by a recorded frame sequence.
pub struct ReplayScreen {
    frames: VecDeque<RgbaImage>,
}

impl ReplayScreen {
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = RgbaImage>,
    {
        ReplayScreen {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet served.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl ScreenSource for ReplayScreen {
    fn capture(&mut self, region: Option<Region>) -> Result<RgbaImage> {
        let frame = self.frames.pop_front().ok_or_else(|| Error::Capture {
            message: "replay frame sequence exhausted".to_string(),
        })?;

        match region {
            Some(r) => Ok(imageops::crop_imm(&frame, r.x, r.y, r.width, r.height).to_image()),
            None => Ok(frame),
        }
    }
}
