//! Reference template assets
//!
//! Six grayscale templates drive the whole pipeline: the board outline, the
//! two cell marks, and the three terminal banners. They are resolved from a
//! fixed assets directory by name and loaded once; a missing or unreadable
//! file is fatal configuration, not a transient condition.

use std::path::Path;

use image::GrayImage;

use crate::{error::Error, Result};

pub const BOARD_FILE: &str = "board.png";
pub const BOT_MARK_FILE: &str = "bot.png";
pub const HUMAN_MARK_FILE: &str = "human.png";
pub const BOT_WIN_FILE: &str = "bot_win.png";
pub const HUMAN_WIN_FILE: &str = "human_win.png";
pub const DRAW_FILE: &str = "draw.png";

/// The loaded template set, grayscale, immutable for the session.
#[derive(Debug)]
pub struct TemplateSet {
    pub board: GrayImage,
    pub bot_mark: GrayImage,
    pub human_mark: GrayImage,
    pub bot_win: GrayImage,
    pub human_win: GrayImage,
    pub draw: GrayImage,
}

impl TemplateSet {
    /// Load all six templates from the assets directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] naming the first asset that is missing
    /// or unreadable.
    pub fn load(assets_dir: &Path) -> Result<Self> {
        Ok(TemplateSet {
            board: load_template(assets_dir, BOARD_FILE)?,
            bot_mark: load_template(assets_dir, BOT_MARK_FILE)?,
            human_mark: load_template(assets_dir, HUMAN_MARK_FILE)?,
            bot_win: load_template(assets_dir, BOT_WIN_FILE)?,
            human_win: load_template(assets_dir, HUMAN_WIN_FILE)?,
            draw: load_template(assets_dir, DRAW_FILE)?,
        })
    }

    /// Build a template set from already-decoded images.
    ///
    /// Used by tests and by callers that embed their assets.
    pub fn from_images(
        board: GrayImage,
        bot_mark: GrayImage,
        human_mark: GrayImage,
        bot_win: GrayImage,
        human_win: GrayImage,
        draw: GrayImage,
    ) -> Self {
        TemplateSet {
            board,
            bot_mark,
            human_mark,
            bot_win,
            human_win,
            draw,
        }
    }
}

fn load_template(assets_dir: &Path, name: &'static str) -> Result<GrayImage> {
    let path = assets_dir.join(name);
    let image = image::open(&path).map_err(|e| Error::Template {
        name,
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(image.to_luma8())
}
