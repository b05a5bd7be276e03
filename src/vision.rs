//! Vision pipeline: from raw screen pixels to board state and result signal
//!
//! Template matching is threshold-gated rather than taking the global best
//! match: the board may legitimately be absent from the frame (during a
//! reset animation, say), and a low-confidence "best" match must not be
//! mistaken for presence.

pub mod matcher;
pub mod templates;

use image::{imageops, GrayImage, RgbaImage};
use log::{debug, trace};

use crate::{
    board::{Board, Cell, MatchOutcome, Player},
    error::Error,
    Result,
};
use self::matcher::{best_match, peak_score};
use self::templates::TemplateSet;

/// Where the 3x3 grid lies on screen, in full-frame pixel coordinates.
///
/// Established once when the board template first matches above the
/// confidence threshold and reused for every subsequent cycle of the
/// session; it is never recomputed unless the process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub origin_x: u32,
    pub origin_y: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridGeometry {
    /// Screen coordinates of the center of a cell (position 0-8).
    pub fn cell_center(&self, position: usize) -> (u32, u32) {
        let row = (position / 3) as u32;
        let col = (position % 3) as u32;
        (
            self.origin_x + col * self.cell_width + self.cell_width / 2,
            self.origin_y + row * self.cell_height + self.cell_height / 2,
        )
    }

    /// Screen coordinates of the grid's geometric center (the reset target).
    pub fn grid_center(&self) -> (u32, u32) {
        (
            self.origin_x + 3 * self.cell_width / 2,
            self.origin_y + 3 * self.cell_height / 2,
        )
    }
}

/// Locate the game grid by matching the board template against the frame.
///
/// The peak location plus the template dimensions determine the cell spans
/// by integer division into thirds; remainder pixels are absorbed into the
/// last row and column's effective span.
///
/// # Errors
///
/// [`Error::LowConfidence`] when the peak score is below the threshold (the
/// board is not currently visible); [`Error::InvalidGeometry`] when the
/// template is too small to yield positive cell spans.
pub fn locate_board(
    frame: &RgbaImage,
    templates: &TemplateSet,
    threshold: f64,
) -> Result<GridGeometry> {
    let gray = imageops::grayscale(frame);
    let peak = best_match(&gray, &templates.board).unwrap_or(matcher::TemplateMatch {
        x: 0,
        y: 0,
        score: 0.0,
    });

    if peak.score < threshold {
        return Err(Error::LowConfidence {
            target: "board",
            score: peak.score,
            threshold,
        });
    }

    let (tw, th) = templates.board.dimensions();
    let cell_width = tw / 3;
    let cell_height = th / 3;
    if cell_width == 0 || cell_height == 0 {
        return Err(Error::InvalidGeometry {
            message: format!("board template {tw}x{th} yields zero-sized cells"),
        });
    }

    let geometry = GridGeometry {
        origin_x: peak.x,
        origin_y: peak.y,
        cell_width,
        cell_height,
    };
    debug!(
        "board located at ({}, {}) with score {:.3}, cells {}x{}",
        peak.x, peak.y, peak.score, cell_width, cell_height
    );
    Ok(geometry)
}

/// Read the current board state by classifying each of the 9 cells.
///
/// Each cell crop is correlated independently against the bot-mark and
/// human-mark templates; a cell is classified for whichever exceeds the
/// threshold, else left empty. The bot template is evaluated first, so a
/// cell where both templates exceed the threshold is classified as the
/// bot's, a known ambiguity of the mark assets rather than a resolution
/// rule with deeper meaning.
///
/// The scan replaces the whole board every call; there is no incremental
/// diffing, and the geometry itself is never modified.
pub fn read_board(
    frame: &RgbaImage,
    geometry: &GridGeometry,
    templates: &TemplateSet,
    threshold: f64,
) -> Board {
    let gray = imageops::grayscale(frame);
    let mut board = Board::new();

    for pos in 0..9 {
        let row = (pos / 3) as u32;
        let col = (pos % 3) as u32;
        let x = geometry.origin_x + col * geometry.cell_width;
        let y = geometry.origin_y + row * geometry.cell_height;
        let cell = imageops::crop_imm(&gray, x, y, geometry.cell_width, geometry.cell_height)
            .to_image();

        let mark = classify_cell(&cell, templates, threshold);
        trace!("cell {pos} at ({x}, {y}) classified {mark:?}");
        board.set(pos, mark);
    }

    board
}

fn classify_cell(cell: &GrayImage, templates: &TemplateSet, threshold: f64) -> Cell {
    if peak_score(cell, &templates.bot_mark) > threshold {
        Cell::Bot
    } else if peak_score(cell, &templates.human_mark) > threshold {
        Cell::Human
    } else {
        Cell::Empty
    }
}

/// Detect a terminal-result banner anywhere in the frame.
///
/// The three banners are tried in fixed priority order (bot win, human
/// win, draw) and the first whose peak score exceeds the threshold wins.
/// This signal is independent of the cell-by-cell board read: a banner can
/// appear even while cell classification is stale or ambiguous.
pub fn detect_result(
    frame: &RgbaImage,
    templates: &TemplateSet,
    threshold: f64,
) -> Option<MatchOutcome> {
    let gray = imageops::grayscale(frame);
    let banners = [
        (&templates.bot_win, MatchOutcome::Win(Player::Bot)),
        (&templates.human_win, MatchOutcome::Win(Player::Human)),
        (&templates.draw, MatchOutcome::Draw),
    ];

    for (template, outcome) in banners {
        let score = peak_score(&gray, template);
        if score > threshold {
            debug!("result banner {outcome:?} detected with score {score:.3}");
            return Some(outcome);
        }
    }
    None
}
