//! Normalized cross-correlation template matching
//!
//! Slides a grayscale template over a grayscale search image and scores
//! each placement with zero-mean normalized cross-correlation, yielding a
//! peak location and a confidence in [-1, 1]. A score near 1.0 means the
//! window matches the template up to brightness and contrast shifts.

use image::GrayImage;

/// Peak of a template-matching pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateMatch {
    /// Column of the window's top-left corner
    pub x: u32,
    /// Row of the window's top-left corner
    pub y: u32,
    /// Normalized correlation score at the peak
    pub score: f64,
}

/// Windows whose pixel variance falls below this are skipped: correlation
/// against a constant signal is undefined.
const VARIANCE_FLOOR: f64 = 1e-6;

/// Find the best placement of `template` inside `image`.
///
/// Returns `None` when the template does not fit inside the image, when the
/// template has no pixel variance, or when every candidate window is flat.
pub fn best_match(image: &GrayImage, template: &GrayImage) -> Option<TemplateMatch> {
    let (iw, ih) = image.dimensions();
    let (tw, th) = template.dimensions();
    if tw == 0 || th == 0 || tw > iw || th > ih {
        return None;
    }

    let n = (tw * th) as f64;
    let tpl: Vec<f64> = template.as_raw().iter().map(|&p| p as f64).collect();
    let tpl_sum: f64 = tpl.iter().sum();
    let tpl_mean = tpl_sum / n;
    let tpl_var: f64 = tpl.iter().map(|&t| (t - tpl_mean) * (t - tpl_mean)).sum();
    if tpl_var < VARIANCE_FLOOR {
        return None;
    }

    let mut best: Option<TemplateMatch> = None;

    for y in 0..=(ih - th) {
        for x in 0..=(iw - tw) {
            let mut win_sum = 0.0;
            let mut win_sq_sum = 0.0;
            let mut cross_sum = 0.0;

            for dy in 0..th {
                for dx in 0..tw {
                    let pixel = image.get_pixel(x + dx, y + dy).0[0] as f64;
                    win_sum += pixel;
                    win_sq_sum += pixel * pixel;
                    cross_sum += pixel * tpl[(dy * tw + dx) as usize];
                }
            }

            let win_mean = win_sum / n;
            let win_var = win_sq_sum - n * win_mean * win_mean;
            if win_var < VARIANCE_FLOOR {
                continue;
            }

            let numerator = cross_sum - n * win_mean * tpl_mean;
            let score = numerator / (win_var * tpl_var).sqrt();

            if best.map_or(true, |b| score > b.score) {
                best = Some(TemplateMatch { x, y, score });
            }
        }
    }

    best
}

/// Maximum correlation score of `template` anywhere in `image`, or 0.0 when
/// no placement could be scored.
pub fn peak_score(image: &GrayImage, template: &GrayImage) -> f64 {
    best_match(image, template).map_or(0.0, |m| m.score)
}
