//! Session configuration

use std::time::Duration;

/// Match-confidence threshold applied uniformly by every template-matching
/// call.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Delay between decision cycles.
pub const DEFAULT_CYCLE_DELAY: Duration = Duration::from_millis(500);

/// Immutable-for-the-session settings.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tictacbot::Settings;
///
/// let settings = Settings::default()
///     .with_confidence_threshold(0.9)
///     .with_cycle_delay(Duration::from_millis(250));
/// assert_eq!(settings.confidence_threshold, 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Minimum correlation score to accept a template match as a detection
    pub confidence_threshold: f64,
    /// Blocking sleep between cycles
    pub cycle_delay: Duration,
}

impl Settings {
    /// Set the match-confidence threshold.
    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set the inter-cycle delay.
    pub fn with_cycle_delay(mut self, delay: Duration) -> Self {
        self.cycle_delay = delay;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            cycle_delay: DEFAULT_CYCLE_DELAY,
        }
    }
}
