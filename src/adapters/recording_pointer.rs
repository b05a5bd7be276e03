//! Action-recording pointer actuator
//!
//! Logs every pointer action and records it in shared storage instead of
//! touching a real cursor. Used by the replay harness to show what the bot
//! would have done, and by tests to assert on the exact action sequence.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use log::info;

use crate::{ports::PointerActuator, Result};

/// A recorded pointer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    MoveCursor { x: u32, y: u32 },
    Click { x: u32, y: u32, count: u32 },
}

/// Pointer actuator that records instead of acting.
///
/// Clones share the same action log, so a test can keep one handle while
/// the session owns another.
#[derive(Clone, Default)]
pub struct RecordingPointer {
    actions: Arc<Mutex<Vec<PointerAction>>>,
}

impl RecordingPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all actions recorded so far.
    pub fn actions(&self) -> Vec<PointerAction> {
        self.actions.lock().unwrap().clone()
    }

    /// Clicks only, in order.
    pub fn clicks(&self) -> Vec<(u32, u32)> {
        self.actions
            .lock()
            .unwrap()
            .iter()
            .filter_map(|action| match action {
                PointerAction::Click { x, y, .. } => Some((*x, *y)),
                PointerAction::MoveCursor { .. } => None,
            })
            .collect()
    }
}

impl PointerActuator for RecordingPointer {
    fn move_cursor(&mut self, x: u32, y: u32) -> Result<()> {
        info!("pointer: move to ({x}, {y})");
        self.actions
            .lock()
            .unwrap()
            .push(PointerAction::MoveCursor { x, y });
        Ok(())
    }

    fn click(&mut self, x: u32, y: u32, count: u32, _interval: Duration) -> Result<()> {
        info!("pointer: click x{count} at ({x}, {y})");
        self.actions
            .lock()
            .unwrap()
            .push(PointerAction::Click { x, y, count });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_action_sequence() {
        let recorder = RecordingPointer::new();
        let mut handle = recorder.clone();

        handle.move_cursor(5, 6).unwrap();
        handle.click(5, 6, 2, Duration::from_millis(100)).unwrap();

        assert_eq!(
            recorder.actions(),
            vec![
                PointerAction::MoveCursor { x: 5, y: 6 },
                PointerAction::Click { x: 5, y: 6, count: 2 },
            ]
        );
        assert_eq!(recorder.clicks(), vec![(5, 6)]);
    }
}
