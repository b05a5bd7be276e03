//! Loop controller: one decision cycle per iteration
//!
//! The session owns everything a cycle needs: settings, templates, cached
//! grid geometry, live stats, and the three ports, threaded explicitly
//! rather than held in globals. State machine: while no geometry is cached
//! the session is locating; once the board template matches, the geometry
//! is fixed for the rest of the process and every cycle reads the board,
//! checks for a terminal banner, and otherwise plays the optimal move.

use std::{path::PathBuf, thread, time::Duration};

use log::{debug, error, info, warn};

use crate::{
    board::{Board, MatchOutcome},
    config::Settings,
    engine::{self, Tier},
    ports::{PointerActuator, ScreenSource, StatsRepository},
    stats::SessionStats,
    vision::{self, templates::TemplateSet, GridGeometry},
    Result,
};

/// Pause between the two clicks of every double-click.
const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(100);

/// What a single cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A move was chosen and clicked
    MovePlayed { position: usize, tier: Tier },
    /// A terminal banner was detected; stats updated and reset clicked
    MatchEnded { outcome: MatchOutcome },
    /// No result and no legal move (full board without a banner)
    NoMove,
}

/// The running perception-and-decision loop.
pub struct Session<S, P, R>
where
    S: ScreenSource,
    P: PointerActuator,
    R: StatsRepository,
{
    settings: Settings,
    templates: TemplateSet,
    screen: S,
    pointer: P,
    repository: R,
    stats_path: PathBuf,
    stats: SessionStats,
    geometry: Option<GridGeometry>,
}

impl<S, P, R> Session<S, P, R>
where
    S: ScreenSource,
    P: PointerActuator,
    R: StatsRepository,
{
    /// Build a session, loading persisted stats (missing record counts from
    /// zero).
    pub fn new(
        settings: Settings,
        templates: TemplateSet,
        screen: S,
        pointer: P,
        repository: R,
        stats_path: PathBuf,
    ) -> Result<Self> {
        let stats = repository.load(&stats_path)?;
        info!(
            "session starting: {} games on record, {} moves played",
            stats.games_played(),
            stats.moves_played
        );
        Ok(Session {
            settings,
            templates,
            screen,
            pointer,
            repository,
            stats_path,
            stats,
            geometry: None,
        })
    }

    /// Current counters.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Cached grid geometry, if the board has been located.
    pub fn geometry(&self) -> Option<GridGeometry> {
        self.geometry
    }

    /// Run forever on the configured cadence.
    ///
    /// Transient errors (board momentarily invisible, a failed pointer
    /// action) are logged and the loop continues next cycle; anything else
    /// aborts, since retrying cannot succeed without operator intervention.
    /// There is no normal termination: the process runs until killed.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.step()?;
            thread::sleep(self.settings.cycle_delay);
        }
    }

    /// Run a bounded number of cycles with the same error policy as
    /// [`run`](Self::run). Used by the replay harness and tests.
    pub fn run_for(&mut self, cycles: usize) -> Result<()> {
        for _ in 0..cycles {
            self.step()?;
            thread::sleep(self.settings.cycle_delay);
        }
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        match self.run_cycle() {
            Ok(outcome) => debug!("cycle complete: {outcome:?}"),
            Err(e) if e.is_transient() => warn!("cycle skipped: {e}"),
            Err(e) => {
                error!("aborting loop: {e}");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Execute exactly one decision cycle.
    ///
    /// Capture → locate or read the board → check for a terminal banner →
    /// otherwise choose and click the optimal move. The cycle that first
    /// locates the board continues with the freshly established (all-empty)
    /// state rather than waiting a cycle.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome> {
        let frame = self.screen.capture(None)?;

        let threshold = self.settings.confidence_threshold;
        let (geometry, board) = match self.geometry {
            Some(geometry) => (
                geometry,
                vision::read_board(&frame, &geometry, &self.templates, threshold),
            ),
            None => {
                let geometry = vision::locate_board(&frame, &self.templates, threshold)?;
                info!("board detected, starting game");
                self.geometry = Some(geometry);
                (geometry, Board::new())
            }
        };

        if let Some(outcome) = vision::detect_result(&frame, &self.templates, threshold) {
            info!("game over: {outcome:?}");
            self.stats.record_outcome(outcome);
            self.repository.save(&self.stats, &self.stats_path)?;

            let (x, y) = geometry.grid_center();
            info!("resetting the game by clicking the grid center at ({x}, {y})");
            self.double_click(x, y)?;
            return Ok(CycleOutcome::MatchEnded { outcome });
        }

        match engine::choose_move(&board) {
            Some(decision) => {
                let (x, y) = geometry.cell_center(decision.position);
                info!(
                    "playing position {} ({:?}) at ({x}, {y})",
                    decision.position, decision.tier
                );
                self.double_click(x, y)?;
                self.stats.record_move();
                self.repository.save(&self.stats, &self.stats_path)?;
                Ok(CycleOutcome::MovePlayed {
                    position: decision.position,
                    tier: decision.tier,
                })
            }
            None => {
                warn!("no move available on board:\n{board}");
                Ok(CycleOutcome::NoMove)
            }
        }
    }

    fn double_click(&mut self, x: u32, y: u32) -> Result<()> {
        self.pointer.move_cursor(x, y)?;
        self.pointer.click(x, y, 2, DOUBLE_CLICK_INTERVAL)
    }
}
