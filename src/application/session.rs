use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::domain::{BoardError, Pattern, SimulationEngine, presets};
use super::BoardConfig;

/// A user action forwarded by the shell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleCell(usize),
    Advance,
    NewSimulation,
    Restart,
    Break,
    SetUnbounded(bool),
    SetShowTrajectory(bool),
    /// Place preset `index` centred on (row, col)
    PlacePattern { index: usize, row: usize, col: usize },
    Randomize,
}

/// Which controls the shell should offer right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub advance: bool,
    pub restart: bool,
    pub break_here: bool,
    pub unbounded: bool,
    pub edit_cells: bool,
}

impl Controls {
    pub fn from_engine(engine: &SimulationEngine) -> Self {
        let editable = engine.is_editable();
        Self {
            advance: engine.can_advance(),
            restart: !editable,
            break_here: !editable,
            unbounded: editable,
            edit_cells: editable,
        }
    }

    /// Whether `command` is currently offered
    pub fn allows(&self, command: &Command) -> bool {
        match command {
            Command::Advance => self.advance,
            Command::Restart => self.restart,
            Command::Break => self.break_here,
            Command::SetUnbounded(_) => self.unbounded,
            Command::ToggleCell(_) | Command::PlacePattern { .. } | Command::Randomize => {
                self.edit_cells
            }
            Command::NewSimulation | Command::SetShowTrajectory(_) => true,
        }
    }
}

/// One board as the shell sees it: owns the engine, the preset list and
/// the RNG, and applies commands under the same gating the shell uses to
/// enable its controls.
pub struct Session {
    engine: SimulationEngine,
    config: BoardConfig,
    patterns: Vec<Pattern>,
    rng: StdRng,
}

impl Session {
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let engine = SimulationEngine::new(config.rows, config.cols)?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            engine,
            config,
            patterns: presets::all_patterns(),
            rng,
        })
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn controls(&self) -> Controls {
        Controls::from_engine(&self.engine)
    }

    /// Apply a command. `Ok(false)` when the command is not currently
    /// offered and was ignored.
    pub fn apply(&mut self, command: Command) -> Result<bool, BoardError> {
        if !self.controls().allows(&command) {
            debug!(?command, "command not available");
            return Ok(false);
        }

        let applied = match command {
            Command::ToggleCell(index) => self.engine.toggle_cell(index)?,
            Command::Advance => {
                self.engine.advance_generation();
                true
            }
            Command::NewSimulation => {
                self.engine.new_simulation();
                true
            }
            Command::Restart => {
                self.engine.restart();
                true
            }
            Command::Break => {
                self.engine.break_here();
                true
            }
            Command::SetUnbounded(flag) => self.engine.set_unbounded(flag),
            Command::SetShowTrajectory(flag) => {
                self.engine.set_show_trajectory(flag);
                true
            }
            Command::PlacePattern { index, row, col } => {
                let pattern = self.patterns.get(index).ok_or(BoardError::PatternIndex {
                    index,
                    available: self.patterns.len(),
                })?;
                let (top, left) = pattern.anchor_centered_on(row, col);
                self.engine.place_pattern(pattern, top, left)?.is_some()
            }
            Command::Randomize => {
                self.engine.randomize(&mut self.rng, self.config.random_density)?
            }
        };
        Ok(applied)
    }
}
