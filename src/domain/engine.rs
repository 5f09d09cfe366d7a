//! Generation lifecycle for a single board.
//!
//! The engine is either *editable* (generation zero, cells can be toggled
//! and the topology chosen) or *advancing* (at least one generation has been
//! computed). Calls that only make sense in the editable state are accepted
//! silently and ignored otherwise; they report whether they took effect.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info, trace};

use super::{BoardError, Cell, CellView, Grid, Pattern, Topology};

/// Snapshot of the four board statistics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Stats {
    pub generation: u64,
    pub initial_live: usize,
    pub current_live: usize,
    pub max_live: usize,
}

pub struct SimulationEngine {
    grid: Grid,
    topology: Topology,
    show_trajectory: bool,
    /// Cells live at least once since the last reset
    trajectory: Vec<bool>,
    /// Live cells of the editable generation-zero pattern
    zero_gen: BTreeSet<usize>,
    generation: u64,
    max_live: usize,
}

impl SimulationEngine {
    /// Create an editable, all-dead board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let grid = Grid::new(rows, cols)?;
        let size = grid.size();
        Ok(Self {
            grid,
            topology: Topology::Bounded,
            show_trajectory: false,
            trajectory: vec![false; size],
            zero_gen: BTreeSet::new(),
            generation: 0,
            max_live: 0,
        })
    }

    // ---------- queries ----------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn is_live(&self, index: usize) -> Result<bool, BoardError> {
        self.grid.is_live(index)
    }

    /// Live at some point since the last reset but dead now
    pub fn is_trace(&self, index: usize) -> Result<bool, BoardError> {
        let live = self.grid.is_live(index)?;
        Ok(self.trajectory[index] && !live)
    }

    pub fn cell_view(&self, index: usize) -> Result<CellView, BoardError> {
        if self.grid.is_live(index)? {
            Ok(CellView::Live)
        } else if self.show_trajectory && self.trajectory[index] {
            Ok(CellView::Trace)
        } else {
            Ok(CellView::Dead)
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn is_unbounded(&self) -> bool {
        self.topology.is_unbounded()
    }

    pub fn shows_trajectory(&self) -> bool {
        self.show_trajectory
    }

    pub fn is_editable(&self) -> bool {
        self.generation == 0
    }

    /// True when the next generation would equal the current one.
    pub fn is_still(&self) -> bool {
        self.grid.next_generation(self.topology) == self.grid
    }

    /// Generation zero may always be advanced; later generations only
    /// until they settle.
    pub fn can_advance(&self) -> bool {
        self.is_editable() || !self.is_still()
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn initial_live_count(&self) -> usize {
        self.zero_gen.len()
    }

    pub fn current_live_count(&self) -> usize {
        self.grid.live_count()
    }

    /// Running maximum since the last reset; the generation-zero count while
    /// editable.
    pub fn max_live_count(&self) -> usize {
        if self.is_editable() {
            self.initial_live_count()
        } else {
            self.max_live
        }
    }

    /// Generation-zero live cells in ascending order
    pub fn zero_generation(&self) -> impl Iterator<Item = usize> + '_ {
        self.zero_gen.iter().copied()
    }

    /// Trajectory cells in ascending order
    pub fn trajectory(&self) -> impl Iterator<Item = usize> + '_ {
        self.trajectory
            .iter()
            .enumerate()
            .filter(|(_, marked)| **marked)
            .map(|(i, _)| i)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            generation: self.generation,
            initial_live: self.initial_live_count(),
            current_live: self.current_live_count(),
            max_live: self.max_live_count(),
        }
    }

    // ---------- editing ----------

    /// Flip a generation-zero cell. `Ok(false)` once the simulation has
    /// advanced.
    pub fn toggle_cell(&mut self, index: usize) -> Result<bool, BoardError> {
        if !self.is_editable() {
            // still reject bad indices so callers learn about them
            self.grid.get(index)?;
            debug!(index, generation = self.generation, "toggle ignored outside generation zero");
            return Ok(false);
        }
        match self.grid.toggle(index)? {
            Cell::Alive => self.zero_gen.insert(index),
            Cell::Dead => self.zero_gen.remove(&index),
        };
        self.max_live = 0;
        trace!(index, live = self.zero_gen.contains(&index), "cell toggled");
        Ok(true)
    }

    /// Choose the topology; ignored (returns `false`) once advancing.
    pub fn set_unbounded(&mut self, unbounded: bool) -> bool {
        if !self.is_editable() {
            debug!(unbounded, "topology is locked after generation zero");
            return false;
        }
        self.topology = Topology::from_unbounded(unbounded);
        debug!(topology = ?self.topology, "topology set");
        true
    }

    pub fn set_show_trajectory(&mut self, show: bool) {
        self.show_trajectory = show;
    }

    /// Stamp a pattern with its top-left corner at (row, col). Cells that
    /// fall off the board are dropped, however far off the anchor lies.
    /// Returns the number of cells set live, or `None` when not editable.
    pub fn place_pattern(
        &mut self,
        pattern: &Pattern,
        row: usize,
        col: usize,
    ) -> Result<Option<usize>, BoardError> {
        if !self.is_editable() {
            debug!(pattern = pattern.name, "pattern placement ignored outside generation zero");
            return Ok(None);
        }
        let targets: Vec<usize> = pattern
            .cells
            .iter()
            .filter_map(|&(dr, dc)| {
                row.checked_add(dr)
                    .zip(col.checked_add(dc))
                    .and_then(|(r, c)| self.grid.index_of(r, c))
            })
            .collect();
        for &index in &targets {
            self.mark_zero_live(index)?;
        }
        self.max_live = 0;
        debug!(pattern = pattern.name, row, col, placed = targets.len(), "pattern placed");
        Ok(Some(targets.len()))
    }

    /// Replace generation zero with a random pattern where each cell is live
    /// with probability `density`. `Ok(false)` when not editable.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) -> Result<bool, BoardError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(BoardError::InvalidDensity(density));
        }
        if !self.is_editable() {
            debug!("randomize ignored outside generation zero");
            return Ok(false);
        }
        self.grid.clear();
        self.zero_gen.clear();
        for index in 0..self.grid.size() {
            if rng.random_bool(density) {
                self.mark_zero_live(index)?;
            }
        }
        self.max_live = 0;
        debug!(density, live = self.zero_gen.len(), "board randomized");
        Ok(true)
    }

    fn mark_zero_live(&mut self, index: usize) -> Result<(), BoardError> {
        self.grid.set_live(index)?;
        self.zero_gen.insert(index);
        Ok(())
    }

    // ---------- simulation ----------

    /// Compute and apply the next generation.
    ///
    /// Not guarded against still boards: the caller decides whether a
    /// redundant advance is allowed (see [`can_advance`](Self::can_advance)).
    pub fn advance_generation(&mut self) {
        let next = self.grid.next_generation(self.topology);

        if self.is_editable() {
            // leaving generation zero: the starting pattern joins the trail
            // and seeds the running maximum
            self.mark_trajectory();
            self.max_live = self.initial_live_count();
        }

        self.grid = next;
        self.generation += 1;
        self.mark_trajectory();
        self.max_live = self.max_live.max(self.grid.live_count());

        debug!(
            generation = self.generation,
            live = self.grid.live_count(),
            max = self.max_live,
            "advanced generation"
        );
    }

    fn mark_trajectory(&mut self) {
        for index in self.grid.live_indices() {
            self.trajectory[index] = true;
        }
    }

    // ---------- lifecycle ----------

    /// Back to an empty generation zero. Topology and trajectory display
    /// are kept.
    pub fn new_simulation(&mut self) {
        self.zero_gen.clear();
        self.reset_to_zero_gen();
        info!("new simulation");
    }

    /// Back to the pattern generation zero started from.
    pub fn restart(&mut self) {
        self.reset_to_zero_gen();
        info!(live = self.zero_gen.len(), "restarted from generation zero");
    }

    /// Make the current generation the new generation zero.
    pub fn break_here(&mut self) {
        let from = self.generation;
        self.zero_gen = self.grid.live_indices().collect();
        self.reset_to_zero_gen();
        info!(from, live = self.zero_gen.len(), "current generation is now generation zero");
    }

    fn reset_to_zero_gen(&mut self) {
        self.trajectory.iter_mut().for_each(|marked| *marked = false);
        self.generation = 0;
        self.max_live = 0;
        let zero_gen = &self.zero_gen;
        self.grid.fill_with(|index| zero_gen.contains(&index));
    }
}
