/// A single board cell: the only two states a cell may hold.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state given the number of live neighbours:
    /// exactly 2 keeps the current state, exactly 3 is live,
    /// anything else is dead.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match neighbors {
            2 => self,
            3 => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// How the shell should paint a cell.
///
/// `Trace` marks a cell that has been live since the last reset but is
/// dead now; it is only reported while trajectory display is switched on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellView {
    Live,
    Trace,
    Dead,
}
