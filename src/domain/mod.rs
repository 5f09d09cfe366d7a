mod cell;
mod engine;
mod error;
mod grid;
mod neighbors;
mod patterns;

pub use cell::{Cell, CellView};
pub use engine::{SimulationEngine, Stats};
pub use error::BoardError;
pub use grid::Grid;
pub use neighbors::Topology;
pub use patterns::{Pattern, presets};
