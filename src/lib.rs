// Domain layer - board, rule, neighbourhoods, generation lifecycle
pub mod domain;

// Application layer - configuration and command gating
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{BoardError, Cell, CellView, Grid, Pattern, SimulationEngine, Stats, Topology, presets};
pub use application::{BoardConfig, Command, Controls, Session};
pub use ui::Button;
