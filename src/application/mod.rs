mod config;
mod session;

pub use config::BoardConfig;
pub use session::{Command, Controls, Session};
