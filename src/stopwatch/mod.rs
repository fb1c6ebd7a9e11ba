pub mod controller;
pub mod laps;
pub mod state;

pub use controller::StopwatchController;
pub use laps::Lap;
pub use state::{StopwatchSnapshot, StopwatchState, StopwatchStatus};
