pub mod format;
pub mod stopwatch;

pub use stopwatch::{Lap, StopwatchController, StopwatchSnapshot, StopwatchState, StopwatchStatus};
