//! How we keep sampled data around.

mod history;
pub use history::*;

mod moving_average;
pub use moving_average::MovingAverage;
