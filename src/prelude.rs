pub use super::axis::Axis;
pub use super::command::{fill_commands, write_function};
pub use super::error::Error;
pub use super::point::Point;
pub use super::region::{AxisLimits, Region};
pub use super::solid::Solid;
