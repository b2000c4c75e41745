//! Decomposes implicit lattice solids (spheres, hemispheres, cylinders,
//! arc tunnels) into axis-aligned regions bounded by a volume budget,
//! sized for bulk-fill commands.

pub mod axis;
pub mod command;
pub mod error;
pub mod point;
pub mod prelude;
pub mod region;
pub mod solid;

pub use axis::Axis;
pub use command::{fill_commands, write_function, MAX_COMMANDS};
pub use error::Error;
pub use point::Point;
pub use region::{AxisLimits, Region};
pub use solid::{Solid, DEFAULT_ADJUSTMENT};
