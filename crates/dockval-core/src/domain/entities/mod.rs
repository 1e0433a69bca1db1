pub(crate) mod common;
pub mod docking;
pub mod spacecraft;

pub use docking::{DockingRequest, DockingStatus};
pub use spacecraft::Spacecraft;
