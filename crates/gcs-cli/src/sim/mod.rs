//! Synthetic fleets and show layouts for trying out the assignment engine.

pub mod layouts;

pub use layouts::{create_ring_layout, create_scattered_layout, takeoff_grid, ShowLayout};
