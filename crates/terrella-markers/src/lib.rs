//! Screen-anchored informational markers and the per-frame pass that decides
//! whether scene geometry occludes them.

mod point;
mod projector;

pub use point::PointOfInterest;
pub use projector::{project_markers, screen_offset};
