//! Labeled world-space points surfaced as 2D overlay elements.

use glam::{Vec2, Vec3};

/// A point of interest anchored in the 3D scene.
///
/// `visible` and `screen_offset` are outputs of the projector pass; a UI
/// layer reads them and never writes them. Markers live outside the scene
/// graph, so they can never occlude themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct PointOfInterest {
    /// Anchor position in world space.
    pub world_position: Vec3,
    /// Text shown by the overlay element.
    pub label: String,
    /// Whether the overlay is currently shown.
    pub visible: bool,
    /// Overlay translation from screen center, in pixels (+Y down).
    pub screen_offset: Vec2,
}

impl PointOfInterest {
    /// Create a marker in its startup state: hidden, centered.
    pub fn new(world_position: Vec3, label: impl Into<String>) -> Self {
        Self {
            world_position,
            label: label.into(),
            visible: false,
            screen_offset: Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_marker_starts_hidden() {
        let marker = PointOfInterest::new(Vec3::new(-0.8, 1.2, 0.6), "point-0");
        assert!(!marker.visible, "markers stay hidden until the first pass");
        assert_eq!(marker.screen_offset, Vec2::ZERO);
        assert_eq!(marker.label, "point-0");
    }
}
