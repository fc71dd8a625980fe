//! Screen-space lens flare layout for the sun's light anchor.
//!
//! Elements sit along the line from the anchor's screen position through
//! screen center and fade as the anchor nears the screen border. This is
//! pure layout; drawing the sprites is renderer territory.

use glam::{Vec2, Vec3};

use crate::camera::Camera;

/// A single flare element: one billboard on the flare line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlareElement {
    /// Billboard size in pixels at unit pixel ratio.
    pub size: f32,
    /// Position along the flare line: 0.0 = at the light anchor, 0.5 = at
    /// screen center, 1.0 = mirrored across center.
    pub line_position: f32,
}

/// The flare rig attached to the sun's light anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct FlareRig {
    /// Elements in draw order.
    pub elements: Vec<FlareElement>,
    /// Screen-edge fade margin in normalized units. Range [0, 0.5].
    pub edge_fade_margin: f32,
}

impl Default for FlareRig {
    fn default() -> Self {
        Self {
            elements: vec![
                FlareElement {
                    size: 1000.0,
                    line_position: 0.0,
                },
                FlareElement {
                    size: 60.0,
                    line_position: 0.6,
                },
                FlareElement {
                    size: 70.0,
                    line_position: 0.7,
                },
                FlareElement {
                    size: 120.0,
                    line_position: 0.9,
                },
                FlareElement {
                    size: 70.0,
                    line_position: 1.0,
                },
            ],
            edge_fade_margin: 0.3,
        }
    }
}

/// A flare element resolved to a concrete screen placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlarePlacement {
    /// Normalized [0, 1] screen position.
    pub screen_position: Vec2,
    /// On-screen size in pixels after the edge fade.
    pub size: f32,
}

impl FlareRig {
    /// Lay out every element for the given anchor screen position
    /// (normalized [0, 1] coordinates).
    pub fn layout(&self, anchor_screen_pos: Vec2) -> Vec<FlarePlacement> {
        let fade = edge_fade_factor(anchor_screen_pos, self.edge_fade_margin);
        self.elements
            .iter()
            .map(|element| FlarePlacement {
                screen_position: element_screen_position(anchor_screen_pos, element.line_position),
                size: element.size * fade,
            })
            .collect()
    }
}

/// Project the flare anchor into normalized [0, 1] screen coordinates.
/// Returns `None` when the anchor is behind the camera.
pub fn anchor_screen_position(camera: &Camera, anchor_world: Vec3) -> Option<Vec2> {
    let ndc = camera.project(anchor_world)?;
    Some(Vec2::new(ndc.x * 0.5 + 0.5, -ndc.y * 0.5 + 0.5))
}

/// Screen position of a flare element along the anchor-to-center line.
///
/// `line_position` doubles through the center: 0.5 lands exactly on screen
/// center and 1.0 on the anchor's mirror image across it.
pub fn element_screen_position(anchor_screen_pos: Vec2, line_position: f32) -> Vec2 {
    let screen_center = Vec2::new(0.5, 0.5);
    anchor_screen_pos + (screen_center - anchor_screen_pos) * (line_position * 2.0)
}

/// Fade factor based on how close the anchor is to the screen border:
/// 1.0 well inside, falling to 0.0 at and beyond the edge.
pub fn edge_fade_factor(screen_pos: Vec2, margin: f32) -> f32 {
    let dx = (screen_pos.x - 0.5).abs();
    let dy = (screen_pos.y - 0.5).abs();
    let max_dist = dx.max(dy);

    let fade_start = 0.5 - margin;
    if max_dist < fade_start {
        1.0
    } else if margin <= 0.0 {
        0.0
    } else {
        ((0.5 - max_dist) / margin).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ahead_projects_near_screen_center() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::ZERO);
        let anchor = camera.position + camera.forward() * 40.0;

        let screen = anchor_screen_position(&camera, anchor).expect("anchor ahead projects");
        assert!(
            (screen.x - 0.5).abs() < 1e-3 && (screen.y - 0.5).abs() < 1e-3,
            "anchor straight ahead should map to screen center, got ({}, {})",
            screen.x,
            screen.y
        );
    }

    #[test]
    fn test_anchor_behind_camera_has_no_screen_position() {
        let mut camera = Camera::default();
        camera.look_at(Vec3::ZERO);
        let behind = camera.position - camera.forward() * 40.0;
        assert!(anchor_screen_position(&camera, behind).is_none());
    }

    #[test]
    fn test_elements_sit_on_the_anchor_to_center_line() {
        let anchor = Vec2::new(0.3, 0.2);
        let center = Vec2::new(0.5, 0.5);
        let line = center - anchor;

        for t in [0.0, 0.6, 0.7, 0.9, 1.0] {
            let pos = element_screen_position(anchor, t);
            let offset = pos - anchor;
            let cross = offset.x * line.y - offset.y * line.x;
            assert!(
                cross.abs() < 1e-5,
                "element at t={t} strays off the flare line (cross = {cross})"
            );
        }
    }

    #[test]
    fn test_line_position_semantics() {
        let anchor = Vec2::new(0.2, 0.3);

        let at_anchor = element_screen_position(anchor, 0.0);
        assert!((at_anchor - anchor).length() < 1e-6);

        let at_center = element_screen_position(anchor, 0.5);
        assert!((at_center - Vec2::new(0.5, 0.5)).length() < 1e-6);

        let mirrored = element_screen_position(anchor, 1.0);
        let expected = Vec2::new(0.5, 0.5) * 2.0 - anchor;
        assert!(
            (mirrored - expected).length() < 1e-6,
            "t=1 should mirror the anchor across center, got {mirrored:?}"
        );
    }

    #[test]
    fn test_edge_fade_center_and_offscreen() {
        let margin = 0.3;
        assert!((edge_fade_factor(Vec2::new(0.5, 0.5), margin) - 1.0).abs() < 1e-6);

        let near_edge = edge_fade_factor(Vec2::new(0.9, 0.5), margin);
        assert!(near_edge > 0.0 && near_edge < 1.0, "got {near_edge}");

        assert!(edge_fade_factor(Vec2::new(1.1, 0.5), margin) <= 0.0);
    }

    #[test]
    fn test_edge_fade_is_symmetric() {
        let margin = 0.3;
        let left = edge_fade_factor(Vec2::new(0.1, 0.5), margin);
        let right = edge_fade_factor(Vec2::new(0.9, 0.5), margin);
        assert!((left - right).abs() < 1e-6, "left={left}, right={right}");
    }

    #[test]
    fn test_default_rig_matches_scene_elements() {
        let rig = FlareRig::default();
        assert_eq!(rig.elements.len(), 5);
        assert_eq!(rig.elements[0].line_position, 0.0, "head element rides the anchor");
        assert_eq!(rig.elements[0].size, 1000.0);
        assert_eq!(rig.elements[4].line_position, 1.0);
    }

    #[test]
    fn test_layout_scales_sizes_by_edge_fade() {
        let rig = FlareRig::default();

        let centered = rig.layout(Vec2::new(0.5, 0.5));
        assert_eq!(centered.len(), rig.elements.len());
        assert!((centered[0].size - 1000.0).abs() < 1e-6, "no fade at center");

        let offscreen = rig.layout(Vec2::new(1.2, 0.5));
        assert!(
            offscreen.iter().all(|p| p.size == 0.0),
            "offscreen anchor should fade every element to zero"
        );
    }
}
