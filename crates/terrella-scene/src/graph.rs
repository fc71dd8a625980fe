//! Recursive scene graph with nearest-hit ray queries.
//!
//! Renderable objects are nodes in a shallow tree; children carry offsets
//! relative to their parent, matching the source scene's nested object
//! transforms (the flare billboard rides on the light anchor). The label
//! projector asks one question of the graph: the nearest intersection along
//! a viewing ray, across every node recursively.

use glam::Vec3;
use terrella_math::Ray;

/// How a node responds to ray queries.
#[derive(Clone, Debug)]
pub enum HitShape {
    /// A sphere of the given radius around the node's world position.
    Sphere { radius: f32 },
    /// A particle cloud; `points` are offsets from the node's world
    /// position, hit within a perpendicular-distance `threshold`.
    Points { points: Vec<Vec3>, threshold: f32 },
    /// Never intersected. Visual-only attachments such as flare billboards
    /// opt out of ray queries entirely.
    None,
}

/// A renderable object in the scene tree.
#[derive(Clone, Debug)]
pub struct SceneNode {
    /// Stable name for logs and hit reporting.
    pub name: String,
    /// Position relative to the parent node (world position for roots).
    pub position: Vec3,
    /// Self-rotation angle around +Y in radians, driven by the frame
    /// clock. Does not affect ray queries: every hit shape here is
    /// rotationally symmetric about Y.
    pub rotation_y: f32,
    /// Ray-query shape.
    pub shape: HitShape,
    /// Nested children, intersected recursively.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create a node with no children.
    pub fn new(name: impl Into<String>, position: Vec3, shape: HitShape) -> Self {
        Self {
            name: name.into(),
            position,
            rotation_y: 0.0,
            shape,
            children: Vec::new(),
        }
    }

    /// Append a child whose position is relative to this node.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Identifier of a root node, stable for the scene's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

/// Result of a nearest-hit query.
#[derive(Clone, Debug)]
pub struct RayHit {
    /// Distance from the ray origin to the hit, in world units.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// Name of the node that was hit.
    pub node: String,
}

/// The scene tree: root nodes, each with nested children.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    roots: Vec<SceneNode>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Add a root node and return its stable id.
    pub fn add(&mut self, node: SceneNode) -> NodeId {
        self.roots.push(node);
        NodeId(self.roots.len() - 1)
    }

    /// Borrow a root node.
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.roots[id.0]
    }

    /// Mutably borrow a root node (placement and spin updates go through
    /// here).
    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.roots[id.0]
    }

    /// Number of root nodes.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True when the scene has no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Nearest intersection along `ray` across every renderable in the
    /// tree. `None` means the ray passes through empty space, the ordinary
    /// outcome for an unobstructed sight line.
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;
        for root in &self.roots {
            intersect_recursive(root, Vec3::ZERO, ray, &mut nearest);
        }
        nearest
    }
}

fn intersect_recursive(
    node: &SceneNode,
    parent_origin: Vec3,
    ray: &Ray,
    nearest: &mut Option<RayHit>,
) {
    let world_position = parent_origin + node.position;

    let distance = match &node.shape {
        HitShape::Sphere { radius } => ray.intersect_sphere(world_position, *radius),
        HitShape::Points { points, threshold } => {
            // Shift the ray into the node's local frame instead of
            // translating every point.
            let local = Ray {
                origin: ray.origin - world_position,
                direction: ray.direction,
            };
            local.intersect_points(points, *threshold)
        }
        HitShape::None => None,
    };

    if let Some(distance) = distance
        && nearest.as_ref().is_none_or(|hit| distance < hit.distance)
    {
        *nearest = Some(RayHit {
            distance,
            point: ray.at(distance),
            node: node.name.clone(),
        });
    }

    for child in &node.children {
        intersect_recursive(child, world_position, ray, nearest);
    }
}
