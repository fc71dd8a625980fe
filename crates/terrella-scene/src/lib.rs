//! Scene-side state for the celestial core: camera and viewport, the
//! renderable graph with nearest-hit ray queries, body placement constants,
//! the frame clock, the readiness gate, starfield generation, and
//! lens-flare screen layout.

pub mod bodies;
pub mod camera;
pub mod clock;
pub mod flare;
pub mod gate;
pub mod graph;
pub mod starfield;
pub mod viewport;

pub use camera::Camera;
pub use clock::SceneClock;
pub use flare::{FlareElement, FlarePlacement, FlareRig, anchor_screen_position};
pub use gate::{LoadSettle, ReadinessGate};
pub use graph::{HitShape, NodeId, RayHit, Scene, SceneNode};
pub use starfield::StarfieldGenerator;
pub use viewport::Viewport;
