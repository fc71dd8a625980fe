//! Application core for the terrella scene: the explicit scene-state
//! container, the external-event vocabulary, and the dispatcher plus
//! per-frame update that mutate it.
//!
//! Everything that changes the scene flows through [`apply_event`] and
//! [`frame_update`], so a recorded event sequence replays to an identical
//! state.

pub mod events;
pub mod state;
pub mod update;

pub use events::SceneEvent;
pub use state::{BuildError, SceneState};
pub use update::{apply_event, frame_update};
