//! CPU-side material state for the planet scene: the Earth surface and
//! atmosphere shell with their GPU uniform mirrors, the textured sun and moon,
//! the flare anchor light, and hex color parsing.

mod atmosphere;
mod color;
mod earth;
mod light;
mod shading;
mod textured;

pub use atmosphere::{AtmosphereMaterial, AtmosphereUniforms, RenderFlags};
pub use color::{ColorError, parse_hex_color};
pub use earth::{EarthMaterial, EarthUniforms, MAX_CLOUDS};
pub use light::PointLight;
pub use shading::ShadedMaterials;
pub use textured::{MoonMaterial, StarfieldMaterial, SunMaterial};
