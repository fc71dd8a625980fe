//! Pure math for the celestial scene core: the spherical direction
//! parameterization shared by the sun and moon, and the ray primitives
//! backing nearest-hit scene queries.

pub mod ray;
pub mod spherical;

pub use ray::Ray;
pub use spherical::{SphericalParams, direction};
