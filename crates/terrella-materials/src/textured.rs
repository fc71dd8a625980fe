//! Simple materials: the textured sun and moon spheres and the star points.

/// Unlit material for the sun sphere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SunMaterial {
    /// Surface texture.
    pub map: String,
}

impl Default for SunMaterial {
    fn default() -> Self {
        Self {
            map: String::from("textures/sun/sun.jpg"),
        }
    }
}

/// Textured material for the moon sphere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoonMaterial {
    /// Surface texture.
    pub map: String,
}

impl Default for MoonMaterial {
    fn default() -> Self {
        Self {
            map: String::from("textures/moon/moon.jpg"),
        }
    }
}

/// Material for the background star points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldMaterial {
    /// Rendered size of one star point, in world units.
    pub point_size: f32,
}

impl Default for StarfieldMaterial {
    fn default() -> Self {
        Self { point_size: 0.5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maps_are_distinct() {
        assert_ne!(SunMaterial::default().map, MoonMaterial::default().map);
    }

    #[test]
    fn test_star_points_default_size() {
        assert_eq!(StarfieldMaterial::default().point_size, 0.5);
    }
}
