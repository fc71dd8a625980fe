//! Ray primitives for nearest-hit scene queries.
//!
//! The scene graph answers "what is the closest renderable along this ray"
//! by folding these per-shape tests over its nodes. Conventions follow the
//! source renderer's raycaster: a ray starting inside a sphere reports the
//! exit distance, and point-cloud hits use a perpendicular-distance
//! threshold.

use glam::Vec3;

/// A ray with a unit-length direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. Returns `None` when the
    /// direction is too short to normalize.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// The point at parametric distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nearest intersection distance with a sphere, or `None` on a miss.
    ///
    /// A sphere entirely behind the origin is a miss; an origin inside the
    /// sphere hits at the exit distance.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_center = center - self.origin;
        let along = to_center.dot(self.direction);
        let perp_sq = to_center.length_squared() - along * along;
        let radius_sq = radius * radius;
        if perp_sq > radius_sq {
            return None;
        }

        let half_chord = (radius_sq - perp_sq).sqrt();
        let entry = along - half_chord;
        let exit = along + half_chord;
        if exit < 0.0 {
            return None;
        }
        if entry < 0.0 { Some(exit) } else { Some(entry) }
    }

    /// Nearest point-cloud intersection distance, or `None` when no point
    /// qualifies.
    ///
    /// A point counts as hit when its perpendicular distance to the ray is
    /// within `threshold` and its along-ray projection lies in front of the
    /// origin; the reported distance is that projection.
    pub fn intersect_points(&self, points: &[Vec3], threshold: f32) -> Option<f32> {
        let threshold_sq = threshold * threshold;
        let mut nearest = f32::INFINITY;

        for &point in points {
            let along = (point - self.origin).dot(self.direction);
            if along < 0.0 || along >= nearest {
                continue;
            }
            if self.at(along).distance_squared(point) <= threshold_sq {
                nearest = along;
            }
        }

        if nearest.is_finite() { Some(nearest) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Vec3, direction: Vec3) -> Ray {
        Ray::new(origin, direction).expect("test ray direction must be non-zero")
    }

    #[test]
    fn test_sphere_hit_head_on() {
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = r.intersect_sphere(Vec3::ZERO, 1.0).expect("should hit");
        assert!((t - 4.0).abs() < 1e-6, "distance {t}");
    }

    #[test]
    fn test_sphere_behind_origin_misses() {
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(r.intersect_sphere(Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn test_sphere_off_axis_misses() {
        let r = ray(Vec3::new(0.0, 3.0, 5.0), Vec3::NEG_Z);
        assert!(r.intersect_sphere(Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn test_ray_inside_sphere_reports_exit_distance() {
        let r = ray(Vec3::ZERO, Vec3::X);
        let t = r.intersect_sphere(Vec3::ZERO, 2.0).expect("should exit");
        assert!((t - 2.0).abs() < 1e-6, "distance {t}");
    }

    #[test]
    fn test_grazing_ray_still_hits() {
        let r = ray(Vec3::new(0.0, 0.999, 5.0), Vec3::NEG_Z);
        assert!(r.intersect_sphere(Vec3::ZERO, 1.0).is_some());
    }

    #[test]
    fn test_point_cloud_nearest_of_several() {
        let r = ray(Vec3::ZERO, Vec3::X);
        let points = [
            Vec3::new(9.0, 0.1, 0.0),
            Vec3::new(4.0, 0.2, 0.0),
            Vec3::new(7.0, 0.0, 0.0),
        ];
        let t = r.intersect_points(&points, 0.5).expect("should hit");
        assert!((t - 4.0).abs() < 1e-6, "nearest point wins, got {t}");
    }

    #[test]
    fn test_point_cloud_behind_origin_ignored() {
        let r = ray(Vec3::ZERO, Vec3::X);
        let points = [Vec3::new(-3.0, 0.0, 0.0)];
        assert!(r.intersect_points(&points, 0.5).is_none());
    }

    #[test]
    fn test_point_cloud_outside_threshold_misses() {
        let r = ray(Vec3::ZERO, Vec3::X);
        let points = [Vec3::new(5.0, 2.0, 0.0)];
        assert!(r.intersect_points(&points, 1.0).is_none());
        assert!(r.intersect_points(&points, 2.5).is_some());
    }

    #[test]
    fn test_empty_point_cloud_misses() {
        let r = ray(Vec3::ZERO, Vec3::X);
        assert!(r.intersect_points(&[], 1.0).is_none());
    }

    #[test]
    fn test_ray_new_rejects_zero_direction() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    }

    #[test]
    fn test_at_walks_along_direction() {
        let r = ray(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        let p = r.at(2.0);
        assert!((p - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6, "got {p:?}");
    }
}
