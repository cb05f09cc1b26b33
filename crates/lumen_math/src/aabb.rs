use crate::{Mat4, Ray, Vec3};

/// An axis-aligned bounding box stored as min/max corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// An empty box (min > max, contains nothing).
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create a box from two corner points (in any order).
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Compute the bounding box of a point set.
    pub fn from_point_set(points: &[Vec3]) -> Self {
        let mut bounds = Self::EMPTY;
        for &p in points {
            bounds.grow(p);
        }
        bounds
    }

    /// Expand the box to contain a point.
    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Create a box that surrounds two other boxes.
    pub fn surrounding(a: &Aabb, b: &Aabb) -> Aabb {
        Aabb {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// Center of the box.
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Transform the box by a matrix.
    ///
    /// Computes the bounding box of all 8 transformed corners.
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut result = Self::EMPTY;
        for corner in corners {
            result.grow(matrix.transform_point3(corner));
        }
        result
    }

    /// Slab test: does the ray pass through the box within its `t` range?
    ///
    /// Degenerate directions produce infinite slab bounds which resolve
    /// naturally through the min/max comparisons.
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        let inv_dir = ray.direction.recip();

        let t1 = (self.min - ray.origin) * inv_dir;
        let t2 = (self.max - ray.origin) * inv_dir;

        let t_near = t1.min(t2);
        let t_far = t1.max(t2);

        let t_enter = t_near.max_element().max(ray.t_min);
        let t_exit = t_far.min_element().min(ray.t_max);

        t_enter <= t_exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_orders_corners() {
        let bounds = Aabb::from_points(Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_point_set() {
        let bounds = Aabb::from_point_set(&[
            Vec3::new(-1.0, -2.0, -3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::ZERO,
        ]);
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_transformed_translation() {
        let bounds = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        let matrix = Mat4::from_translation(Vec3::new(5.0, 5.0, 5.0));
        let moved = bounds.transformed(&matrix);

        assert!((moved.min - Vec3::splat(5.0)).length() < 0.001);
        assert!((moved.max - Vec3::splat(6.0)).length() < 0.001);
    }

    #[test]
    fn test_slab_hit_and_miss() {
        let bounds = Aabb::from_points(Vec3::new(-1.0, -1.0, 4.0), Vec3::new(1.0, 1.0, 6.0));

        let toward = Ray::new_simple(Vec3::ZERO, Vec3::Z);
        assert!(bounds.intersects_ray(&toward));

        let away = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        assert!(!bounds.intersects_ray(&away));

        let offset = Ray::new_simple(Vec3::new(5.0, 0.0, 0.0), Vec3::Z);
        assert!(!bounds.intersects_ray(&offset));
    }

    #[test]
    fn test_slab_respects_ray_range() {
        let bounds = Aabb::from_points(Vec3::new(-1.0, -1.0, 4.0), Vec3::new(1.0, 1.0, 6.0));

        // Box lies beyond the ray's t_max
        let short = Ray::new(Vec3::ZERO, Vec3::Z, 0.001, 2.0);
        assert!(!bounds.intersects_ray(&short));
    }

    #[test]
    fn test_empty_contains_nothing() {
        let empty = Aabb::EMPTY;
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::Z);
        assert!(!empty.intersects_ray(&ray));
    }
}
