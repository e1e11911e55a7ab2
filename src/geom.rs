use crate::types::*;

#[derive(Copy, Clone, Debug)]
pub struct Ray3f {
    pub origin: Point3f,
    /// Not required to be normalized; t values are in multiples of it.
    pub direction: Vector3f,
    /// Component-wise reciprocal of direction, saturated to a finite value.
    pub inv_d: Vector3f,
}

impl Ray3f {
    pub fn new(origin: Point3f, direction: Vector3f) -> Self {
        // A zero direction component would put +/-inf into inv_d and then
        // NaN into the slab comparisons; saturate the reciprocal instead.
        let inv_d =
            Vector3f::new(recip(direction.x), recip(direction.y), recip(direction.z));
        Self { origin, direction, inv_d }
    }

    pub fn at(&self, t: Float) -> Point3f {
        self.origin + self.direction * t
    }
}

fn recip(x: Float) -> Float {
    (1.0 / x).max(-FLOAT_MAX).min(FLOAT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inv_d_is_finite_for_zero_components() {
        let r = Ray3f::new(Point3f::new(0.0, -2.0, 0.0), Vector3f::new(0.0, 1.0, 0.0));
        assert!(r.inv_d.x.is_finite(), "zero component must saturate, not overflow");
        assert!(r.inv_d.z.is_finite(), "zero component must saturate, not overflow");
        assert!((r.inv_d.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inv_d_keeps_sign_of_negative_zero() {
        let r = Ray3f::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(-0.0, 1.0, 0.0));
        assert!(r.inv_d.x < 0.0);
        assert!(r.inv_d.x.is_finite());
    }
}
