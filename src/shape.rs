use crate::geom::*;
use crate::types::*;

pub trait Shape: Sync + Send {
    fn intersect(&self, _: Ray3f) -> Option<(Point3f, Vector3f)>;
    fn bounding_box(&self) -> Option<AABB>;
}

#[derive(Copy, Clone)]
pub struct AABB {
    pub min: Point3f,
    pub max: Point3f,
}

use std::fmt;
impl fmt::Debug for AABB {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "vol={:?} min={:?} max={:?}",
            (self.max[0] - self.min[0]) * (self.max[1] - self.min[1]) * (self.max[2] - self.min[2]),
            self.min,
            self.max,
        )
    }
}

impl AABB {
    pub fn new(min: Point3f, max: Point3f) -> AABB {
        AABB { min, max }
    }

    /// Slab test. Returns the entry parameter of the ray's line through the
    /// box, which is negative when the origin is already inside; None when
    /// the line misses or the box is entirely behind the origin.
    pub fn entry(&self, r: Ray3f) -> Option<Float> {
        let mut t_entry = FLOAT_MIN;
        let mut t_exit = FLOAT_MAX;
        for i in 0..3 {
            let t0 = (self.min[i] - r.origin[i]) * r.inv_d[i];
            let t1 = (self.max[i] - r.origin[i]) * r.inv_d[i];
            let (near, far) = iff!(t0 < t1, (t0, t1), (t1, t0));
            t_entry = iff!(near > t_entry, near, t_entry);
            t_exit = iff!(far < t_exit, far, t_exit);
        }
        iff!(0.0 < t_exit && t_entry < t_exit, Some(t_entry), None)
    }
}

/// Axis-aligned box whose edges and corners are filleted by `radius`: the
/// Minkowski sum of the inner box (`half - radius` per axis) and a sphere.
///
/// Precondition: `half` components strictly positive and
/// `0 <= radius <= min(half)`. Violations are not checked in release
/// evaluation; the numeric output is undefined then.
#[derive(Copy, Clone, Debug)]
pub struct RoundedBox {
    pub center: Point3f,
    pub half: Vector3f,
    pub radius: Float,
}

impl RoundedBox {
    pub fn new(center: Point3f, half: Vector3f, radius: Float) -> RoundedBox {
        debug_assert!(half.x > 0.0 && half.y > 0.0 && half.z > 0.0);
        debug_assert!(0.0 <= radius && radius <= half.x.min(half.y).min(half.z));
        RoundedBox { center, half, radius }
    }

    pub fn bounds(&self) -> AABB {
        AABB::new(self.center - self.half, self.center + self.half)
    }

    fn inner(&self) -> Vector3f {
        self.half - Vector3f::from_value(self.radius)
    }

    /// Nearest front-facing surface hit, given the slab entry parameter
    /// `t_box` from [`AABB::entry`] on [`Self::bounds`]. Backface crossings
    /// (the ray leaving the shape) are never reported.
    pub fn intersect_from(&self, r: Ray3f, t_box: Float) -> Option<Float> {
        let inner = self.inner();
        let local = r.at(t_box) - self.center;
        let dist_inner = abs_v(local) - inner;

        // Flat part, inclusive: inside the face footprint the surface is the
        // face plane pushed out by exactly the radius, no quadric needed.
        let cyc = Vector3f::new(dist_inner.y, dist_inner.z, dist_inner.x);
        if min_elem(max_ew(dist_inner, cyc)) <= 0.0 {
            return iff!(0.0 < t_box, Some(t_box), None);
        }

        // Inner corner nearest the entry point, sign-matched per axis.
        let o_local = Vector3f::new(
            inner.x.copysign(local.x),
            inner.y.copysign(local.y),
            inner.z.copysign(local.z),
        );

        let rpo = r.origin - (self.center + o_local);
        let r2 = self.radius * self.radius;
        let rpo2 = rpo.mul_element_wise(rpo);
        let rpo_rd = rpo.mul_element_wise(r.direction);
        let rd2 = r.direction.mul_element_wise(r.direction);

        let mut best = FLOAT_MAX;
        let mut flipper = Vector3f::from_value(1.0);

        // One infinite cylinder per axis pair; the excluded axis k is the
        // cylinder axis. A root only counts on the arc between the corner
        // spheres: strictly within the inner extent along k, strictly
        // outside it on i and j. Whenever the quadric has real roots the
        // plane also records on which side of the box the hit fell, which
        // picks the single corner sphere worth testing afterwards.
        const PLANES: [(usize, usize, usize); 3] = [(0, 1, 2), (1, 2, 0), (2, 0, 1)];
        for &(i, j, k) in PLANES.iter() {
            let a = rd2[i] + rd2[j];
            let b = rpo_rd[i] + rpo_rd[j];
            let c = rpo2[i] + rpo2[j] - r2;
            let d = b * b - a * c;
            if d <= 0.0 {
                continue;
            }
            let h = (-b - d.sqrt()) / a;
            let p = r.at(h) - self.center;
            let is_corner = inner[i] < p[i].abs() && inner[j] < p[j].abs();
            if 0.0 < h && h < best && p[k].abs() < inner[k] && is_corner {
                best = h;
            }
            flipper[k] = sign(p[k]) * sign(o_local[k]);
        }

        // Corner sphere, flipped to the octant the cylinder roots landed in.
        // Inclusive: the octant boundary still counts as corner.
        let rpo = r.origin - (self.center + o_local.mul_element_wise(flipper));
        let rpo2 = rpo.mul_element_wise(rpo);
        let rpo_rd = rpo.mul_element_wise(r.direction);
        let a = rd2.sum();
        let b = rpo_rd.sum();
        let c = rpo2.sum() - r2;
        let d = b * b - a * c;
        if 0.0 < d {
            let h = (-b - d.sqrt()) / a;
            let p = r.at(h) - self.center;
            if 0.0 < h && h < best && 0.0 <= min_elem(abs_v(p) - inner) {
                best = h;
            }
        }

        iff!(best != FLOAT_MAX, Some(best), None)
    }

    /// Outward unit normal at a confirmed surface point.
    pub fn normal_at(&self, p: Point3f) -> Vector3f {
        let dir = p - self.center;
        let clamped = max_ew(abs_v(dir) - self.inner(), Vector3f::zero());
        if clamped.magnitude2() > 0.0 {
            return sign_v(dir).mul_element_wise(clamped.normalize());
        }
        // With radius 0 a face-interior hit clamps to the zero vector and
        // cannot be normalized; report the plain box face normal instead.
        let overshoot = abs_v(dir) - self.half;
        let axis: usize = iff!(
            overshoot.x >= overshoot.y && overshoot.x >= overshoot.z,
            0,
            iff!(overshoot.y >= overshoot.z, 1, 2)
        );
        let mut n = Vector3f::zero();
        n[axis] = dir[axis].signum();
        n
    }
}

impl Shape for RoundedBox {
    fn intersect(&self, r: Ray3f) -> Option<(Point3f, Vector3f)> {
        let t_box = self.bounds().entry(r)?;
        let t = self.intersect_from(r, t_box)?;
        let p = r.at(t);
        Some((p, self.normal_at(p)))
    }
    fn bounding_box(&self) -> Option<AABB> {
        Some(self.bounds())
    }
}

fn abs_v(v: Vector3f) -> Vector3f {
    v.map(Float::abs)
}

fn max_ew(a: Vector3f, b: Vector3f) -> Vector3f {
    Vector3f::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

fn min_elem(v: Vector3f) -> Float {
    v.x.min(v.y).min(v.z)
}

// glm-style sign: zero stays zero.
fn sign(x: Float) -> Float {
    iff!(x > 0.0, 1.0, iff!(x < 0.0, -1.0, 0.0))
}

fn sign_v(v: Vector3f) -> Vector3f {
    Vector3f::new(sign(v.x), sign(v.y), sign(v.z))
}
