pub use cgmath::{Array, ElementWise, InnerSpace, Zero};
pub use cgmath::{Point2, Point3, Vector2, Vector3};

pub use std::f64::consts::PI;

pub type Float = f64;
pub const FLOAT_MAX: Float = std::f64::MAX;
pub const FLOAT_MIN: Float = std::f64::MIN;

pub type Vector3f = Vector3<Float>;
pub type Point2f = Point2<Float>;
pub type Point2u = Point2<usize>;
pub type Point3f = Point3<Float>;
