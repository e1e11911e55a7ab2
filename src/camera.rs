use crate::geom::*;
use crate::types::*;
use crate::util;

pub struct Camera {
    /// Center of projection.
    origin: Point3f,
    /// Lower left corner of the image plane, one unit out along -w.
    lower_left: Point3f,
    /// Horizontal edge of the image plane.
    horizontal: Vector3f,
    /// Vertical edge of the image plane.
    vertical: Vector3f,
    film_size: Point2f,
    pixel_size: Point2f,
}

impl Camera {
    pub fn new(
        origin: Point3f,
        target: Point3f,
        up: Vector3f,
        fov: Float,
        film_size: Point2u,
    ) -> Camera {
        let theta = fov * PI / 180.0;

        let aspect_ratio = film_size.x as Float / film_size.y as Float;
        let half_width = (theta / 2.0).tan();
        let half_height = half_width / aspect_ratio;

        let w = (origin - target).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);
        let film_size = film_size.map(|v| v as Float);
        let pixel_size = film_size.map(|v| 1.0 / v);

        Camera {
            origin,
            lower_left: origin - (u * half_width + v * half_height + w),
            horizontal: u * (half_width + half_width),
            vertical: v * (half_height + half_height),
            film_size,
            pixel_size,
        }
    }

    /// `n` rays through the given pixel, jittered by stratified offsets.
    pub fn get_rays(&self, n: usize, film_pos: Point2u) -> Vec<(Ray3f, Point2f)> {
        // scale film_pos to 0-1
        let film_pos = film_pos.map(|v| v as Float).div_element_wise(self.film_size);

        util::stratified_samples(n)
            .into_iter()
            .map(|pixel_offset| {
                (
                    Ray3f::new(
                        self.origin,
                        (self.lower_left
                            + self.horizontal * (film_pos.x + pixel_offset.x * self.pixel_size.x)
                            + self.vertical * (film_pos.y + pixel_offset.y * self.pixel_size.y))
                            - self.origin,
                    ),
                    pixel_offset,
                )
            })
            .collect()
    }
}
