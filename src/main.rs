use log::*;
use rayon::prelude::*;
use std::error::Error;

use roundbox::*;

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::init()?;

    let width = 960;
    let height = 600;
    let samples_per_pixel = 4;

    // The interactively adjustable box of the original demo becomes a plain
    // config block; the shape is the only scene content.
    let shape = RoundedBox::new(
        Point3f::new(0.0, 0.0, 0.0),
        Vector3f::new(0.5, 0.5, 0.5),
        0.3,
    );
    let camera = Camera::new(
        Point3f::new(-2.0, 1.5, -2.0),
        Point3f::new(0.0, 0.0, 0.0),
        Vector3f::unit_y(),
        40.0,
        Point2u::new(width, height),
    );

    info!("rendering {}x{} at {} spp", width, height, samples_per_pixel);
    let mut fb = FrameBuf::new(width, height);
    let samples: Vec<(Point2u, Point2f, Vector3f)> = fb
        .enum_pixels()
        .par_iter()
        .flat_map(|px| {
            camera
                .get_rays(samples_per_pixel, *px)
                .into_iter()
                .map(|(ray, offset)| (*px, offset, shade(ray, &shape)))
                .collect::<Vec<_>>()
        })
        .collect();
    for (px, offset, rgb) in samples {
        fb.add_sample(px, offset, rgb);
    }
    fb.mk_image().save("out.png")?;
    info!("done");
    Ok(())
}

/// Normal-as-color shading; misses stay black.
fn shade(r: Ray3f, shape: &RoundedBox) -> Vector3f {
    match shape.intersect(r) {
        Some((_, normal)) => (normal + Vector3f::from_value(1.0)) * 0.5,
        None => Vector3f::zero(),
    }
}
