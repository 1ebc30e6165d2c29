use rayon::prelude::*;

use crate::{
    camera::{pixel_uv, Camera},
    canvas::{Canvas, Pixel},
    intersection::Traceable,
    scene::Scene,
    shading::shade
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub pixels: usize,
    pub hits: usize
}

/// Color of the pixel at (x, y), or `None` when its ray misses the sphere
pub fn trace_pixel(scene: &Scene, x: usize, y: usize, width: usize, height: usize) -> Option<Pixel> {
    let ( u, v ) = pixel_uv(x, y, width, height);
    let ray = scene.camera.ray(u, v);

    let inter = scene.sphere.ray_intersection(&ray, scene.grazing)?;
    let color = shade(&ray, &inter, scene.viewer, &scene.light, &scene.material);

    log::trace!("Intersection at pixel ({}, {}), t = {}: {:?}", x, y, inter.t, color);

    Some( color.into() )
}

/// Renders `scene` into `canvas`, overwriting every pixel.
///
/// Rows are shaded in parallel but the call only returns once the whole frame is written.
pub fn render(scene: &Scene, canvas: &mut Canvas) -> RenderStats {
    let ( width, height ) = ( canvas.width(), canvas.height() );
    let format = canvas.format();

    canvas.fill(scene.background);

    let hits = canvas.par_rows_mut()
        .enumerate()
        .map(|(y, row)| {
            let mut hits = 0;

            for (x, out) in row.iter_mut().enumerate() {
                if let Some(pixel) = trace_pixel(scene, x, y, width, height) {
                    *out = pixel.pack(format);
                    hits += 1;
                }
            }

            hits
        })
        .sum::<usize>();

    let stats = RenderStats { pixels: width * height, hits };

    log::debug!("Rendered {}x{} {} scene, {} pixels hit the sphere", width, height, scene.kind, stats.hits);

    stats
}
