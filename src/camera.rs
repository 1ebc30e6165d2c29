use glam::DVec3;

use crate::shape::Ray;

/// Maps normalized image coordinates to primary rays.
///
/// `u` runs left to right and `v` bottom to top, both in 0..=1.
pub trait Camera: std::fmt::Debug {
    fn ray(&self, u: f64, v: f64) -> Ray;
}

/// Eye at the origin looking down -z through a `width` x `height` window placed `distance` away
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pinhole {
    pub width: f64,
    pub height: f64,
    pub distance: f64
}

impl Camera for Pinhole {
    fn ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            DVec3::ZERO,
            DVec3::new(u * self.width - self.width / 2.0, v * self.height - self.height / 2.0, -self.distance)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    origin: DVec3,
    lower_left_corner: DVec3,
    horizontal: DVec3,
    vertical: DVec3
}

impl LookAt {
    pub fn new(look_from: DVec3, look_at: DVec3, vup: DVec3, vfov_degrees: f64, aspect_ratio: f64) -> Self {
        let h = (vfov_degrees.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;

        LookAt {
            origin: look_from,
            lower_left_corner: look_from - horizontal / 2.0 - vertical / 2.0 - w,
            horizontal,
            vertical
        }
    }
}

impl Camera for LookAt {
    fn ray(&self, u: f64, v: f64) -> Ray {
        Ray {
            start: self.origin,
            dir: self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin
        }
    }
}

/// Returns the normalized coordinates of a pixel, pixel (0, 0) being the top left corner
pub fn pixel_uv(x: usize, y: usize, width: usize, height: usize) -> (f64, f64) {
    let u = x as f64 / (width - 1) as f64;
    let v = 1.0 - y as f64 / (height - 1) as f64;

    ( u, v )
}
