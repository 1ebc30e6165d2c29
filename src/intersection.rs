use glam::DVec3;

use crate::shape::*;

/// What to do with a ray that only touches the sphere (discriminant of exactly zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrazingRays {
    Reject,
    Accept
}

#[derive(Debug, Clone, Copy)]
pub struct Inter {
    pub t: f64,
    pub point: DVec3,
    pub normal: DVec3
}

pub trait Traceable {
    fn ray_intersection(&self, ray: &Ray, grazing: GrazingRays) -> Option<Inter>;
}

impl Sphere {
    /// Near root of |start + t*dir - pos|^2 = r^2, if the ray's line meets the sphere.
    ///
    /// The sign of `t` is not checked, so a sphere lying entirely behind the start still reports a hit.
    pub fn near_root(&self, ray: &Ray, grazing: GrazingRays) -> Option<f64> {
        let oc = ray.start - self.pos;

        let a = ray.dir.dot(ray.dir);
        let b = 2.0 * oc.dot(ray.dir);
        let c = oc.dot(oc) - self.radius*self.radius;

        let discriminant = b*b - 4.0*a*c;

        let missed = match grazing {
            GrazingRays::Reject => discriminant <= 0.0,
            GrazingRays::Accept => discriminant < 0.0
        };

        if missed || a == 0.0 { return None; }

        Some( (-b - discriminant.sqrt()) / (2.0 * a) )
    }
}

impl Traceable for Sphere {
    fn ray_intersection(&self, ray: &Ray, grazing: GrazingRays) -> Option<Inter> {
        let t = self.near_root(ray, grazing)?;
        let point = ray.at(t);

        Some( Inter { t, point, normal: self.normal_at(point) } )
    }
}
