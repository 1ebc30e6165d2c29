use glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub pos: DVec3,
    pub radius: f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub start: DVec3,
    pub dir: DVec3
}

impl Sphere {
    pub const fn new(pos: DVec3, radius: f64) -> Self {
        Sphere { pos, radius }
    }

    /// Unit normal of the surface at `point`, pointing outwards
    pub fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.pos).normalize()
    }
}

impl Ray {
    pub const fn new(start: DVec3, dir: DVec3) -> Self {
        Ray { start, dir }
    }

    /// Point reached after travelling `t` times the direction from the start
    pub fn at(&self, t: f64) -> DVec3 {
        self.start + self.dir * t
    }
}
