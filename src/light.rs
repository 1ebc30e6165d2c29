use glam::DVec3;

use crate::material::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Emitter {
    /// Light radiating from a point in space
    Point { position: DVec3 },
    /// Light arriving from infinitely far away. `direction` points towards the light.
    Directional { direction: DVec3 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub emitter: Emitter,
    pub intensity: Color
}

impl Light {
    pub fn point(position: DVec3, intensity: Color) -> Self {
        Light { emitter: Emitter::Point { position }, intensity }
    }

    /// A zero `direction` stays zero and lights nothing
    pub fn directional(direction: DVec3, intensity: Color) -> Self {
        Light { emitter: Emitter::Directional { direction: direction.normalize_or_zero() }, intensity }
    }

    /// Unit vector from `point` towards the light, or zero when there is no direction to take
    pub fn towards(&self, point: DVec3) -> DVec3 {
        match self.emitter {
            Emitter::Point { position } => (position - point).normalize_or_zero(),
            Emitter::Directional { direction } => direction.normalize_or_zero()
        }
    }
}
