use glam::DVec3;

use crate::{intersection::Inter, light::Light, material::{Color, Material}, shape::Ray};

pub trait Reflect {
    /// Reflects a vector along a normal
    fn reflect(self, normal: Self) -> Self;
}

impl Reflect for DVec3 {
    fn reflect(self, normal: Self) -> Self {
        self - 2.0*self.dot(normal)*normal
    }
}

/// Where the surface is seen from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewer {
    /// Back along the incoming ray
    AlongRay,
    /// From a fixed eye position
    At(DVec3)
}

impl Viewer {
    pub fn direction(&self, ray: &Ray, point: DVec3) -> DVec3 {
        match *self {
            Viewer::AlongRay => (-ray.dir).normalize(),
            Viewer::At(eye) => (eye - point).normalize()
        }
    }
}

/// Diffuse and specular parts of the Phong model, before clamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phong {
    pub diffuse: Color,
    pub specular: Color
}

impl Phong {
    /// Light reflected at `inter` towards `view_dir`.
    ///
    /// `view_dir` and the normal are expected to be unit length.
    pub fn at(inter: &Inter, view_dir: DVec3, light: &Light, material: &Material) -> Self {
        let n = inter.normal;
        let l = light.towards(inter.point);
        let r = (-l).reflect(n).normalize_or_zero();

        let lambert = n.dot(l).max(0.0);
        let highlight = view_dir.dot(r).max(0.0).powf(material.shininess);

        Phong {
            diffuse: light.intensity * material.diffuse * lambert,
            specular: light.intensity * material.specular * highlight
        }
    }

    /// Sum of both terms clamped into [0, 1]
    pub fn color(&self) -> Color {
        (self.diffuse + self.specular).clamp()
    }
}

/// Shades the hit of `ray` at `inter`
pub fn shade(ray: &Ray, inter: &Inter, viewer: Viewer, light: &Light, material: &Material) -> Color {
    let view_dir = viewer.direction(ray, inter.point);

    Phong::at(inter, view_dir, light, material).color()
}
