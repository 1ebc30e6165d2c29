use std::{fmt, str::FromStr};

use glam::DVec3;
use serde::Deserialize;

use crate::{
    camera::{Camera, LookAt, Pinhole},
    canvas::{Pixel, PixelFormat},
    intersection::GrazingRays,
    light::Light,
    material::{Color, Material},
    shading::Viewer,
    shape::{Ray, Sphere},
    window::PresentMode
};

pub const DEFAULT_WIDTH: usize = 800;
pub const DEFAULT_HEIGHT: usize = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    Pinhole,
    LookAt
}

impl FromStr for SceneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pinhole" => Ok(SceneKind::Pinhole),
            "look-at" | "lookat" | "look_at" => Ok(SceneKind::LookAt),
            _ => Err(format!("unknown scene '{}', expected 'pinhole' or 'look-at'", s))
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneKind::Pinhole => write!(f, "pinhole"),
            SceneKind::LookAt => write!(f, "look-at")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Pinhole(Pinhole),
    LookAt(LookAt)
}

impl Camera for Projection {
    fn ray(&self, u: f64, v: f64) -> Ray {
        match self {
            Projection::Pinhole(camera) => camera.ray(u, v),
            Projection::LookAt(camera) => camera.ray(u, v)
        }
    }
}

/// Everything needed to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub kind: SceneKind,
    pub width: usize,
    pub height: usize,
    pub title: String,

    pub camera: Projection,
    pub sphere: Sphere,
    pub light: Light,
    pub material: Material,
    pub viewer: Viewer,
    pub grazing: GrazingRays,

    pub background: Pixel,
    pub format: PixelFormat,
    pub present: PresentMode
}

impl Scene {
    pub fn preset(kind: SceneKind, width: usize, height: usize) -> Self {
        match kind {
            SceneKind::Pinhole => Scene::pinhole(width, height),
            SceneKind::LookAt => Scene::look_at(width, height)
        }
    }

    /// Red sphere seen through a 2x2 window one unit in front of the eye, lit from straight above
    pub fn pinhole(width: usize, height: usize) -> Self {
        const WINDOW_DISTANCE: f64 = 1.0;
        const RADIUS: f64 = 0.5;

        Scene {
            kind: SceneKind::Pinhole,
            width,
            height,
            title: "Phong Sphere".to_owned(),

            camera: Projection::Pinhole(Pinhole { width: 2.0, height: 2.0, distance: WINDOW_DISTANCE }),
            sphere: Sphere::new(DVec3::new(0.0, 0.0, -(WINDOW_DISTANCE + RADIUS + 1.0)), RADIUS),
            light: Light::point(DVec3::new(0.0, 5.0, 0.0), Color::splat(0.7)),
            material: Material {
                diffuse: Color::new(0.8, 0.1, 0.1),
                specular: Color::splat(0.5),
                shininess: 32.0
            },
            viewer: Viewer::AlongRay,
            grazing: GrazingRays::Reject,

            background: Pixel::gray(100),
            format: PixelFormat::Rgb888,
            present: PresentMode::EveryFrame
        }
    }

    /// Red sphere in front of a look-at camera, lit from above and behind the viewer
    pub fn look_at(width: usize, height: usize) -> Self {
        let aspect_ratio = width as f64 / height as f64;

        Scene {
            kind: SceneKind::LookAt,
            width,
            height,
            title: "3D Sphere with Shading".to_owned(),

            camera: Projection::LookAt(LookAt::new(
                DVec3::ZERO,
                DVec3::new(0.0, 0.0, -1.0),
                DVec3::Y,
                90.0,
                aspect_ratio
            )),
            sphere: Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0),
            light: Light::directional(DVec3::new(0.0, 5.0, 5.0), Color::WHITE),
            material: Material {
                diffuse: Color::RED,
                specular: Color::WHITE,
                shininess: 32.0
            },
            viewer: Viewer::At(DVec3::ZERO),
            grazing: GrazingRays::Accept,

            background: Pixel(173, 216, 230),
            format: PixelFormat::Argb8888,
            present: PresentMode::Once
        }
    }
}
