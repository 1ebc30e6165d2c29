use std::ops::Mul;

use derive_more::Add;

#[derive(Debug, Clone, Copy, PartialEq, Add)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64
}

impl Color {
    pub const WHITE: Color = Color::splat(1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Color {
            r, g, b
        }
    }

    pub const fn splat(c: f64) -> Self {
        Color::new(c, c, c)
    }

    /// Clamps every channel into [0, 1]. NaN channels become 0.
    pub fn clamp(self) -> Self {
        let clamp = |c: f64| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };

        Color::new(clamp(self.r), clamp(self.g), clamp(self.b))
    }
}

impl From<[f64; 3]> for Color {
    fn from(a: [f64; 3]) -> Self {
        Color::new(a[0], a[1], a[2])
    }
}

impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        Color {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b
        }
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// Phong reflection coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Kd
    pub diffuse: Color,
    /// Ks
    pub specular: Color,
    pub shininess: f64
}

impl Default for Material {
    fn default() -> Self {
        Material { diffuse: Color::WHITE, specular: Color::WHITE, shininess: 32.0 }
    }
}
