use std::path::Path;

use anyhow::{ Context, Result };
use image::{ Rgb, RgbImage };
use rayon::prelude::*;

use crate::material::Color;

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel(pub u8, pub u8, pub u8);

impl Pixel {
    pub const BLACK: Pixel = Pixel::gray(0);

    pub const fn gray(v: u8) -> Self {
        Pixel( v, v, v )
    }

    pub const fn pack(self, format: PixelFormat) -> u32 {
        let rgb = (self.0 as u32) << 16 | (self.1 as u32) << 8 | self.2 as u32;

        match format {
            PixelFormat::Rgb888 => rgb,
            PixelFormat::Argb8888 => 0xff00_0000 | rgb
        }
    }

    /// Inverse of [`Pixel::pack`], alpha is dropped
    pub const fn unpack(packed: u32) -> Self {
        Pixel( (packed >> 16) as u8, (packed >> 8) as u8, packed as u8 )
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        let color = color.clamp();

        // Truncates, so only an exact 1.0 reaches 255
        Pixel(
            (color.r * 255.0) as u8,
            (color.g * 255.0) as u8,
            (color.b * 255.0) as u8
        )
    }
}

/// Layout of a pixel packed into 32 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 0x00RRGGBB
    Rgb888,
    /// 0xFFRRGGBB
    Argb8888
}

pub struct Canvas {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u32>
}

impl Canvas {
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        Canvas {
            width,
            height,
            format,
            data: vec![ Pixel::BLACK.pack(format); width * height ]
        }
    }

    fn check(&self, x: usize, y: usize) {
        if cfg!(debug_assertions) && (x >= self.width || y >= self.height) {
            panic!("Out of bounds access! ( x: {} for width {}, y: {} for height {})", x, self.width, y, self.height);
        }
    }

    pub fn fill(&mut self, p: Pixel) {
        let packed = p.pack(self.format);
        self.data.fill(packed);
    }

    /// Packed value at (x, y)
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.check(x, y);
        self.data[y * self.width + x]
    }

    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        Pixel::unpack(self.get(x, y))
    }

    pub fn buffer(&self) -> &[u32] { &self.data }

    /// Mutable rows, top to bottom, for filling in parallel
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u32> {
        self.data.par_chunks_exact_mut(self.width)
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let Pixel(r, g, b) = self.pixel(x as usize, y as usize);
            Rgb([r, g, b])
        })
    }

    /// Writes the canvas to `path`, the image format is picked from the extension
    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>
    {
        let path = path.as_ref();

        self.to_image()
            .save(path)
            .with_context(|| format!("couldn't write image to {}", path.display()))
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn format(&self) -> PixelFormat { self.format }
}
