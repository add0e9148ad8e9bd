//! Resource lookup: drawables, bitmaps and colors.
//!
//! The widget asks a [`Resources`] provider for its icons and colors once, at
//! construction. Any lookup may come back empty; callers skip whatever depends
//! on a missing resource instead of failing.

use crate::color::{catppuccin::mocha, css, Color};
use std::fmt;

/// CPU-side RGBA8 pixel buffer (straight alpha, row-major)
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Bitmap {
    /// Create a fully transparent bitmap
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Overwrite the pixel at `(x, y)`; writes outside the bitmap are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y as usize * self.width as usize + x as usize;
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = rgba;
        }
    }

    /// Raw bytes, ready for a texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Something that can draw itself into a bitmap of any size
pub trait Drawable: fmt::Debug {
    /// Natural size in device pixels
    fn intrinsic_size(&self) -> (u32, u32);

    /// Draw scaled to fill the whole `target`
    fn draw(&self, target: &mut Bitmap);
}

/// Rasterize `drawable` into a new `width` x `height` bitmap
pub fn drawable_to_bitmap(drawable: &dyn Drawable, width: u32, height: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(width, height);
    if !bitmap.is_empty() {
        drawable.draw(&mut bitmap);
    }
    bitmap
}

/// Shape of a built-in icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Plus,
    Minus,
}

/// Built-in vector icon, drawn on a 24x24 design grid
///
/// Bars run from 5 to 19 on the grid and are 2 units thick, centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub kind: IconKind,
    pub color: Color,
}

impl Icon {
    const GRID: f32 = 24.0;
    const BAR_START: f32 = 5.0;
    const BAR_END: f32 = 19.0;
    const BAR_THICKNESS: f32 = 2.0;

    pub const fn plus(color: Color) -> Self {
        Self {
            kind: IconKind::Plus,
            color,
        }
    }

    pub const fn minus(color: Color) -> Self {
        Self {
            kind: IconKind::Minus,
            color,
        }
    }

    fn covers(&self, gx: f32, gy: f32) -> bool {
        let half = Self::BAR_THICKNESS / 2.0;
        let mid = Self::GRID / 2.0;
        let along = |v: f32| v >= Self::BAR_START && v <= Self::BAR_END;
        let across = |v: f32| v >= mid - half && v <= mid + half;

        let horizontal = along(gx) && across(gy);
        match self.kind {
            IconKind::Minus => horizontal,
            IconKind::Plus => horizontal || (across(gx) && along(gy)),
        }
    }
}

impl Drawable for Icon {
    fn intrinsic_size(&self) -> (u32, u32) {
        (Self::GRID as u32, Self::GRID as u32)
    }

    fn draw(&self, target: &mut Bitmap) {
        let rgba = self.color.to_srgba8();
        let sx = Self::GRID / target.width() as f32;
        let sy = Self::GRID / target.height() as f32;

        for y in 0..target.height() {
            for x in 0..target.width() {
                // Sample at the pixel center
                let gx = (x as f32 + 0.5) * sx;
                let gy = (y as f32 + 0.5) * sy;
                if self.covers(gx, gy) {
                    target.set_pixel(x, y, rgba);
                }
            }
        }
    }
}

/// Icons the stepper button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    /// Icon on the increment (right) button
    Increment,
    /// Icon on the decrement (left) button
    Decrement,
}

/// Colors the stepper button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    /// Button fill
    Button,
    /// Label text on the increment button
    Label,
    /// Quantity text between the buttons
    Quantity,
}

/// Resource provider
pub trait Resources {
    fn load_drawable(&self, id: IconId) -> Option<Box<dyn Drawable>>;

    fn load_color(&self, id: ColorId) -> Option<Color>;
}

/// Resources backed by the built-in icons and a fixed palette
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinResources;

impl Resources for BuiltinResources {
    fn load_drawable(&self, id: IconId) -> Option<Box<dyn Drawable>> {
        let icon = match id {
            IconId::Increment => Icon::plus(css::WHITE),
            IconId::Decrement => Icon::minus(css::WHITE),
        };
        Some(Box::new(icon))
    }

    fn load_color(&self, id: ColorId) -> Option<Color> {
        Some(match id {
            ColorId::Button => mocha::SAPPHIRE,
            ColorId::Label => css::WHITE,
            ColorId::Quantity => css::BLACK,
        })
    }
}
