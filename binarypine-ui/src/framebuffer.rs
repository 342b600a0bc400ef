//! In-memory draw target for tests

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::PixelColor, prelude::*, Pixel};

#[derive(PartialEq)]
pub struct FrameBuffer<C> {
    size: Size,
    pixels: Vec<C>,
}

impl<C: PixelColor> FrameBuffer<C> {
    pub fn new(size: Size, fill: C) -> Self {
        Self {
            size,
            pixels: vec![fill; (size.width * size.height) as usize],
        }
    }

    pub fn pixel(&self, point: Point) -> C {
        self.pixels[self.index(point).unwrap()]
    }

    /// Number of pixels with `color`
    pub fn count(&self, color: C) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == color).count()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (x, y) = (point.x, point.y);
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }
}

impl<C: PixelColor> OriginDimensions for FrameBuffer<C> {
    fn size(&self) -> Size {
        self.size
    }
}

impl<C: PixelColor> DrawTarget for FrameBuffer<C> {
    type Color = C;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(index) = self.index(point) {
                self.pixels[index] = color;
            }
        }
        Ok(())
    }
}
