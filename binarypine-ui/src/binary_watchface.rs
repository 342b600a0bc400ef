//! Binary clock watchface

use chrono::Timelike;
use embedded_graphics::{pixelcolor::PixelColor, prelude::*};

use super::{
    digits::Digits,
    grid::{BitGrid, CellMask},
    layout::Layout,
    render::Renderer,
    theme::{Palette, Theme},
    WatchFace,
};

/// Shows hours and minutes as four columns of binary digits
pub struct BinaryWatchface<C: PixelColor> {
    grid: BitGrid,
    renderer: Renderer<C>,
    /// Cells changed since they were last drawn
    pending: CellMask,
}

impl<C: RgbColor> BinaryWatchface<C> {
    pub fn new(layout: Layout, theme: Theme) -> Self {
        Self::with_palette(layout, theme.palette())
    }
}

impl<C: PixelColor> BinaryWatchface<C> {
    pub fn with_palette(layout: Layout, palette: Palette<C>) -> Self {
        Self {
            grid: BitGrid::new(&layout),
            renderer: Renderer::new(layout, palette),
            // Nothing has been drawn yet
            pending: CellMask::ALL,
        }
    }

    pub fn grid(&self) -> &BitGrid {
        &self.grid
    }

    /// Digits currently shown
    pub fn digits(&self) -> Digits {
        self.grid.digits()
    }

    /// Cells waiting to be drawn by [`flush`](Self::flush)
    pub fn pending(&self) -> CellMask {
        self.pending
    }

    /// Draw the cells changed since the last draw.
    pub fn flush<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        self.renderer.draw_changed(&self.grid, self.pending, target)?;
        self.pending = CellMask::EMPTY;
        Ok(())
    }

    /// Draw the complete face and forget about pending changes.
    pub fn redraw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        self.on_redraw(target)?;
        self.pending = CellMask::EMPTY;
        Ok(())
    }
}

impl<C: PixelColor> WatchFace for BinaryWatchface<C> {
    type Color = C;

    fn on_tick<T: Timelike>(&mut self, time: &T) -> bool {
        let digits = Digits::from_time(time);
        let changed = self.grid.update(&digits);
        #[cfg(feature = "defmt")]
        defmt::trace!("Showing {}, {} cells changed", digits, changed.len());
        self.pending |= changed;
        !changed.is_empty()
    }

    fn on_redraw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        self.renderer.clear(target)?;
        self.renderer.draw_grid(&self.grid, target)
    }
}
