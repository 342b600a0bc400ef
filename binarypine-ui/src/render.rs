//! Drawing of the bit grid

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::PixelColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::{
    grid::{BitGrid, Cell, CellMask},
    layout::Layout,
    theme::Palette,
};

/// Draws cells with a fixed layout and palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer<C: PixelColor> {
    layout: Layout,
    palette: Palette<C>,
}

impl<C: PixelColor> Renderer<C> {
    pub fn new(layout: Layout, palette: Palette<C>) -> Self {
        Self { layout, palette }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Fill the whole target with the background color.
    pub fn clear<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        target.clear(self.palette.off)
    }

    /// Draw a set bit as a filled square, an unset bit as a square with a hole.
    pub fn draw_cell<D>(&self, cell: &Cell, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        Rectangle::new(cell.origin, Size::new_equal(self.layout.box_size()))
            .into_styled(PrimitiveStyle::with_fill(self.palette.on))
            .draw(target)?;

        if !cell.on {
            let border = self.layout.border() as i32;
            Rectangle::new(
                cell.origin + Point::new(border, border),
                Size::new_equal(self.layout.inner_size()),
            )
            .into_styled(PrimitiveStyle::with_fill(self.palette.off))
            .draw(target)?;
        }

        Ok(())
    }

    /// Draw every cell of the grid.
    pub fn draw_grid<D>(&self, grid: &BitGrid, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        for cell in grid.cells() {
            self.draw_cell(cell, target)?;
        }
        Ok(())
    }

    /// Draw only the cells in `changed`.
    pub fn draw_changed<D>(
        &self,
        grid: &BitGrid,
        changed: CellMask,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        for (_, cell) in grid
            .cells()
            .enumerate()
            .filter(|(index, _)| changed.contains(*index))
        {
            self.draw_cell(cell, target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{digits::Digits, framebuffer::FrameBuffer, theme::Theme};
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

    fn renderer() -> Renderer<Rgb565> {
        Renderer::new(Layout::DEFAULT, Theme::Dark.palette())
    }

    #[test]
    fn test_on_cell_is_solid() {
        let mut fb = FrameBuffer::new(Size::new(144, 168), Rgb565::RED);
        let cell = Cell {
            origin: Point::new(10, 20),
            on: true,
        };
        renderer().draw_cell(&cell, &mut fb).unwrap();

        assert_eq!(fb.count(Rgb565::WHITE), 14 * 14);
        assert_eq!(fb.pixel(Point::new(10, 20)), Rgb565::WHITE);
        assert_eq!(fb.pixel(Point::new(17, 27)), Rgb565::WHITE);
        assert_eq!(fb.pixel(Point::new(23, 33)), Rgb565::WHITE);
        assert_eq!(fb.pixel(Point::new(24, 33)), Rgb565::RED);
    }

    #[test]
    fn test_off_cell_is_ring() {
        let mut fb = FrameBuffer::new(Size::new(144, 168), Rgb565::RED);
        let cell = Cell {
            origin: Point::new(10, 20),
            on: false,
        };
        renderer().draw_cell(&cell, &mut fb).unwrap();

        assert_eq!(fb.count(Rgb565::BLACK), 10 * 10);
        assert_eq!(fb.count(Rgb565::WHITE), 14 * 14 - 10 * 10);
        // 2 px frame, hole from (12, 22) to (21, 31)
        assert_eq!(fb.pixel(Point::new(11, 21)), Rgb565::WHITE);
        assert_eq!(fb.pixel(Point::new(12, 22)), Rgb565::BLACK);
        assert_eq!(fb.pixel(Point::new(21, 31)), Rgb565::BLACK);
        assert_eq!(fb.pixel(Point::new(22, 32)), Rgb565::WHITE);
    }

    #[test]
    fn test_thin_border_still_shows_ring() {
        let layout = Layout::new(14, 1, 21, 40, Size::new(144, 168)).unwrap();
        let renderer = Renderer::new(layout, Theme::Dark.palette());
        let mut fb = FrameBuffer::new(Size::new(144, 168), Rgb565::BLACK);
        let cell = Cell {
            origin: Point::new(10, 20),
            on: false,
        };
        renderer.draw_cell(&cell, &mut fb).unwrap();

        // 1 px frame around a 12x12 hole
        assert_eq!(fb.count(Rgb565::WHITE), 14 * 14 - 12 * 12);
        assert_eq!(fb.pixel(Point::new(10, 20)), Rgb565::WHITE);
        assert_eq!(fb.pixel(Point::new(11, 21)), Rgb565::BLACK);
    }

    #[test]
    fn test_grid_pattern() {
        let renderer = renderer();
        let mut grid = BitGrid::new(renderer.layout());
        grid.update(&Digits::new(13, 45));

        let mut fb = FrameBuffer::new(Size::new(144, 168), Rgb565::BLACK);
        renderer.draw_grid(&grid, &mut fb).unwrap();

        // The center of a cell is lit exactly when its bit is set
        let center = Point::new(7, 7);
        for cell in grid.cells() {
            let lit = fb.pixel(cell.origin + center) == Rgb565::WHITE;
            assert_eq!(lit, cell.on);
            assert_eq!(fb.pixel(cell.origin), Rgb565::WHITE);
        }
    }

    #[test]
    fn test_draw_changed_only_touches_changed_cells() {
        let renderer = renderer();
        let mut grid = BitGrid::new(renderer.layout());
        grid.update(&Digits::new(0, 1));

        let mut fb = FrameBuffer::new(Size::new(144, 168), Rgb565::RED);
        let changed = grid.update(&Digits::new(0, 2));
        renderer.draw_changed(&grid, changed, &mut fb).unwrap();

        // Two cells of the minute units column were redrawn
        assert_eq!(fb.count(Rgb565::RED), 144 * 168 - 2 * 14 * 14);
        let minute_units = grid.minute_units().cells();
        assert_eq!(fb.pixel(minute_units[0].origin + Point::new(7, 7)), Rgb565::BLACK);
        assert_eq!(fb.pixel(minute_units[1].origin + Point::new(7, 7)), Rgb565::WHITE);
        assert_eq!(fb.pixel(minute_units[2].origin), Rgb565::RED);
    }

    #[test]
    fn test_clear_uses_background() {
        let renderer = Renderer::new(Layout::DEFAULT, Theme::Light.palette());
        let mut fb = FrameBuffer::new(Size::new(144, 168), Rgb565::RED);
        renderer.clear(&mut fb).unwrap();
        assert_eq!(fb.count(Rgb565::WHITE), 144 * 168);
    }
}
