//! Screen geometry of the bit grid

use embedded_graphics::geometry::{Point, Size};

/// Number of digit columns on the face
pub const GROUPS: u32 = 4;
/// Height of the tallest column in cells
pub const MAX_BITS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// An off cell would have no visible frame around its hole
    NoBorder,
    /// The border leaves no room for the hole of an off cell
    BoxTooSmall,
    /// Part of the grid would be drawn outside of the screen
    OutOfBounds,
}

/// Placement of the cells on the screen.
///
/// Columns start at `x_offset` and are spaced two box sizes apart. Within a
/// column the least significant bit sits `y_offset` pixels above the bottom
/// edge of the screen and higher bits stack upwards with the same pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    box_size: u32,
    border: u32,
    x_offset: u32,
    y_offset: u32,
    screen: Size,
}

impl Layout {
    /// Classic 144x168 geometry with 14 px boxes.
    pub const DEFAULT: Layout = match Layout::new(14, 2, 21, 40, Size::new(144, 168)) {
        Ok(layout) => layout,
        Err(_) => panic!("invalid default layout"),
    };

    /// Create a layout, checking that the whole grid fits on `screen`.
    pub const fn new(
        box_size: u32,
        border: u32,
        x_offset: u32,
        y_offset: u32,
        screen: Size,
    ) -> Result<Self, LayoutError> {
        if border == 0 {
            return Err(LayoutError::NoBorder);
        }
        if box_size <= border.saturating_mul(2) {
            return Err(LayoutError::BoxTooSmall);
        }

        let pitch = box_size.saturating_mul(2);
        let span = pitch.saturating_mul(MAX_BITS - 1);
        let right = x_offset
            .saturating_add(pitch.saturating_mul(GROUPS - 1))
            .saturating_add(box_size);

        if right > screen.width
            || y_offset < box_size
            || y_offset.saturating_add(span) > screen.height
        {
            return Err(LayoutError::OutOfBounds);
        }

        Ok(Self {
            box_size,
            border,
            x_offset,
            y_offset,
            screen,
        })
    }

    /// Edge length of a cell
    pub const fn box_size(&self) -> u32 {
        self.box_size
    }

    /// Edge length of the hole in an off cell
    pub const fn inner_size(&self) -> u32 {
        self.box_size - 2 * self.border
    }

    /// Offset of the hole from the cell origin
    pub const fn border(&self) -> u32 {
        self.border
    }

    /// Distance between neighbouring cells, both horizontally and vertically
    pub const fn pitch(&self) -> u32 {
        self.box_size * 2
    }

    /// Top left corner of bit `bit` in column `group`.
    pub const fn cell_origin(&self, group: u32, bit: u32) -> Point {
        let x = self.x_offset + group * self.pitch();
        let y = self.screen.height - (self.y_offset + bit * self.pitch());
        Point::new(x as i32, y as i32)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Layout {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Layout {{ box_size: {}, border: {}, x_offset: {}, y_offset: {}, screen: {}x{} }}",
            self.box_size,
            self.border,
            self.x_offset,
            self.y_offset,
            self.screen.width,
            self.screen.height,
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
