//! Bit grid model
//!
//! Every decimal digit of the time is shown as a column of cells holding its
//! binary representation, least significant bit first. Cell positions are
//! fixed when the grid is created, a tick only flips the `on` states.

use core::ops::{BitOr, BitOrAssign};

use embedded_graphics::geometry::Point;

use crate::{digits::Digits, layout::Layout};

/// Total number of cells on the face (2 + 4 + 3 + 4)
pub const CELLS: usize = 13;

/// A single bit on the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Top left corner of the cell
    pub origin: Point,
    pub on: bool,
}

/// Set of cells, addressed by their index in draw order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellMask(u16);

impl CellMask {
    pub const EMPTY: CellMask = CellMask(0);
    pub const ALL: CellMask = CellMask((1 << CELLS) - 1);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, index: usize) -> bool {
        index < CELLS && self.0 & (1 << index) != 0
    }

    /// Number of cells in the set
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    const fn shifted(bits: u16, first: usize) -> Self {
        CellMask(bits << first)
    }
}

impl BitOr for CellMask {
    type Output = CellMask;

    fn bitor(self, rhs: CellMask) -> CellMask {
        CellMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellMask {
    fn bitor_assign(&mut self, rhs: CellMask) {
        self.0 |= rhs.0;
    }
}

/// Cells of one decimal digit, bit `i` of the digit in cell `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitGroup<const N: usize> {
    cells: [Cell; N],
}

impl<const N: usize> DigitGroup<N> {
    fn new(layout: &Layout, column: u32) -> Self {
        Self {
            cells: core::array::from_fn(|bit| Cell {
                origin: layout.cell_origin(column, bit as u32),
                on: false,
            }),
        }
    }

    /// Show `digit` in this group. Bits that do not fit into the group are
    /// dropped. Returns the bits of the cells that flipped.
    pub fn set(&mut self, digit: u8) -> u16 {
        let mut changed = 0;
        for (bit, cell) in self.cells.iter_mut().enumerate() {
            let on = (digit >> bit) & 1 == 1;
            if cell.on != on {
                cell.on = on;
                changed |= 1 << bit;
            }
        }
        changed
    }

    /// Value currently displayed by the group
    pub fn value(&self) -> u8 {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.on)
            .fold(0, |value, (bit, _)| value | 1 << bit)
    }

    pub fn cells(&self) -> &[Cell; N] {
        &self.cells
    }
}

/// The four digit columns of the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitGrid {
    hour_tens: DigitGroup<2>,
    hour_units: DigitGroup<4>,
    minute_tens: DigitGroup<3>,
    minute_units: DigitGroup<4>,
}

impl BitGrid {
    /// Lay out all cells, every cell starts off.
    pub fn new(layout: &Layout) -> Self {
        Self {
            hour_tens: DigitGroup::new(layout, 0),
            hour_units: DigitGroup::new(layout, 1),
            minute_tens: DigitGroup::new(layout, 2),
            minute_units: DigitGroup::new(layout, 3),
        }
    }

    /// Show `digits`, returning the cells whose state changed.
    pub fn update(&mut self, digits: &Digits) -> CellMask {
        CellMask::shifted(self.hour_tens.set(digits.hour_tens), 0)
            | CellMask::shifted(self.hour_units.set(digits.hour_units), 2)
            | CellMask::shifted(self.minute_tens.set(digits.minute_tens), 6)
            | CellMask::shifted(self.minute_units.set(digits.minute_units), 9)
    }

    /// Digits currently displayed
    pub fn digits(&self) -> Digits {
        Digits {
            hour_tens: self.hour_tens.value(),
            hour_units: self.hour_units.value(),
            minute_tens: self.minute_tens.value(),
            minute_units: self.minute_units.value(),
        }
    }

    /// All cells in draw order: hour tens, hour units, minute tens, minute units.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.hour_tens
            .cells()
            .iter()
            .chain(self.hour_units.cells())
            .chain(self.minute_tens.cells())
            .chain(self.minute_units.cells())
    }

    pub fn hour_tens(&self) -> &DigitGroup<2> {
        &self.hour_tens
    }

    pub fn hour_units(&self) -> &DigitGroup<4> {
        &self.hour_units
    }

    pub fn minute_tens(&self) -> &DigitGroup<3> {
        &self.minute_tens
    }

    pub fn minute_units(&self) -> &DigitGroup<4> {
        &self.minute_units
    }
}
