//! Binary clock watchface
//!
//! Hours and minutes are split into four decimal digits, each shown as a
//! column of squares holding the digit in binary, least significant bit at
//! the bottom. A set bit is a filled square, an unset bit a square with a
//! hole.
//!
//! The face is driven through [`WatchFace`]: the host calls
//! [`WatchFace::on_tick`] once per minute and [`WatchFace::on_redraw`]
//! whenever the screen has to be repainted. Both work on any
//! `embedded-graphics` draw target, so tests run without a display.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

use chrono::Timelike;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::PixelColor};

pub mod binary_watchface;
pub mod clock;
pub mod digits;
pub mod grid;
pub mod layout;
pub mod render;
pub mod theme;

#[cfg(test)]
mod framebuffer;

pub use binary_watchface::BinaryWatchface;
pub use clock::micros_until_next_minute;
pub use digits::Digits;
pub use grid::{BitGrid, Cell, CellMask};
pub use layout::{Layout, LayoutError};
pub use render::Renderer;
pub use theme::{Palette, Theme};

/// Callbacks a watchface receives from the host
pub trait WatchFace {
    type Color: PixelColor;

    /// Update the face to `time`. Returns whether anything visible changed.
    fn on_tick<T: Timelike>(&mut self, time: &T) -> bool;

    /// Paint the complete face onto `target`.
    fn on_redraw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>;
}
