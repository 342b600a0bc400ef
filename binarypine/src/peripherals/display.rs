//! Display control module for PineTime

use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26},
    spim::{self, Spim},
};

use binarypine_ui::BinaryWatchface;
use display_interface_spi::SPIInterface;
use embassy_time::Delay;
use embedded_graphics::pixelcolor::Rgb565;
use mipidsi::{models::ST7789, Builder, Orientation};

use super::backlight::{self, Backlight};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

type Lcd<'a, SPI> = mipidsi::Display<
    SPIInterface<Spim<'a, SPI>, Output<'a, P0_18>, Output<'a, P0_25>>,
    ST7789,
    Output<'a, P0_26>,
>;

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// The controller did not accept the init sequence
    Init,
    /// Writing pixel data failed
    Draw,
    Backlight(backlight::Error),
}

impl From<backlight::Error> for Error {
    fn from(err: backlight::Error) -> Self {
        Error::Backlight(err)
    }
}

pub struct Display<SPI>
where
    SPI: spim::Instance,
{
    /// Display instance
    lcd: Lcd<'static, SPI>,
    /// Backlight pins
    backlight: Backlight<'static>,
}

impl<SPI> Display<SPI>
where
    SPI: spim::Instance,
{
    /// Configure display settings on boot
    pub fn init(
        spim: Spim<'static, SPI>,
        cs_pin: Output<'static, P0_25>,
        dc_pin: Output<'static, P0_18>,
        rst_pin: Output<'static, P0_26>,
        backlight: Backlight<'static>,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|err| {
                defmt::error!("LCD init failed: {}", defmt::Debug2Format(&err));
                Error::Init
            })?;

        defmt::info!("LCD initialized ({}x{})", LCD_W, LCD_H);
        Ok(Self { lcd, backlight })
    }

    /// Set the backlight brightness
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error> {
        self.backlight.set(level)?;
        defmt::info!("Backlight at level {}", self.backlight.brightness());
        Ok(())
    }

    /// Paint the complete watchface
    pub fn redraw(&mut self, face: &mut BinaryWatchface<Rgb565>) -> Result<(), Error> {
        defmt::debug!("Full redraw");
        face.redraw(&mut self.lcd).map_err(draw_error)
    }

    /// Paint the cells that changed since the last draw
    pub fn refresh(&mut self, face: &mut BinaryWatchface<Rgb565>) -> Result<(), Error> {
        defmt::debug!("Redrawing {} cells", face.pending().len());
        face.flush(&mut self.lcd).map_err(draw_error)
    }
}

fn draw_error(err: mipidsi::Error) -> Error {
    defmt::error!("LCD write failed: {}", defmt::Debug2Format(&err));
    Error::Draw
}
