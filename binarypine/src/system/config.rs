//! General system configuration

use binarypine_ui::{Layout, Theme};
use embassy_nrf::config::{Config, HfclkSource, LfclkSource};
use embedded_graphics::geometry::Size;

/// Appearance of the watchface
pub const THEME: Theme = Theme::Dark;

/// Grid geometry for the 240x240 LCD, centered on the screen
pub const LAYOUT: Layout = match Layout::new(24, 3, 36, 60, Size::new(240, 240)) {
    Ok(layout) => layout,
    Err(_) => panic!("watchface layout does not fit the LCD"),
};

/// Backlight level used while the face is shown (0-7)
pub const BRIGHTNESS: u8 = 2;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // Set high-frequency and low-frequency clock sources to external
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        config
    }
}
