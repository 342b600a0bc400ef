#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Level, Output, OutputDrive, Pin},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, display::Display};
use system::{
    config::{SystemConfig, BRIGHTNESS, LAYOUT, THEME},
    time::{until_next_minute, TimeManager, TimeReference},
};

// Others
use binarypine_ui::{BinaryWatchface, WatchFace};
use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::pixelcolor::Rgb565;

// Communication channels
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

/// Publish the current time at every minute boundary.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: TimeManager) {
    loop {
        match clock.now() {
            Ok(now) => {
                defmt::info!("Current time: {}:{}", now.hour(), now.minute());
                TIME.signal(now);
                Timer::after(until_next_minute(&now)).await;
            }
            Err(err) => {
                defmt::error!("Clock unavailable: {}", err);
                Timer::after(Duration::from_secs(60)).await;
            }
        }
    }
}

/// Show the latest time on the LCD.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<SPI2>, mut face: BinaryWatchface<Rgb565>) {
    // Paint everything once, later ticks only touch flipped cells
    let time = TIME.wait().await;
    face.on_tick(&time);
    if let Err(err) = display.redraw(&mut face) {
        defmt::warn!("Redraw failed: {}", err);
    }

    loop {
        let time = TIME.wait().await;
        if face.on_tick(&time) {
            if let Err(err) = display.refresh(&mut face) {
                defmt::warn!("Refresh failed: {}", err);
            }
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize clock
    let clock = TimeManager::init(unwrap!(TimeReference::at_build()));

    // Initialize Backlight
    let backlight = Backlight::init(
        Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let mut display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
        backlight,
    ));
    unwrap!(display.set_brightness(BRIGHTNESS));

    let face = BinaryWatchface::new(LAYOUT, THEME);
    defmt::info!("Initialization finished, theme: {}, {}", THEME, LAYOUT);

    // Schedule tasks
    unwrap!(spawner.spawn(update_lcd(display, face)));
    unwrap!(spawner.spawn(update_time(clock)));
}
