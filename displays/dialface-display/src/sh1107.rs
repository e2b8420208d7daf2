//! SH1107 OLED Display Driver
//!
//! Driver for 128x128 SH1107-based OLED displays via I2C.
//! Rendering happens in a [`Framebuffer`]; the driver only pushes pages.

use embedded_hal_async::i2c::I2c;

use crate::backend::DisplayError;
use crate::framebuffer::{Framebuffer, PAGES, WIDTH};

/// SH1107 I2C address (typically 0x3C or 0x3D)
pub const SH1107_ADDR: u8 = 0x3C;

/// Control byte prefix for a command
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte prefix for display data
const CONTROL_DATA: u8 = 0x40;

/// SH1107 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_PAGE_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0xDC;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_SEG_NORMAL: u8 = 0xA0;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
}

/// SH1107 OLED driver
pub struct Sh1107<I2C> {
    i2c: I2C,
    address: u8,
    initialized: bool,
}

impl<I2C: I2c> Sh1107<I2C> {
    /// Create a new driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SH1107_ADDR)
    }

    /// Create a new driver at a specific address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            initialized: false,
        }
    }

    /// Check if [`init`](Self::init) has completed
    pub fn is_ready(&self) -> bool {
        self.initialized
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x51,
            cmd::SET_MUX_RATIO,
            0x7F, // 128 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            0x00,
            cmd::SET_PAGE_MODE,
            cmd::SET_SEG_NORMAL,
            cmd::SET_COM_SCAN_INC,
            cmd::SET_CONTRAST,
            0x4F,
            cmd::SET_PRECHARGE,
            0x22,
            cmd::SET_VCOM_DETECT,
            0x35,
            cmd::RESUME_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .await
            .map_err(|_| DisplayError::Communication)
    }

    /// Push the frame buffer to the display
    pub async fn flush(&mut self, frame: &Framebuffer) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8).await?;
            self.command(cmd::SET_LOW_COLUMN).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            if let Some(bytes) = frame.page(page) {
                data[1..].copy_from_slice(bytes);
            }
            self.i2c
                .write(self.address, &data)
                .await
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }

    /// Set display contrast (0-255)
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.command(cmd::SET_CONTRAST).await?;
        self.command(contrast).await
    }

    /// Turn display on/off
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        if on {
            self.command(cmd::DISPLAY_ON).await
        } else {
            self.command(cmd::DISPLAY_OFF).await
        }
    }

    /// Invert display colors
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        if inverted {
            self.command(cmd::SET_INVERSE).await
        } else {
            self.command(cmd::SET_NORMAL).await
        }
    }
}
