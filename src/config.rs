//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::core::Timing;
use crate::types::{Orientation, FALL_DELAY_MS, KEY_RELEASE_TIMEOUT_MS, KEY_REPEAT_MS};

/// Highest frame rate the pacer can honour with whole-millisecond intervals.
pub const MAX_FPS: u32 = 1000;

/// lcd-tetris - handheld Tetris on an emulated monochrome LCD
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Random seed (defaults to the system clock)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Gravity interval in milliseconds
    #[arg(long, default_value_t = FALL_DELAY_MS)]
    pub fall_delay_ms: u32,

    /// Auto-repeat interval of a held button in milliseconds
    #[arg(long, default_value_t = KEY_REPEAT_MS)]
    pub repeat_ms: u32,

    /// Frames per second
    #[arg(long, default_value_t = 25)]
    pub fps: u32,

    /// Release a held key after this many quiet milliseconds
    /// (terminals without key release events)
    #[arg(long, default_value_t = KEY_RELEASE_TIMEOUT_MS)]
    pub release_timeout_ms: u32,

    /// Show the panel unrotated
    #[arg(long)]
    pub landscape: bool,

    /// Write logs to this file (the terminal is the display)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("fall delay must be greater than zero")]
    ZeroFallDelay,

    #[error("repeat interval must be greater than zero")]
    ZeroRepeat,

    #[error("fps must be between 1 and {max}, got {fps}")]
    FpsOutOfRange { fps: u32, max: u32 },

    #[error("release timeout must be greater than zero")]
    ZeroReleaseTimeout,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u32>,
    pub timing: Timing,
    pub fps: u32,
    pub release_timeout: u32,
    pub orientation: Orientation,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn frame_interval_ms(&self) -> u32 {
        1000 / self.fps
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            timing: Timing::default(),
            fps: 25,
            release_timeout: KEY_RELEASE_TIMEOUT_MS,
            orientation: Orientation::default(),
            log_file: None,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.fall_delay_ms == 0 {
            return Err(ConfigError::ZeroFallDelay);
        }
        if args.repeat_ms == 0 {
            return Err(ConfigError::ZeroRepeat);
        }
        if args.fps == 0 || args.fps > MAX_FPS {
            return Err(ConfigError::FpsOutOfRange {
                fps: args.fps,
                max: MAX_FPS,
            });
        }
        if args.release_timeout_ms == 0 {
            return Err(ConfigError::ZeroReleaseTimeout);
        }

        Ok(Self {
            seed: args.seed,
            timing: Timing {
                fall_delay: args.fall_delay_ms,
                key_repeat: args.repeat_ms,
            },
            fps: args.fps,
            release_timeout: args.release_timeout_ms,
            orientation: if args.landscape {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            },
            log_file: args.log_file,
        })
    }
}
