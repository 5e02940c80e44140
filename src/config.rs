use macroquad::prelude::Conf;
use thiserror::Error;

/// Misconfiguration is the sole fatal condition: it is rejected here,
/// before any grid is constructed.
#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive")]
    NonPositive { name: &'static str },
    #[error("cell size {cell_size}px exceeds the {width}x{height}px window")]
    CellExceedsWindow {
        cell_size: u32,
        width: u32,
        height: u32,
    },
}

/// Startup configuration, resolved once and immutable afterwards.
/// Grid dimensions derive from the window size and the cell pixel size.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub tick_rate: f32,
}

impl Config {
    pub const DEFAULT_WINDOW_WIDTH: u32 = 1440;
    pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;
    pub const DEFAULT_CELL_SIZE: u32 = 10;
    pub const DEFAULT_TICK_RATE: f32 = 10.0;

    /// Validate and build a configuration
    pub fn new(
        window_width: u32,
        window_height: u32,
        cell_size: u32,
        tick_rate: f32,
    ) -> Result<Self, ConfigError> {
        if window_width == 0 {
            return Err(ConfigError::NonPositive { name: "window width" });
        }
        if window_height == 0 {
            return Err(ConfigError::NonPositive { name: "window height" });
        }
        if cell_size == 0 {
            return Err(ConfigError::NonPositive { name: "cell size" });
        }
        if !tick_rate.is_finite() || tick_rate <= 0.0 {
            return Err(ConfigError::NonPositive { name: "tick rate" });
        }
        if cell_size > window_width || cell_size > window_height {
            return Err(ConfigError::CellExceedsWindow {
                cell_size,
                width: window_width,
                height: window_height,
            });
        }

        Ok(Self {
            window_width,
            window_height,
            cell_size,
            tick_rate,
        })
    }

    /// Grid rows fitting the window height
    pub const fn rows(&self) -> usize {
        (self.window_height / self.cell_size) as usize
    }

    /// Grid columns fitting the window width
    pub const fn cols(&self) -> usize {
        (self.window_width / self.cell_size) as usize
    }

    /// Window configuration for the macroquad shell
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: "Conway's Game of Life".to_owned(),
            window_width: self.window_width as i32,
            window_height: self.window_height as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Self::DEFAULT_WINDOW_WIDTH,
            window_height: Self::DEFAULT_WINDOW_HEIGHT,
            cell_size: Self::DEFAULT_CELL_SIZE,
            tick_rate: Self::DEFAULT_TICK_RATE,
        }
    }
}
