//! Errors raised while configuring the garden.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GardenError {
    /// The grid must be at least 2x2 tiles with a non-zero tile size.
    #[error("invalid grid geometry: {width}x{height} tiles of {tile_width}x{tile_height}px")]
    InvalidGeometry {
        width: u16,
        height: u16,
        tile_width: u16,
        tile_height: u16,
    },

    /// An environment variable was set but could not be used.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, GardenError>;
