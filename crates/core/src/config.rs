//! Runtime configuration, read from `ZEN_GARDEN_*` environment variables.

use crate::error::{GardenError, Result};
use crate::types::{DEFAULT_MAX_TILES, TICK_MS};

/// Garden configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenConfig {
    /// Tile width in pixels (terminal columns).
    pub tile_width: u16,
    /// Tile height in pixels (terminal rows).
    pub tile_height: u16,
    /// Periodic redraw interval while running.
    pub tick_ms: u32,
    /// Cap on tiles per axis when fitting the grid to a viewport.
    pub max_tiles: u16,
    /// Log file; logging stays off when unset.
    pub log_path: Option<String>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            tile_width: 2,
            tile_height: 1,
            tick_ms: TICK_MS,
            max_tiles: DEFAULT_MAX_TILES,
            log_path: None,
        }
    }
}

impl GardenConfig {
    /// Create from environment variables
    ///
    /// Unset or blank variables fall back to defaults. A variable that is set
    /// but not a positive integer is reported as [`GardenError::InvalidConfig`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GardenConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let tile_width = parse_positive(&lookup, "ZEN_GARDEN_TILE_W")?.unwrap_or(defaults.tile_width);
        let tile_height =
            parse_positive(&lookup, "ZEN_GARDEN_TILE_H")?.unwrap_or(defaults.tile_height);
        let tick_ms = parse_positive(&lookup, "ZEN_GARDEN_TICK_MS")?.unwrap_or(defaults.tick_ms);
        let max_tiles =
            parse_positive(&lookup, "ZEN_GARDEN_MAX_TILES")?.unwrap_or(defaults.max_tiles);

        let log_path = lookup("ZEN_GARDEN_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Ok(Self {
            tile_width,
            tile_height,
            tick_ms,
            max_tiles,
            log_path,
        })
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<T>() {
        Ok(v) if v != T::default() => Ok(Some(v)),
        _ => Err(GardenError::InvalidConfig { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = GardenConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, GardenConfig::default());
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn reads_overrides() {
        let cfg = GardenConfig::from_lookup(lookup_from(&[
            ("ZEN_GARDEN_TILE_W", "4"),
            ("ZEN_GARDEN_TILE_H", " 2 "),
            ("ZEN_GARDEN_TICK_MS", "100"),
            ("ZEN_GARDEN_MAX_TILES", "20"),
            ("ZEN_GARDEN_LOG_PATH", "/tmp/garden.log"),
        ]))
        .unwrap();
        assert_eq!(cfg.tile_width, 4);
        assert_eq!(cfg.tile_height, 2);
        assert_eq!(cfg.tick_ms, 100);
        assert_eq!(cfg.max_tiles, 20);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/garden.log"));
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = GardenConfig::from_lookup(lookup_from(&[
            ("ZEN_GARDEN_TILE_W", ""),
            ("ZEN_GARDEN_LOG_PATH", "   "),
        ]))
        .unwrap();
        assert_eq!(cfg.tile_width, 2);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn rejects_garbage_and_zero() {
        let err = GardenConfig::from_lookup(lookup_from(&[("ZEN_GARDEN_TICK_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            GardenError::InvalidConfig {
                key: "ZEN_GARDEN_TICK_MS",
                value: "soon".to_string()
            }
        );

        assert!(GardenConfig::from_lookup(lookup_from(&[("ZEN_GARDEN_TILE_W", "0")])).is_err());
    }
}
