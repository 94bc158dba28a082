//! Garden engine - run mode, features and the redraw tick
//!
//! The engine is driven entirely by its host: input events ([`Garden::tap`],
//! [`Garden::press`]), lifecycle hooks ([`Garden::launch`], [`Garden::pause`],
//! [`Garden::save_state`]/[`Garden::restore_state`]) and the clock, which is
//! passed in as `now_ms` on every call. Call [`Garden::tick`] from the host loop;
//! it returns `true` whenever a frame should be painted.
//!
//! # Modes
//!
//! | From | Event | To | Effect |
//! |------|-------|----|--------|
//! | Ready | start | Running | features cleared, redraw now |
//! | Paused | start | Running | features kept, redraw now |
//! | any | pause | Paused | status shown |
//! | Running | tick | Running | background reclassified, tick re-armed |
//!
//! Entering Running hides the status line; entering Ready or Paused shows the
//! mode's text.

use log::{debug, info, trace, warn};

use crate::config::GardenConfig;
use crate::features::{Feature, FeatureCollection, TapOutcome};
use crate::grid::{GridGeometry, TileGrid};
use crate::scheduler::RedrawScheduler;
use crate::snapshot::{FeatureSprite, GardenSnapshot, StatusLine};
use crate::types::{Direction, GardenInput, Mode, FEATURE_STAGES};

/// Garden state a host can keep across a restart. In-memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState {
    features: Vec<Feature>,
}

impl SavedState {
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

/// Complete garden state
#[derive(Debug, Clone)]
pub struct Garden {
    mode: Mode,
    geometry: GridGeometry,
    /// Background classification; cleared whenever it is about to be rebuilt.
    tiles: TileGrid,
    features: FeatureCollection,
    status: StatusLine,
    redraw: RedrawScheduler,
    config: GardenConfig,
}

impl Garden {
    /// Create a garden in `Ready` mode with the status line showing.
    pub fn new(geometry: GridGeometry, config: GardenConfig) -> Self {
        let mut garden = Self {
            mode: Mode::Ready,
            geometry,
            tiles: TileGrid::new(&geometry),
            features: FeatureCollection::new(),
            status: StatusLine::default(),
            redraw: RedrawScheduler::new(),
            config,
        };
        garden.set_mode(Mode::Ready, 0);
        garden
    }

    /// Host "created" hook: fresh garden, or a paused one when there is saved state.
    pub fn launch(geometry: GridGeometry, config: GardenConfig, saved: Option<SavedState>) -> Self {
        let mut garden = Self::new(geometry, config);
        if let Some(saved) = saved {
            garden.restore_state(saved);
        }
        garden
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    pub fn features(&self) -> &FeatureCollection {
        &self.features
    }

    pub fn status(&self) -> StatusLine {
        self.status
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw.is_pending()
    }

    /// Milliseconds until the pending redraw is due, if one is pending.
    pub fn time_until_redraw(&self, now_ms: u64) -> Option<u64> {
        self.redraw.time_until(now_ms)
    }

    /// Switch modes and update the status line.
    pub fn set_mode(&mut self, mode: Mode, now_ms: u64) {
        let old = self.mode;
        self.mode = mode;
        if old != mode {
            info!("mode {} -> {}", old.as_str(), mode.as_str());
        }

        match mode {
            Mode::Running => {
                if old != Mode::Running {
                    self.status.visible = false;
                    self.update(now_ms);
                }
            }
            Mode::Ready | Mode::Paused => {
                self.status.text = mode.status_text().unwrap_or_default();
                self.status.visible = true;
            }
        }
    }

    /// Start or resume. A garden started from `Ready` begins empty.
    pub fn start(&mut self, now_ms: u64) {
        match self.mode {
            Mode::Ready => {
                self.features.clear();
                self.set_mode(Mode::Running, now_ms);
            }
            Mode::Paused => self.set_mode(Mode::Running, now_ms),
            Mode::Running => {}
        }
    }

    /// Host "paused" hook. A pending tick is left to expire on its own.
    pub fn pause(&mut self) {
        self.set_mode(Mode::Paused, 0);
    }

    /// Directional key press. `Up` starts; the rest are accepted and ignored.
    ///
    /// Returns `true` when the key was handled.
    pub fn press(&mut self, direction: Direction, now_ms: u64) -> bool {
        match direction {
            Direction::Up => self.start(now_ms),
            Direction::Down | Direction::Left | Direction::Right => {
                trace!("ignoring {} press", direction.as_str());
            }
        }
        true
    }

    /// Tap at pixel position (`px`, `py`).
    ///
    /// Taps are honoured in every mode. Off-grid taps change nothing.
    pub fn tap(&mut self, px: i32, py: i32, now_ms: u64) -> TapOutcome {
        let Some(coord) = self.geometry.tile_at(px, py) else {
            debug!("tap at ({px},{py}) is off-grid");
            return TapOutcome::OffGrid;
        };

        let outcome = self.features.tap(coord);
        debug!("tap at ({px},{py}) -> tile {coord}: {outcome:?}");
        self.update(now_ms);
        outcome
    }

    /// Rebuild the background and request an immediate redraw (Running only).
    pub fn update(&mut self, now_ms: u64) {
        self.refresh(now_ms, 0);
    }

    fn refresh(&mut self, now_ms: u64, delay_ms: u32) {
        if self.mode != Mode::Running {
            return;
        }
        self.tiles.clear();
        self.tiles.classify(&self.geometry);
        self.redraw.schedule(now_ms, delay_ms);
    }

    /// Advance the clock. Returns `true` when a frame should be painted.
    ///
    /// A tick scheduled before a mode change may still come due; it is
    /// consumed without effect unless the garden is running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.redraw.take_due(now_ms) {
            return false;
        }
        if self.mode != Mode::Running {
            trace!("stale redraw tick in {} mode", self.mode.as_str());
            return false;
        }
        trace!("redraw tick at {now_ms}ms");
        self.refresh(now_ms, self.config.tick_ms);
        true
    }

    /// Replace the geometry. Features that no longer fit are dropped.
    pub fn resize(&mut self, geometry: GridGeometry, now_ms: u64) {
        self.geometry = geometry;
        self.tiles = TileGrid::new(&geometry);

        let before = self.features.len();
        self.features.retain(|f| geometry.contains(f.coord));
        let dropped = before - self.features.len();
        if dropped > 0 {
            debug!("resize dropped {dropped} feature(s) outside the grid");
        }

        self.update(now_ms);
    }

    /// Apply one host input. Returns `true` when the input was handled.
    pub fn apply_input(&mut self, input: GardenInput, now_ms: u64) -> bool {
        match input {
            GardenInput::Tap { x, y } => self.tap(x, y, now_ms) != TapOutcome::OffGrid,
            GardenInput::Direction(direction) => self.press(direction, now_ms),
            GardenInput::Pause => {
                self.pause();
                true
            }
            GardenInput::Resize { width, height } => {
                match GridGeometry::fit(
                    width,
                    height,
                    self.config.tile_width,
                    self.config.tile_height,
                    self.config.max_tiles,
                ) {
                    Ok(geometry) => {
                        self.resize(geometry, now_ms);
                        true
                    }
                    Err(e) => {
                        warn!("keeping previous grid: {e}");
                        false
                    }
                }
            }
        }
    }

    /// Host "save state" hook.
    pub fn save_state(&self) -> SavedState {
        SavedState {
            features: self.features.as_slice().to_vec(),
        }
    }

    /// Host "restore state" hook. The garden comes back paused.
    pub fn restore_state(&mut self, saved: SavedState) {
        self.features = FeatureCollection::from_features(saved.features);
        let geometry = self.geometry;
        self.features.retain(|f| geometry.contains(f.coord));
        self.set_mode(Mode::Paused, 0);
    }

    /// Features in draw form: pixel rectangle plus art index.
    pub fn sprites(&self) -> impl Iterator<Item = FeatureSprite> + '_ {
        self.features.iter().map(|f| {
            assert!(
                f.stage < FEATURE_STAGES,
                "feature at {} has out-of-range stage {}",
                f.coord,
                f.stage
            );
            FeatureSprite {
                coord: f.coord,
                rect: self.geometry.tile_rect(f.coord),
                art: f.stage,
            }
        })
    }

    pub fn snapshot_into(&self, out: &mut GardenSnapshot) {
        out.mode = self.mode;
        out.geometry = self.geometry;
        out.tiles.clone_from(&self.tiles);
        out.sprites.clear();
        out.sprites.extend(self.sprites());
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GardenSnapshot {
        let mut s = GardenSnapshot::new(self.geometry);
        self.snapshot_into(&mut s);
        s
    }
}
