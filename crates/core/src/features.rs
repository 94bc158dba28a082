//! Placed garden features and the tap rule
//!
//! A feature is a decorative stone sitting on one tile. Tapping an empty tile
//! plants a stage-0 feature, tapping a feature advances its stage, and a
//! feature that reaches [`FEATURE_STAGES`] is swept away. The collection never
//! holds two features on the same coordinate and never exposes a feature at
//! the final stage: the sweep runs before [`FeatureCollection::tap`] returns.

use log::debug;

use crate::types::{Coordinate, FEATURE_STAGES};

/// A placed feature: where it is and how far it has grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feature {
    pub coord: Coordinate,
    pub stage: u8,
}

impl Feature {
    pub fn new(coord: Coordinate) -> Self {
        Self { coord, stage: 0 }
    }

    /// True once the feature has cycled through every art variant.
    pub fn is_spent(&self) -> bool {
        self.stage >= FEATURE_STAGES
    }
}

/// What a tap did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// New stage-0 feature at this coordinate.
    Planted(Coordinate),
    /// Existing feature advanced to the given stage.
    Advanced(Coordinate, u8),
    /// Existing feature reached the last stage and was removed.
    Cleared(Coordinate),
    /// Tap landed outside the grid; nothing changed.
    OffGrid,
}

/// Ordered set of features keyed by coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a collection from saved features.
    ///
    /// Spent features are dropped and later duplicates of a coordinate lose
    /// to the first one, so the collection invariants hold for any input.
    pub fn from_features(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut out = Self::new();
        for f in features {
            if f.is_spent() || out.get(f.coord).is_some() {
                continue;
            }
            out.features.push(f);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> + '_ {
        self.features.iter()
    }

    pub fn as_slice(&self) -> &[Feature] {
        &self.features
    }

    pub fn get(&self, coord: Coordinate) -> Option<&Feature> {
        self.features.iter().find(|f| f.coord == coord)
    }

    pub fn clear(&mut self) {
        self.features.clear();
    }

    /// Keep only the features for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&Feature) -> bool) {
        self.features.retain(keep);
    }

    /// Apply a tap at `coord`.
    ///
    /// 1. Advance the feature at `coord`, if any.
    /// 2. Sweep every spent feature (not only the one just touched).
    /// 3. Plant a new feature when nothing was advanced.
    pub fn tap(&mut self, coord: Coordinate) -> TapOutcome {
        let mut advanced = None;
        for f in self.features.iter_mut().filter(|f| f.coord == coord) {
            f.stage = f.stage.saturating_add(1);
            advanced = Some(f.stage);
        }

        let swept = self.sweep();
        if swept > 0 {
            debug!("swept {swept} spent feature(s)");
        }

        match advanced {
            Some(stage) if stage >= FEATURE_STAGES => TapOutcome::Cleared(coord),
            Some(stage) => TapOutcome::Advanced(coord, stage),
            None => {
                self.features.push(Feature::new(coord));
                TapOutcome::Planted(coord)
            }
        }
    }

    /// Remove every spent feature, returning how many were removed.
    fn sweep(&mut self) -> usize {
        let before = self.features.len();
        self.features.retain(|f| !f.is_spent());
        before - self.features.len()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
