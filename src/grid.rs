/*!
 * The grid: top-level container of tiers.
 *
 * A grid owns an ordered list of tiers plus document-level start/end
 * bounds. Tier names are not required to be unique; deleting by name
 * removes the first match only.
 */

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};
use crate::render;
use crate::tier::AnyTier;

/// Sentinel for grid bounds that are not known
pub const UNSET_TIME: f64 = -1.0;

/// Annotation document made of parallel, independently timed tiers.
///
/// Serializers are expected to give back an equal grid. With JSON this only
/// holds for finite times: non-finite values are written as `null` and are
/// rejected when read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Document start time (`UNSET_TIME` when unknown)
    start: f64,

    /// Document end time (`UNSET_TIME` when unknown)
    end: f64,

    /// Legacy file association, kept for older callers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filename: Option<String>,

    /// Tiers in insertion order
    #[serde(default)]
    tiers: Vec<AnyTier>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid with unset bounds.
    pub fn new() -> Self {
        Self::with_bounds(UNSET_TIME, UNSET_TIME)
    }

    /// Create an empty grid with the given bounds.
    pub fn with_bounds(start: f64, end: f64) -> Self {
        Self::with_tiers(start, end, Vec::new())
    }

    /// Create a grid holding `tiers` in the given order.
    pub fn with_tiers(start: f64, end: f64, tiers: Vec<AnyTier>) -> Self {
        Self {
            start,
            end,
            filename: None,
            tiers,
        }
    }

    /// Attach a legacy filename.
    #[deprecated(note = "grids are not tied to a file; keep the path alongside the grid instead")]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Legacy filename, if any
    #[deprecated(note = "grids are not tied to a file; keep the path alongside the grid instead")]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Replace or clear the legacy filename
    #[deprecated(note = "grids are not tied to a file; keep the path alongside the grid instead")]
    pub fn set_filename(&mut self, filename: Option<String>) {
        self.filename = filename;
    }

    /// Document start time
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Document end time
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Set the document start time
    pub fn set_start(&mut self, start: f64) {
        self.start = start;
    }

    /// Set the document end time
    pub fn set_end(&mut self, end: f64) {
        self.end = end;
    }

    /// Whether both document bounds differ from the unset sentinel
    pub fn has_bounds(&self) -> bool {
        self.start != UNSET_TIME && self.end != UNSET_TIME
    }

    /// Tiers in insertion order.
    pub fn tiers(&self) -> &[AnyTier] {
        &self.tiers
    }

    /// Mutable view of the tiers.
    ///
    /// Tiers can be edited or reordered in place; the number of tiers only
    /// changes through the grid's add/delete operations.
    pub fn tiers_mut(&mut self) -> &mut [AnyTier] {
        &mut self.tiers
    }

    /// Number of tiers
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Whether the grid holds no tier
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Names of all tiers, in order, duplicates included
    pub fn tier_names(&self) -> Vec<&str> {
        self.tiers.iter().map(|t| t.name()).collect()
    }

    /// First tier named `name`
    pub fn tier(&self, name: &str) -> Option<&AnyTier> {
        self.tiers.iter().find(|t| t.name() == name)
    }

    /// First tier named `name`, mutably
    pub fn tier_mut(&mut self, name: &str) -> Option<&mut AnyTier> {
        self.tiers.iter_mut().find(|t| t.name() == name)
    }

    /// Append a tier.
    pub fn add_tier(&mut self, tier: impl Into<AnyTier>) {
        let tier = tier.into();
        debug!(
            "Grid: appending {} tier '{}' at {}",
            tier.kind(),
            tier.name(),
            self.tiers.len()
        );
        self.tiers.push(tier);
    }

    /// Insert a tier at `position`.
    ///
    /// A negative position appends. A position past the end is rejected and
    /// leaves the grid unchanged.
    pub fn add_tier_at(&mut self, tier: impl Into<AnyTier>, position: isize) -> ModelResult<()> {
        let Ok(index) = usize::try_from(position) else {
            self.add_tier(tier);
            return Ok(());
        };

        if index > self.tiers.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.tiers.len(),
            });
        }

        let tier = tier.into();
        debug!("Grid: inserting {} tier '{}' at {}", tier.kind(), tier.name(), index);
        self.tiers.insert(index, tier);
        Ok(())
    }

    /// Append every tier of `tiers`, preserving their order.
    pub fn add_tiers<I, T>(&mut self, tiers: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<AnyTier>,
    {
        for tier in tiers {
            self.add_tier(tier);
        }
    }

    /// Remove and return the tier at `position`.
    pub fn delete_tier(&mut self, position: usize) -> ModelResult<AnyTier> {
        if position >= self.tiers.len() {
            return Err(ModelError::IndexOutOfRange {
                index: position,
                len: self.tiers.len(),
            });
        }

        debug!("Grid: deleting tier at {}", position);
        Ok(self.tiers.remove(position))
    }

    /// Remove the first tier named `name`.
    ///
    /// Returns the removed tier, or `None` (leaving the grid untouched) when
    /// no tier has that name. Later tiers sharing the name are kept.
    pub fn delete_tier_by_name(&mut self, name: &str) -> Option<AnyTier> {
        match self.tiers.iter().position(|t| t.name() == name) {
            Some(position) => {
                debug!("Grid: deleting tier '{}' at {}", name, position);
                Some(self.tiers.remove(position))
            }
            None => {
                trace!("Grid: no tier named '{}'", name);
                None
            }
        }
    }

    /// Render with a custom indent width, see [`crate::render`].
    pub fn to_pretty_string(&self, indent: usize) -> String {
        render::to_pretty_string(self, indent)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_pretty_string(render::DEFAULT_INDENT))
    }
}
