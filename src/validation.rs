/*!
 * Consistency checks for grids.
 *
 * The model leaves several obligations to its callers: interval tiers are
 * not kept sorted, overlaps are not rejected, interval setters accept
 * `start > end` and nothing forces annotations inside the tier or grid
 * bounds. This module reports such issues without changing the grid:
 * - Interval ranges (start <= end)
 * - Ordering by start time
 * - Overlaps between intervals, whatever their insertion order
 * - Containment in tier and grid bounds
 * - Duplicate tier names (informational)
 */

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;
use crate::app_config::Config;
use crate::grid::Grid;
use crate::tier::{AnyTier, Tier};

/// Default tolerance in seconds when comparing times
const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Configuration for grid validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Report annotations starting before their predecessor
    #[serde(default = "default_true")]
    pub check_ordering: bool,

    /// Report intervals overlapping an earlier-starting interval
    #[serde(default = "default_true")]
    pub check_overlaps: bool,

    /// Report intervals with start > end
    #[serde(default = "default_true")]
    pub check_ranges: bool,

    /// Report annotations outside explicit tier bounds or set grid bounds
    #[serde(default = "default_true")]
    pub check_bounds: bool,

    /// Slack in seconds applied to every time comparison
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_true() -> bool {
    true
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            check_ordering: true,
            check_overlaps: true,
            check_ranges: true,
            check_bounds: true,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Types of consistency issues
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// Interval ends before it starts
    InvalidRange { start: f64, end: f64 },
    /// Annotation starts before the previous one in the tier
    OutOfOrder { start: f64, previous_start: f64 },
    /// Interval overlaps an earlier-starting one
    Overlap { other_index: usize, overlap: f64 },
    /// Annotation lies outside the tier's explicit bounds
    OutsideTierBounds {
        start: f64,
        end: f64,
        tier_start: f64,
        tier_end: f64,
    },
    /// Annotation lies outside the grid bounds
    OutsideGridBounds {
        start: f64,
        end: f64,
        grid_start: f64,
        grid_end: f64,
    },
    /// Another tier earlier in the grid has the same name
    DuplicateTierName,
}

impl IssueKind {
    /// Whether the issue makes the report fail
    pub fn is_error(&self) -> bool {
        !matches!(self, IssueKind::DuplicateTierName)
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::InvalidRange { start, end } => {
                write!(f, "Invalid range: start {} > end {}", start, end)
            }
            IssueKind::OutOfOrder { start, previous_start } => {
                write!(
                    f,
                    "Out of order: starts at {} before previous start {}",
                    start, previous_start
                )
            }
            IssueKind::Overlap { other_index, overlap } => {
                write!(f, "Overlaps annotation {} by {}s", other_index, overlap)
            }
            IssueKind::OutsideTierBounds { start, end, tier_start, tier_end } => {
                write!(
                    f,
                    "Span {}..{} outside tier bounds {}..{}",
                    start, end, tier_start, tier_end
                )
            }
            IssueKind::OutsideGridBounds { start, end, grid_start, grid_end } => {
                write!(
                    f,
                    "Span {}..{} outside grid bounds {}..{}",
                    start, end, grid_start, grid_end
                )
            }
            IssueKind::DuplicateTierName => write!(f, "Duplicate tier name"),
        }
    }
}

/// A single issue located in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Position of the tier in the grid
    pub tier_index: usize,
    /// Name of the tier
    pub tier_name: String,
    /// Position of the annotation in the tier, for annotation-level issues
    pub annotation_index: Option<usize>,
    pub kind: IssueKind,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.annotation_index {
            Some(index) => write!(
                f,
                "tier {} '{}', annotation {}: {}",
                self.tier_index, self.tier_name, index, self.kind
            ),
            None => write!(f, "tier {} '{}': {}", self.tier_index, self.tier_name, self.kind),
        }
    }
}

/// Result of validating a grid
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Overall pass/fail status (informational issues do not fail it)
    pub passed: bool,
    /// Issues in grid order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Issues found in tiers named `name`
    pub fn issues_for_tier(&self, name: &str) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.tier_name == name).collect()
    }

    /// Number of issues that fail the report
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.kind.is_error()).count()
    }
}

/// Consistency checker for grids
#[derive(Debug, Clone, Default)]
pub struct GridValidator {
    config: ValidatorConfig,
}

impl GridValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Create a new validator from the `validation` section of `config`
    pub fn from_config(config: &Config) -> Self {
        Self::with_config(config.validation.clone())
    }

    /// Validate every tier of `grid`.
    pub fn validate(&self, grid: &Grid) -> ValidationReport {
        let grid_bounds = grid.has_bounds().then(|| (grid.start(), grid.end()));
        let mut issues = Vec::new();
        let mut seen_names = HashSet::new();

        for (tier_index, tier) in grid.tiers().iter().enumerate() {
            if !seen_names.insert(tier.name()) {
                issues.push(ValidationIssue {
                    tier_index,
                    tier_name: tier.name().to_string(),
                    annotation_index: None,
                    kind: IssueKind::DuplicateTierName,
                });
            }

            let found = match tier {
                AnyTier::Interval(tier) => self.validate_tier(tier, grid_bounds),
                AnyTier::Point(tier) => self.validate_tier(tier, grid_bounds),
            };

            issues.extend(found.into_iter().map(|(annotation_index, kind)| ValidationIssue {
                tier_index,
                tier_name: tier.name().to_string(),
                annotation_index: Some(annotation_index),
                kind,
            }));
        }

        let report = ValidationReport {
            passed: issues.iter().all(|i| !i.kind.is_error()),
            issues,
        };

        if report.passed {
            debug!(
                "Grid validation: {} tiers, {} issues",
                grid.len(),
                report.issues.len()
            );
        } else {
            warn!(
                "Grid validation failed: {} tiers, {} errors",
                grid.len(),
                report.error_count()
            );
        }

        report
    }

    /// Validate one tier, returning `(annotation index, issue)` pairs.
    ///
    /// `grid_bounds` is `None` when the grid bounds are unset.
    pub fn validate_tier<A: Annotation>(
        &self,
        tier: &Tier<A>,
        grid_bounds: Option<(f64, f64)>,
    ) -> Vec<(usize, IssueKind)> {
        let tolerance = self.config.tolerance;
        let tier_bounds = match (tier.start(), tier.end()) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        };
        let mut issues = Vec::new();
        let mut previous: Option<&A> = None;

        for (index, annotation) in tier.iter().enumerate() {
            let (start, end) = (annotation.start(), annotation.end());

            if self.config.check_ranges && start > end + tolerance {
                issues.push((index, IssueKind::InvalidRange { start, end }));
            }

            if let Some(prev) = previous {
                if self.config.check_ordering && start + tolerance < prev.start() {
                    issues.push((
                        index,
                        IssueKind::OutOfOrder {
                            start,
                            previous_start: prev.start(),
                        },
                    ));
                }

            }

            if self.config.check_bounds {
                if let Some((tier_start, tier_end)) = tier_bounds {
                    if start + tolerance < tier_start || end > tier_end + tolerance {
                        issues.push((
                            index,
                            IssueKind::OutsideTierBounds {
                                start,
                                end,
                                tier_start,
                                tier_end,
                            },
                        ));
                    }
                }

                if let Some((grid_start, grid_end)) = grid_bounds {
                    if start + tolerance < grid_start || end > grid_end + tolerance {
                        issues.push((
                            index,
                            IssueKind::OutsideGridBounds {
                                start,
                                end,
                                grid_start,
                                grid_end,
                            },
                        ));
                    }
                }
            }

            previous = Some(annotation);
        }

        if self.config.check_overlaps {
            issues.extend(self.find_overlaps(tier));
            issues.sort_by_key(|(index, _)| *index);
        }

        issues
    }

    /// Overlaps between annotations taken in start order.
    ///
    /// Tracks the furthest end seen so far, so spans nested inside a long
    /// interval are reported against it. Touching intervals share a
    /// boundary and do not overlap.
    fn find_overlaps<A: Annotation>(&self, tier: &Tier<A>) -> Vec<(usize, IssueKind)> {
        let annotations = tier.annotations();
        let mut sorted_indices: Vec<usize> = (0..annotations.len()).collect();
        sorted_indices.sort_by(|&a, &b| annotations[a].start().total_cmp(&annotations[b].start()));

        let mut issues = Vec::new();
        let mut furthest: Option<(usize, f64)> = None;

        for index in sorted_indices {
            let (start, end) = (annotations[index].start(), annotations[index].end());

            if let Some((other_index, max_end)) = furthest {
                let overlap = max_end.min(end) - start;
                if overlap > self.config.tolerance {
                    issues.push((index, IssueKind::Overlap { other_index, overlap }));
                }
            }

            if furthest.is_none_or(|(_, max_end)| end > max_end) {
                furthest = Some((index, end));
            }
        }

        issues
    }
}
