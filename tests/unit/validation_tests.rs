/*!
 * Tests for grid consistency validation
 */

use textgrid::validation::IssueKind;
use textgrid::{
    Annotation, Grid, GridValidator, IntervalAnnotation, IntervalTier, PointAnnotation, PointTier,
    ValidatorConfig,
};
use crate::common;

/// The sample grid satisfies every check
#[test]
fn test_validate_sampleGrid_shouldPass() {
    common::init_logging();
    let report = GridValidator::new().validate(&common::sample_grid());
    assert!(report.passed);
    assert_eq!(report.error_count(), 0);
}

/// Grid bounds are only checked once they are set
#[test]
fn test_validate_withUnsetGridBounds_shouldSkipGridBoundsCheck() {
    let tier = IntervalTier::with_annotations("w", vec![IntervalAnnotation::new(10.0, 20.0, "far")]);
    let unbounded = Grid::with_tiers(textgrid::UNSET_TIME, textgrid::UNSET_TIME, vec![tier.clone().into()]);
    assert!(GridValidator::new().validate(&unbounded).passed);

    let bounded = Grid::with_tiers(0.0, 2.0, vec![tier.into()]);
    let report = GridValidator::new().validate(&bounded);
    assert!(!report.passed);
    assert!(matches!(report.issues[0].kind, IssueKind::OutsideGridBounds { .. }));
    assert_eq!(report.issues[0].annotation_index, Some(0));
}

/// Explicit tier bounds are enforced
#[test]
fn test_validate_withTierBounds_shouldReportEscapingAnnotation() {
    let tier = PointTier::with_annotations(
        "marks",
        vec![PointAnnotation::new(0.5, "in"), PointAnnotation::new(1.5, "out")],
    )
    .with_bounds(0.0, 1.0);
    let grid = Grid::with_tiers(0.0, 2.0, vec![tier.into()]);

    let report = GridValidator::new().validate(&grid);
    let issues = report.issues_for_tier("marks");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].annotation_index, Some(1));
    assert!(matches!(issues[0].kind, IssueKind::OutsideTierBounds { .. }));
}

/// Duplicate names are reported without failing the report
#[test]
fn test_validate_withDuplicateNames_shouldOnlyInform() {
    let mut grid = common::sample_grid();
    grid.add_tier(common::words_tier());

    let report = GridValidator::new().validate(&grid);
    assert!(report.passed);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].kind, IssueKind::DuplicateTierName);
    assert_eq!(report.issues[0].tier_index, 2);
}

/// An interval edited past its end is caught
#[test]
fn test_validate_afterInvertingInterval_shouldReportRange() {
    let mut grid = common::sample_grid();
    if let Some(words) = grid.tier_mut("words").and_then(|t| t.as_interval_mut()) {
        words.annotations_mut()[0].set_start(1.5).unwrap();
    }

    let report = GridValidator::new().validate(&grid);
    assert!(!report.passed);
    assert!(report
        .issues
        .iter()
        .any(|i| i.kind == IssueKind::InvalidRange { start: 1.5, end: 1.0 }));
}

/// Tolerance absorbs rounding noise on shared boundaries
#[test]
fn test_validate_withTolerance_shouldIgnoreTinyOverlap() {
    let tier = IntervalTier::with_annotations(
        "w",
        vec![
            IntervalAnnotation::new(0.0, 1.0 + 1e-12, "a"),
            IntervalAnnotation::new(1.0, 2.0, "b"),
        ],
    );
    assert!(GridValidator::new().validate_tier(&tier, None).is_empty());

    let strict = GridValidator::with_config(ValidatorConfig {
        tolerance: 0.0,
        ..ValidatorConfig::default()
    });
    assert_eq!(strict.validate_tier(&tier, None).len(), 1);
}

/// Issues render with their location
#[test]
fn test_issueDisplay_shouldIncludeLocation() {
    let tier = IntervalTier::with_annotations("w", vec![IntervalAnnotation::new(3.0, 1.0, "x")]);
    let grid = Grid::with_tiers(0.0, 5.0, vec![tier.into()]);
    let report = GridValidator::new().validate(&grid);
    let rendered = report.issues[0].to_string();
    assert!(rendered.contains("tier 0 'w', annotation 0"));
    assert!(rendered.contains("Invalid range"));
}
