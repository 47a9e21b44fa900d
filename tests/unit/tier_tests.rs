/*!
 * Tests for tier editing
 */

use textgrid::{Annotation, AnnotationKind, IntervalAnnotation, IntervalTier, ModelError, PointAnnotation, PointTier};
use crate::common;

fn texts(tier: &IntervalTier) -> Vec<String> {
    tier.iter().map(|a| a.text().to_string()).collect()
}

/// Explicit non-negative positions are honoured in call order
#[test]
fn test_addAnnotationAt_withExplicitPositions_shouldReflectPositionOrder() {
    common::init_logging();
    let mut tier = IntervalTier::new("words");

    tier.add_annotation_at(IntervalAnnotation::new(2.0, 3.0, "c"), 0).unwrap();
    tier.add_annotation_at(IntervalAnnotation::new(0.0, 1.0, "a"), 0).unwrap();
    tier.add_annotation_at(IntervalAnnotation::new(1.0, 2.0, "b"), 1).unwrap();
    tier.add_annotation_at(IntervalAnnotation::new(3.0, 4.0, "d"), -1).unwrap();

    assert_eq!(texts(&tier), vec!["a", "b", "c", "d"]);
}

/// Bulk append keeps the order of its input
#[test]
fn test_addAnnotations_shouldAppendInInputOrder() {
    let mut tier = common::words_tier();
    tier.add_annotations(vec![
        IntervalAnnotation::new(5.0, 6.0, "late"),
        IntervalAnnotation::new(2.0, 3.0, "early"),
    ]);
    assert_eq!(texts(&tier), vec!["a", "b", "late", "early"]);
}

/// Deleting by position returns the removed annotation
#[test]
fn test_deleteAnnotation_withValidPosition_shouldReturnRemoved() {
    let mut tier = common::words_tier();
    let removed = tier.delete_annotation(0).unwrap();
    assert_eq!(removed, IntervalAnnotation::new(0.0, 1.0, "a"));
    assert_eq!(texts(&tier), vec!["b"]);
}

/// Deleting past the end reports the index and length
#[test]
fn test_deleteAnnotation_onEmptyTier_shouldBeOutOfRange() {
    let mut tier = PointTier::new("marks");
    assert_eq!(
        tier.delete_annotation(0),
        Err(ModelError::IndexOutOfRange { index: 0, len: 0 })
    );
}

/// Missing text is not an error
#[test]
fn test_deleteAnnotationByText_withMissingText_shouldLeaveTierUnchanged() {
    let mut tier = common::marks_tier();
    let before = tier.clone();
    assert!(tier.delete_annotation_by_text("nope").is_none());
    assert_eq!(tier, before);
}

/// Tier equality covers name, bounds and annotations
#[test]
fn test_tierEquality_shouldBeStructural() {
    assert_eq!(common::words_tier(), common::words_tier());

    let mut renamed = common::words_tier();
    renamed.set_name("tokens");
    assert_ne!(renamed, common::words_tier());

    let bounded = common::words_tier().with_bounds(0.0, 2.0);
    assert_ne!(bounded, common::words_tier());
}

/// Bounds can be set and cleared
#[test]
fn test_bounds_setAndClear_shouldUpdateAccessors() {
    let mut tier = common::marks_tier();
    assert_eq!(tier.kind(), AnnotationKind::Point);
    assert_eq!(tier.start(), None);

    tier.set_bounds(0.0, 1.0);
    assert_eq!((tier.start(), tier.end()), (Some(0.0), Some(1.0)));

    tier.clear_bounds();
    assert_eq!(tier.time_span(), Some((0.5, 0.5)));
}

/// Point queries match exact times only
#[test]
fn test_annotationsAt_onPointTier_shouldMatchExactTime() {
    let mut tier = common::marks_tier();
    tier.add_annotation(PointAnnotation::new(0.5, "y"));
    tier.add_annotation(PointAnnotation::new(0.75, "z"));

    let hits: Vec<&str> = tier.annotations_at(0.5).into_iter().map(|a| a.text()).collect();
    assert_eq!(hits, vec!["x", "y"]);
}

/// Sorting is stable for equal start times
#[test]
fn test_sortByStart_shouldBeStable() {
    let mut tier = IntervalTier::with_annotations(
        "w",
        vec![
            IntervalAnnotation::new(1.0, 2.0, "second"),
            IntervalAnnotation::new(0.0, 1.0, "first"),
            IntervalAnnotation::new(1.0, 1.5, "third"),
        ],
    );
    tier.sort_by_start();
    assert_eq!(texts(&tier), vec!["first", "second", "third"]);
}
