/*!
 * Point and interval annotations.
 *
 * An annotation is a labeled time span. A point annotation stores a single
 * time, so its start and end can never differ. An interval annotation
 * stores independent start and end times that the caller keeps ordered.
 */

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};

/// Variant tag shared by annotations and tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// Zero-width annotation (start == end)
    Point,
    /// Annotation spanning start..end
    Interval,
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationKind::Point => write!(f, "point"),
            AnnotationKind::Interval => write!(f, "interval"),
        }
    }
}

/// Behaviour common to both annotation variants.
///
/// Generic code (tiers, validators, exporters) works through this trait.
/// The independent setters are fallible because a point cannot move its
/// start without its end; on a point they always return
/// [`ModelError::UnsupportedOperation`].
pub trait Annotation: Clone + PartialEq + std::fmt::Debug {
    /// Variant of this annotation type
    const KIND: AnnotationKind;

    /// Start time in seconds
    fn start(&self) -> f64;

    /// End time in seconds
    fn end(&self) -> f64;

    /// Label
    fn text(&self) -> &str;

    /// Replace the label
    fn set_text(&mut self, text: impl Into<String>);

    /// Move the start time independently of the end time.
    fn set_start(&mut self, start: f64) -> ModelResult<()>;

    /// Move the end time independently of the start time.
    fn set_end(&mut self, end: f64) -> ModelResult<()>;

    /// Variant of this annotation
    fn kind(&self) -> AnnotationKind {
        Self::KIND
    }

    /// Whether the annotation is active at `time`.
    ///
    /// Intervals are half-open; a point covers exactly its own time.
    fn covers(&self, time: f64) -> bool;
}

/// Zero-width annotation anchored at a single time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointAnnotation {
    /// Time in seconds
    time: f64,

    /// Label
    text: String,
}

impl PointAnnotation {
    /// Create a point annotation at `time`.
    pub fn new(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }

    /// Time of the point
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Move the point. Start and end move together.
    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }
}

impl Annotation for PointAnnotation {
    const KIND: AnnotationKind = AnnotationKind::Point;

    fn start(&self) -> f64 {
        self.time
    }

    fn end(&self) -> f64 {
        self.time
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn set_start(&mut self, _start: f64) -> ModelResult<()> {
        Err(ModelError::point_setter("set_start"))
    }

    fn set_end(&mut self, _end: f64) -> ModelResult<()> {
        Err(ModelError::point_setter("set_end"))
    }

    fn covers(&self, time: f64) -> bool {
        self.time == time
    }
}

/// Annotation spanning a start and an end time.
///
/// `start <= end` is expected but not enforced by the setters; editors
/// building on this type validate it (see [`crate::validation`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalAnnotation {
    /// Start time in seconds
    start: f64,

    /// End time in seconds
    end: f64,

    /// Label
    text: String,
}

impl IntervalAnnotation {
    /// Create an interval annotation.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Length of the interval in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether start <= end holds
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

impl Annotation for IntervalAnnotation {
    const KIND: AnnotationKind = AnnotationKind::Interval;

    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn set_start(&mut self, start: f64) -> ModelResult<()> {
        self.start = start;
        Ok(())
    }

    fn set_end(&mut self, end: f64) -> ModelResult<()> {
        self.end = end;
        Ok(())
    }

    fn covers(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }
}
