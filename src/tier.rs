/*!
 * Tiers: named, ordered sequences of annotations of a single variant.
 *
 * A tier keeps annotations in the order the caller inserted them. It does
 * not sort them by time and does not reject overlaps; both are caller
 * obligations that [`crate::validation`] can check on demand.
 */

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::annotation::{Annotation, AnnotationKind, IntervalAnnotation, PointAnnotation};
use crate::errors::{ModelError, ModelResult};
use crate::render;

/// Named sequence of annotations sharing one variant.
///
/// Homogeneity is carried by the type parameter: an [`IntervalTier`] can only
/// hold [`IntervalAnnotation`]s and a [`PointTier`] only [`PointAnnotation`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>"))]
pub struct Tier<A> {
    /// Tier name (not required to be unique within a grid)
    name: String,

    /// Optional tier-level start bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<f64>,

    /// Optional tier-level end bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<f64>,

    /// Annotations in insertion order
    #[serde(default)]
    annotations: Vec<A>,
}

/// Tier of interval annotations
pub type IntervalTier = Tier<IntervalAnnotation>;

/// Tier of point annotations
pub type PointTier = Tier<PointAnnotation>;

impl<A: Annotation> Tier<A> {
    /// Create an empty tier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            annotations: Vec::new(),
        }
    }

    /// Create a tier holding `annotations` in the given order.
    pub fn with_annotations(name: impl Into<String>, annotations: Vec<A>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            annotations,
        }
    }

    /// Set explicit tier-level bounds.
    pub fn with_bounds(mut self, start: f64, end: f64) -> Self {
        self.set_bounds(start, end);
        self
    }

    /// Tier name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the tier
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Variant of the annotations held by this tier
    pub fn kind(&self) -> AnnotationKind {
        A::KIND
    }

    /// Explicit start bound, if any
    pub fn start(&self) -> Option<f64> {
        self.start
    }

    /// Explicit end bound, if any
    pub fn end(&self) -> Option<f64> {
        self.end
    }

    /// Set both tier-level bounds
    pub fn set_bounds(&mut self, start: f64, end: f64) {
        self.start = Some(start);
        self.end = Some(end);
    }

    /// Remove the tier-level bounds
    pub fn clear_bounds(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Annotations in insertion order.
    pub fn annotations(&self) -> &[A] {
        &self.annotations
    }

    /// Mutable view of the annotations.
    ///
    /// Elements can be edited or reordered in place; the number of
    /// annotations only changes through the tier's add/delete operations.
    pub fn annotations_mut(&mut self) -> &mut [A] {
        &mut self.annotations
    }

    /// Iterate over annotations in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.annotations.iter()
    }

    /// Annotation at `position`
    pub fn get(&self, position: usize) -> Option<&A> {
        self.annotations.get(position)
    }

    /// Number of annotations
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Whether the tier holds no annotation
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Append an annotation.
    pub fn add_annotation(&mut self, annotation: A) {
        debug!(
            "Tier '{}': appending {} annotation '{}' at {}",
            self.name,
            A::KIND,
            annotation.text(),
            self.annotations.len()
        );
        self.annotations.push(annotation);
    }

    /// Insert an annotation at `position`.
    ///
    /// A negative position appends. A position past the end is rejected and
    /// leaves the tier unchanged.
    pub fn add_annotation_at(&mut self, annotation: A, position: isize) -> ModelResult<()> {
        let Ok(index) = usize::try_from(position) else {
            self.add_annotation(annotation);
            return Ok(());
        };

        if index > self.annotations.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.annotations.len(),
            });
        }

        debug!(
            "Tier '{}': inserting {} annotation '{}' at {}",
            self.name,
            A::KIND,
            annotation.text(),
            index
        );
        self.annotations.insert(index, annotation);
        Ok(())
    }

    /// Append every annotation of `annotations`, preserving their order.
    pub fn add_annotations<I>(&mut self, annotations: I)
    where
        I: IntoIterator<Item = A>,
    {
        for annotation in annotations {
            self.add_annotation(annotation);
        }
    }

    /// Remove and return the annotation at `position`.
    pub fn delete_annotation(&mut self, position: usize) -> ModelResult<A> {
        if position >= self.annotations.len() {
            return Err(ModelError::IndexOutOfRange {
                index: position,
                len: self.annotations.len(),
            });
        }

        debug!("Tier '{}': deleting annotation at {}", self.name, position);
        Ok(self.annotations.remove(position))
    }

    /// Remove the first annotation whose text equals `text`.
    ///
    /// Returns the removed annotation, or `None` (leaving the tier
    /// untouched) when no annotation carries that text.
    pub fn delete_annotation_by_text(&mut self, text: &str) -> Option<A> {
        match self.annotations.iter().position(|a| a.text() == text) {
            Some(position) => {
                debug!(
                    "Tier '{}': deleting annotation '{}' at {}",
                    self.name, text, position
                );
                Some(self.annotations.remove(position))
            }
            None => {
                trace!("Tier '{}': no annotation labeled '{}'", self.name, text);
                None
            }
        }
    }

    /// Stable sort of the annotations by start time.
    ///
    /// Never called implicitly; insertion order is kept until the caller
    /// asks for this.
    pub fn sort_by_start(&mut self) {
        self.annotations
            .sort_by(|a, b| a.start().total_cmp(&b.start()));
    }

    /// Annotations active at `time`, in tier order
    pub fn annotations_at(&self, time: f64) -> Vec<&A> {
        self.annotations.iter().filter(|a| a.covers(time)).collect()
    }

    /// Time span of the tier.
    ///
    /// Explicit bounds win when both are set; otherwise the span is derived
    /// from the earliest start and latest end of the annotations. Empty
    /// tiers without bounds have no span.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            return Some((start, end));
        }

        let mut annotations = self.annotations.iter();
        let first = annotations.next()?;
        let span = annotations.fold((first.start(), first.end()), |(lo, hi), a| {
            (lo.min(a.start()), hi.max(a.end()))
        });
        Some(span)
    }
}

impl<'a, A> IntoIterator for &'a Tier<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

impl<A: Serialize> std::fmt::Display for Tier<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render::to_pretty_string(self, render::DEFAULT_INDENT))
    }
}

/// A tier of either variant, as stored by a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyTier {
    /// Tier of interval annotations
    Interval(IntervalTier),
    /// Tier of point annotations
    Point(PointTier),
}

impl AnyTier {
    /// Tier name
    pub fn name(&self) -> &str {
        match self {
            AnyTier::Interval(tier) => tier.name(),
            AnyTier::Point(tier) => tier.name(),
        }
    }

    /// Rename the tier
    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            AnyTier::Interval(tier) => tier.set_name(name),
            AnyTier::Point(tier) => tier.set_name(name),
        }
    }

    /// Variant of the annotations held by this tier
    pub fn kind(&self) -> AnnotationKind {
        match self {
            AnyTier::Interval(_) => AnnotationKind::Interval,
            AnyTier::Point(_) => AnnotationKind::Point,
        }
    }

    /// Number of annotations
    pub fn len(&self) -> usize {
        match self {
            AnyTier::Interval(tier) => tier.len(),
            AnyTier::Point(tier) => tier.len(),
        }
    }

    /// Whether the tier holds no annotation
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Explicit start bound, if any
    pub fn start(&self) -> Option<f64> {
        match self {
            AnyTier::Interval(tier) => tier.start(),
            AnyTier::Point(tier) => tier.start(),
        }
    }

    /// Explicit end bound, if any
    pub fn end(&self) -> Option<f64> {
        match self {
            AnyTier::Interval(tier) => tier.end(),
            AnyTier::Point(tier) => tier.end(),
        }
    }

    /// Time span, see [`Tier::time_span`]
    pub fn time_span(&self) -> Option<(f64, f64)> {
        match self {
            AnyTier::Interval(tier) => tier.time_span(),
            AnyTier::Point(tier) => tier.time_span(),
        }
    }

    /// Inner interval tier, if this is one
    pub fn as_interval(&self) -> Option<&IntervalTier> {
        match self {
            AnyTier::Interval(tier) => Some(tier),
            AnyTier::Point(_) => None,
        }
    }

    /// Inner interval tier, mutably, if this is one
    pub fn as_interval_mut(&mut self) -> Option<&mut IntervalTier> {
        match self {
            AnyTier::Interval(tier) => Some(tier),
            AnyTier::Point(_) => None,
        }
    }

    /// Inner point tier, if this is one
    pub fn as_point(&self) -> Option<&PointTier> {
        match self {
            AnyTier::Point(tier) => Some(tier),
            AnyTier::Interval(_) => None,
        }
    }

    /// Inner point tier, mutably, if this is one
    pub fn as_point_mut(&mut self) -> Option<&mut PointTier> {
        match self {
            AnyTier::Point(tier) => Some(tier),
            AnyTier::Interval(_) => None,
        }
    }
}

impl From<IntervalTier> for AnyTier {
    fn from(tier: IntervalTier) -> Self {
        AnyTier::Interval(tier)
    }
}

impl From<PointTier> for AnyTier {
    fn from(tier: PointTier) -> Self {
        AnyTier::Point(tier)
    }
}

impl std::fmt::Display for AnyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render::to_pretty_string(self, render::DEFAULT_INDENT))
    }
}
