/*!
 * # textgrid - Time-aligned annotation grids
 *
 * A Rust library modelling speech/linguistics annotation grids: a document
 * made of parallel, independently timed tiers, each holding an ordered
 * sequence of time-stamped annotations.
 *
 * ## Features
 *
 * - Point annotations (start == end, enforced by the type)
 * - Interval annotations with independent start/end
 * - Tiers homogeneous in their annotation variant
 * - Grids with document-level bounds, positional and by-name edits
 * - Structural, recursive equality
 * - Opt-in consistency validation (ordering, overlaps, bounds)
 * - Diagnostic pretty-printed dumps
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `annotation`: Point and interval annotations
 * - `tier`: Typed tiers and the `AnyTier` wrapper stored by grids
 * - `grid`: The top-level container
 * - `validation`: Checks for the obligations the model leaves to callers
 * - `render`: Diagnostic rendering
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the library
 *
 * File formats are not part of this crate: parsers and serializers build
 * and traverse grids through the public API.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod annotation;
pub mod tier;
pub mod grid;
pub mod validation;
pub mod render;
pub mod app_config;
pub mod errors;

// Re-export main types for easier usage
pub use annotation::{Annotation, AnnotationKind, IntervalAnnotation, PointAnnotation};
pub use tier::{AnyTier, IntervalTier, PointTier, Tier};
pub use grid::{Grid, UNSET_TIME};
pub use validation::{GridValidator, ValidationReport, ValidatorConfig};
pub use app_config::Config;
pub use errors::{ModelError, ModelResult};
