/*!
 * Common test utilities for the textgrid test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;
use textgrid::{Grid, IntervalAnnotation, IntervalTier, PointAnnotation, PointTier};

/// Routes library logs to the test output; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Interval tier "words" holding a (0-1) and b (1-2)
pub fn words_tier() -> IntervalTier {
    IntervalTier::with_annotations(
        "words",
        vec![
            IntervalAnnotation::new(0.0, 1.0, "a"),
            IntervalAnnotation::new(1.0, 2.0, "b"),
        ],
    )
}

/// Point tier "marks" holding x at 0.5
pub fn marks_tier() -> PointTier {
    PointTier::with_annotations("marks", vec![PointAnnotation::new(0.5, "x")])
}

/// Grid spanning 0-2 with the "words" and "marks" tiers
pub fn sample_grid() -> Grid {
    Grid::with_tiers(0.0, 2.0, vec![words_tier().into(), marks_tier().into()])
}
