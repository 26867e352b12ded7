//!    Error handling
//!
//! This module provides error handling using anyhow.
//! The few failures callers need to tell apart (bad manual-entry text,
//! malformed pen sequences) are a small `ShapeError` enum that travels
//! inside `anyhow::Error` and can be recovered with `downcast_ref`.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::{Context, Result};

/// Result type alias for convenience throughout the application
pub type ShapeResult<T> = Result<T>;

/// Failures of the shape tool that callers match on
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A manual-entry field did not contain an integer
    #[error("A number is required for '{field}', got '{text}'")]
    NotANumber { field: &'static str, text: String },
    /// `add_point` or `end_path` without `begin_path`
    #[error("must call begin_path() before add_point() or end_path()")]
    PenPathNotStarted,
    /// `begin_path` while a path is still open
    #[error("unfinished drawing, end_path() must be called first")]
    UnfinishedDrawing,
    #[error("a move point can only start a contour")]
    UnexpectedMove,
    #[error("an off-curve point must be followed by a curve or qcurve")]
    UnexpectedPointAfterOffCurve,
    #[error("at most two off-curve points can precede a curve")]
    TooManyOffCurves,
    #[error("off-curve points cannot be smooth")]
    UnexpectedSmooth,
    #[error("open contours must not end with off-curve points")]
    TrailingOffCurves,
}

/// Helper functions for creating common error contexts
pub trait ShapeContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> ShapeResult<T>;

    /// Add glyph operation context to an error
    fn with_glyph_context(
        self,
        operation: &str,
        glyph_name: &str,
    ) -> ShapeResult<T>;
}

impl<T, E> ShapeContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> ShapeResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }

    fn with_glyph_context(
        self,
        operation: &str,
        glyph_name: &str,
    ) -> ShapeResult<T> {
        self.with_context(|| format!("Failed to {operation} glyph '{glyph_name}'"))
    }
}

/// Helper macros for common error patterns
#[macro_export]
macro_rules! glyph_not_found {
    ($name:expr, $available:expr) => {
        anyhow::anyhow!(
            "Glyph '{}' not found in font (available glyphs: {})",
            $name,
            $available
        )
    };
}

/// Validation helpers that return anyhow errors
pub fn validate_finite_coords(x: f64, y: f64) -> ShapeResult<()> {
    ensure!(x.is_finite(), "X coordinate must be finite, got: {}", x);
    ensure!(y.is_finite(), "Y coordinate must be finite, got: {}", y);
    Ok(())
}

pub fn validate_ufo_path<P: AsRef<std::path::Path>>(path: P) -> ShapeResult<()> {
    let path = path.as_ref();

    ensure!(path.exists(), "UFO path does not exist: {}", path.display());
    ensure!(
        path.is_dir(),
        "UFO path must be a directory: {}",
        path.display()
    );

    let metainfo = path.join("metainfo.plist");
    ensure!(
        metainfo.exists(),
        "Invalid UFO: missing metainfo.plist in {}",
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_error_survives_anyhow_wrapping() {
        let err: Error = ShapeError::NotANumber {
            field: "y",
            text: "twenty".to_string(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<ShapeError>(),
            Some(ShapeError::NotANumber { field: "y", .. })
        ));
        assert_eq!(err.to_string(), "A number is required for 'y', got 'twenty'");
        assert_eq!(
            ShapeError::UnexpectedSmooth.to_string(),
            "off-curve points cannot be smooth"
        );
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(validate_finite_coords(1.0, 2.0).is_ok());
        assert!(validate_finite_coords(f64::NAN, 2.0).is_err());
        assert!(validate_finite_coords(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn missing_ufo_path_is_reported() {
        let path = std::env::temp_dir().join("shape-tool-does-not-exist.ufo");
        let err = validate_ufo_path(&path).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
