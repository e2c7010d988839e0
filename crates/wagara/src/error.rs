//! Error types for tiling and rendering.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` impls from the `#[error(...)]`
//! attributes, so each variant reads like the message it prints.

use thiserror::Error;

/// Errors raised by the tiling core and the SVG writer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A caller passed a radius, region size or column count that cannot
    /// produce a tiling. Raised before anything is drawn.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// The motif renderer callback gave up partway through a tiling.
    #[error("motif renderer failed: {0}")]
    RendererFailure(String),

    /// No motif is registered under this name.
    #[error("unknown motif '{0}'")]
    UnknownMotif(String),

    /// A stroke/fill colour or width is not usable in an SVG document.
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fail with [`Error::PreconditionViolation`] unless `value` is finite and > 0.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::PreconditionViolation(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass() {
        assert!(require_positive("radius", 0.001).is_ok());
    }

    #[test]
    fn zero_negative_and_nan_are_rejected() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                require_positive("height", bad),
                Err(Error::PreconditionViolation(_))
            ));
        }
    }

    #[test]
    fn message_names_the_parameter() {
        let err = require_positive("width", 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "precondition violated: width must be a positive finite number, got 0"
        );
    }
}
