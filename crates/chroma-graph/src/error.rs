//! Error types for graph resolution.
//!
//! Only graph-level failures are errors. Malformed numeric input (NaN,
//! infinity) flows through converters per IEEE semantics and is never
//! reported here.

use chroma_spaces::SpaceId;
use thiserror::Error;

/// Conversion graph error.
///
/// Both variants are terminal for the call that produced them: no partial
/// or best-effort conversion is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Requested source or target was never registered as a node.
    ///
    /// Typically a misconfiguration: nodes are fixed once registration
    /// completes, so this is not worth retrying.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(SpaceId),

    /// Both endpoints are known, but no directed edge chain connects them.
    ///
    /// Resolvable only by registering an additional bridging converter.
    #[error("no conversion path: {from} -> {to}")]
    NoConversionPath {
        /// Source color space.
        from: SpaceId,
        /// Target color space.
        to: SpaceId,
    },
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_spaces() {
        let err = GraphError::UnknownColorSpace(SpaceId::Oklab);
        assert_eq!(err.to_string(), "unknown color space: Oklab");

        let err = GraphError::NoConversionPath {
            from: SpaceId::Srgb,
            to: SpaceId::CieLab,
        };
        assert_eq!(err.to_string(), "no conversion path: sRGB -> CIE Lab");
    }
}
