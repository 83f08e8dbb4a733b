use std::error::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failures a decode call can surface.
///
/// Two conditions are deliberately *not* represented here: a `-1` (or otherwise
/// unknown) file index, and a field that fails integer parsing. The former is
/// recorded as an unmapped entry, the latter falls back to field inheritance;
/// neither aborts decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("artifact syntax error: {0}")]
    Syntax(Box<dyn Error>),
    #[error("range {offset}:{length} in \"{file}\" exceeds the supplied source text")]
    RangeOutOfBounds {
        file: String,
        offset: i64,
        length: i64,
    },
}

impl From<simd_json::Error> for DecodeError {
    fn from(value: simd_json::Error) -> Self {
        Self::Syntax(Box::new(value))
    }
}
