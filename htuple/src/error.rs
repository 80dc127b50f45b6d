use std::error::Error as StdError;
use thiserror::Error;

/// The error returned by [`Tuple::try_convert`](crate::Tuple::try_convert) when some value could
/// not be converted into the type declared at its position.
///
/// Conversion proceeds in position order, so this always names the lowest failing position; the
/// underlying conversion error is available as its [`source`](StdError::source).
#[derive(Debug, Error)]
#[error("cannot convert element at position {position}")]
pub struct ConversionError {
    position: usize,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl ConversionError {
    /// Wrap the error from converting the element at `position`.
    pub fn new<E>(position: usize, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ConversionError {
            position,
            source: Box::new(source),
        }
    }

    /// The position of the element which failed to convert.
    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn display_and_source() {
        let cause = u8::try_from(-1_i64).unwrap_err();
        let error = ConversionError::new(3, cause);
        assert_eq!(error.to_string(), "cannot convert element at position 3");
        assert_eq!(error.source().map(|e| e.to_string()), Some(cause.to_string()));
    }
}
