use thiserror::Error;

/// Why a set of weights cannot back a sampler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("weights slice is empty")]
    Empty,
    #[error("weights contain a negative value at index {index}: {value}")]
    Negative { index: usize, value: f64 },
    #[error("weights contain a non-finite value at index {index}: {value}")]
    NonFinite { index: usize, value: f64 },
    #[error("sum of weights overflows f64")]
    Overflow,
    /// Every weight is zero, so there is nothing to draw.
    #[error("sum of weights is zero")]
    ZeroTotal,
}

impl WeightError {
    /// `true` for an all-zero distribution, `false` for malformed input.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, WeightError::ZeroTotal)
    }

    /// Index of the offending weight, if the error points at one.
    pub fn index(&self) -> Option<usize> {
        match self {
            WeightError::Negative { index, .. } | WeightError::NonFinite { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_index() {
        let err = WeightError::Negative {
            index: 1,
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "weights contain a negative value at index 1: -2"
        );
        assert_eq!(err.index(), Some(1));
        assert!(!err.is_degenerate());
    }

    #[test]
    fn zero_total_is_degenerate() {
        assert!(WeightError::ZeroTotal.is_degenerate());
        assert_eq!(WeightError::ZeroTotal.index(), None);
        assert_eq!(WeightError::Empty.to_string(), "weights slice is empty");
    }
}
