//! Tagged material samples.

/// Missing-value code written to output volumes.
pub const MISSING_VALUE: f64 = -99999.0;

/// Missing-value code as stored in single precision variables.
pub const MISSING_VALUE_F32: f32 = -99999.0;

/// A material property sample that may be undefined.
///
/// Keeping the tag until the encoding step means no arithmetic is ever applied
/// to the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Sample {
    /// Physical value
    Valid(f64),
    /// No data at this lattice point
    #[default]
    Missing,
}

impl Sample {
    /// True for [`Sample::Valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Sample::Valid(_))
    }

    /// The physical value, if any.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match *self {
            Sample::Valid(v) => Some(v),
            Sample::Missing => None,
        }
    }

    /// Encode with [`MISSING_VALUE`] for missing samples.
    #[inline]
    pub fn encode(&self) -> f64 {
        self.value().unwrap_or(MISSING_VALUE)
    }

    /// Encode as `f32` with [`MISSING_VALUE_F32`] for missing samples.
    #[inline]
    pub fn encode_f32(&self) -> f32 {
        match *self {
            Sample::Valid(v) => v as f32,
            Sample::Missing => MISSING_VALUE_F32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(Sample::Valid(6.0).encode(), 6.0);
        assert_eq!(Sample::Missing.encode(), MISSING_VALUE);
        assert_eq!(Sample::Missing.encode_f32(), -99999.0f32);
    }

    #[test]
    fn test_value() {
        assert!(Sample::Valid(0.0).is_valid());
        assert_eq!(Sample::Valid(2.7).value(), Some(2.7));
        assert_eq!(Sample::default().value(), None);
    }
}
