//! Numeric feature attributes.

use crate::Real;

/// A numeric attribute as the source layer carried it.
///
/// GIS exports distinguish a key that is missing from a key written as
/// `null`. Both serialize as `null`, but they enter arithmetic differently:
/// see [`Measure::to_number`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<Real>", into = "Option<Real>")
)]
pub enum Measure {
    /// The key was not present on the feature.
    #[default]
    Absent,
    /// The key was present with a `null` value.
    Null,
    Value(Real),
}

impl Measure {
    /// The carried number, if there is one.
    pub fn value(self) -> Option<Real> {
        match self {
            Measure::Value(v) => Some(v),
            Measure::Absent | Measure::Null => None,
        }
    }

    /// Numeric value used in sums and threshold comparisons.
    ///
    /// Absent is NaN (poisons sums, fails every comparison); null is 0.
    pub fn to_number(self) -> Real {
        match self {
            Measure::Absent => Real::NAN,
            Measure::Null => 0.0,
            Measure::Value(v) => v,
        }
    }
}

impl From<Real> for Measure {
    fn from(v: Real) -> Self {
        Measure::Value(v)
    }
}

// A deserialized value was present in the input, so `None` means `null`.
impl From<Option<Real>> for Measure {
    fn from(v: Option<Real>) -> Self {
        v.map_or(Measure::Null, Measure::Value)
    }
}

impl From<Measure> for Option<Real> {
    fn from(m: Measure) -> Self {
        m.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_poisons_sum_null_does_not() {
        let with_null: Real = [Measure::Value(10.0), Measure::Null]
            .into_iter()
            .map(Measure::to_number)
            .sum();
        assert_eq!(with_null, 10.0);

        let with_absent: Real = [Measure::Value(10.0), Measure::Absent]
            .into_iter()
            .map(Measure::to_number)
            .sum();
        assert!(with_absent.is_nan());
    }

    #[test]
    fn comparisons_follow_numeric_value() {
        assert!(!(Measure::Absent.to_number() > 30.0));
        assert!(!(Measure::Null.to_number() > 30.0));
        assert!(Measure::Null.to_number() > -1.0);
        assert!(Measure::from(31.0).to_number() > 30.0);
    }

    #[test]
    fn only_value_carries_a_number() {
        assert_eq!(Measure::from(2.5).value(), Some(2.5));
        assert_eq!(Measure::Null.value(), None);
        assert_eq!(Measure::Absent.value(), None);
        assert_eq!(Measure::default(), Measure::Absent);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_null_and_emits_null() {
        let m: Measure = serde_json::from_str("null").unwrap();
        assert_eq!(m, Measure::Null);
        let m: Measure = serde_json::from_str("4.5").unwrap();
        assert_eq!(m, Measure::Value(4.5));
        assert_eq!(serde_json::to_string(&Measure::Absent).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Measure::Null).unwrap(), "null");
    }
}
