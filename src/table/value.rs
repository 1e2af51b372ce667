//! Typed fitness components.
//!
//! CSV cells arrive as text. Each optimized column declares how its cells
//! are compared: as numbers ([`ValueKind::Numeric`], so `"9" < "10"`) or as
//! text ([`ValueKind::Text`], so `"10" < "9"`), and in which direction
//! ([`Sense`]).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A totally ordered, hashable `f64`.
///
/// NaN is rejected at construction and `-0.0` is stored as `0.0`, so
/// equality, ordering and hashing all agree.
///
/// ```
/// use u_pareto::table::Numeric;
///
/// assert!(Numeric::new(f64::NAN).is_none());
/// assert_eq!(Numeric::new(-0.0), Numeric::new(0.0));
/// assert!(Numeric::parse("9").unwrap() < Numeric::parse("10").unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Numeric(f64);

impl Numeric {
    /// Wraps `value`, or `None` if it is NaN.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        Some(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Parses a decimal or scientific literal, ignoring surrounding
    /// whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().and_then(Self::new)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Numeric {
    type Error = &'static str;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("NaN is not an ordered number")
    }
}

impl From<Numeric> for f64 {
    fn from(value: Numeric) -> Self {
        value.0
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Numeric {}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Numeric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How the cells of a column are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Parsed as `f64`; numeric order.
    #[default]
    Numeric,
    /// Kept verbatim; lexicographic (byte-wise) order.
    Text,
}

impl ValueKind {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            ValueKind::Numeric => "a number",
            ValueKind::Text => "text",
        }
    }
}

/// Optimization direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    /// Larger is better.
    #[default]
    Maximize,
    /// Smaller is better.
    Minimize,
}

/// A parsed cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Number(Numeric),
    Text(String),
}

impl Value {
    /// Parses `raw` as `kind`. Only numeric parsing can fail.
    pub fn parse(raw: &str, kind: ValueKind) -> Option<Self> {
        match kind {
            ValueKind::Numeric => Numeric::parse(raw).map(Value::Number),
            ValueKind::Text => Some(Value::Text(raw.to_string())),
        }
    }
}

/// A fitness component carrying its optimization direction.
///
/// Ordering is reversed for [`Sense::Minimize`], so the dominance relation
/// can stay maximization-only. Components at one vector position always
/// share a sense; the sense is compared first only to keep `Ord`
/// consistent with `Eq`.
///
/// ```
/// use u_pareto::table::{Score, Sense, Value, Numeric};
///
/// let cheap = Score::new(Value::Number(Numeric::new(1.0).unwrap()), Sense::Minimize);
/// let pricey = Score::new(Value::Number(Numeric::new(5.0).unwrap()), Sense::Minimize);
/// assert!(cheap > pricey);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    value: Value,
    sense: Sense,
}

impl Score {
    pub fn new(value: Value, sense: Sense) -> Self {
        Self { value, sense }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sense.cmp(&other.sense).then_with(|| {
            let ord = self.value.cmp(&other.value);
            match self.sense {
                Sense::Maximize => ord,
                Sense::Minimize => ord.reverse(),
            }
        })
    }
}
