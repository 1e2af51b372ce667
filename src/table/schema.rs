//! Column declarations and their resolution against a CSV header.

use std::collections::HashSet;
use std::str::FromStr;

use csv::StringRecord;

use super::value::{Score, Sense, Value, ValueKind};
use crate::error::{Error, Result};

/// One column to optimize over.
///
/// The shorthand form `NAME[:num|:text][:max|:min]` is accepted by
/// [`ColumnSpec::parse`]; the defaults are numeric and maximize. The name
/// must match exactly one header cell.
///
/// ```
/// use u_pareto::table::{ColumnSpec, Sense, ValueKind};
///
/// let spec = ColumnSpec::parse("cost:min").unwrap();
/// assert_eq!(spec.name, "cost");
/// assert_eq!(spec.kind, ValueKind::Numeric);
/// assert_eq!(spec.sense, Sense::Minimize);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSpec {
    /// Header name of the column.
    pub name: String,

    /// How cells are parsed and compared.
    pub kind: ValueKind,

    /// Whether larger or smaller cells are better.
    pub sense: Sense,
}

impl ColumnSpec {
    /// A numeric, maximized column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ValueKind::default(),
            sense: Sense::default(),
        }
    }

    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.sense = sense;
        self
    }

    /// Parses the `NAME[:qualifier]...` shorthand.
    ///
    /// Qualifiers: `num`/`numeric`, `text`/`str` for the kind and
    /// `max`/`min` for the sense, each at most once. Names containing `:`
    /// must be built with [`ColumnSpec::new`] instead.
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidColumnSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = spec.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(invalid("column name is empty"));
        }

        let mut kind = None;
        let mut sense = None;
        for qualifier in parts {
            let qualifier = qualifier.trim();
            let accepted = match qualifier.to_ascii_lowercase().as_str() {
                "num" | "numeric" => set_once(&mut kind, ValueKind::Numeric),
                "text" | "str" => set_once(&mut kind, ValueKind::Text),
                "max" => set_once(&mut sense, Sense::Maximize),
                "min" => set_once(&mut sense, Sense::Minimize),
                other => return Err(invalid(&format!("unknown qualifier '{other}'"))),
            };
            if !accepted {
                return Err(invalid(&format!(
                    "qualifier '{qualifier}' conflicts with an earlier one"
                )));
            }
        }

        Ok(Self {
            name: name.to_string(),
            kind: kind.unwrap_or_default(),
            sense: sense.unwrap_or_default(),
        })
    }
}

/// Fills an empty slot; `false` if it was already set.
fn set_once<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

impl FromStr for ColumnSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Declared columns bound to their header positions.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<(usize, ColumnSpec)>,
}

impl Schema {
    /// Binds `specs` to positions in `header`, keeping the order of
    /// `specs`. A declared name that occurs twice in `header` is rejected.
    pub fn resolve(header: &StringRecord, specs: &[ColumnSpec]) -> Result<Self> {
        if specs.is_empty() {
            return Err(Error::NoColumns);
        }

        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(specs.len());
        for spec in specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::DuplicateColumn(spec.name.clone()));
            }
            let position = header
                .iter()
                .position(|h| h == spec.name)
                .ok_or_else(|| Error::MissingColumn {
                    column: spec.name.clone(),
                    available: header.iter().map(str::to_string).collect(),
                })?;
            if header.iter().skip(position + 1).any(|h| h == spec.name) {
                return Err(Error::AmbiguousColumn(spec.name.clone()));
            }
            columns.push((position, spec.clone()));
        }

        Ok(Self { columns })
    }

    /// Header positions of the declared columns, in declaration order.
    pub fn positions(&self) -> Vec<usize> {
        self.columns.iter().map(|(p, _)| *p).collect()
    }

    /// Builds the fitness vector of one data row.
    ///
    /// `line` is only used in error messages.
    pub fn extract(&self, record: &StringRecord, line: u64) -> Result<Vec<Score>> {
        self.columns
            .iter()
            .map(|(position, spec)| {
                let raw = record.get(*position).unwrap_or_default();
                Value::parse(raw, spec.kind)
                    .map(|value| Score::new(value, spec.sense))
                    .ok_or_else(|| Error::InvalidValue {
                        line,
                        column: spec.name.clone(),
                        value: raw.to_string(),
                        expected: spec.kind.describe(),
                    })
            })
            .collect()
    }
}
