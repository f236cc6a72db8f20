//! # Extents
//!
//! Per-axis cylinder sizes as supplied by the caller.
//!
//! An extent is either a fixed value or the marker `"auto"`, meaning the
//! length of an inner cylinder reaches up to the far end of the outer
//! cylinder. Markers are resolved by [`crate::validate::resolve_dimensions`].
//!
//! ## Example
//!
//! ```rust
//! use cylinder_geometry::{Extent, ExtentArray};
//!
//! let table: ExtentArray = toml::from_str::<toml::Table>(
//!     r#"scales = [[1.1, "auto", 1.1], [5, 9, 5]]"#,
//! )
//! .unwrap()["scales"]
//! .clone()
//! .try_into()
//! .unwrap();
//!
//! let ExtentArray::Table(rows) = table else { panic!("expected 2D array") };
//! assert_eq!(rows[0][1], Extent::DeriveFromOuter);
//! assert_eq!(rows[1][1], Extent::Fixed(9.0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword spelling [`Extent::DeriveFromOuter`] in configuration files.
pub const DERIVE_KEYWORD: &str = "auto";

/// Size of a cylinder along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExtent", into = "RawExtent")]
pub enum Extent {
    /// Explicit value.
    Fixed(f64),
    /// Up to the far end of the outer cylinder (length axis only).
    DeriveFromOuter,
}

impl Extent {
    /// Returns the fixed value, if any.
    #[inline]
    pub fn fixed(self) -> Option<f64> {
        match self {
            Extent::Fixed(value) => Some(value),
            Extent::DeriveFromOuter => None,
        }
    }

    /// Multiplies a fixed extent; derived extents stay derived.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            Extent::Fixed(value) => Extent::Fixed(value * factor),
            Extent::DeriveFromOuter => Extent::DeriveFromOuter,
        }
    }
}

impl From<f64> for Extent {
    fn from(value: f64) -> Self {
        Extent::Fixed(value)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Fixed(value) => write!(f, "{value}"),
            Extent::DeriveFromOuter => f.write_str(DERIVE_KEYWORD),
        }
    }
}

/// Wire form of an extent: a number or a keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawExtent {
    Number(f64),
    Keyword(String),
}

impl TryFrom<RawExtent> for Extent {
    type Error = String;

    fn try_from(raw: RawExtent) -> Result<Self, Self::Error> {
        match raw {
            RawExtent::Number(value) => Ok(Extent::Fixed(value)),
            RawExtent::Keyword(word) if word == DERIVE_KEYWORD => Ok(Extent::DeriveFromOuter),
            RawExtent::Keyword(word) => Err(format!(
                "unknown extent keyword '{word}', expected a number or '{DERIVE_KEYWORD}'"
            )),
        }
    }
}

impl From<Extent> for RawExtent {
    fn from(extent: Extent) -> Self {
        match extent {
            Extent::Fixed(value) => RawExtent::Number(value),
            Extent::DeriveFromOuter => RawExtent::Keyword(DERIVE_KEYWORD.to_string()),
        }
    }
}

/// Extents of one cylinder along x, y and z.
pub type CylinderExtents = [Extent; 3];

/// A caller-supplied array of extents or scale factors.
///
/// The rank is kept so that a flat array can be rejected with a precise
/// message instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtentArray {
    /// A 1D array, always rejected by the deriver.
    Flat(Vec<Extent>),
    /// One row per cylinder.
    Table(Vec<Vec<Extent>>),
}

impl ExtentArray {
    /// Builds a table of fixed rows.
    pub fn fixed(rows: &[[f64; 3]]) -> Self {
        ExtentArray::Table(
            rows.iter()
                .map(|row| row.iter().copied().map(Extent::Fixed).collect())
                .collect(),
        )
    }

    /// Number of dimensions of the array (1 or 2).
    pub fn rank(&self) -> usize {
        match self {
            ExtentArray::Flat(_) => 1,
            ExtentArray::Table(_) => 2,
        }
    }

    /// Number of entries along the first axis.
    pub fn len(&self) -> usize {
        match self {
            ExtentArray::Flat(values) => values.len(),
            ExtentArray::Table(rows) => rows.len(),
        }
    }

    /// True when the first axis is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<CylinderExtents>> for ExtentArray {
    fn from(rows: Vec<CylinderExtents>) -> Self {
        ExtentArray::Table(rows.into_iter().map(Vec::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        values: ExtentArray,
    }

    #[test]
    fn test_parse_table_with_keyword() {
        let holder: Holder = toml::from_str(r#"values = [[1, "auto", 1], [2.5, 3, 2.5]]"#).unwrap();
        assert_eq!(
            holder.values,
            ExtentArray::Table(vec![
                vec![Extent::Fixed(1.0), Extent::DeriveFromOuter, Extent::Fixed(1.0)],
                vec![Extent::Fixed(2.5), Extent::Fixed(3.0), Extent::Fixed(2.5)],
            ])
        );
    }

    #[test]
    fn test_parse_flat_array_keeps_rank() {
        let holder: Holder = toml::from_str("values = [1, 2, 1]").unwrap();
        assert_eq!(holder.values.rank(), 1);
        assert_eq!(holder.values.len(), 3);
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        let result: Result<Holder, _> = toml::from_str(r#"values = [[1, "nan", 1]]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_scaled_keeps_marker() {
        assert_eq!(Extent::Fixed(2.0).scaled(0.5), Extent::Fixed(1.0));
        assert_eq!(Extent::DeriveFromOuter.scaled(0.5), Extent::DeriveFromOuter);
        assert_eq!(Extent::DeriveFromOuter.to_string(), "auto");
    }
}
