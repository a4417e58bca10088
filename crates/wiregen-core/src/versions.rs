//! Version-range expressions.
//!
//! Schemas describe protocol version applicability with a compact grammar:
//!
//! | Expression | Meaning |
//! |------------|---------|
//! | `3` | exactly version 3 |
//! | `1-4` | versions 1 through 4 inclusive |
//! | `2+` | version 2 through the ceiling |
//! | `none` | no versions |
//!
//! The ceiling of an open-ended range comes from the caller. When a message's
//! own `validVersions` is resolved there is nothing to inherit, so the ceiling
//! is the largest version the expression itself mentions.

use crate::error::{GeneratorError, GeneratorResult};
use std::fmt;

/// Deduplicated, ascending list of protocol versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionSet {
    versions: Vec<u16>,
}

impl VersionSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All versions from `low` to `high` inclusive. Empty when `low > high`.
    pub fn range(low: u16, high: u16) -> Self {
        Self {
            versions: (low..=high).collect(),
        }
    }

    /// A set containing exactly one version.
    pub fn single(version: u16) -> Self {
        Self {
            versions: vec![version],
        }
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.versions
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.versions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn contains(&self, version: u16) -> bool {
        self.versions.binary_search(&version).is_ok()
    }

    pub fn min(&self) -> Option<u16> {
        self.versions.first().copied()
    }

    pub fn max(&self) -> Option<u16> {
        self.versions.last().copied()
    }

    /// Whether every version in `self` is also in `other`.
    pub fn is_subset_of(&self, other: &VersionSet) -> bool {
        self.iter().all(|v| other.contains(v))
    }

    /// Versions present in both sets.
    pub fn intersection(&self, other: &VersionSet) -> VersionSet {
        Self {
            versions: self.iter().filter(|v| other.contains(*v)).collect(),
        }
    }

    /// Render the set back into range syntax.
    ///
    /// A contiguous run that reaches `ceiling` is written open-ended (`2+`);
    /// anything non-contiguous falls back to a comma-separated list.
    pub fn describe(&self, ceiling: u16) -> String {
        let (Some(low), Some(high)) = (self.min(), self.max()) else {
            return "none".to_string();
        };

        if !self.is_contiguous() {
            self.versions
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        } else if low == high {
            low.to_string()
        } else if high == ceiling {
            format!("{low}+")
        } else {
            format!("{low}-{high}")
        }
    }

    fn is_contiguous(&self) -> bool {
        self.versions.windows(2).all(|w| w[1] == w[0] + 1)
    }
}

impl fmt::Display for VersionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Without a ceiling nothing is open-ended.
        f.write_str(&self.describe(u16::MAX))
    }
}

impl FromIterator<u16> for VersionSet {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        let mut versions: Vec<u16> = iter.into_iter().collect();
        versions.sort_unstable();
        versions.dedup();
        Self { versions }
    }
}

/// Parsed form of a version-range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeExpr {
    None,
    Exact(u16),
    Bounded(u16, u16),
    OpenEnded(u16),
}

impl RangeExpr {
    /// Parse an expression without resolving it.
    pub fn parse(expression: &str) -> GeneratorResult<Self> {
        let expr = expression.trim();

        if expr.is_empty() {
            return Err(GeneratorError::malformed_range(expression, "empty expression"));
        }
        if expr == "none" {
            return Ok(RangeExpr::None);
        }
        if let Some(start) = expr.strip_suffix('+') {
            return Ok(RangeExpr::OpenEnded(parse_version(expression, start)?));
        }
        if let Some((low, high)) = expr.split_once('-') {
            let low = parse_version(expression, low)?;
            let high = parse_version(expression, high)?;
            if low > high {
                return Err(GeneratorError::malformed_range(
                    expression,
                    "lower bound exceeds upper bound",
                ));
            }
            return Ok(RangeExpr::Bounded(low, high));
        }

        Ok(RangeExpr::Exact(parse_version(expression, expr)?))
    }

    /// Largest version literally written in the expression.
    pub fn largest_bound(&self) -> u16 {
        match *self {
            RangeExpr::None => 0,
            RangeExpr::Exact(v) | RangeExpr::OpenEnded(v) => v,
            RangeExpr::Bounded(_, high) => high,
        }
    }

    /// Expand into a concrete set, using `ceiling` for open-ended ranges.
    pub fn expand(&self, ceiling: u16) -> VersionSet {
        match *self {
            RangeExpr::None => VersionSet::empty(),
            RangeExpr::Exact(v) => VersionSet::single(v),
            RangeExpr::Bounded(low, high) => VersionSet::range(low, high),
            RangeExpr::OpenEnded(low) => VersionSet::range(low, ceiling),
        }
    }
}

fn parse_version(expression: &str, text: &str) -> GeneratorResult<u16> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GeneratorError::malformed_range(
            expression,
            format!("'{text}' is not a version number"),
        ));
    }
    text.parse::<u16>().map_err(|_| {
        GeneratorError::malformed_range(expression, format!("version {text} is out of range"))
    })
}

/// Resolve a version-range expression into a concrete set.
///
/// `upper_bound` is the ceiling substituted into open-ended ranges. Pass
/// `None` only when resolving a message's own `validVersions`; the ceiling is
/// then the largest version the expression mentions.
pub fn resolve(expression: &str, upper_bound: Option<u16>) -> GeneratorResult<VersionSet> {
    let expr = RangeExpr::parse(expression)?;
    let ceiling = upper_bound.unwrap_or_else(|| expr.largest_bound());
    Ok(expr.expand(ceiling))
}

/// Resolve a `flexibleVersions` expression against a message's valid versions.
///
/// Open-ended ranges stop at the highest valid version. A flexible version that
/// is not itself valid is rejected rather than clamped.
pub fn resolve_flexible(expression: &str, valid: &VersionSet) -> GeneratorResult<VersionSet> {
    let expr = RangeExpr::parse(expression)?;
    let ceiling = valid.max().unwrap_or(0);

    if let RangeExpr::OpenEnded(low) = expr
        && low > ceiling
    {
        return Err(GeneratorError::malformed_range(
            expression,
            format!("starts after the highest valid version {ceiling}"),
        ));
    }

    let flexible = expr.expand(ceiling);
    if let Some(stray) = flexible.iter().find(|v| !valid.contains(*v)) {
        return Err(GeneratorError::malformed_range(
            expression,
            format!("version {stray} is not a valid version ({valid})"),
        ));
    }

    Ok(flexible)
}
