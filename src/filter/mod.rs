//! Cumulative, multi-dimensional record filtering.
//!
//! This module composes per-dimension predicates into one conjunctive
//! predicate and applies it to a [`RecordSet`], preserving record order.
//! Candidate-value domains for categorical dimensions support cascading:
//! each dimension's domain is computed from the set already narrowed by all
//! prior dimension choices (dialect options depend on the chosen language),
//! implemented as a fold over an ordered choice list rather than mutable
//! state.
//!
//! An empty result is an expected, display-worthy outcome, not a fault:
//! [`apply_filters`] returns [`FilterOutcome::Empty`] and callers branch on
//! it before attempting positional selection.

use std::collections::BTreeSet;

use crate::manifest::{ManifestRecord, RecordSet};

/// A named, filterable field on a manifest record.
///
/// `gender` is deliberately absent: it is informational only in the current
/// scope. Adding it later means adding a variant and a `value_of` arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// The `lang_code` field.
    Language,
    /// The `accents` field; domain cascades from the chosen language.
    Dialect,
    /// The `age` field; absent values never enter the domain.
    Age,
}

impl Dimension {
    /// Human-readable name for the dimension.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Language => "language",
            Dimension::Dialect => "dialect",
            Dimension::Age => "age",
        }
    }

    /// The value this dimension takes on a record, if present.
    fn value_of<'a>(&self, record: &'a ManifestRecord) -> Option<&'a str> {
        match self {
            Dimension::Language => Some(record.lang_code.as_str()),
            Dimension::Dialect => Some(record.accents.as_str()),
            Dimension::Age => record.age.as_deref(),
        }
    }
}

/// Distinct values of `dimension` present in `records`: sorted
/// lexicographically, deduplicated, with absent values dropped.
pub fn distinct_values(records: &RecordSet, dimension: Dimension) -> Vec<String> {
    cascaded_domain(records, &[], dimension)
}

/// Distinct values of `target` over the subset narrowed by the `prior`
/// equality choices, applied in order.
///
/// This is the dependent-filter contract: each dimension's candidate values
/// are computed from the record set already restricted by every earlier
/// choice in the list. An empty `prior` yields the plain distinct domain.
pub fn cascaded_domain(
    records: &RecordSet,
    prior: &[(Dimension, &str)],
    target: Dimension,
) -> Vec<String> {
    let narrowed: Vec<&ManifestRecord> =
        prior
            .iter()
            .fold(records.iter().collect(), |subset, (dimension, value)| {
                subset
                    .into_iter()
                    .filter(|record| dimension.value_of(record) == Some(*value))
                    .collect()
            });

    let domain: BTreeSet<String> = narrowed
        .iter()
        .filter_map(|record| target.value_of(record))
        .map(str::to_string)
        .collect();

    domain.into_iter().collect()
}

/// Dialect options for a chosen language: the standard cascade.
pub fn dialect_domain(records: &RecordSet, language: &str) -> Vec<String> {
    cascaded_domain(records, &[(Dimension::Language, language)], Dimension::Dialect)
}

/// Whole-second `(min, max)` duration bounds over the full record set,
/// truncating (not rounding) the millisecond values. `None` when empty.
pub fn duration_bounds(records: &RecordSet) -> Option<(u64, u64)> {
    let mut secs = records.iter().map(|record| record.duration_ms / 1000);
    let first = secs.next()?;
    Some(secs.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
}

/// Conjunctive filter criteria over the declared dimensions.
///
/// Language and dialect are mandatory equality constraints: there is no
/// "all languages" state. The age inclusion list and the duration range are
/// optional; leaving them unset means no restriction on that dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterCriteria {
    /// Required `lang_code` value.
    pub language: String,
    /// Required `accents` value, drawn from the cascaded dialect domain.
    pub dialect: String,
    /// Allowed age groups. When set, a record with an absent age never
    /// matches (only non-null ages ever appear in the selectable domain).
    pub ages: Option<Vec<String>>,
    /// Inclusive duration range in whole seconds, converted to milliseconds
    /// at the comparison boundary.
    pub duration_secs: Option<(u64, u64)>,
}

impl FilterCriteria {
    /// Creates criteria with the two mandatory dimensions and no optional
    /// restrictions.
    pub fn new(language: impl Into<String>, dialect: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            dialect: dialect.into(),
            ages: None,
            duration_secs: None,
        }
    }

    /// Restricts matches to records whose age is in the given list.
    pub fn with_ages<I, S>(mut self, ages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ages = Some(ages.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts matches to `min..=max` whole seconds of duration.
    pub fn with_duration_secs(mut self, min: u64, max: u64) -> Self {
        self.duration_secs = Some((min, max));
        self
    }

    /// True if the record satisfies every constraint.
    pub fn matches(&self, record: &ManifestRecord) -> bool {
        if record.lang_code != self.language || record.accents != self.dialect {
            return false;
        }

        if let Some(ages) = &self.ages {
            match record.age.as_deref() {
                Some(age) if ages.iter().any(|allowed| allowed == age) => {}
                _ => return false,
            }
        }

        if let Some((min, max)) = self.duration_secs {
            let lo = min.saturating_mul(1000);
            let hi = max.saturating_mul(1000);
            if record.duration_ms < lo || record.duration_ms > hi {
                return false;
            }
        }

        true
    }
}

/// The result of applying filter criteria to a record set.
///
/// `Empty` is an expected condition distinct from any error: callers render
/// a message and skip selection rather than treating it as a fault.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterOutcome {
    /// At least one record matched; order follows the source set.
    Matched(RecordSet),
    /// No record matched the criteria.
    Empty,
}

impl FilterOutcome {
    /// True when no record matched.
    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::Empty)
    }

    /// The matched records, if any.
    pub fn matched(self) -> Option<RecordSet> {
        match self {
            FilterOutcome::Matched(records) => Some(records),
            FilterOutcome::Empty => None,
        }
    }

    /// Borrowed view of the matched records, if any.
    pub fn as_records(&self) -> Option<&RecordSet> {
        match self {
            FilterOutcome::Matched(records) => Some(records),
            FilterOutcome::Empty => None,
        }
    }
}

/// Applies the conjunctive criteria to `records`.
///
/// Pure and stable: the source set is never mutated and matching records
/// keep their relative order.
pub fn apply_filters(records: &RecordSet, criteria: &FilterCriteria) -> FilterOutcome {
    let matched: RecordSet = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    if matched.is_empty() {
        FilterOutcome::Empty
    } else {
        FilterOutcome::Matched(matched)
    }
}
