// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated click-behavior configuration.
//!
//! Types in this module are only constructed by boundary validation
//! ([`crate::raw`]) or directly by code that already holds well-formed
//! values. Every invariant the resolution engine relies on (a link always
//! has its target id, a mapping entry always has both endpoints) is
//! guaranteed structurally.

/// Identifier of a destination entity: a dashboard, an app page, or a saved
/// question.
pub type EntityId = u64;

/// What should happen when a user clicks a data point.
///
/// One variant per valid `(type, linkType)` combination of the authored
/// form. The resolution engine matches exhaustively; there is no
/// catch-all "unsupported" state to fall through to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickBehavior {
    /// Update the current dashboard's filter parameters in place.
    Crossfilter {
        /// Parameter mapping applied as (id, value) filter pairs.
        parameter_mapping: ParameterMapping,
    },
    /// Navigate to an arbitrary URL built from a template.
    UrlLink {
        /// Template with embedded value placeholders, rendered against the
        /// clicked point's data. Empty when the author left it blank.
        template: String,
        /// Parameter mapping (unused by the URL renderer itself, but kept
        /// so editors can switch link kinds without losing work).
        parameter_mapping: ParameterMapping,
    },
    /// Navigate to another dashboard. A link to the dashboard the click
    /// originated on resets that dashboard's filters instead of navigating
    /// away.
    DashboardLink {
        /// Destination dashboard id.
        target: EntityId,
        /// Parameter mapping carried as query parameters.
        parameter_mapping: ParameterMapping,
    },
    /// Navigate to a page of the containing data app.
    PageLink {
        /// Destination page id.
        target: EntityId,
        /// Parameter mapping carried as query parameters.
        parameter_mapping: ParameterMapping,
    },
    /// Navigate to a saved question.
    QuestionLink {
        /// Destination question id.
        target: EntityId,
        /// Parameter mapping carried as question parameters and query
        /// parameters.
        parameter_mapping: ParameterMapping,
    },
}

impl ClickBehavior {
    /// The behavior's parameter mapping. Every variant carries one.
    pub fn parameter_mapping(&self) -> &ParameterMapping {
        match self {
            Self::Crossfilter { parameter_mapping }
            | Self::UrlLink {
                parameter_mapping, ..
            }
            | Self::DashboardLink {
                parameter_mapping, ..
            }
            | Self::PageLink {
                parameter_mapping, ..
            }
            | Self::QuestionLink {
                parameter_mapping, ..
            } => parameter_mapping,
        }
    }
}

/// The table linking source values to destination parameters.
///
/// Entries are held in a fixed order so that every derived sequence
/// (filter pairs, query parameters, question parameters) is deterministic.
/// The authored form is keyed by entry id with irrelevant insertion order;
/// boundary validation orders entries by that key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterMapping {
    entries: Vec<ParameterMappingEntry>,
}

impl ParameterMapping {
    /// An empty mapping.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a mapping from entries, preserving the given order.
    pub fn from_entries(entries: Vec<ParameterMappingEntry>) -> Self {
        Self { entries }
    }

    /// The entries, in mapping order.
    pub fn entries(&self) -> &[ParameterMappingEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ParameterMappingEntry> for ParameterMapping {
    fn from_iter<I: IntoIterator<Item = ParameterMappingEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterMapping {
    type Item = &'a ParameterMappingEntry;
    type IntoIter = core::slice::Iter<'a, ParameterMappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One row of the parameter-mapping table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterMappingEntry {
    /// Destination parameter/tag identifier. Doubles as the pair key for
    /// cross-filter application and as the query slug for question URLs.
    pub id: String,
    /// Where the value originates.
    pub source: MappingSource,
    /// Where and how the value is consumed at the destination.
    pub target: MappingTarget,
}

impl ParameterMappingEntry {
    /// Build an entry.
    pub fn new(id: impl Into<String>, source: MappingSource, target: MappingTarget) -> Self {
        Self {
            id: id.into(),
            source,
            target,
        }
    }
}

/// Origin of a mapped value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingSource {
    /// The kind of origin.
    pub kind: SourceKind,
    /// Column name, dashboard parameter id, or the literal text itself.
    pub id: String,
}

impl MappingSource {
    /// A value read from the clicked row's column.
    pub fn column(id: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::Column,
            id: id.into(),
        }
    }

    /// A value read from a dashboard parameter.
    pub fn parameter(id: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::Parameter,
            id: id.into(),
        }
    }

    /// A literal text value. Text sources always format as plain text,
    /// whatever the destination.
    pub fn text(id: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::Text,
            id: id.into(),
        }
    }
}

/// Kind of a [`MappingSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// A column of the clicked row.
    Column,
    /// A dashboard parameter.
    Parameter,
    /// A literal text tag.
    Text,
}

impl SourceKind {
    /// Parse the authored key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "column" => Some(Self::Column),
            "parameter" => Some(Self::Parameter),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// The authored key.
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Parameter => "parameter",
            Self::Text => "text",
        }
    }
}

/// Destination of a mapped value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingTarget {
    /// The kind of destination.
    pub kind: TargetKind,
    /// Destination parameter or template-tag id.
    pub id: String,
    /// Opaque serialized dimension reference, present when the destination
    /// binds a query dimension. Projected verbatim into question parameter
    /// lists; never interpreted here.
    pub dimension: Option<String>,
}

impl MappingTarget {
    /// A destination parameter.
    pub fn parameter(id: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Parameter,
            id: id.into(),
            dimension: None,
        }
    }

    /// A destination dimension binding.
    pub fn dimension(id: impl Into<String>, dimension: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Dimension,
            id: id.into(),
            dimension: Some(dimension.into()),
        }
    }

    /// A destination template variable.
    pub fn variable(id: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Variable,
            id: id.into(),
            dimension: None,
        }
    }
}

/// Kind of a [`MappingTarget`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A destination parameter.
    Parameter,
    /// A destination query dimension.
    Dimension,
    /// A destination template variable.
    Variable,
}

impl TargetKind {
    /// Parse the authored key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "parameter" => Some(Self::Parameter),
            "dimension" => Some(Self::Dimension),
            "variable" => Some(Self::Variable),
            _ => None,
        }
    }

    /// The authored key.
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Parameter => "parameter",
            Self::Dimension => "dimension",
            Self::Variable => "variable",
        }
    }
}
