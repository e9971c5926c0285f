// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The authored, loosely-structured form of a click behavior, and the
//! validation that turns it into the typed form.
//!
//! ## Overview
//!
//! Click behaviors are persisted as free-form JSON in element settings.
//! Any field may be absent; the kind discriminators are plain strings. The
//! types here mirror that shape exactly so deserialization never fails on
//! shape alone, and `ClickBehavior::try_from` performs the single
//! validation pass:
//!
//! - unknown `type` or `linkType` strings are rejected;
//! - a `link` behavior must name its link type, and dashboard/page/question
//!   links must name their target;
//! - a `url` link may omit its template (authors save drafts with the
//!   template still blank; it renders as the empty string);
//! - a mapping entry missing either endpoint is a configuration-authoring
//!   bug and fails loudly, rather than silently producing a broken URL
//!   downstream.
//!
//! The authored `parameterMapping` is keyed by entry id. Validation orders
//! entries by that key, so every sequence derived later is deterministic
//! regardless of how the authoring tool happened to order the object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::behavior::{
    ClickBehavior, EntityId, MappingSource, MappingTarget, ParameterMapping,
    ParameterMappingEntry, SourceKind, TargetKind,
};

/// A click behavior as persisted: every cross-variant field optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClickBehavior {
    /// Behavior kind: `crossfilter` or `link`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Link kind: `url`, `dashboard`, `page`, or `question`. Only present
    /// when `kind` is `link`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Destination entity id. Absent for `url` links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<EntityId>,
    /// URL template. Only meaningful for `url` links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_template: Option<String>,
    /// Parameter mapping, keyed by entry id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameter_mapping: BTreeMap<String, RawMappingEntry>,
}

/// One authored parameter-mapping entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMappingEntry {
    /// Destination parameter/tag id. Falls back to the enclosing map key
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Value origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RawMappingEndpoint>,
    /// Value destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<RawMappingEndpoint>,
}

/// An authored mapping endpoint: `{ type, id, dimension? }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMappingEndpoint {
    /// Endpoint kind string.
    #[serde(rename = "type")]
    pub kind: String,
    /// Endpoint id.
    pub id: String,
    /// Opaque dimension reference, targets only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
}

/// Why an authored click behavior was rejected at the validation boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BehaviorError {
    /// The `type` discriminator names no known behavior kind.
    #[error("unknown click behavior type `{0}`")]
    UnknownType(String),
    /// A `link` behavior with no `linkType`.
    #[error("link behavior is missing its link type")]
    MissingLinkType,
    /// The `linkType` discriminator names no known link kind.
    #[error("unknown link type `{0}`")]
    UnknownLinkType(String),
    /// A dashboard/page/question link with no `targetId`.
    #[error("`{link_type}` link behavior is missing its target id")]
    MissingLinkTarget {
        /// The link kind that required a target.
        link_type: String,
    },
    /// A mapping entry with no `source`.
    #[error("parameter mapping entry `{0}` has no source")]
    MissingSource(String),
    /// A mapping entry with no `target`.
    #[error("parameter mapping entry `{0}` has no target")]
    MissingMappingTarget(String),
    /// A mapping source with an unrecognized kind string.
    #[error("parameter mapping entry `{entry}` has unknown source kind `{kind}`")]
    UnknownSourceKind {
        /// The offending entry id.
        entry: String,
        /// The unrecognized kind string.
        kind: String,
    },
    /// A mapping target with an unrecognized kind string.
    #[error("parameter mapping entry `{entry}` has unknown target kind `{kind}`")]
    UnknownTargetKind {
        /// The offending entry id.
        entry: String,
        /// The unrecognized kind string.
        kind: String,
    },
}

impl TryFrom<RawClickBehavior> for ClickBehavior {
    type Error = BehaviorError;

    fn try_from(raw: RawClickBehavior) -> Result<Self, Self::Error> {
        let parameter_mapping = validate_mapping(raw.parameter_mapping)?;

        match raw.kind.as_str() {
            "crossfilter" => Ok(Self::Crossfilter { parameter_mapping }),
            "link" => {
                let link_type = raw.link_type.ok_or(BehaviorError::MissingLinkType)?;
                match link_type.as_str() {
                    "url" => Ok(Self::UrlLink {
                        template: raw.link_template.unwrap_or_default(),
                        parameter_mapping,
                    }),
                    "dashboard" | "page" | "question" => {
                        let target =
                            raw.target_id
                                .ok_or_else(|| BehaviorError::MissingLinkTarget {
                                    link_type: link_type.clone(),
                                })?;
                        Ok(match link_type.as_str() {
                            "dashboard" => Self::DashboardLink {
                                target,
                                parameter_mapping,
                            },
                            "page" => Self::PageLink {
                                target,
                                parameter_mapping,
                            },
                            _ => Self::QuestionLink {
                                target,
                                parameter_mapping,
                            },
                        })
                    }
                    other => Err(BehaviorError::UnknownLinkType(other.to_owned())),
                }
            }
            other => Err(BehaviorError::UnknownType(other.to_owned())),
        }
    }
}

/// Validate the authored mapping table. Entries come out ordered by the
/// map key.
fn validate_mapping(
    raw: BTreeMap<String, RawMappingEntry>,
) -> Result<ParameterMapping, BehaviorError> {
    let mut entries = Vec::with_capacity(raw.len());
    for (key, entry) in raw {
        let id = entry.id.unwrap_or_else(|| key.clone());
        let source = entry
            .source
            .ok_or_else(|| BehaviorError::MissingSource(id.clone()))?;
        let target = entry
            .target
            .ok_or_else(|| BehaviorError::MissingMappingTarget(id.clone()))?;

        let source_kind =
            SourceKind::from_key(&source.kind).ok_or_else(|| BehaviorError::UnknownSourceKind {
                entry: id.clone(),
                kind: source.kind.clone(),
            })?;
        let target_kind =
            TargetKind::from_key(&target.kind).ok_or_else(|| BehaviorError::UnknownTargetKind {
                entry: id.clone(),
                kind: target.kind.clone(),
            })?;

        entries.push(ParameterMappingEntry {
            id,
            source: MappingSource {
                kind: source_kind,
                id: source.id,
            },
            target: MappingTarget {
                kind: target_kind,
                id: target.id,
                dimension: target.dimension,
            },
        });
    }
    Ok(ParameterMapping::from_entries(entries))
}
