// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL-building pieces shared by the navigable drill variants.
//!
//! Builders run only after classification has validated their
//! preconditions. When a precondition no longer holds at build time — the
//! caller mutated [`ExtraData`](crate::context::ExtraData) between the two
//! steps instead of passing an atomic snapshot — the result is a
//! [`ResolveError`], never a malformed URL. That failure is deliberately
//! distinct from the `None` of classification: it is a caller contract
//! violation, not a legitimate absence of interactivity.

use dashwire_click_behavior::{
    EntityId, MappingSource, ParameterMapping, SourceKind,
};
use smallvec::SmallVec;

use crate::bridge::QuestionParameter;
use crate::context::ExtraData;
use crate::query::QueryParams;

/// Parameter type used when a mapping source resolves to no declared
/// dashboard parameter.
const DEFAULT_PARAMETER_KIND: &str = "text";

/// A precondition validated during classification no longer held at build
/// time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No click behavior is configured for the clicked element.
    #[error("no click behavior is configured for the clicked element")]
    BehaviorMissing,
    /// A builder was invoked for a behavior of a different kind.
    #[error("click behavior is not a {expected} behavior")]
    UnexpectedBehavior {
        /// The behavior kind the builder expected.
        expected: &'static str,
    },
    /// The target dashboard vanished from the loaded set.
    #[error("dashboard {0} is no longer loaded")]
    DashboardNotLoaded(EntityId),
    /// The target question vanished from the loaded set.
    #[error("question {0} is no longer loaded")]
    QuestionNotLoaded(EntityId),
    /// The navigation context required by a page link is gone.
    #[error("navigation context is missing for a page link")]
    RouteContextMissing,
    /// The route slug no longer names an entity.
    #[error("route slug `{0}` does not name an entity")]
    SlugNotRecognized(String),
}

/// Append a query string to a path. An empty map leaves the path as is.
pub(crate) fn append_query(path: String, query: &QueryParams) -> String {
    if query.is_empty() {
        path
    } else {
        let mut out = path;
        out.push('?');
        out.push_str(&query.to_query_string());
        out
    }
}

/// Project the mapping into the parameter list a structured question's URL
/// builder takes: the entry id doubles as the slug, the target's dimension
/// reference is carried through, and the type comes from the current
/// dashboard's declaration for parameter sources.
pub(crate) fn question_parameters<Q>(
    mapping: &ParameterMapping,
    extra: &ExtraData<Q>,
) -> SmallVec<[QuestionParameter; 4]> {
    mapping
        .entries()
        .iter()
        .map(|entry| QuestionParameter {
            id: entry.id.clone(),
            slug: entry.id.clone(),
            target: entry.target.dimension.clone(),
            kind: resolved_parameter_kind(&entry.source, extra),
        })
        .collect()
}

/// The resolved type for a mapped source: a parameter source's declared
/// type on the current dashboard, `text` when undeclared or for any other
/// source kind.
fn resolved_parameter_kind<Q>(source: &MappingSource, extra: &ExtraData<Q>) -> String {
    if source.kind == SourceKind::Parameter {
        if let Some(parameter) = extra
            .dashboard
            .as_ref()
            .and_then(|dashboard| dashboard.parameter(&source.id))
        {
            return parameter.kind.clone();
        }
    }
    DEFAULT_PARAMETER_KIND.to_owned()
}
