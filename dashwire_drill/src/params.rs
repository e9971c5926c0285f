// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter mapping: from the behavior's mapping table to concrete
//! values.
//!
//! ## Overview
//!
//! The same ordered [`ParameterMapping`] feeds two consumers with
//! different null policies:
//!
//! - [`id_value_pairs`] produces one `(id, value)` pair per entry for
//!   cross-filter application. Unresolved values are passed through as
//!   `None` — "no filter value for this parameter" is information the
//!   filter layer acts on.
//! - [`query_params`] produces the slug→value map for a URL query string.
//!   Unresolved values are dropped entirely; a drill-through URL must not
//!   carry empty query parameters.
//!
//! Both are single passes in mapping order, so output order is as
//! deterministic as the mapping itself.

use dashwire_click_behavior::{ParamValue, ParameterMapping};
use smallvec::SmallVec;

use crate::bridge::{MappingEnv, ValueFormatter};
use crate::query::QueryParams;

/// Ordered (id, value) pairs for cross-filter application. Inline capacity
/// covers typical mappings; larger ones spill to the heap.
pub type PairList = SmallVec<[(String, Option<ParamValue>); 4]>;

/// Resolve every mapping entry to an `(id, value)` pair, in mapping order.
/// Unresolved values are passed through as `None`.
pub fn id_value_pairs<F, Q>(
    mapping: &ParameterMapping,
    formatter: &F,
    env: &MappingEnv<'_, F::Data, Q>,
) -> PairList
where
    F: ValueFormatter,
{
    mapping
        .entries()
        .iter()
        .map(|entry| {
            (
                entry.id.clone(),
                formatter.format_source_for_target(&entry.source, &entry.target, env),
            )
        })
        .collect()
}

/// Resolve the mapping to query parameters: slug per entry target, value
/// per entry source. Entries whose value is unresolved are dropped; slug
/// collisions are last-write-wins in mapping order.
pub fn query_params<F, Q>(
    mapping: &ParameterMapping,
    formatter: &F,
    env: &MappingEnv<'_, F::Data, Q>,
) -> QueryParams
where
    F: ValueFormatter,
{
    let mut params = QueryParams::new();
    for entry in mapping.entries() {
        let Some(value) = formatter.format_source_for_target(&entry.source, &entry.target, env)
        else {
            continue;
        };
        params.insert(formatter.target_query_slug(&entry.target, env), value);
    }
    params
}
