// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashwire Drill: deterministic click-to-drill resolution for dashboards.
//!
//! ## Overview
//!
//! Given a typed click-behavior configuration (from
//! `dashwire_click_behavior`) and the runtime context of one interaction,
//! this crate decides *what should happen* (update the dashboard's
//! filters in place, or navigate) and computes the concrete target: the
//! ordered filter pairs, or a fully resolved relative URL with query
//! parameters. It never executes the action; the host's filter layer and
//! router consume what it produces.
//!
//! The pass runs in four steps, each its own module:
//!
//! 1. [`context`] — resolve the *effective* behavior for the clicked
//!    point (column-level override before element-level default) from a
//!    fresh [`ClickContext`](context::ClickContext).
//! 2. [`classify`] — a pure decision procedure producing a
//!    [`DrillTag`] or `None`; `None` uniformly means "do nothing".
//! 3. [`params`] — resolve the behavior's parameter mapping into filter
//!    pairs (nulls passed through) or query params (nulls dropped).
//! 4. [`resolver`] — build the destination for navigable tags and hand
//!    back a [`Drill`].
//!
//! Value formatting, path construction, and question capabilities belong
//! to the host and are consumed through the [`bridge`] traits.
//!
//! Everything is synchronous and side-effect-free: resolution is re-run
//! on every render and interaction, so identical inputs must produce
//! identical output, with no caching and no shared state.
//!
//! ## Example
//!
//! ```
//! use dashwire_click_behavior::{
//!     ClickBehavior, MappingSource, MappingTarget, ParamValue, ParameterMapping,
//!     ParameterMappingEntry,
//! };
//! use dashwire_drill::bridge::{
//!     MappingEnv, PathScheme, QuestionParameter, QuestionTarget, QuestionUrlForm,
//!     ValueFormatter,
//! };
//! use dashwire_drill::context::{ClickContext, Column, Dashboard, ElementSettings, ExtraData};
//! use dashwire_drill::query::QueryParams;
//! use dashwire_drill::{ClickResolver, Drill, DrillTag};
//!
//! # struct Formatter;
//! # impl ValueFormatter for Formatter {
//! #     type Origin = Vec<(String, String)>;
//! #     type Data = std::collections::BTreeMap<String, String>;
//! #     fn data_from_click(&self, origin: &Self::Origin, _column: Option<&Column>) -> Self::Data {
//! #         origin.iter().cloned().collect()
//! #     }
//! #     fn format_source_for_target<Q>(
//! #         &self,
//! #         source: &MappingSource,
//! #         _target: &MappingTarget,
//! #         env: &MappingEnv<'_, Self::Data, Q>,
//! #     ) -> Option<ParamValue> {
//! #         use dashwire_click_behavior::SourceKind;
//! #         match source.kind {
//! #             SourceKind::Text => Some(ParamValue::single(source.id.clone())),
//! #             SourceKind::Column => {
//! #                 env.data.get(&source.id).map(|v| ParamValue::single(v.as_str()))
//! #             }
//! #             SourceKind::Parameter => None,
//! #         }
//! #     }
//! #     fn target_query_slug<Q>(
//! #         &self,
//! #         target: &MappingTarget,
//! #         _env: &MappingEnv<'_, Self::Data, Q>,
//! #     ) -> String {
//! #         target.id.clone()
//! #     }
//! #     fn render_link_template(&self, template: &str, _data: &Self::Data) -> String {
//! #         template.to_owned()
//! #     }
//! # }
//! # struct Paths;
//! # impl PathScheme for Paths {
//! #     fn is_app_root(&self, _pathname: &str) -> bool { false }
//! #     fn is_app_page(&self, _pathname: &str) -> bool { false }
//! #     fn entity_id_from_slug(&self, _slug: &str) -> Option<u64> { None }
//! #     fn dashboard_path(&self, dashboard: u64) -> String { format!("/dashboard/{dashboard}") }
//! #     fn app_page_path(&self, app: u64, page: u64) -> String { format!("/a/{app}/page/{page}") }
//! # }
//! # #[derive(Clone)] struct Question;
//! # impl QuestionTarget for Question {
//! #     type Metadata = ();
//! #     fn bound(&self, _metadata: &()) -> Self { self.clone() }
//! #     fn lock_display(self) -> Self { self }
//! #     fn url_form(&self) -> QuestionUrlForm { QuestionUrlForm::Unstructured }
//! #     fn url(&self) -> String { String::new() }
//! #     fn url_with_parameters(
//! #         &self,
//! #         _parameters: &[QuestionParameter],
//! #         _query: &QueryParams,
//! #     ) -> String {
//! #         String::new()
//! #     }
//! # }
//! // A dashboard link from dashboard 1 to dashboard 7, carrying one
//! // mapped parameter fed by the clicked row's `total` column.
//! let behavior = ClickBehavior::DashboardLink {
//!     target: 7,
//!     parameter_mapping: ParameterMapping::from_entries(vec![ParameterMappingEntry::new(
//!         "a",
//!         MappingSource::column("total"),
//!         MappingTarget::parameter("p1"),
//!     )]),
//! };
//! let settings = ElementSettings::with_click_behavior(behavior);
//!
//! let mut extra = ExtraData::<Question>::new();
//! extra.dashboard = Some(Dashboard::new(1));
//! extra.dashboards.insert(7, Dashboard::new(7));
//!
//! let origin = vec![("total".to_owned(), "42".to_owned())];
//! let ctx = ClickContext::new(&origin, &extra).with_settings(&settings);
//!
//! let resolver = ClickResolver::new(Formatter, Paths);
//! assert_eq!(resolver.classify(&ctx), Some(DrillTag::DashboardUrl));
//! assert_eq!(
//!     resolver.resolve(&ctx, &()).unwrap(),
//!     Some(Drill::Navigate {
//!         tag: DrillTag::DashboardUrl,
//!         url: "/dashboard/7?p1=42".to_owned(),
//!     })
//! );
//! ```

pub mod bridge;
pub mod classify;
pub mod context;
pub mod params;
pub mod query;
pub mod resolver;
pub mod url;

#[cfg(test)]
pub(crate) mod testing;

pub use classify::{classify, DrillTag};
pub use params::{id_value_pairs, query_params, PairList};
pub use query::QueryParams;
pub use resolver::{ClickResolver, Drill};
pub use url::ResolveError;
