// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability seams to the host application.
//!
//! ## Overview
//!
//! The engine decides *what* happens on a click; the host owns how values
//! are formatted, how paths are recognized and built, and what a question
//! object can do. Those capabilities are consumed through the traits here:
//!
//! - [`ValueFormatter`] — extraction of the clicked point's value bag,
//!   per-entry value formatting, query-slug derivation, and link-template
//!   rendering. One bridge, because all four consume the same extracted
//!   data.
//! - [`PathScheme`] — path-shape predicates and canonical path
//!   construction.
//! - [`QuestionTarget`] — the capability set of a saved-question object.
//!
//! Implementations must be pure with respect to their inputs: resolution
//! is re-run on every render and identical inputs must produce identical
//! output.

use dashwire_click_behavior::{
    ClickBehavior, EntityId, MappingSource, MappingTarget, ParamValue,
};

use crate::context::{Column, ExtraData};
use crate::query::QueryParams;

/// Shared input to per-entry formatter calls: the extracted click data,
/// the loaded entities, and the behavior being resolved.
#[derive(Debug)]
pub struct MappingEnv<'a, D, Q> {
    /// The clicked point's extracted value bag.
    pub data: &'a D,
    /// Currently-loaded entities.
    pub extra: &'a ExtraData<Q>,
    /// The behavior being resolved.
    pub behavior: &'a ClickBehavior,
}

impl<D, Q> Clone for MappingEnv<'_, D, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, Q> Copy for MappingEnv<'_, D, Q> {}

/// Formats mapped values for their destinations.
///
/// `Origin` is the host's raw clicked-point payload; `Data` is the value
/// bag its extraction rule produces, keyed by column/dimension identity.
/// The engine moves both around without looking inside.
pub trait ValueFormatter {
    /// Raw clicked-point payload.
    type Origin;
    /// Extracted value bag.
    type Data;

    /// Extract the clicked point's column/dimension values.
    fn data_from_click(&self, origin: &Self::Origin, column: Option<&Column>) -> Self::Data;

    /// Format one mapped value for its destination. `None` means the
    /// source value is unavailable; text sources must format as plain text
    /// regardless of the destination.
    fn format_source_for_target<Q>(
        &self,
        source: &MappingSource,
        target: &MappingTarget,
        env: &MappingEnv<'_, Self::Data, Q>,
    ) -> Option<ParamValue>;

    /// The query-string key for a destination.
    fn target_query_slug<Q>(
        &self,
        target: &MappingTarget,
        env: &MappingEnv<'_, Self::Data, Q>,
    ) -> String;

    /// Render a URL-link template against the extracted click data.
    fn render_link_template(&self, template: &str, data: &Self::Data) -> String;
}

/// Recognizes and builds the host's canonical paths.
pub trait PathScheme {
    /// Whether `pathname` is the root of a data app.
    fn is_app_root(&self, pathname: &str) -> bool;

    /// Whether `pathname` is a specific data-app page.
    fn is_app_page(&self, pathname: &str) -> bool;

    /// Extract an entity id from a route slug, if the slug names one.
    fn entity_id_from_slug(&self, slug: &str) -> Option<EntityId>;

    /// Canonical relative path of a dashboard.
    fn dashboard_path(&self, dashboard: EntityId) -> String;

    /// Canonical relative path of a data-app page.
    fn app_page_path(&self, app: EntityId, page: EntityId) -> String;
}

/// How a question builds its URL.
///
/// Selected once per resolution from the question's own form; the two
/// strategies never mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionUrlForm {
    /// Built from a composable query representation; takes a parameter
    /// list and binds values through it.
    Structured,
    /// An opaque native query; takes its plain URL with the query string
    /// appended.
    Unstructured,
}

/// One entry of the parameter list handed to a structured question's URL
/// builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionParameter {
    /// Destination parameter id.
    pub id: String,
    /// Query slug; always equal to the id for mapped parameters.
    pub slug: String,
    /// The destination's dimension reference, when it binds one.
    pub target: Option<String>,
    /// Resolved parameter type: a parameter source's declared type on the
    /// current dashboard, `text` otherwise.
    pub kind: String,
}

/// Capability set of a saved-question object.
pub trait QuestionTarget: Sized {
    /// The host's metadata context, carried from the invoking element.
    type Metadata;

    /// This question bound to a metadata context.
    fn bound(&self, metadata: &Self::Metadata) -> Self;

    /// This question with its display mode forced to non-editable.
    fn lock_display(self) -> Self;

    /// Which URL-construction strategy this question uses.
    fn url_form(&self) -> QuestionUrlForm;

    /// The question's plain URL, without parameters.
    fn url(&self) -> String;

    /// The question's URL with the given parameters bound and the query
    /// params applied. Only called on [`QuestionUrlForm::Structured`]
    /// questions.
    fn url_with_parameters(&self, parameters: &[QuestionParameter], query: &QueryParams)
        -> String;
}
