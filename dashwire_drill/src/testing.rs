// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the crate's tests: a deterministic formatter, a
//! minimal path scheme, and a question type that records what was done to
//! it.

use std::collections::BTreeMap;

use dashwire_click_behavior::{
    ClickBehavior, EntityId, MappingSource, MappingTarget, ParamValue, ParameterMapping,
};

use crate::bridge::{
    MappingEnv, PathScheme, QuestionParameter, QuestionTarget, QuestionUrlForm, ValueFormatter,
};
use crate::context::Column;
use crate::query::QueryParams;

/// Raw clicked-point payload: (column name, raw value) pairs.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestOrigin {
    pub(crate) values: Vec<(String, String)>,
}

/// Extracted value bag.
pub(crate) type TestData = BTreeMap<String, String>;

/// Build the value bag the test formatter would extract.
pub(crate) fn data_of(values: &[(&str, &str)]) -> TestData {
    values
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

/// Formatter with fully predictable output: text sources format as their
/// literal text, column sources as the raw column value, parameter sources
/// are never available. Query slugs are the target ids.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TestFormatter;

impl ValueFormatter for TestFormatter {
    type Origin = TestOrigin;
    type Data = TestData;

    fn data_from_click(&self, origin: &Self::Origin, _column: Option<&Column>) -> Self::Data {
        origin.values.iter().cloned().collect()
    }

    fn format_source_for_target<Q>(
        &self,
        source: &MappingSource,
        _target: &MappingTarget,
        env: &MappingEnv<'_, Self::Data, Q>,
    ) -> Option<ParamValue> {
        use dashwire_click_behavior::SourceKind;
        match source.kind {
            SourceKind::Text => Some(ParamValue::single(source.id.clone())),
            SourceKind::Column => env
                .data
                .get(&source.id)
                .map(|value| ParamValue::single(value.as_str())),
            SourceKind::Parameter => None,
        }
    }

    fn target_query_slug<Q>(
        &self,
        target: &MappingTarget,
        _env: &MappingEnv<'_, Self::Data, Q>,
    ) -> String {
        target.id.clone()
    }

    fn render_link_template(&self, template: &str, data: &Self::Data) -> String {
        let mut out = template.to_owned();
        for (key, value) in data {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }
}

/// Path scheme: `/a/<slug>` is an app root, `/a/<slug>/page/<n>` an app
/// page, and slugs carry a leading numeric entity id (`9-ops`).
#[derive(Clone, Copy, Debug)]
pub(crate) struct AppPaths;

impl PathScheme for AppPaths {
    fn is_app_root(&self, pathname: &str) -> bool {
        pathname
            .strip_prefix("/a/")
            .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
    }

    fn is_app_page(&self, pathname: &str) -> bool {
        pathname
            .strip_prefix("/a/")
            .is_some_and(|rest| rest.contains("/page/"))
    }

    fn entity_id_from_slug(&self, slug: &str) -> Option<EntityId> {
        let digits: String = slug.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    fn dashboard_path(&self, dashboard: EntityId) -> String {
        format!("/dashboard/{dashboard}")
    }

    fn app_page_path(&self, app: EntityId, page: EntityId) -> String {
        format!("/a/{app}/page/{page}")
    }
}

/// A question that records the metadata it was bound to and whether its
/// display was locked, and surfaces both in its parameterized URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TestQuestion {
    pub(crate) id: EntityId,
    pub(crate) form: QuestionUrlForm,
    pub(crate) locked: bool,
    pub(crate) metadata: Option<u32>,
}

impl TestQuestion {
    pub(crate) fn structured(id: EntityId) -> Self {
        Self {
            id,
            form: QuestionUrlForm::Structured,
            locked: false,
            metadata: None,
        }
    }

    pub(crate) fn unstructured(id: EntityId) -> Self {
        Self {
            id,
            form: QuestionUrlForm::Unstructured,
            locked: false,
            metadata: None,
        }
    }
}

impl QuestionTarget for TestQuestion {
    type Metadata = u32;

    fn bound(&self, metadata: &Self::Metadata) -> Self {
        Self {
            metadata: Some(*metadata),
            ..self.clone()
        }
    }

    fn lock_display(mut self) -> Self {
        self.locked = true;
        self
    }

    fn url_form(&self) -> QuestionUrlForm {
        self.form
    }

    fn url(&self) -> String {
        format!("/question/{}", self.id)
    }

    fn url_with_parameters(
        &self,
        parameters: &[QuestionParameter],
        query: &QueryParams,
    ) -> String {
        let ids: Vec<&str> = parameters.iter().map(|p| p.id.as_str()).collect();
        let mut out = self.url();
        out.push('?');
        out.push_str(&query.to_query_string());
        if self.locked {
            out.push_str("&locked");
        }
        if let Some(metadata) = self.metadata {
            out.push_str(&format!("&meta={metadata}"));
        }
        out.push_str(&format!("&params={}", ids.join(",")));
        out
    }
}

/// Shorthand constructors for each behavior variant.
pub(crate) mod behaviors {
    use super::*;

    pub(crate) fn crossfilter() -> ClickBehavior {
        crossfilter_with(ParameterMapping::new())
    }

    pub(crate) fn crossfilter_with(parameter_mapping: ParameterMapping) -> ClickBehavior {
        ClickBehavior::Crossfilter { parameter_mapping }
    }

    pub(crate) fn url_link(template: &str) -> ClickBehavior {
        ClickBehavior::UrlLink {
            template: template.to_owned(),
            parameter_mapping: ParameterMapping::new(),
        }
    }

    pub(crate) fn dashboard_link(target: EntityId) -> ClickBehavior {
        dashboard_link_with(target, ParameterMapping::new())
    }

    pub(crate) fn dashboard_link_with(
        target: EntityId,
        parameter_mapping: ParameterMapping,
    ) -> ClickBehavior {
        ClickBehavior::DashboardLink {
            target,
            parameter_mapping,
        }
    }

    pub(crate) fn page_link(target: EntityId) -> ClickBehavior {
        page_link_with(target, ParameterMapping::new())
    }

    pub(crate) fn page_link_with(
        target: EntityId,
        parameter_mapping: ParameterMapping,
    ) -> ClickBehavior {
        ClickBehavior::PageLink {
            target,
            parameter_mapping,
        }
    }

    pub(crate) fn question_link(target: EntityId) -> ClickBehavior {
        question_link_with(target, ParameterMapping::new())
    }

    pub(crate) fn question_link_with(
        target: EntityId,
        parameter_mapping: ParameterMapping,
    ) -> ClickBehavior {
        ClickBehavior::QuestionLink {
            target,
            parameter_mapping,
        }
    }
}
