// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drill classification.
//!
//! ## Overview
//!
//! [`classify`] decides which action, if any, a click behavior produces in
//! the current context. It is a pure decision procedure: an exhaustive
//! match over the behavior, guarded by what [`ExtraData`] actually has
//! loaded. `None` uniformly means "do nothing" — an absent link target, an
//! unrecognized navigation path, a slug that names no entity.
//!
//! ## Rules
//!
//! 1. A dashboard or question link whose target entity is not loaded
//!    classifies as `None`, before anything else is considered.
//! 2. Crossfilter → [`DrillTag::DashboardFilter`].
//! 3. URL link → [`DrillTag::LinkUrl`].
//! 4. Dashboard link → [`DrillTag::DashboardReset`] when the target is the
//!    dashboard the click originated on (a self-reference resets filters
//!    in place), [`DrillTag::DashboardUrl`] otherwise.
//! 5. Page link → [`DrillTag::PageUrl`] only when the current location is
//!    recognized as inside a data app by either path predicate *and* the
//!    route slug yields an entity id. The drill is dropped when the
//!    predicates fail, even if a valid app id could otherwise be derived —
//!    stale routing context must not produce a navigation.
//! 6. Question link → [`DrillTag::QuestionUrl`] (rule 1 already proved the
//!    question is loaded).
//!
//! Classification is deterministic: identical inputs always yield the
//! identical tag.

use core::fmt;

use dashwire_click_behavior::ClickBehavior;

use crate::bridge::PathScheme;
use crate::context::ExtraData;

/// The resolved action kind for one interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrillTag {
    /// Update the current dashboard's filter parameters in place.
    DashboardFilter,
    /// Navigate to a templated URL.
    LinkUrl,
    /// Navigate to another dashboard.
    DashboardUrl,
    /// Reset the current dashboard's filters (self-referencing dashboard
    /// link).
    DashboardReset,
    /// Navigate to a data-app page.
    PageUrl,
    /// Navigate to a saved question.
    QuestionUrl,
}

impl DrillTag {
    /// The canonical string form of the tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DashboardFilter => "dashboard-filter",
            Self::LinkUrl => "link-url",
            Self::DashboardUrl => "dashboard-url",
            Self::DashboardReset => "dashboard-reset",
            Self::PageUrl => "page-url",
            Self::QuestionUrl => "question-url",
        }
    }
}

impl fmt::Display for DrillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a click behavior in context. See the module docs for the rule
/// table.
pub fn classify<Q>(
    behavior: &ClickBehavior,
    extra: &ExtraData<Q>,
    paths: &impl PathScheme,
) -> Option<DrillTag> {
    if !has_link_target_data(behavior, extra) {
        return None;
    }

    match behavior {
        ClickBehavior::Crossfilter { .. } => Some(DrillTag::DashboardFilter),
        ClickBehavior::UrlLink { .. } => Some(DrillTag::LinkUrl),
        ClickBehavior::DashboardLink { target, .. } => Some(match &extra.dashboard {
            Some(current) if current.id == *target => DrillTag::DashboardReset,
            _ => DrillTag::DashboardUrl,
        }),
        ClickBehavior::PageLink { .. } => {
            let location = extra.location.as_ref()?;
            let inside_app = paths.is_app_page(&location.pathname)
                || paths.is_app_root(&location.pathname);
            if !inside_app {
                return None;
            }
            let params = extra.router_params.as_ref()?;
            paths.entity_id_from_slug(&params.slug)?;
            Some(DrillTag::PageUrl)
        }
        ClickBehavior::QuestionLink { .. } => Some(DrillTag::QuestionUrl),
    }
}

/// Whether the behavior's link target, if it references one, is loaded.
fn has_link_target_data<Q>(behavior: &ClickBehavior, extra: &ExtraData<Q>) -> bool {
    match behavior {
        ClickBehavior::DashboardLink { target, .. } => extra.dashboards.contains_key(target),
        ClickBehavior::QuestionLink { target, .. } => extra.question(*target).is_some(),
        ClickBehavior::Crossfilter { .. }
        | ClickBehavior::UrlLink { .. }
        | ClickBehavior::PageLink { .. } => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Dashboard, Location, RouterParams};
    use crate::testing::{AppPaths, behaviors};

    type Extra = ExtraData<u32>;

    fn extra_with_current(id: u64) -> Extra {
        let mut extra = Extra::new();
        extra.dashboard = Some(Dashboard::new(id));
        extra
    }

    #[test]
    fn crossfilter_classifies_as_dashboard_filter() {
        let extra = Extra::new();
        assert_eq!(
            classify(&behaviors::crossfilter(), &extra, &AppPaths),
            Some(DrillTag::DashboardFilter)
        );
    }

    #[test]
    fn url_link_classifies_as_link_url() {
        let extra = Extra::new();
        assert_eq!(
            classify(&behaviors::url_link("https://example.com/{{id}}"), &extra, &AppPaths),
            Some(DrillTag::LinkUrl)
        );
    }

    #[test]
    fn dashboard_link_requires_loaded_target() {
        let extra = extra_with_current(1);
        assert_eq!(classify(&behaviors::dashboard_link(7), &extra, &AppPaths), None);
    }

    #[test]
    fn dashboard_link_to_other_dashboard_navigates() {
        let mut extra = extra_with_current(1);
        extra.dashboards.insert(7, Dashboard::new(7));
        assert_eq!(
            classify(&behaviors::dashboard_link(7), &extra, &AppPaths),
            Some(DrillTag::DashboardUrl)
        );
    }

    #[test]
    fn dashboard_link_to_self_resets() {
        let mut extra = extra_with_current(7);
        extra.dashboards.insert(7, Dashboard::new(7));
        assert_eq!(
            classify(&behaviors::dashboard_link(7), &extra, &AppPaths),
            Some(DrillTag::DashboardReset)
        );
    }

    #[test]
    fn dashboard_link_without_current_dashboard_is_never_a_reset() {
        let mut extra = Extra::new();
        extra.dashboards.insert(7, Dashboard::new(7));
        assert_eq!(
            classify(&behaviors::dashboard_link(7), &extra, &AppPaths),
            Some(DrillTag::DashboardUrl)
        );
    }

    #[test]
    fn question_link_requires_supplied_question_data() {
        let extra = Extra::new();
        assert_eq!(classify(&behaviors::question_link(3), &extra, &AppPaths), None);
    }

    #[test]
    fn question_link_with_empty_question_map_is_no_action() {
        let mut extra = Extra::new();
        extra.questions = Some(hashbrown::HashMap::new());
        assert_eq!(classify(&behaviors::question_link(3), &extra, &AppPaths), None);
    }

    #[test]
    fn question_link_with_loaded_target_navigates() {
        let mut extra = Extra::new();
        let mut questions = hashbrown::HashMap::new();
        questions.insert(3, 30);
        extra.questions = Some(questions);
        assert_eq!(
            classify(&behaviors::question_link(3), &extra, &AppPaths),
            Some(DrillTag::QuestionUrl)
        );
    }

    #[test]
    fn page_link_outside_an_app_is_no_action() {
        let mut extra = Extra::new();
        extra.location = Some(Location::new("/dashboard/1"));
        extra.router_params = Some(RouterParams::new("9-ops"));
        assert_eq!(classify(&behaviors::page_link(2), &extra, &AppPaths), None);
    }

    #[test]
    fn page_link_without_location_is_no_action() {
        let mut extra = Extra::new();
        extra.router_params = Some(RouterParams::new("9-ops"));
        assert_eq!(classify(&behaviors::page_link(2), &extra, &AppPaths), None);
    }

    #[test]
    fn page_link_with_unrecognized_slug_is_no_action() {
        let mut extra = Extra::new();
        extra.location = Some(Location::new("/a/9-ops"));
        extra.router_params = Some(RouterParams::new("ops"));
        assert_eq!(classify(&behaviors::page_link(2), &extra, &AppPaths), None);
    }

    #[test]
    fn page_link_inside_app_root_navigates() {
        let mut extra = Extra::new();
        extra.location = Some(Location::new("/a/9-ops"));
        extra.router_params = Some(RouterParams::new("9-ops"));
        assert_eq!(
            classify(&behaviors::page_link(2), &extra, &AppPaths),
            Some(DrillTag::PageUrl)
        );
    }

    #[test]
    fn page_link_inside_app_page_navigates() {
        let mut extra = Extra::new();
        extra.location = Some(Location::new("/a/9-ops/page/4"));
        extra.router_params = Some(RouterParams::new("9-ops"));
        assert_eq!(
            classify(&behaviors::page_link(2), &extra, &AppPaths),
            Some(DrillTag::PageUrl)
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let mut extra = extra_with_current(7);
        extra.dashboards.insert(7, Dashboard::new(7));
        let behavior = behaviors::dashboard_link(7);
        let first = classify(&behavior, &extra, &AppPaths);
        let second = classify(&behavior, &extra, &AppPaths);
        assert_eq!(first, second);
    }

    #[test]
    fn tags_render_their_canonical_strings() {
        assert_eq!(DrillTag::DashboardFilter.to_string(), "dashboard-filter");
        assert_eq!(DrillTag::LinkUrl.to_string(), "link-url");
        assert_eq!(DrillTag::DashboardUrl.to_string(), "dashboard-url");
        assert_eq!(DrillTag::DashboardReset.to_string(), "dashboard-reset");
        assert_eq!(DrillTag::PageUrl.to_string(), "page-url");
        assert_eq!(DrillTag::QuestionUrl.to_string(), "question-url");
    }
}
