// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime context of one interaction.
//!
//! ## Overview
//!
//! A [`ClickContext`] is constructed fresh for every user interaction and
//! discarded after one resolution pass; the engine holds no state across
//! invocations. It bundles:
//!
//! - the raw clicked-point payload (opaque here, read only by the value
//!   formatter bridge);
//! - the element's settings, which carry the element-level click behavior
//!   and per-column overrides;
//! - the clicked column, if the interaction was on a column's data point;
//! - [`ExtraData`], the bag of entities the host application currently has
//!   loaded.
//!
//! `ExtraData` is validated structure, not a free-form bag: each navigable
//! behavior kind has its own optional fields, checked once here at the
//! boundary instead of defensively at every access site. The engine never
//! mutates it.

use dashwire_click_behavior::{ClickBehavior, EntityId};
use hashbrown::HashMap;

/// A data column associated with a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Column name; identifies the column within its element.
    pub name: String,
}

impl Column {
    /// A column by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Settings registered for one specific column of an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSettings {
    /// Column-level click behavior; overrides the element-level one.
    pub click_behavior: Option<ClickBehavior>,
}

impl ColumnSettings {
    /// Column settings carrying a click behavior.
    pub fn with_click_behavior(behavior: ClickBehavior) -> Self {
        Self {
            click_behavior: Some(behavior),
        }
    }
}

/// Element-level settings: the default click behavior plus any per-column
/// overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSettings {
    /// Element-level click behavior, used when the clicked column has no
    /// override of its own.
    pub click_behavior: Option<ClickBehavior>,
    overrides: HashMap<String, ColumnSettings>,
}

impl ElementSettings {
    /// Empty settings: no behavior at either level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings with an element-level click behavior.
    pub fn with_click_behavior(behavior: ClickBehavior) -> Self {
        Self {
            click_behavior: Some(behavior),
            overrides: HashMap::new(),
        }
    }

    /// Register settings for a specific column.
    pub fn set_column_settings(
        &mut self,
        column: impl Into<String>,
        settings: ColumnSettings,
    ) -> &mut Self {
        self.overrides.insert(column.into(), settings);
        self
    }

    /// Settings registered for this specific column, if any.
    pub fn column_settings(&self, column: &Column) -> Option<&ColumnSettings> {
        self.overrides.get(&column.name)
    }
}

/// A dashboard as far as resolution is concerned: its identity and its
/// declared parameter list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dashboard {
    /// Dashboard id.
    pub id: EntityId,
    /// Declared dashboard parameters, consulted when a mapping source is a
    /// dashboard parameter.
    pub parameters: Vec<DashboardParameter>,
}

impl Dashboard {
    /// A dashboard with no declared parameters.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            parameters: Vec::new(),
        }
    }

    /// A dashboard with declared parameters.
    pub fn with_parameters(id: EntityId, parameters: Vec<DashboardParameter>) -> Self {
        Self { id, parameters }
    }

    /// Look up a declared parameter by id.
    pub fn parameter(&self, id: &str) -> Option<&DashboardParameter> {
        self.parameters.iter().find(|p| p.id == id)
    }
}

/// One declared dashboard parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardParameter {
    /// Parameter id, matched against mapping source ids.
    pub id: String,
    /// Declared parameter type (for example `text`, `category`,
    /// `date/single`). Carried verbatim into question parameter lists.
    pub kind: String,
}

impl DashboardParameter {
    /// A declared parameter.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// The current navigation location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Path portion of the current URL.
    pub pathname: String,
}

impl Location {
    /// A location at `pathname`.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

/// Parameters extracted from the current route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterParams {
    /// The route's slug parameter.
    pub slug: String,
}

impl RouterParams {
    /// Router params with a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

/// Entities the host application has loaded at interaction time.
///
/// `Q` is the host's question type (see
/// [`QuestionTarget`](crate::bridge::QuestionTarget)). `questions` is
/// `None` when question data was never supplied, which is distinct from an
/// empty map: both fail the link-target guard, but the distinction keeps
/// the structure honest about what the host actually loaded.
#[derive(Clone, Debug)]
pub struct ExtraData<Q> {
    /// The dashboard the interaction happened on, if any.
    pub dashboard: Option<Dashboard>,
    /// Dashboards loaded as link targets, by id.
    pub dashboards: HashMap<EntityId, Dashboard>,
    /// Questions loaded as link targets, by id.
    pub questions: Option<HashMap<EntityId, Q>>,
    /// Current navigation location; consulted only for page links.
    pub location: Option<Location>,
    /// Current route parameters; consulted only for page links.
    pub router_params: Option<RouterParams>,
}

impl<Q> Default for ExtraData<Q> {
    fn default() -> Self {
        Self {
            dashboard: None,
            dashboards: HashMap::new(),
            questions: None,
            location: None,
            router_params: None,
        }
    }
}

impl<Q> ExtraData<Q> {
    /// An empty bag: nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loaded link-target dashboard, by id.
    pub fn linked_dashboard(&self, id: EntityId) -> Option<&Dashboard> {
        self.dashboards.get(&id)
    }

    /// A loaded question, by id. `None` both when question data was never
    /// supplied and when this id is not in it.
    pub fn question(&self, id: EntityId) -> Option<&Q> {
        self.questions.as_ref()?.get(&id)
    }
}

/// Everything known about one interaction.
///
/// `O` is the raw clicked-point payload consumed by the formatter bridge's
/// extraction rule; this engine never looks inside it.
#[derive(Debug)]
pub struct ClickContext<'a, O, Q> {
    /// The raw clicked-point payload.
    pub origin: &'a O,
    /// Settings of the clicked element.
    pub settings: Option<&'a ElementSettings>,
    /// The clicked column, if the interaction was on a column's data point.
    pub column: Option<&'a Column>,
    /// Currently-loaded entities.
    pub extra: &'a ExtraData<Q>,
}

impl<O, Q> Clone for ClickContext<'_, O, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, Q> Copy for ClickContext<'_, O, Q> {}

impl<'a, O, Q> ClickContext<'a, O, Q> {
    /// A context with no element settings and no column.
    pub fn new(origin: &'a O, extra: &'a ExtraData<Q>) -> Self {
        Self {
            origin,
            settings: None,
            column: None,
            extra,
        }
    }

    /// Attach the clicked element's settings.
    pub fn with_settings(mut self, settings: &'a ElementSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Attach the clicked column.
    pub fn with_column(mut self, column: &'a Column) -> Self {
        self.column = Some(column);
        self
    }

    /// The effective click behavior for this interaction.
    ///
    /// Resolution order: the clicked column's override if one is registered
    /// with a behavior set, else the element-level behavior, else `None` —
    /// in which case no action is possible. A column override that exists
    /// but carries no behavior falls back to the element level.
    pub fn behavior(&self) -> Option<&'a ClickBehavior> {
        let settings = self.settings?;
        if let Some(column) = self.column {
            if let Some(behavior) = settings
                .column_settings(column)
                .and_then(|cs| cs.click_behavior.as_ref())
            {
                return Some(behavior);
            }
        }
        settings.click_behavior.as_ref()
    }
}
