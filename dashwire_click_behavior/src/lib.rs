// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashwire Click Behavior: the typed configuration model for dashboard
//! click behaviors.
//!
//! ## Overview
//!
//! A *click behavior* is a declarative description, attached to a dashboard
//! element or to one of its columns, of what should happen when a user
//! interacts with a data point: update the dashboard's own filters in place
//! (a cross-filter), or navigate to a destination (an arbitrary URL built
//! from a template, another dashboard, an app page, or a saved question).
//!
//! Click behaviors are authored and persisted elsewhere, in a
//! loosely-structured form where any field may be absent. This crate models
//! both forms and the one-way door between them:
//!
//! - [`raw::RawClickBehavior`] mirrors the persisted shape field for field
//!   and deserializes with serde.
//! - [`ClickBehavior`] is an exhaustive sum type with one variant per valid
//!   kind of behavior. Combinations the resolution engine cannot act on are
//!   unrepresentable.
//! - `ClickBehavior::try_from(raw)` validates exactly once, at the boundary.
//!   Every malformed-configuration case surfaces here as a
//!   [`raw::BehaviorError`]; downstream consumers never re-check.
//!
//! ## Example
//!
//! ```
//! use dashwire_click_behavior::ClickBehavior;
//! use dashwire_click_behavior::raw::RawClickBehavior;
//!
//! let raw: RawClickBehavior = serde_json::from_value(serde_json::json!({
//!     "type": "link",
//!     "linkType": "dashboard",
//!     "targetId": 7,
//!     "parameterMapping": {
//!         "a": {
//!             "id": "a",
//!             "source": { "type": "column", "id": "total" },
//!             "target": { "type": "parameter", "id": "p1" },
//!         },
//!     },
//! }))
//! .unwrap();
//!
//! let behavior = ClickBehavior::try_from(raw).unwrap();
//! assert!(matches!(behavior, ClickBehavior::DashboardLink { target: 7, .. }));
//! assert_eq!(behavior.parameter_mapping().len(), 1);
//! ```
//!
//! The resolution engine that consumes this model lives in the
//! `dashwire_drill` crate.

pub mod behavior;
pub mod raw;
pub mod value;

pub use behavior::{
    ClickBehavior, EntityId, MappingSource, MappingTarget, ParameterMapping,
    ParameterMappingEntry, SourceKind, TargetKind,
};
pub use raw::BehaviorError;
pub use value::ParamValue;
