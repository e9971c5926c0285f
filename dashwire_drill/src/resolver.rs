// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolution façade.
//!
//! ## Overview
//!
//! [`ClickResolver`] owns the two capability bridges, a
//! [`ValueFormatter`] and a [`PathScheme`], and exposes one method per
//! resolution operation, plus [`ClickResolver::resolve`] which runs the
//! whole pass: effective behavior → classification → parameter mapping →
//! target building, producing a [`Drill`] or `None`.
//!
//! Every method is a pure function of the context it is handed. The
//! resolver holds no interaction state; the same resolver serves every
//! click.
//!
//! ## Contract
//!
//! The per-variant builders (`link_url`, `dashboard_url`, `page_url`,
//! `question_url`) assume classification already succeeded for the
//! matching tag. Calling one when it didn't, or mutating
//! [`ExtraData`](crate::context::ExtraData) between classification and
//! build, yields a [`ResolveError`], which callers must treat as "no
//! action" after logging the contract violation however they see fit.

use dashwire_click_behavior::ClickBehavior;

use crate::bridge::{
    MappingEnv, PathScheme, QuestionTarget, QuestionUrlForm, ValueFormatter,
};
use crate::classify::{classify, DrillTag};
use crate::context::ClickContext;
use crate::params::{id_value_pairs, query_params, PairList};
use crate::query::QueryParams;
use crate::url::{append_query, question_parameters, ResolveError};

/// The resolved outcome of one interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Drill {
    /// Update dashboard filters in place with these (id, value) pairs.
    /// A `None` value clears that parameter's filter.
    CrossFilter {
        /// Ordered pairs, one per mapping entry.
        pairs: PairList,
    },
    /// Navigate to a fully resolved relative URL.
    Navigate {
        /// The classified drill kind that produced the URL.
        tag: DrillTag,
        /// The destination, ready for the router.
        url: String,
    },
}

/// Resolves click behaviors against their runtime context.
#[derive(Clone, Debug)]
pub struct ClickResolver<F, P> {
    formatter: F,
    paths: P,
}

impl<F, P> ClickResolver<F, P>
where
    F: ValueFormatter,
    P: PathScheme,
{
    /// A resolver over the host's formatter and path scheme.
    pub fn new(formatter: F, paths: P) -> Self {
        Self { formatter, paths }
    }

    /// The effective click behavior for this interaction: the clicked
    /// column's override, else the element-level default, else `None`.
    pub fn behavior<'a, Q>(
        &self,
        ctx: &ClickContext<'a, F::Origin, Q>,
    ) -> Option<&'a ClickBehavior> {
        ctx.behavior()
    }

    /// The clicked point's extracted value bag.
    pub fn click_data<Q>(&self, ctx: &ClickContext<'_, F::Origin, Q>) -> F::Data {
        self.formatter.data_from_click(ctx.origin, ctx.column)
    }

    /// Classify the interaction. `None` uniformly means "do nothing".
    pub fn classify<Q>(&self, ctx: &ClickContext<'_, F::Origin, Q>) -> Option<DrillTag> {
        let behavior = ctx.behavior()?;
        classify(behavior, ctx.extra, &self.paths)
    }

    /// The ordered (id, value) pairs for cross-filter application, with
    /// unresolved values passed through as `None`.
    pub fn filter_pairs<Q>(
        &self,
        ctx: &ClickContext<'_, F::Origin, Q>,
    ) -> Result<PairList, ResolveError> {
        let behavior = ctx.behavior().ok_or(ResolveError::BehaviorMissing)?;
        let data = self.click_data(ctx);
        let env = MappingEnv {
            data: &data,
            extra: ctx.extra,
            behavior,
        };
        Ok(id_value_pairs(behavior.parameter_mapping(), &self.formatter, &env))
    }

    /// The destination URL for a URL-link behavior: the template rendered
    /// against the extracted click data. No query string is appended.
    pub fn link_url<Q>(
        &self,
        ctx: &ClickContext<'_, F::Origin, Q>,
    ) -> Result<String, ResolveError> {
        let behavior = ctx.behavior().ok_or(ResolveError::BehaviorMissing)?;
        let ClickBehavior::UrlLink { template, .. } = behavior else {
            return Err(ResolveError::UnexpectedBehavior { expected: "url link" });
        };
        let data = self.click_data(ctx);
        Ok(self.formatter.render_link_template(template, &data))
    }

    /// The destination URL for a dashboard link, covering both the
    /// navigate and the self-referencing reset case (the reset target is
    /// the current dashboard's own id).
    pub fn dashboard_url<Q>(
        &self,
        ctx: &ClickContext<'_, F::Origin, Q>,
    ) -> Result<String, ResolveError> {
        let behavior = ctx.behavior().ok_or(ResolveError::BehaviorMissing)?;
        let &ClickBehavior::DashboardLink { target, .. } = behavior else {
            return Err(ResolveError::UnexpectedBehavior {
                expected: "dashboard link",
            });
        };
        if ctx.extra.linked_dashboard(target).is_none() {
            return Err(ResolveError::DashboardNotLoaded(target));
        }
        let query = self.query_for(behavior, ctx);
        Ok(append_query(self.paths.dashboard_path(target), &query))
    }

    /// The destination URL for a page link: the containing app id is
    /// re-derived from the current route slug.
    pub fn page_url<Q>(
        &self,
        ctx: &ClickContext<'_, F::Origin, Q>,
    ) -> Result<String, ResolveError> {
        let behavior = ctx.behavior().ok_or(ResolveError::BehaviorMissing)?;
        let &ClickBehavior::PageLink { target, .. } = behavior else {
            return Err(ResolveError::UnexpectedBehavior {
                expected: "page link",
            });
        };
        let params = ctx
            .extra
            .router_params
            .as_ref()
            .ok_or(ResolveError::RouteContextMissing)?;
        let app = self
            .paths
            .entity_id_from_slug(&params.slug)
            .ok_or_else(|| ResolveError::SlugNotRecognized(params.slug.clone()))?;
        let query = self.query_for(behavior, ctx);
        Ok(append_query(self.paths.app_page_path(app, target), &query))
    }

    /// The destination URL for a question link. The target question is
    /// bound to the caller's metadata context and display-locked; its URL
    /// strategy is selected once from its form.
    pub fn question_url<Q>(
        &self,
        ctx: &ClickContext<'_, F::Origin, Q>,
        metadata: &Q::Metadata,
    ) -> Result<String, ResolveError>
    where
        Q: QuestionTarget,
    {
        let behavior = ctx.behavior().ok_or(ResolveError::BehaviorMissing)?;
        let &ClickBehavior::QuestionLink { target, .. } = behavior else {
            return Err(ResolveError::UnexpectedBehavior {
                expected: "question link",
            });
        };
        let question = ctx
            .extra
            .question(target)
            .ok_or(ResolveError::QuestionNotLoaded(target))?
            .bound(metadata)
            .lock_display();

        let parameters = question_parameters(behavior.parameter_mapping(), ctx.extra);
        let query = self.query_for(behavior, ctx);

        Ok(match question.url_form() {
            QuestionUrlForm::Structured => question.url_with_parameters(&parameters, &query),
            QuestionUrlForm::Unstructured => append_query(question.url(), &query),
        })
    }

    /// Run the full resolution pass: classify, then produce the drill for
    /// the classified tag. `Ok(None)` means "do nothing".
    pub fn resolve<Q>(
        &self,
        ctx: &ClickContext<'_, F::Origin, Q>,
        metadata: &Q::Metadata,
    ) -> Result<Option<Drill>, ResolveError>
    where
        Q: QuestionTarget,
    {
        let Some(tag) = self.classify(ctx) else {
            return Ok(None);
        };
        let drill = match tag {
            DrillTag::DashboardFilter => Drill::CrossFilter {
                pairs: self.filter_pairs(ctx)?,
            },
            DrillTag::LinkUrl => Drill::Navigate {
                tag,
                url: self.link_url(ctx)?,
            },
            DrillTag::DashboardUrl | DrillTag::DashboardReset => Drill::Navigate {
                tag,
                url: self.dashboard_url(ctx)?,
            },
            DrillTag::PageUrl => Drill::Navigate {
                tag,
                url: self.page_url(ctx)?,
            },
            DrillTag::QuestionUrl => Drill::Navigate {
                tag,
                url: self.question_url(ctx, metadata)?,
            },
        };
        Ok(Some(drill))
    }

    /// The query params for a behavior's mapping in this context.
    fn query_for<Q>(
        &self,
        behavior: &ClickBehavior,
        ctx: &ClickContext<'_, F::Origin, Q>,
    ) -> QueryParams {
        let data = self.click_data(ctx);
        let env = MappingEnv {
            data: &data,
            extra: ctx.extra,
            behavior,
        };
        query_params(behavior.parameter_mapping(), &self.formatter, &env)
    }
}
