//! Cluster-based meal planner for NutriCart.
//!
//! This crate provides [`ClusterPlanner`], the default implementation of
//! the [`MealPlanner`](nutricart_core::MealPlanner) trait. A request flows
//! through four stages: per-meal targets are computed from the profile, the
//! target vector is matched to the nearest offline cluster, the cluster's
//! recipes are narrowed by dietary keyword rules and a budget ceiling, and
//! meals are sampled from whatever pool survives. When the pool cannot fill
//! a day, sampling falls back to the static catalogue, so both operations
//! are total.
//!
//! The planner holds only immutable state (catalogue, cluster model,
//! fallback list, configuration); each request consumes randomness seeded
//! from the request itself and nothing else.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod filter;
mod planner;
mod sampler;

pub use planner::{ClusterPlanner, PlannerConfig, BUDGET_ALLOWANCE};
