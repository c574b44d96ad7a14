//! Budget-aware route ranking for Tollway.
//!
//! This crate provides [`BudgetOptimizer`], the default implementation of
//! the [`RouteOptimizer`](tollway_core::RouteOptimizer) trait. Given routes
//! already priced by a [`TollEstimator`](tollway_core::TollEstimator), it
//! picks a no-toll option and a budget option, orders the remaining routes
//! as alternatives, and explains each choice in plain text.
//!
//! Selection is deterministic: equal tolls or travel times resolve to the
//! earliest-listed route.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod budget;
mod config;
mod explain;
mod selection;

pub use budget::BudgetOptimizer;
pub use config::OptimizerConfig;
