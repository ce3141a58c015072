//! The individual diagnostic probes.
//!
//! Each check is an independent, stateless function producing exactly one
//! [`CheckResult`](crate::report::CheckResult). A check catches every fault
//! of its own sub-operations and converts it into a failing result; nothing
//! propagates to the runner.

pub mod database;
pub mod dependency;
pub mod runtime;
pub mod service;
