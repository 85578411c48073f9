//! Shared test utilities for the RepoRadar workspace.
//!
//! Provides git fixtures built with `git2` only, so the suites never depend on
//! a `git` binary or the network. Used as a dev-dependency only and never
//! published.
//!
//! # Modules
//!
//! - [`git`]: repositories, commits, bare remotes and index inspection

pub mod git;
