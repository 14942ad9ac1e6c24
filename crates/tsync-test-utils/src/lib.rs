//! Shared test utilities for the template-sync workspace.
//!
//! This crate provides standardised source/template tree fixtures so each
//! crate's test suite does not rebuild them by hand. It is a dev-dependency
//! only and never published.
//!
//! # Modules
//!
//! - [`tree`]: [`tree::SyncFixture`] builder for a project and its template

pub mod tree;
