//! # docs-search
//!
//! Search across documentation sites whose pages have been indexed into a
//! SQLite database with two FTS5 tables: one for section titles and one for
//! terms found in page content.
//!
//! ## Architecture
//!
//! ```text
//!                   ┌──────────────────┐
//!                   │    User Query    │
//!                   └────────┬─────────┘
//!                            │ trim, reject blank
//!                            ▼
//!                   ┌──────────────────┐
//!                   │  FTS5 phrase     │
//!                   │  "..." with ""   │
//!                   └────────┬─────────┘
//!                 ┌──────────┴──────────┐
//!                 ▼                     ▼
//!        ┌────────────────┐    ┌────────────────┐
//!        │  Title index   │    │   Term index   │
//!        │ rank asc, ≤30  │    │ rank asc, ≤30  │
//!        └───────┬────────┘    └───────┬────────┘
//!                │ anchors             │ context snippets
//!                └──────────┬──────────┘
//!                           ▼
//!              ┌─────────────────────────┐
//!              │  Merge: titles, then    │
//!              │  terms; URL per site    │
//!              │  route; dedup (site,url)│
//!              └────────────┬────────────┘
//!                           ▼
//!              ┌─────────────────────────┐
//!              │   {"results": [...]}    │
//!              └─────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the store path, bind address and site routes
//! - [`models`] - Index rows, `Hit` and request/response types
//! - [`error`] - Internal failure taxonomy; never surfaced to HTTP callers
//! - [`search::query`] - Query trimming and FTS5 phrase escaping
//! - [`search::store`] - Lazily opened read-only SQLite handle and the two index queries
//! - [`search::routes`] - Public URL synthesis with per-site routing exceptions
//! - [`search::merge`] - Two-tier merge and `(site, url)` deduplication
//! - [`search::aggregator`] - The search facade tying it all together
//! - [`api`] - Axum HTTP handlers
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod state;

#[cfg(test)]
mod test_utils;
