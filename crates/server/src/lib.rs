//! stringdb-server — HTTP server for strings.db.
//!
//! Provides the REST API over the analysis, filtering, and storage logic in
//! `stringdb-core`.

/// REST API layer: Axum router, HTTP handlers, models, and errors.
pub mod api;
