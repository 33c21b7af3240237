//! Async HTTP client for the source-hosting service's REST API.
//!
//! [`github`] exposes `fetch_*(client, api_root, reference)` functions that
//! return `Ok(Some(_))` on success, `Ok(None)` when the endpoint responds
//! with a non-success status (not found, rate limited), and `Err` on
//! transport failures.

pub mod github;
