//! HTTP front end for company research.
//!
//! The router depends only on the [`ResearchAgent`](company_research::ResearchAgent)
//! trait object held in [`AppState`], so tests can swap in a double.

pub mod error;
pub mod routes;
pub mod startup;
pub mod state;
pub mod telemetry;

pub use error::ApiError;
pub use routes::{ResearchRequest, build_router};
pub use state::AppState;
