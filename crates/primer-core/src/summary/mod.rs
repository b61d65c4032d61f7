//! Draft-summary assembly.
//!
//! [`prompt`] builds the generative instruction, [`local`] renders the
//! deterministic offline template, and [`service::SummaryService`] picks
//! between the two variants per request.

pub mod local;
pub mod prompt;
pub mod service;

pub use service::{EMPTY_COMPLETION_FALLBACK, SummaryService};
