//! Core logic for primer, a homeschool draft-plan service.
//!
//! [`intake`] normalizes raw form payloads into validated plan requests,
//! [`summary`] assembles draft summaries (deterministic offline template or
//! generative prompt), and [`completion`] wraps the external text-completion
//! provider behind an object-safe trait.

pub mod completion;
pub mod intake;
pub mod summary;
