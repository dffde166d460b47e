//! Pure domain logic for the crewhub project-idea submission wizard.
//!
//! Everything in this crate is synchronous and I/O-free: the draft record
//! assembled across the wizard's steps, the step state machine, the per-step
//! validation rules, and the editors for the draft's tag-like collections.
//! Network access lives in `crewhub-gateway`; the stateful controller lives
//! in `crewhub-wizard`.

pub mod catalog;
pub mod collection;
pub mod draft;
pub mod error;
pub mod presentation;
pub mod skills;
pub mod steps;
pub mod validate;
