//! Coordination around the fork choice store.
//!
//! This crate handles the following concerns:
//! - Advancing the persisted justified and finalized checkpoints
//!   ([`checkpoints`]).
//! - Applying the fork choice rule to newly processed blocks and updating
//!   the durable chain head ([`Controller`]).
//! - Maintaining the canonical slot index and repairing it after
//!   reorganizations ([`CanonicalChain`]).
//! - Serving concurrent readers a consistent view of the canonical chain
//!   ([`CanonicalChainView`]).
//! - Counting reorganizations ([`Events`]).
//!
//! The controller is the single writer. [`Controller::apply_fork_choice`]
//! takes `&mut self`, so serial invocation is enforced by the borrow
//! checker; the block-processing pipeline owns the controller exclusively.
//! Readers hold a [`CanonicalChainView`] and never block the writer for
//! longer than one index lookup.

pub use crate::{
    canonical_chain::CanonicalChain,
    controller::Controller,
    events::Events,
    queries::CanonicalChainView,
};

pub mod checkpoints;

mod canonical_chain;
mod controller;
mod events;
mod queries;

#[cfg(test)]
mod helpers;
