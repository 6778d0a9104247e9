//! Implementation of the LMD-GHOST fork choice rule.
//!
//! This crate holds the pure part of fork choice: walking the block tree,
//! tallying attestation weight and selecting a head. It talks to the rest of
//! the node only through the collaborator traits in [`storage`] and must
//! never depend on persistence or databases; that separation is what keeps
//! head selection testable against in-memory stores.
//!
//! The block tree is implicit. Blocks point backward to their parents, and
//! forward traversal is reconstructed by scanning slots, which is possible
//! because the block store holds at most one block per slot on the locally
//! observed chains. Slots with no block are legal skip slots.
//!
//! [`storage`]: crate::storage

pub use crate::{
    error::Error,
    misc::{AttestationTargets, Cancellation, CheckpointLabel},
    storage::{AttestationOracle, BlockStore, StateArchive},
    store::Store,
};

mod error;
mod misc;
mod storage;
mod store;
