//! In-memory collaborators and builders for fork choice tests.
//!
//! Production implementations of the collaborator traits live outside this
//! repository; tests run the engine against the stores here instead.

pub use crate::stores::{InMemoryAttestationOracle, InMemoryBlockStore, InMemoryStateArchive};

pub mod factory;

mod stores;
