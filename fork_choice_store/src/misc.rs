use core::sync::atomic::{AtomicBool, Ordering};
use std::{collections::HashMap, sync::Arc};

use anyhow::{ensure, Result};
use derive_more::Display;
use types::phase0::{containers::BeaconBlock, primitives::ValidatorIndex};

use crate::error::Error;

/// Latest attestation target of each active validator.
///
/// Built fresh for every head computation. Validators whose latest
/// attestation is unknown to the oracle are absent.
pub type AttestationTargets = HashMap<ValidatorIndex, Arc<BeaconBlock>>;

#[derive(Clone, Copy, Debug, Display)]
pub enum CheckpointLabel {
    #[display(fmt = "justified")]
    Justified,
    #[display(fmt = "finalized")]
    Finalized,
}

/// Ambient cancellation flag propagated into every fork choice operation.
///
/// Cloning yields another handle to the same flag. Operations check the flag
/// at each suspension point and return [`Error::Cancelled`] promptly once it
/// is set; durable writes that completed before that are kept.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn check(&self) -> Result<()> {
        ensure!(!self.is_cancelled(), Error::Cancelled);
        Ok(())
    }
}
