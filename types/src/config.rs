use core::num::NonZeroU64;

use educe::Educe;
use nonzero_ext::nonzero;

use crate::phase0::{consts::GENESIS_SLOT, primitives::Slot};

/// Configuration variables customizable at runtime.
#[derive(Clone, Copy, Debug, Educe)]
#[educe(Default)]
pub struct Config {
    /// Number of slots in an epoch. Determines epoch start slots.
    #[educe(Default(expression = "nonzero!(32_u64)"))]
    pub slots_per_epoch: NonZeroU64,
    /// Slot of the genesis block. Only used to offset slots in log output.
    #[educe(Default(expression = "GENESIS_SLOT"))]
    pub genesis_slot: Slot,
}

impl Config {
    #[must_use]
    pub fn mainnet() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn minimal() -> Self {
        Self {
            slots_per_epoch: nonzero!(8_u64),
            ..Self::default()
        }
    }
}
