use std::sync::Arc;

use anyhow::Result;
use types::phase0::{
    containers::{BeaconBlock, BeaconState},
    primitives::{Slot, ValidatorIndex, H256},
};

/// Read-only access to the block tree.
pub trait BlockStore {
    fn block_by_root(&self, root: H256) -> Result<Option<Arc<BeaconBlock>>>;

    /// The block at `slot`, if any.
    ///
    /// At most one block per slot is stored on the locally observed chains.
    fn block_at_slot(&self, slot: Slot) -> Result<Option<Arc<BeaconBlock>>>;

    fn highest_known_slot(&self) -> Slot;

    fn contains_block(&self, root: H256) -> bool;
}

/// Durable storage for historical states, checkpoints and the chain head.
///
/// Each save is individually atomic with respect to external readers.
/// Retention of historical states is the archive's concern; fork choice
/// assumes states are available for any slot at or below the current head.
pub trait StateArchive {
    fn historical_state_at_slot(&self, slot: Slot) -> Result<Arc<BeaconState>>;

    fn justified_block(&self) -> Result<Arc<BeaconBlock>>;

    fn justified_state(&self) -> Result<Arc<BeaconState>>;

    fn finalized_block(&self) -> Result<Arc<BeaconBlock>>;

    fn save_justified_block(&self, block: &BeaconBlock) -> Result<()>;

    fn save_justified_state(&self, state: &BeaconState) -> Result<()>;

    fn save_finalized_block(&self, block: &BeaconBlock) -> Result<()>;

    fn save_finalized_state(&self, state: &BeaconState) -> Result<()>;

    fn update_chain_head(&self, block: &BeaconBlock, state: &BeaconState) -> Result<()>;
}

/// Source of the latest attestation made by each validator.
pub trait AttestationOracle {
    fn latest_attestation_target(
        &self,
        validator_index: ValidatorIndex,
    ) -> Result<Option<Arc<BeaconBlock>>>;
}
