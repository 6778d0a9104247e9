use std::sync::Arc;

use types::phase0::{
    consts::{FAR_FUTURE_EPOCH, GENESIS_EPOCH, GENESIS_SLOT},
    containers::{BeaconBlock, BeaconBlockBody, BeaconState, Validator},
    primitives::{Gwei, Slot, H256},
};

pub const DEFAULT_EFFECTIVE_BALANCE: Gwei = 100;

#[must_use]
pub fn genesis_block() -> Arc<BeaconBlock> {
    Arc::new(BeaconBlock {
        slot: GENESIS_SLOT,
        parent_root: H256::zero(),
        state_root: H256::zero(),
        body: BeaconBlockBody::default(),
    })
}

/// A block with no attestations. `state_root` doubles as a differentiator
/// for otherwise identical blocks.
#[must_use]
pub fn empty_block(slot: Slot, parent: &BeaconBlock, state_root: H256) -> Arc<BeaconBlock> {
    Arc::new(BeaconBlock {
        slot,
        parent_root: parent.hash_tree_root(),
        state_root,
        body: BeaconBlockBody::default(),
    })
}

#[must_use]
pub fn active_validator(effective_balance: Gwei) -> Validator {
    Validator {
        effective_balance,
        activation_epoch: GENESIS_EPOCH,
        exit_epoch: FAR_FUTURE_EPOCH,
    }
}

#[must_use]
pub fn genesis_state(validator_count: u64) -> Arc<BeaconState> {
    state_at_slot(GENESIS_SLOT, validator_count)
}

/// A state at `slot` with `validator_count` active validators holding
/// [`DEFAULT_EFFECTIVE_BALANCE`] each and no justification progress.
#[must_use]
pub fn state_at_slot(slot: Slot, validator_count: u64) -> Arc<BeaconState> {
    Arc::new(BeaconState {
        slot,
        justified_epoch: GENESIS_EPOCH,
        finalized_epoch: GENESIS_EPOCH,
        validators: (0..validator_count)
            .map(|_| active_validator(DEFAULT_EFFECTIVE_BALANCE))
            .collect(),
    })
}
