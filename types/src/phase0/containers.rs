use crate::phase0::primitives::{Epoch, Gwei, Slot, H256};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct AttestationData {
    pub slot: Slot,
    pub beacon_block_root: H256,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Attestation {
    pub data: AttestationData,
}

impl Attestation {
    #[must_use]
    pub fn hash_tree_root(&self) -> H256 {
        hashing::hash_256_64(self.data.beacon_block_root, self.data.slot)
    }
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BeaconBlockBody {
    pub attestations: Vec<Attestation>,
}

impl BeaconBlockBody {
    #[must_use]
    pub fn hash_tree_root(&self) -> H256 {
        self.attestations
            .iter()
            .fold(H256::zero(), |root, attestation| {
                hashing::hash_256_256(root, attestation.hash_tree_root())
            })
    }
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BeaconBlock {
    pub slot: Slot,
    pub parent_root: H256,
    pub state_root: H256,
    pub body: BeaconBlockBody,
}

impl BeaconBlock {
    /// Digest of the block's canonical serialization.
    ///
    /// Deterministic. Blocks that differ in any field have different roots.
    #[must_use]
    pub fn hash_tree_root(&self) -> H256 {
        hashing::hash_256_256(
            hashing::hash_256_64(self.parent_root, self.slot),
            hashing::hash_256_256(self.state_root, self.body.hash_tree_root()),
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Validator {
    pub effective_balance: Gwei,
    pub activation_epoch: Epoch,
    pub exit_epoch: Epoch,
}

/// The projection of the beacon state read by fork choice.
///
/// Everything else the state transition tracks is opaque to this repository.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BeaconState {
    pub slot: Slot,
    pub justified_epoch: Epoch,
    pub finalized_epoch: Epoch,
    pub validators: Vec<Validator>,
}
