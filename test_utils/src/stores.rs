use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use anyhow::{anyhow, Result};
use fork_choice_store::{AttestationOracle, BlockStore, StateArchive};
use parking_lot::Mutex;
use std_ext::ArcExt as _;
use types::phase0::{
    containers::{BeaconBlock, BeaconState},
    primitives::{Slot, ValidatorIndex, H256},
};

#[derive(Default)]
pub struct InMemoryBlockStore {
    blocks_by_root: Mutex<HashMap<H256, Arc<BeaconBlock>>>,
    blocks_by_slot: Mutex<BTreeMap<Slot, Arc<BeaconBlock>>>,
}

impl InMemoryBlockStore {
    pub fn insert(&self, block: Arc<BeaconBlock>) {
        let root = block.hash_tree_root();

        let previous = self
            .blocks_by_slot
            .lock()
            .insert(block.slot, block.clone_arc());

        assert!(
            previous.is_none(),
            "the block store holds at most one block per slot",
        );

        self.blocks_by_root.lock().insert(root, block);
    }
}

impl BlockStore for InMemoryBlockStore {
    fn block_by_root(&self, root: H256) -> Result<Option<Arc<BeaconBlock>>> {
        Ok(self.blocks_by_root.lock().get(&root).cloned())
    }

    fn block_at_slot(&self, slot: Slot) -> Result<Option<Arc<BeaconBlock>>> {
        Ok(self.blocks_by_slot.lock().get(&slot).cloned())
    }

    fn highest_known_slot(&self) -> Slot {
        self.blocks_by_slot
            .lock()
            .keys()
            .next_back()
            .copied()
            .unwrap_or_default()
    }

    fn contains_block(&self, root: H256) -> bool {
        self.blocks_by_root.lock().contains_key(&root)
    }
}

#[derive(Default)]
pub struct InMemoryStateArchive {
    states: Mutex<HashMap<Slot, Arc<BeaconState>>>,
    justified_block: Mutex<Option<Arc<BeaconBlock>>>,
    justified_state: Mutex<Option<Arc<BeaconState>>>,
    finalized_block: Mutex<Option<Arc<BeaconBlock>>>,
    finalized_state: Mutex<Option<Arc<BeaconState>>>,
    chain_head: Mutex<Option<(Arc<BeaconBlock>, Arc<BeaconState>)>>,
}

impl InMemoryStateArchive {
    pub fn insert_state(&self, slot: Slot, state: Arc<BeaconState>) {
        self.states.lock().insert(slot, state);
    }

    #[must_use]
    pub fn chain_head(&self) -> Option<(Arc<BeaconBlock>, Arc<BeaconState>)> {
        self.chain_head.lock().clone()
    }

    #[must_use]
    pub fn finalized_state(&self) -> Option<Arc<BeaconState>> {
        self.finalized_state.lock().clone()
    }
}

impl StateArchive for InMemoryStateArchive {
    fn historical_state_at_slot(&self, slot: Slot) -> Result<Arc<BeaconState>> {
        self.states
            .lock()
            .get(&slot)
            .cloned()
            .ok_or_else(|| anyhow!("no historical state at slot {slot}"))
    }

    fn justified_block(&self) -> Result<Arc<BeaconBlock>> {
        self.justified_block
            .lock()
            .clone()
            .ok_or_else(|| anyhow!("justified block not persisted"))
    }

    fn justified_state(&self) -> Result<Arc<BeaconState>> {
        self.justified_state
            .lock()
            .clone()
            .ok_or_else(|| anyhow!("justified state not persisted"))
    }

    fn finalized_block(&self) -> Result<Arc<BeaconBlock>> {
        self.finalized_block
            .lock()
            .clone()
            .ok_or_else(|| anyhow!("finalized block not persisted"))
    }

    fn save_justified_block(&self, block: &BeaconBlock) -> Result<()> {
        *self.justified_block.lock() = Some(Arc::new(block.clone()));
        Ok(())
    }

    fn save_justified_state(&self, state: &BeaconState) -> Result<()> {
        *self.justified_state.lock() = Some(Arc::new(state.clone()));
        Ok(())
    }

    fn save_finalized_block(&self, block: &BeaconBlock) -> Result<()> {
        *self.finalized_block.lock() = Some(Arc::new(block.clone()));
        Ok(())
    }

    fn save_finalized_state(&self, state: &BeaconState) -> Result<()> {
        *self.finalized_state.lock() = Some(Arc::new(state.clone()));
        Ok(())
    }

    fn update_chain_head(&self, block: &BeaconBlock, state: &BeaconState) -> Result<()> {
        *self.chain_head.lock() = Some((Arc::new(block.clone()), Arc::new(state.clone())));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAttestationOracle {
    targets: Mutex<HashMap<ValidatorIndex, Arc<BeaconBlock>>>,
}

impl InMemoryAttestationOracle {
    pub fn set_target(&self, validator_index: ValidatorIndex, target: Arc<BeaconBlock>) {
        self.targets.lock().insert(validator_index, target);
    }

    pub fn clear(&self) {
        self.targets.lock().clear();
    }
}

impl AttestationOracle for InMemoryAttestationOracle {
    fn latest_attestation_target(
        &self,
        validator_index: ValidatorIndex,
    ) -> Result<Option<Arc<BeaconBlock>>> {
        Ok(self.targets.lock().get(&validator_index).cloned())
    }
}
