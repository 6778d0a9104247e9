use std::sync::Arc;

use anyhow::Result;
use fork_choice_store::{Cancellation, StateArchive as _};
use std_ext::ArcExt as _;
use test_utils::{factory, InMemoryAttestationOracle, InMemoryBlockStore, InMemoryStateArchive};
use types::{
    config::Config,
    phase0::{
        containers::{BeaconBlock, BeaconState},
        primitives::{Slot, H256},
    },
};

use crate::{controller::Controller, events::Events};

type TestController =
    Controller<InMemoryBlockStore, InMemoryStateArchive, InMemoryAttestationOracle>;

pub struct Context {
    pub block_store: Arc<InMemoryBlockStore>,
    pub state_archive: Arc<InMemoryStateArchive>,
    pub attestation_oracle: Arc<InMemoryAttestationOracle>,
    pub events: Arc<Events>,
    pub cancellation: Cancellation,
    pub controller: TestController,
    pub genesis_block: Arc<BeaconBlock>,
    pub genesis_state: Arc<BeaconState>,
    validator_count: u64,
}

impl Context {
    pub fn minimal(validator_count: u64) -> Self {
        let config = Arc::new(Config::minimal());
        let block_store = Arc::new(InMemoryBlockStore::default());
        let state_archive = Arc::new(InMemoryStateArchive::default());
        let attestation_oracle = Arc::new(InMemoryAttestationOracle::default());
        let events = Arc::new(Events::default());

        let genesis_block = factory::genesis_block();
        let genesis_state = factory::genesis_state(validator_count);

        block_store.insert(genesis_block.clone_arc());
        state_archive.insert_state(0, genesis_state.clone_arc());

        state_archive
            .save_justified_block(&genesis_block)
            .and_then(|()| state_archive.save_justified_state(&genesis_state))
            .and_then(|()| state_archive.save_finalized_block(&genesis_block))
            .and_then(|()| state_archive.save_finalized_state(&genesis_state))
            .expect("the in-memory archive is infallible");

        let controller = Controller::new(
            config,
            block_store.clone_arc(),
            state_archive.clone_arc(),
            attestation_oracle.clone_arc(),
            &genesis_block,
            events.clone_arc(),
        );

        Self {
            block_store,
            state_archive,
            attestation_oracle,
            events,
            cancellation: Cancellation::default(),
            controller,
            genesis_block,
            genesis_state,
            validator_count,
        }
    }

    /// Creates an empty block at `slot` on top of `parent` and stores it
    /// together with a post-state for the slot.
    pub fn add_block(&self, slot: Slot, parent: &BeaconBlock) -> Arc<BeaconBlock> {
        let block = factory::empty_block(slot, parent, H256::from_low_u64_be(slot));
        let state = factory::state_at_slot(slot, self.validator_count);

        self.block_store.insert(block.clone_arc());
        self.state_archive.insert_state(slot, state);

        block
    }

    pub fn state_at(&self, slot: Slot) -> Arc<BeaconState> {
        self.state_archive
            .historical_state_at_slot(slot)
            .expect("every block added through Context has a state")
    }

    /// Replaces the stored post-state at `state.slot`, so that a later head
    /// regeneration sees the same state the block was applied with.
    pub fn override_state(&self, state: Arc<BeaconState>) {
        self.state_archive.insert_state(state.slot, state);
    }

    pub fn vote_all(&self, target: &Arc<BeaconBlock>) {
        for validator_index in 0..self.validator_count {
            self.attestation_oracle
                .set_target(validator_index, target.clone_arc());
        }
    }

    pub fn apply(&mut self, block: &Arc<BeaconBlock>) -> Result<()> {
        let post_state = self.state_at(block.slot);
        self.apply_with_state(block, post_state)
    }

    pub fn apply_with_state(
        &mut self,
        block: &Arc<BeaconBlock>,
        post_state: Arc<BeaconState>,
    ) -> Result<()> {
        let cancellation = self.cancellation.clone();
        self.controller.apply_fork_choice(block, post_state, &cancellation)
    }
}
