use std::sync::Arc;

use anyhow::{ensure, Result};
use fork_choice_store::{
    AttestationOracle, AttestationTargets, BlockStore, Cancellation, Error, StateArchive, Store,
};
use helper_functions::accessors;
use log::debug;
use parking_lot::RwLock;
use std_ext::ArcExt as _;
use types::{
    config::Config,
    phase0::containers::{BeaconBlock, BeaconState},
};

use crate::{
    canonical_chain::CanonicalChain,
    checkpoints,
    events::Events,
    queries::CanonicalChainView,
};

/// Applies the fork choice rule to newly processed blocks.
///
/// The controller is the single writer of the canonical slot index and the
/// durable chain head. [`Self::apply_fork_choice`] takes `&mut self` and is
/// not reentrant; the block-processing pipeline invokes it serially.
/// Concurrent readers go through [`Self::canonical_chain`].
pub struct Controller<B, A, O> {
    chain_config: Arc<Config>,
    block_store: Arc<B>,
    state_archive: Arc<A>,
    attestation_oracle: Arc<O>,
    canonical_chain: Arc<RwLock<CanonicalChain>>,
    events: Arc<Events>,
}

impl<B: BlockStore, A: StateArchive, O: AttestationOracle> Controller<B, A, O> {
    #[must_use]
    pub fn new(
        chain_config: Arc<Config>,
        block_store: Arc<B>,
        state_archive: Arc<A>,
        attestation_oracle: Arc<O>,
        anchor_block: &BeaconBlock,
        events: Arc<Events>,
    ) -> Self {
        let mut canonical_chain = CanonicalChain::default();
        canonical_chain.insert(anchor_block.slot, anchor_block.hash_tree_root());

        Self {
            chain_config,
            block_store,
            state_archive,
            attestation_oracle,
            canonical_chain: Arc::new(RwLock::new(canonical_chain)),
            events,
        }
    }

    #[must_use]
    pub fn canonical_chain(&self) -> CanonicalChainView {
        CanonicalChainView::new(self.canonical_chain.clone_arc())
    }

    #[must_use]
    pub fn events(&self) -> Arc<Events> {
        self.events.clone_arc()
    }

    /// Selects the new chain head for a freshly processed block and
    /// reconciles the canonical slot index and the durable head with it.
    ///
    /// Checkpoints are advanced first, so head selection starts from the
    /// checkpoint justified by `post_state`. A reorganization is detected by
    /// comparing the selected head's slot against the processed block's; a
    /// side-branch block whose slot equals the new head's slips past that
    /// comparison without emitting a reorganization event.
    pub fn apply_fork_choice(
        &mut self,
        block: &BeaconBlock,
        post_state: Arc<BeaconState>,
        cancellation: &Cancellation,
    ) -> Result<()> {
        let block_root = block.hash_tree_root();

        ensure!(
            self.block_store.contains_block(block_root),
            Error::ProcessedBlockNotInStore { block_root },
        );

        checkpoints::update_checkpoints(
            &self.chain_config,
            self.block_store.as_ref(),
            self.state_archive.as_ref(),
            &post_state,
            cancellation,
        )?;

        let justified_block = self.state_archive.justified_block()?;
        let justified_state = self.state_archive.justified_state()?;

        let targets = self.attestation_targets(&justified_state, cancellation)?;

        debug!(
            "selecting head (justified_slot: {}, targets: {})",
            justified_block.slot,
            targets.len(),
        );

        let head = Store::new(self.block_store.as_ref(), cancellation).head(
            justified_block,
            &justified_state,
            &targets,
        )?;

        let head_root = head.hash_tree_root();

        // The selector cannot overtake the highest known slot, but a
        // processed block on a pruned or unknown branch could fall behind
        // the head it produces. Give up before touching the index.
        ensure!(
            head.slot <= block.slot,
            Error::HeadAheadOfProcessedBlock {
                head_slot: head.slot,
                block_slot: block.slot,
            },
        );

        cancellation.check()?;

        let mut canonical_chain = self.canonical_chain.write();

        canonical_chain.insert(head.slot, head_root);

        let new_state = if head.slot == block.slot {
            post_state
        } else {
            // The selected head is on another branch. Regenerate the head
            // state and drop index entries the branch switch invalidated.
            let new_state = self.state_archive.historical_state_at_slot(head.slot)?;
            let removed = canonical_chain.prune_above(head.slot);

            debug!("removed {} canonical slot entries", removed.len());

            self.events
                .on_reorganization(&self.chain_config, block.slot, head.slot, head_root);

            new_state
        };

        self.state_archive.update_chain_head(&head, &new_state)?;

        drop(canonical_chain);

        self.events
            .on_head_updated(&self.chain_config, head.slot, head_root);

        Ok(())
    }

    fn attestation_targets(
        &self,
        justified_state: &BeaconState,
        cancellation: &Cancellation,
    ) -> Result<AttestationTargets> {
        let current_epoch = accessors::get_current_epoch(&self.chain_config, justified_state);
        let mut targets = AttestationTargets::new();

        for validator_index in accessors::active_validator_indices(justified_state, current_epoch)
        {
            cancellation.check()?;

            if let Some(target) = self
                .attestation_oracle
                .latest_attestation_target(validator_index)?
            {
                targets.insert(validator_index, target);
            }
        }

        Ok(targets)
    }
}
