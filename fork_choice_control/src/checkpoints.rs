use std::sync::Arc;

use anyhow::Result;
use fork_choice_store::{BlockStore, Cancellation, CheckpointLabel, Error, StateArchive};
use helper_functions::misc;
use log::debug;
use types::{
    config::Config,
    phase0::{
        containers::{BeaconBlock, BeaconState},
        primitives::Slot,
    },
};

/// Advances the persisted justified and finalized checkpoints to match
/// `post_state`.
///
/// A label only moves when the start slot of the corresponding epoch in
/// `post_state` is ahead of the persisted block, so checkpoints are monotone
/// across invocations. Each label is persisted independently; a failure
/// while writing the second label leaves the first one in place.
pub fn update_checkpoints<B: BlockStore, A: StateArchive>(
    config: &Config,
    block_store: &B,
    state_archive: &A,
    post_state: &BeaconState,
    cancellation: &Cancellation,
) -> Result<()> {
    for label in [CheckpointLabel::Justified, CheckpointLabel::Finalized] {
        cancellation.check()?;
        update_checkpoint(config, block_store, state_archive, post_state, label)?;
    }

    Ok(())
}

fn update_checkpoint<B: BlockStore, A: StateArchive>(
    config: &Config,
    block_store: &B,
    state_archive: &A,
    post_state: &BeaconState,
    label: CheckpointLabel,
) -> Result<()> {
    let epoch = match label {
        CheckpointLabel::Justified => post_state.justified_epoch,
        CheckpointLabel::Finalized => post_state.finalized_epoch,
    };

    let start_slot = misc::compute_start_slot_at_epoch(config, epoch);

    let persisted = match label {
        CheckpointLabel::Justified => state_archive.justified_block()?,
        CheckpointLabel::Finalized => state_archive.finalized_block()?,
    };

    if start_slot <= persisted.slot {
        return Ok(());
    }

    let new_block = resolve_checkpoint_block(block_store, label, start_slot)?;
    let new_state = state_archive.historical_state_at_slot(new_block.slot)?;

    debug!(
        "advancing {label} checkpoint (epoch: {epoch}, slot: {})",
        new_block.slot,
    );

    match label {
        CheckpointLabel::Justified => {
            state_archive.save_justified_block(&new_block)?;
            state_archive.save_justified_state(&new_state)?;
        }
        CheckpointLabel::Finalized => {
            state_archive.save_finalized_block(&new_block)?;
            state_archive.save_finalized_state(&new_state)?;
        }
    }

    Ok(())
}

/// Walks backward from `start_slot` over skip slots until a block exists.
fn resolve_checkpoint_block<B: BlockStore>(
    block_store: &B,
    label: CheckpointLabel,
    start_slot: Slot,
) -> Result<Arc<BeaconBlock>> {
    let mut slot = start_slot;

    loop {
        if let Some(block) = block_store.block_at_slot(slot)? {
            break Ok(block);
        }

        if slot == 0 {
            break Err(Error::CorruptStore { label, start_slot }.into());
        }

        debug!("no {label} block at slot {slot}, trying slot {}", slot - 1);

        slot -= 1;
    }
}
