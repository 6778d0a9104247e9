use thiserror::Error;
use types::phase0::primitives::{Slot, H256};

use crate::misc::CheckpointLabel;

/// Failures produced by fork choice itself.
///
/// Transient collaborator failures (an unavailable block store or state
/// archive, an oracle error) are not enumerated here. They surface unchanged
/// as whatever error the collaborator returned; fork choice never retries
/// them and never writes durable state after observing one.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fork choice operation was cancelled")]
    Cancelled,
    #[error(
        "parent of block {block_root:?} does not resolve \
         (parent_root: {parent_root:?})"
    )]
    MissingParent {
        block_root: H256,
        parent_root: H256,
    },
    #[error(
        "no block at or before the start slot of the new {label} epoch \
         (start_slot: {start_slot})"
    )]
    CorruptStore {
        label: CheckpointLabel,
        start_slot: Slot,
    },
    #[error(
        "selected head is ahead of the processed block \
         (head_slot: {head_slot}, block_slot: {block_slot})"
    )]
    HeadAheadOfProcessedBlock { head_slot: Slot, block_slot: Slot },
    #[error("processed block {block_root:?} is not in the block store")]
    ProcessedBlockNotInStore { block_root: H256 },
}
