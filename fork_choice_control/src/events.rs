use core::sync::atomic::{AtomicU64, Ordering};

use log::{info, warn};
use types::{
    config::Config,
    phase0::primitives::{Slot, H256},
};

/// Observability sink for fork choice.
///
/// Holds the monotone reorganization counter and writes log lines. Slots in
/// log output are offset by the configured genesis slot; the offset has no
/// other significance.
#[derive(Default)]
pub struct Events {
    reorg_count: AtomicU64,
}

impl Events {
    pub(crate) fn on_head_updated(&self, config: &Config, slot: Slot, head_root: H256) {
        info!(
            "chain head updated (slot: {}, head_root: {head_root:?})",
            slot.saturating_sub(config.genesis_slot),
        );
    }

    pub(crate) fn on_reorganization(
        &self,
        config: &Config,
        processed_slot: Slot,
        head_slot: Slot,
        head_root: H256,
    ) {
        self.reorg_count.fetch_add(1, Ordering::Relaxed);

        warn!(
            "chain reorganized (last processed slot: {}, new head slot: {}, new head: {head_root:?})",
            processed_slot.saturating_sub(config.genesis_slot),
            head_slot.saturating_sub(config.genesis_slot),
        );
    }

    #[must_use]
    pub fn reorg_count(&self) -> u64 {
        self.reorg_count.load(Ordering::Relaxed)
    }
}
