use std::sync::Arc;

use parking_lot::RwLock;
use types::phase0::primitives::{Slot, H256};

use crate::canonical_chain::CanonicalChain;

/// Read-side handle to the canonical chain.
///
/// Lookups take the shared lock for a single read, so a reader observes
/// either the pre-reorganization or the post-reorganization index, never a
/// partially rewritten one. [`Self::snapshot`] clones the persistent map and
/// can be iterated without holding any lock.
#[derive(Clone)]
pub struct CanonicalChainView {
    canonical_chain: Arc<RwLock<CanonicalChain>>,
}

impl CanonicalChainView {
    pub(crate) const fn new(canonical_chain: Arc<RwLock<CanonicalChain>>) -> Self {
        Self { canonical_chain }
    }

    #[must_use]
    pub fn snapshot(&self) -> CanonicalChain {
        self.canonical_chain.read().clone()
    }

    #[must_use]
    pub fn block_root_at_slot(&self, slot: Slot) -> Option<H256> {
        self.canonical_chain.read().block_root_at_slot(slot)
    }

    #[must_use]
    pub fn head_slot(&self) -> Option<Slot> {
        self.canonical_chain.read().head_slot()
    }

    #[must_use]
    pub fn head_root(&self) -> Option<H256> {
        self.canonical_chain.read().head_root()
    }
}
