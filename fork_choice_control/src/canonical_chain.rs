use im::OrdMap;
use itertools::Itertools as _;
use types::phase0::primitives::{Slot, H256};

/// The locally canonical chain as a map from slot to block root.
///
/// Skip slots have no entry. The map is persistent so that read-side
/// snapshots are cheap regardless of chain length.
#[derive(Clone, Default)]
pub struct CanonicalChain {
    block_roots: OrdMap<Slot, H256>,
}

impl CanonicalChain {
    pub(crate) fn insert(&mut self, slot: Slot, block_root: H256) {
        self.block_roots.insert(slot, block_root);
    }

    /// Removes all entries above `slot`, returning the removed slots in
    /// ascending order.
    pub(crate) fn prune_above(&mut self, slot: Slot) -> Vec<Slot> {
        let removed = self
            .block_roots
            .range(slot + 1..)
            .map(|(slot, _)| *slot)
            .collect_vec();

        for slot in &removed {
            self.block_roots.remove(slot);
        }

        removed
    }

    #[must_use]
    pub fn block_root_at_slot(&self, slot: Slot) -> Option<H256> {
        self.block_roots.get(&slot).copied()
    }

    #[must_use]
    pub fn head_slot(&self) -> Option<Slot> {
        self.block_roots.get_max().map(|(slot, _)| *slot)
    }

    #[must_use]
    pub fn head_root(&self) -> Option<H256> {
        self.block_roots.get_max().map(|(_, root)| *root)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.block_roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.block_roots.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.block_roots.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pruning_removes_only_entries_above_the_given_slot() {
        let mut chain = CanonicalChain::default();

        for slot in 0..=10 {
            chain.insert(slot, H256::repeat_byte(u8::try_from(slot).unwrap()));
        }

        let removed = chain.prune_above(7);

        assert_eq!(removed, [8, 9, 10]);
        assert_eq!(chain.head_slot(), Some(7));
        assert_eq!(chain.block_root_at_slot(7), Some(H256::repeat_byte(7)));
        assert_eq!(chain.block_root_at_slot(8), None);
        assert_eq!(chain.len(), 8);
    }

    #[test]
    fn snapshots_do_not_observe_later_mutations() {
        let mut chain = CanonicalChain::default();
        chain.insert(0, H256::repeat_byte(0));
        chain.insert(1, H256::repeat_byte(1));

        let snapshot = chain.clone();

        chain.prune_above(0);
        chain.insert(2, H256::repeat_byte(2));

        assert_eq!(snapshot.head_slot(), Some(1));
        assert_eq!(snapshot.block_root_at_slot(1), Some(H256::repeat_byte(1)));
    }
}
