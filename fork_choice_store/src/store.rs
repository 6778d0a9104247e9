use std::{collections::HashMap, sync::Arc};

use anyhow::Result;
use helper_functions::accessors;
use std_ext::ArcExt as _;
use types::phase0::{
    containers::{BeaconBlock, BeaconState},
    primitives::{Gwei, Slot, H256},
};

use crate::{
    error::Error,
    misc::{AttestationTargets, Cancellation},
    storage::BlockStore,
};

/// A per-invocation view of the block tree.
///
/// Wraps the block store for the duration of a single head selection and
/// memoizes ancestor lookups, which the vote tally repeats for every
/// candidate. Construct a fresh one for every call to [`Store::head`];
/// the memo must not outlive the block tree it was computed against.
pub struct Store<'a, S> {
    block_store: &'a S,
    cancellation: &'a Cancellation,
    ancestors: HashMap<(H256, Slot), Option<Arc<BeaconBlock>>>,
}

impl<'a, S: BlockStore> Store<'a, S> {
    #[must_use]
    pub fn new(block_store: &'a S, cancellation: &'a Cancellation) -> Self {
        Self {
            block_store,
            cancellation,
            ancestors: HashMap::new(),
        }
    }

    /// Selects the head block using LMD-GHOST.
    ///
    /// Starting from the justified block, descends the block tree greedily,
    /// at each level picking the child with the most attesting balance,
    /// until reaching a block with no known children. A child replaces the
    /// current best only on strictly greater weight, so among children of
    /// equal weight the first one in ascending slot order wins.
    ///
    /// Every iteration strictly increases the head slot and the scan is
    /// bounded by the highest known slot, so the descent terminates.
    pub fn head(
        &mut self,
        start_block: Arc<BeaconBlock>,
        start_state: &BeaconState,
        targets: &AttestationTargets,
    ) -> Result<Arc<BeaconBlock>> {
        let highest_slot = self.block_store.highest_known_slot();
        let mut head = start_block;

        loop {
            let children = self.children(&head, highest_slot)?;

            let Some(first) = children.first() else {
                break Ok(head);
            };

            let mut best = first.clone_arc();
            let mut best_weight = self.vote_count(&best, start_state, targets)?;

            for child in children.iter().skip(1) {
                let weight = self.vote_count(child, start_state, targets)?;

                if weight > best_weight {
                    best = child.clone_arc();
                    best_weight = weight;
                }
            }

            head = best;
        }
    }

    /// Sums the effective balances of validators whose latest attestation
    /// target has `candidate` as the ancestor at the candidate's slot.
    ///
    /// The sum is in the same unit as effective balances. Targets from
    /// before the candidate's slot have no such ancestor and contribute
    /// nothing.
    pub fn vote_count(
        &mut self,
        candidate: &BeaconBlock,
        state: &BeaconState,
        targets: &AttestationTargets,
    ) -> Result<Gwei> {
        let candidate_root = candidate.hash_tree_root();
        let mut balance = 0;

        for (validator_index, target) in targets {
            let Some(ancestor) = self.ancestor(target, candidate.slot)? else {
                continue;
            };

            if ancestor.hash_tree_root() == candidate_root {
                balance += accessors::effective_balance(state, *validator_index);
            }
        }

        Ok(balance)
    }

    /// Known children of `block`, in ascending slot order.
    ///
    /// Scans every slot after the block's up to `highest_slot`, skipping
    /// slots with no block. The block store holds at most one block per
    /// slot, so the scan is a deterministic total order over the children;
    /// the head selector relies on it to break ties.
    pub fn children(
        &mut self,
        block: &BeaconBlock,
        highest_slot: Slot,
    ) -> Result<Vec<Arc<BeaconBlock>>> {
        let block_root = block.hash_tree_root();
        let mut children = vec![];

        for slot in block.slot + 1..=highest_slot {
            self.cancellation.check()?;

            let Some(candidate) = self.block_store.block_at_slot(slot)? else {
                continue;
            };

            if candidate.parent_root == block_root {
                children.push(candidate);
            }
        }

        Ok(children)
    }

    /// Ancestor of `block` at `slot`, or `None` if the block is older than
    /// the requested slot.
    ///
    /// The walk is iterative. Its depth is bounded by the highest known
    /// slot, which recursion could not handle on hostile inputs.
    pub fn ancestor(
        &mut self,
        block: &Arc<BeaconBlock>,
        slot: Slot,
    ) -> Result<Option<Arc<BeaconBlock>>> {
        let key = (block.hash_tree_root(), slot);

        if let Some(ancestor) = self.ancestors.get(&key) {
            return Ok(ancestor.clone());
        }

        let mut current = block.clone_arc();

        let ancestor = loop {
            if current.slot == slot {
                break Some(current);
            }

            if current.slot < slot {
                break None;
            }

            self.cancellation.check()?;

            let parent_root = current.parent_root;

            current = self
                .block_store
                .block_by_root(parent_root)?
                .ok_or(Error::MissingParent {
                    block_root: current.hash_tree_root(),
                    parent_root,
                })?;
        };

        self.ancestors.insert(key, ancestor.clone());

        Ok(ancestor)
    }
}

