use types::{
    config::Config,
    phase0::{
        containers::BeaconState,
        primitives::{Epoch, Gwei, ValidatorIndex},
    },
};

use crate::{misc, predicates};

#[must_use]
pub fn get_current_epoch(config: &Config, state: &BeaconState) -> Epoch {
    misc::compute_epoch_at_slot(config, state.slot)
}

pub fn active_validator_indices(
    state: &BeaconState,
    epoch: Epoch,
) -> impl Iterator<Item = ValidatorIndex> + '_ {
    (0..)
        .zip(state.validators.iter())
        .filter(move |(_, validator)| predicates::is_active_validator(validator, epoch))
        .map(|(index, _)| index)
}

/// Effective balance of the validator at `validator_index`.
///
/// Panics if the index is not in the registry. Indices reaching this function
/// come from the registry itself through the attestation target map, so a
/// missing one is a programming error rather than a recoverable failure.
#[must_use]
pub fn effective_balance(state: &BeaconState, validator_index: ValidatorIndex) -> Gwei {
    let index = usize::try_from(validator_index)
        .expect("validator indices in the registry fit in usize");

    state
        .validators
        .get(index)
        .expect("attestation targets are built from indices present in the registry")
        .effective_balance
}
