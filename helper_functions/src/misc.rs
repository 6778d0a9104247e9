use types::{
    config::Config,
    phase0::primitives::{Epoch, Slot},
};

#[must_use]
pub fn compute_epoch_at_slot(config: &Config, slot: Slot) -> Epoch {
    slot / config.slots_per_epoch
}

#[must_use]
pub fn compute_start_slot_at_epoch(config: &Config, epoch: Epoch) -> Slot {
    epoch.saturating_mul(config.slots_per_epoch.get())
}

#[must_use]
pub fn is_epoch_start(config: &Config, slot: Slot) -> bool {
    slot % config.slots_per_epoch == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_math_round_trips_for_epoch_starts() {
        let config = Config::minimal();

        for epoch in [0, 1, 5, 1000] {
            let start_slot = compute_start_slot_at_epoch(&config, epoch);

            assert!(is_epoch_start(&config, start_slot));
            assert_eq!(compute_epoch_at_slot(&config, start_slot), epoch);
        }
    }

    #[test]
    fn slots_in_the_middle_of_an_epoch_are_not_epoch_starts() {
        let config = Config::minimal();

        assert_eq!(compute_epoch_at_slot(&config, 15), 1);
        assert!(!is_epoch_start(&config, 15));
    }
}
