use static_assertions::assert_eq_size;

pub use ethereum_types::H256;

pub type Epoch = u64;
pub type Gwei = u64;
pub type Slot = u64;
pub type ValidatorIndex = u64;

assert_eq_size!(H256, [u8; 32]);
