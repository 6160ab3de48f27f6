//! Off-ledger half of the merkle distributor.
//!
//! Builds the per-window merkle tree from an ordered recipient list, serves
//! inclusion proofs and verifies them. The on-chain program links this crate
//! for [`verify`] and [`ClaimLeaf`], so the hashing rules below are shared
//! bit-for-bit between the tree builder and the claim verifier:
//!
//! - leaf:  `sha256(0x00 || encode(recipient, amount, window_index))`
//! - node:  `sha256(0x01 || min(a, b) || max(a, b))`
//! - odd level: the last node is paired with itself
//!
//! Input order is committed as given; it is not canonicalized.

pub mod error;
pub mod leaf;
pub mod proof;
pub mod recipients;
pub mod tree;

pub use error::MerkleTreeError;
pub use leaf::{encode_leaf, hash_leaf, parse_amount, ClaimLeaf, LEAF_ENCODED_LEN, LEAF_VERSION};
pub use proof::{hash_intermediate, verify};
pub use recipients::{Recipient, RecipientTree};
pub use tree::MerkleTree;

/// Domain prefix for leaf digests
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain prefix for internal node digests
pub const INTERMEDIATE_PREFIX: u8 = 0x01;
