use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::error::MerkleTreeError;
use crate::LEAF_PREFIX;

/// Version byte leading every encoded leaf
pub const LEAF_VERSION: u8 = 1;

const RECIPIENT_TAG: u8 = 0x01;
const AMOUNT_TAG: u8 = 0x02;
const WINDOW_INDEX_TAG: u8 = 0x03;

/// version + (tag + 32-byte recipient) + (tag + u64) + (tag + u64)
pub const LEAF_ENCODED_LEN: usize = 1 + (1 + 32) + (1 + 8) + (1 + 8);

/// One recipient's payout inside a window.
///
/// The leaf commits to exactly these three fields. Adding or dropping one
/// changes every root and proof built from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimLeaf {
    pub recipient: Pubkey,
    pub amount: u64,
    pub window_index: u64,
}

impl ClaimLeaf {
    pub fn new(recipient: Pubkey, amount: u64, window_index: u64) -> Self {
        Self {
            recipient,
            amount,
            window_index,
        }
    }

    /// Fixed-width tagged encoding, see [`encode_leaf`]
    pub fn encode(&self) -> [u8; LEAF_ENCODED_LEN] {
        let mut out = [0u8; LEAF_ENCODED_LEN];
        out[0] = LEAF_VERSION;
        out[1] = RECIPIENT_TAG;
        out[2..34].copy_from_slice(self.recipient.as_ref());
        out[34] = AMOUNT_TAG;
        out[35..43].copy_from_slice(&self.amount.to_le_bytes());
        out[43] = WINDOW_INDEX_TAG;
        out[44..52].copy_from_slice(&self.window_index.to_le_bytes());
        out
    }

    pub fn hash(&self) -> [u8; 32] {
        hash_leaf(&self.encode())
    }
}

/// Encodes a (recipient, amount, window_index) record.
///
/// Every field is fixed width, so two distinct records can never serialize
/// to the same bytes. Amounts wider than `u64` are rejected.
pub fn encode_leaf(
    recipient: &Pubkey,
    amount: u128,
    window_index: u64,
) -> Result<[u8; LEAF_ENCODED_LEN]> {
    let amount = u64::try_from(amount).map_err(|_| error!(MerkleTreeError::InvalidInput))?;
    Ok(ClaimLeaf::new(*recipient, amount, window_index).encode())
}

pub fn hash_leaf(encoded: &[u8]) -> [u8; 32] {
    hashv(&[&[LEAF_PREFIX], encoded]).to_bytes()
}

/// Parses a decimal amount string from a recipient list.
pub fn parse_amount(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    require!(
        !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()),
        MerkleTreeError::InvalidInput
    );
    raw.parse::<u64>()
        .map_err(|_| error!(MerkleTreeError::InvalidInput))
}
