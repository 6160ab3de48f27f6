use anchor_lang::prelude::*;

#[error_code(offset = 7000)]
pub enum MerkleTreeError {
    #[msg("Invalid input")]
    InvalidInput,
    #[msg("Leaf position out of range")]
    PositionOutOfRange,
    #[msg("Recipient appears more than once in the window")]
    DuplicateRecipient,
}
