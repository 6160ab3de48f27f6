use anchor_lang::prelude::*;

#[error_code]
pub enum MerkleDistributorError {
    // Access control errors
    #[msg("Only the window owner can perform this action")]
    OnlyOwner,

    // Window registry errors
    #[msg("Window not found")]
    WindowNotFound,
    #[msg("Window account must be owned by this program")]
    WindowNotOwnedByProgram,
    #[msg("Vesting start must not be after vesting end")]
    InvalidVestingRange,
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Window has been closed")]
    WindowClosed,
    #[msg("Window has not been closed")]
    WindowNotClosed,

    // Claim errors
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Nothing has vested yet")]
    NothingVested,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Claim exceeds the window's remaining balance")]
    InsufficientWindowBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the window's reward token")]
    TokenMintMismatch,
}
