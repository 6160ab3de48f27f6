use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds used by the merkle distributor. Every window, vault and claim
 * status address is derived from these.
 */

#[constant]
/// Seed for the per-owner window registry PDA
/// - Used in: ["window_registry", owner]
/// - Holds the counter that assigns sequential window indices
pub const WINDOW_REGISTRY_SEED: &str = "window_registry";

/// Seed for window PDA derivation
/// - Used in: ["window", registry, window_index (u64 LE)]
/// - An index is assigned once and never reused
pub const WINDOW_SEED: &str = "window";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", window]
/// - The window PDA is the vault's token authority
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", window, recipient]
/// - One claim status per (window, recipient) pair
pub const CLAIM_SEED: &str = "claim";
