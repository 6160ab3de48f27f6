use anchor_lang::solana_program::hash::hashv;

use crate::INTERMEDIATE_PREFIX;

/// Combines two sibling digests into their parent.
///
/// Children are ordered lexicographically before hashing, so a proof needs
/// no left/right flags and builder and verifier agree on every pair.
pub fn hash_intermediate(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[&[INTERMEDIATE_PREFIX], a, b]).to_bytes()
    } else {
        hashv(&[&[INTERMEDIATE_PREFIX], b, a]).to_bytes()
    }
}

/// Recomputes the root from `leaf` and its sibling path and compares it
/// with `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_intermediate(&node, sibling));
    computed == root
}
