use anchor_lang::prelude::*;

use crate::error::MerkleTreeError;
use crate::proof::hash_intermediate;

/// Binary merkle tree over an ordered list of leaf digests.
///
/// All levels are stored back to back in `nodes`: the leaves first, then
/// each parent level, ending with the root. A level with an odd number of
/// nodes pairs its last node with itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl MerkleTree {
    /// Builds the tree. Fails with `InvalidInput` on an empty leaf list.
    pub fn new(leaves: Vec<[u8; 32]>) -> Result<Self> {
        require!(!leaves.is_empty(), MerkleTreeError::InvalidInput);

        let leaf_count = leaves.len();
        let mut tree = MerkleTree {
            nodes: leaves,
            leaf_count,
        };
        tree.build_levels();
        Ok(tree)
    }

    fn build_levels(&mut self) {
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let next_start = self.nodes.len();
            for i in (0..level_len).step_by(2) {
                let left = self.nodes[level_start + i];
                let right = if i + 1 < level_len {
                    self.nodes[level_start + i + 1]
                } else {
                    left
                };
                self.nodes.push(hash_intermediate(&left, &right));
            }
            level_start = next_start;
            level_len = next_level_len(level_len);
        }
    }

    pub fn root(&self) -> [u8; 32] {
        // never empty: `new` rejects an empty leaf list
        self.nodes[self.nodes.len() - 1]
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn leaf(&self, position: usize) -> Option<[u8; 32]> {
        (position < self.leaf_count).then(|| self.nodes[position])
    }

    /// Number of levels above the leaves, which is also the proof length.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut level_len = self.leaf_count;
        while level_len > 1 {
            level_len = next_level_len(level_len);
            depth += 1;
        }
        depth
    }

    /// Sibling path from the leaf at `position` up to the root.
    pub fn proof(&self, position: usize) -> Result<Vec<[u8; 32]>> {
        require!(
            position < self.leaf_count,
            MerkleTreeError::PositionOutOfRange
        );

        let mut proof = Vec::with_capacity(self.depth());
        let mut index = position;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling = if index % 2 == 0 {
                // last node of an odd level is its own sibling
                if index + 1 < level_len {
                    index + 1
                } else {
                    index
                }
            } else {
                index - 1
            };
            proof.push(self.nodes[level_start + sibling]);

            index /= 2;
            level_start += level_len;
            level_len = next_level_len(level_len);
        }

        Ok(proof)
    }
}

fn next_level_len(level_len: usize) -> usize {
    (level_len + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::verify;
    use anchor_lang::error::Error;
    use anchor_lang::solana_program::hash::hashv;

    fn leaves(count: u8) -> Vec<[u8; 32]> {
        (0..count).map(|i| hashv(&[&[i]]).to_bytes()).collect()
    }

    #[test]
    fn test_empty_tree_is_rejected() {
        let err = MerkleTree::new(vec![]).unwrap_err();
        assert_eq!(err, Error::from(MerkleTreeError::InvalidInput));
    }

    #[test]
    fn test_single_leaf_root_is_leaf() {
        let leaf = leaves(1)[0];
        let tree = MerkleTree::new(vec![leaf]).unwrap();

        assert_eq!(tree.root(), leaf);
        assert_eq!(tree.depth(), 0);
        assert!(tree.proof(0).unwrap().is_empty());
    }

    #[test]
    fn test_every_position_verifies() {
        for count in 1..=33u8 {
            let input = leaves(count);
            let tree = MerkleTree::new(input.clone()).unwrap();
            let root = tree.root();

            for (position, leaf) in input.iter().enumerate() {
                let proof = tree.proof(position).unwrap();
                assert_eq!(proof.len(), tree.depth());
                assert!(
                    verify(&proof, root, *leaf),
                    "leaf {} of {} failed to verify",
                    position,
                    count
                );
            }
        }
    }

    #[test]
    fn test_three_leaf_tree_duplicates_last_node() {
        let input = leaves(3);
        let tree = MerkleTree::new(input.clone()).unwrap();

        let left = hash_intermediate(&input[0], &input[1]);
        let right = hash_intermediate(&input[2], &input[2]);
        let expected = hash_intermediate(&left, &right);

        assert_eq!(tree.root(), expected);
        assert_eq!(tree.root(), MerkleTree::new(input.clone()).unwrap().root());
        assert_eq!(tree.proof(2).unwrap(), vec![input[2], left]);
    }

    #[test]
    fn test_order_is_committed() {
        let input = leaves(4);
        let mut reordered = input.clone();
        reordered.swap(0, 2);

        let root = MerkleTree::new(input).unwrap().root();
        assert_ne!(root, MerkleTree::new(reordered).unwrap().root());
    }

    #[test]
    fn test_tampered_proof_or_leaf_fails() {
        let input = leaves(7);
        let tree = MerkleTree::new(input.clone()).unwrap();
        let root = tree.root();

        for position in 0..input.len() {
            let proof = tree.proof(position).unwrap();
            for level in 0..proof.len() {
                for byte in [0usize, 17, 31] {
                    let mut tampered = proof.clone();
                    tampered[level][byte] ^= 0x01;
                    assert!(!verify(&tampered, root, input[position]));
                }
            }

            let mut leaf = input[position];
            leaf[0] = leaf[0].wrapping_add(1);
            assert!(!verify(&proof, root, leaf));
        }

        let outsider = hashv(&[b"not in the tree"]).to_bytes();
        assert!(!verify(&tree.proof(0).unwrap(), root, outsider));
    }

    #[test]
    fn test_truncated_or_extended_proof_fails() {
        let input = leaves(8);
        let tree = MerkleTree::new(input.clone()).unwrap();
        let proof = tree.proof(5).unwrap();

        assert!(!verify(&proof[..proof.len() - 1], tree.root(), input[5]));

        let mut extended = proof.clone();
        extended.push(input[0]);
        assert!(!verify(&extended, tree.root(), input[5]));
    }

    #[test]
    fn test_position_out_of_range() {
        let tree = MerkleTree::new(leaves(4)).unwrap();
        assert_eq!(tree.leaf(4), None);
        assert_eq!(
            tree.proof(4).unwrap_err(),
            Error::from(MerkleTreeError::PositionOutOfRange)
        );
    }
}
