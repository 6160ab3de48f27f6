use std::collections::HashMap;
use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::error::MerkleTreeError;
use crate::leaf::{parse_amount, ClaimLeaf};
use crate::tree::MerkleTree;

/// A single payout entry supplied for a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recipient {
    pub account: Pubkey,
    pub amount: u64,
}

impl Recipient {
    pub fn new(account: Pubkey, amount: u64) -> Self {
        Self { account, amount }
    }

    /// Builds an entry from a base58 address and a decimal amount string.
    pub fn parse(account: &str, amount: &str) -> Result<Self> {
        let account =
            Pubkey::from_str(account.trim()).map_err(|_| error!(MerkleTreeError::InvalidInput))?;
        Ok(Self::new(account, parse_amount(amount)?))
    }
}

/// Tree for one window, built from its full recipient list.
///
/// Keeps the list so proofs can be served by recipient. Leaf positions are
/// the positions in the input list.
#[derive(Clone, Debug)]
pub struct RecipientTree {
    window_index: u64,
    recipients: Vec<Recipient>,
    positions: HashMap<Pubkey, usize>,
    tree: MerkleTree,
}

impl RecipientTree {
    pub fn new(window_index: u64, recipients: Vec<Recipient>) -> Result<Self> {
        require!(!recipients.is_empty(), MerkleTreeError::InvalidInput);

        let mut positions = HashMap::with_capacity(recipients.len());
        for (position, recipient) in recipients.iter().enumerate() {
            // a zero leaf could never be claimed
            require!(recipient.amount > 0, MerkleTreeError::InvalidInput);
            require!(
                positions.insert(recipient.account, position).is_none(),
                MerkleTreeError::DuplicateRecipient
            );
        }

        let leaves = recipients
            .iter()
            .map(|r| ClaimLeaf::new(r.account, r.amount, window_index).hash())
            .collect();
        let tree = MerkleTree::new(leaves)?;

        Ok(Self {
            window_index,
            recipients,
            positions,
            tree,
        })
    }

    pub fn window_index(&self) -> u64 {
        self.window_index
    }

    pub fn root(&self) -> [u8; 32] {
        self.tree.root()
    }

    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Sum of all payouts, i.e. what the window has to be funded with.
    pub fn total_amount(&self) -> Result<u64> {
        self.recipients.iter().try_fold(0u64, |total, r| {
            total
                .checked_add(r.amount)
                .ok_or_else(|| error!(MerkleTreeError::InvalidInput))
        })
    }

    pub fn position_of(&self, account: &Pubkey) -> Option<usize> {
        self.positions.get(account).copied()
    }

    pub fn leaf(&self, position: usize) -> Result<ClaimLeaf> {
        let recipient = self
            .recipients
            .get(position)
            .ok_or_else(|| error!(MerkleTreeError::PositionOutOfRange))?;
        Ok(ClaimLeaf::new(
            recipient.account,
            recipient.amount,
            self.window_index,
        ))
    }

    pub fn proof(&self, position: usize) -> Result<Vec<[u8; 32]>> {
        self.tree.proof(position)
    }

    /// Amount and proof a claimant submits for `account`.
    pub fn proof_for(&self, account: &Pubkey) -> Result<(u64, Vec<[u8; 32]>)> {
        let position = self
            .position_of(account)
            .ok_or_else(|| error!(MerkleTreeError::InvalidInput))?;
        Ok((self.recipients[position].amount, self.tree.proof(position)?))
    }
}
