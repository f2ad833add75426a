use anchor_lang::{error::ErrorCode, prelude::*};

use crate::error::EscrowError;

/// Custody record for one owner's balance of one mint.
///
/// Lives at the PDA `[ESCROW_SEED, owner, mint]`. Field order is the
/// persisted layout: after the 8 byte discriminator come the owner, the
/// little-endian amount and the mint, 80 bytes in total.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct EscrowEntry {
    pub owner: Pubkey, // sole controller of the entry
    pub amount: u64,   // tokens held in the custody vault
    pub mint: Pubkey,  // token type held
}

/// Lifecycle of an entry as seen by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Allocated in this transaction but not yet opened
    Absent,
    Active { amount: u64 },
}

impl EscrowEntry {
    pub fn state(&self) -> EntryState {
        if self.owner == Pubkey::default() {
            EntryState::Absent
        } else {
            EntryState::Active {
                amount: self.amount,
            }
        }
    }

    /// Binds a freshly allocated record to its owner and mint
    pub fn open(&mut self, owner: Pubkey, mint: Pubkey) {
        self.owner = owner;
        self.mint = mint;
        self.amount = 0;
    }

    /// Adds a deposit to the held balance and returns the new total
    pub fn credit(&mut self, deposit: u64) -> Result<u64> {
        require!(deposit > 0, EscrowError::InvalidAmount);
        self.amount = self
            .amount
            .checked_add(deposit)
            .ok_or(EscrowError::AmountOverflow)?;
        Ok(self.amount)
    }

    /// Decodes raw account data fetched for an entry address.
    ///
    /// An empty account means the entry was never opened or has already
    /// been withdrawn, reported as `AccountNotInitialized`.
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return err!(ErrorCode::AccountNotInitialized);
        }
        let mut buf = data;
        Self::try_deserialize(&mut buf)
    }
}
