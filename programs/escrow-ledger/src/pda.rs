use anchor_lang::prelude::*;

use crate::constants::ESCROW_SEED;

/// Derives the entry address and bump for `(owner, mint)` under this program.
pub fn entry_address(owner: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_SEED, owner.as_ref(), mint.as_ref()], &crate::ID)
}

/// Proof that the program controls an entry PDA.
///
/// Only the authorization guard hands these out, after it has re-derived the
/// entry address from the signer. The seeds sign CPIs on behalf of the entry,
/// which is the authority of its custody vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryAuthority {
    owner: Pubkey,
    mint: Pubkey,
    bump: [u8; 1],
}

impl EntryAuthority {
    pub(crate) fn new(owner: Pubkey, mint: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            mint,
            bump: [bump],
        }
    }

    pub fn seeds(&self) -> [&[u8]; 4] {
        [
            ESCROW_SEED,
            self.owner.as_ref(),
            self.mint.as_ref(),
            &self.bump,
        ]
    }
}
