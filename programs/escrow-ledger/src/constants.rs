use anchor_lang::prelude::*;

use crate::EscrowEntry;

/// Seed tag prefixed to every escrow entry address
#[constant]
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Bytes allocated for an entry: discriminator + owner + amount + mint
pub const ESCROW_ENTRY_SPACE: usize = 8 + EscrowEntry::INIT_SPACE;
