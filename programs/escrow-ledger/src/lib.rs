#![allow(clippy::result_large_err)]
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("GzZeYYJ2zGhiYXtPy4eGsQuniay9uGmZMA77gNCTMFZc");

pub mod constants;
pub mod error;
pub mod guard;
pub mod pda;
pub mod state;
pub use state::*;
pub mod contexts;
pub use contexts::*;

pub use error::EscrowError;

#[program]
pub mod escrow_ledger {
    use super::*;

    /// Moves `amount` tokens from the owner into custody, creating the
    /// owner's entry for this mint on first use. Returns the entry's
    /// accumulated balance.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
        ctx.accounts.deposit(amount)
    }

    /// Returns the full custody balance to the owner and closes the entry
    /// together with its vault. There is no partial withdrawal.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<u64> {
        ctx.accounts.withdraw()
    }
}
