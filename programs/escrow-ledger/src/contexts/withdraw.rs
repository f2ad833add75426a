use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::{error::EscrowError, guard, pda::EntryAuthority, state::EscrowEntry};

/// Accounts for `withdraw`. `entry` is declared ahead of the owner's token
/// account so a foreign signer is turned away by `has_one = owner` first.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Owner of the entry, receives the tokens and the reclaimed rent
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Token type recorded in the entry
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Fails with `AccountNotInitialized` once the entry has been withdrawn
    #[account(
        mut,
        close = owner,
        has_one = owner @ EscrowError::Unauthorized,
        has_one = mint @ EscrowError::MintMismatch
    )]
    pub entry: Account<'info, EscrowEntry>,

    /// Custody vault owned by the entry PDA, emptied and closed here
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = entry,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Destination of the withdrawn tokens
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
        token::token_program = token_program
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Program that created the vault
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// Program owning `mint`, moves the tokens and closes the vault
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    /// Returns the whole custody balance to the owner and closes the vault.
    /// The entry itself is closed by the `close = owner` constraint on exit.
    pub fn withdraw(&mut self) -> Result<u64> {
        let authority = guard::authorize(
            &self.owner.key(),
            &self.mint.key(),
            &self.entry.key(),
            &self.entry,
        )?;

        let held = self.entry.amount;
        let custody = self.vault.amount;
        require_gte!(custody, held, EscrowError::CustodyShortfall);
        if custody > held {
            // tokens sent straight to the vault leave with the entry
            msg!("Escrow vault surplus={}", custody - held);
        }

        self.transfer_to_owner(&authority, custody)?;
        self.close_vault(&authority)?;

        msg!("Withdraw: amount={}", custody);
        Ok(custody)
    }

    /// Vault to owner transfer signed by the entry PDA
    fn transfer_to_owner(&self, authority: &EntryAuthority, amount: u64) -> Result<()> {
        // The entry PDA owns the vault, so the program signs with its seeds
        let seeds = authority.seeds();
        let signer_seeds = [&seeds[..]];

        let accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.owner_token_account.to_account_info(),
            authority: self.entry.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        transfer_checked(ctx, amount, self.mint.decimals)
    }

    /// Closes the emptied vault, sending its rent to the owner
    fn close_vault(&self, authority: &EntryAuthority) -> Result<()> {
        let seeds = authority.seeds();
        let signer_seeds = [&seeds[..]];

        let accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.owner.to_account_info(),
            authority: self.entry.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        close_account(ctx)
    }
}
