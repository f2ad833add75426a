use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::{ESCROW_ENTRY_SPACE, ESCROW_SEED},
    guard,
    state::{EntryState, EscrowEntry},
};

/// Accounts for `deposit`. The entry and its custody vault are created on the
/// owner's first deposit for a mint and reused afterwards.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Owner of the entry, signs the transfer out of `owner_token_account` and pays rent
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Token type held by the entry, SPL Token or Token-2022
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Seeds use the signer's own key, so nobody can deposit into another owner's entry
    #[account(
        init_if_needed,
        payer = owner,
        space = ESCROW_ENTRY_SPACE,
        seeds = [ESCROW_SEED, owner.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub entry: Account<'info, EscrowEntry>,

    /// Custody vault, the entry's associated token account for `mint`
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = entry,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Source of the deposited tokens, must belong to the owner
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
        token::token_program = token_program
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Creates the vault on first deposit
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// Program owning `mint`, performs the transfer into the vault
    pub token_program: Interface<'info, TokenInterface>,
    /// Allocates the entry account
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    /// Credits `amount` to the entry, opening it if needed, and moves the
    /// tokens into custody. Returns the entry's new balance.
    pub fn deposit(&mut self, amount: u64) -> Result<u64> {
        let owner = self.owner.key();
        let mint = self.mint.key();
        guard::check_mint(&self.mint.to_account_info())?;
        guard::authorize(&owner, &mint, &self.entry.key(), &self.entry)?;

        // A fresh entry is bound to the signer and mint before the first credit
        if self.entry.state() == EntryState::Absent {
            self.entry.open(owner, mint);
            msg!("Escrow entry opened");
        }

        let total = self.entry.credit(amount)?;
        self.transfer_to_custody(amount)?;

        msg!("Deposit: amount={} total={}", amount, total);
        Ok(total)
    }

    /// Owner-signed transfer from the owner's token account into the vault
    fn transfer_to_custody(&self, amount: u64) -> Result<()> {
        // The owner is the authority here, no program signature is involved
        let accounts = TransferChecked {
            from: self.owner_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.owner.to_account_info(),
        };
        let ctx = CpiContext::new(self.token_program.to_account_info(), accounts);

        // Decimals come from the mint so the token program can check them
        transfer_checked(ctx, amount, self.mint.decimals)
    }
}
