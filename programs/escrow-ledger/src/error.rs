use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Deposit amount must be greater than zero")]
    InvalidAmount,
    #[msg("Signer is not the owner of this escrow entry")]
    Unauthorized,
    #[msg("Escrow entry holds a different mint")]
    MintMismatch,
    #[msg("Escrow amount overflow")]
    AmountOverflow,
    #[msg("Custody account holds less than the escrowed amount")]
    CustodyShortfall,
    #[msg("Mint extensions can move custody balance outside the ledger")]
    UnsupportedMint,
}
