use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    self,
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
    state::Mint,
};

use crate::{
    error::EscrowError,
    pda::{entry_address, EntryAuthority},
    state::{EntryState, EscrowEntry},
};

/// Checks that `signer` may operate on the entry at `entry_key` for `mint`.
///
/// The address is re-derived from the signer's own key, so a non-owner fails
/// even when it supplies the real entry address. An opened entry must also
/// record the signer as owner and the same mint. Runs before any mutation.
pub fn authorize(
    signer: &Pubkey,
    mint: &Pubkey,
    entry_key: &Pubkey,
    entry: &EscrowEntry,
) -> Result<EntryAuthority> {
    let (expected, bump) = entry_address(signer, mint);
    require_keys_eq!(expected, *entry_key, EscrowError::Unauthorized);

    if let EntryState::Active { .. } = entry.state() {
        require_keys_eq!(entry.owner, *signer, EscrowError::Unauthorized);
        require_keys_eq!(entry.mint, *mint, EscrowError::MintMismatch);
    }

    Ok(EntryAuthority::new(*signer, *mint, bump))
}

/// Token-2022 extensions under which the vault balance can differ from what
/// the ledger credited: fees withheld on transfer, arbitrary hook programs,
/// and a delegate able to move vault funds.
const UNSUPPORTED_EXTENSIONS: [ExtensionType; 3] = [
    ExtensionType::TransferFeeConfig,
    ExtensionType::TransferHook,
    ExtensionType::PermanentDelegate,
];

/// Rejects mints whose extensions would break `entry.amount == vault.amount`.
/// Classic SPL Token mints carry no extensions and always pass.
pub fn check_mint(mint: &AccountInfo) -> Result<()> {
    if *mint.owner != spl_token_2022::ID {
        return Ok(());
    }
    let data = mint.try_borrow_data()?;
    let state = StateWithExtensions::<Mint>::unpack(&data)?;
    check_extensions(&state.get_extension_types()?)
}

pub fn check_extensions(extensions: &[ExtensionType]) -> Result<()> {
    require!(
        !extensions
            .iter()
            .any(|extension| UNSUPPORTED_EXTENSIONS.contains(extension)),
        EscrowError::UnsupportedMint
    );
    Ok(())
}
