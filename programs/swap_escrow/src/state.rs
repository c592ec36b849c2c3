use anchor_lang::prelude::*;

/// Terms of one pending swap, stored at the escrow PDA.
///
/// Lifecycle is represented by account presence: the record exists from
/// `initialize` until `settle` or `cancel` closes it and reclaims its rent.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    /// Caller-chosen nonce; part of the PDA derivation, so one maker can
    /// run several escrows concurrently
    pub seed: u64,
    /// Creator of the escrow; holds deposit and cancel rights
    pub maker: Pubkey,
    /// Mint of the token held in the vault
    pub mint_offered: Pubkey,
    /// Mint the maker wants in exchange
    pub mint_requested: Pubkey,
    /// Amount of `mint_requested` the maker demands from the taker
    pub amount_requested: u64,
    /// Vault token account holding the offered tokens
    pub vault: Pubkey,
    /// PDA bump, cached at initialize
    pub bump: u8,
}
