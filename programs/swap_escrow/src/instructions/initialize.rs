use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::constants::ESCROW_SEED;
use crate::state::Escrow;

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Initialize<'info> {
    /// The maker who sets the exchange terms
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Escrow record holding the swap terms
    #[account(
        init,
        payer = maker,
        space = 8 + Escrow::INIT_SPACE,
        seeds = [ESCROW_SEED, maker.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump,
    )]
    pub escrow: Account<'info, Escrow>,

    /// Mint of the token the maker will deposit
    pub mint_offered: Account<'info, Mint>,

    /// Mint of the token the maker wants in return
    pub mint_requested: Account<'info, Mint>,

    /// Maker's token account for the offered mint; checked up front so a
    /// maker without one fails here rather than at the first deposit
    #[account(
        associated_token::mint = mint_offered,
        associated_token::authority = maker,
    )]
    pub maker_ata_offered: Account<'info, TokenAccount>,

    /// Vault owned by the escrow PDA; created empty, funded by `deposit`
    #[account(
        init,
        payer = maker,
        associated_token::mint = mint_offered,
        associated_token::authority = escrow,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Populate the escrow record with the swap terms
    pub fn init_escrow(
        &mut self,
        seed: u64,
        amount_requested: u64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        self.escrow.set_inner(Escrow {
            seed,
            maker: self.maker.key(),
            mint_offered: self.mint_offered.key(),
            mint_requested: self.mint_requested.key(),
            amount_requested,
            vault: self.vault.key(),
            bump: bumps.escrow,
        });
        Ok(())
    }
}

pub fn handler(ctx: Context<Initialize>, seed: u64, amount_requested: u64) -> Result<()> {
    require_gt!(amount_requested, 0, crate::errors::EscrowError::InvalidAmount);

    ctx.accounts.init_escrow(seed, amount_requested, &ctx.bumps)?;

    msg!(
        "escrow initialized: seed={}, amount_requested={}",
        seed,
        amount_requested
    );
    Ok(())
}
