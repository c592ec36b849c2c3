use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::ESCROW_SEED;
use crate::state::Escrow;

#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The maker funding the vault; must match the record's maker
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Escrow record; PDA re-derivation proves the (maker, seed) linkage
    #[account(
        has_one = maker,
        has_one = mint_offered,
        has_one = vault,
        seeds = [ESCROW_SEED, maker.key().as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    /// Mint of the deposited token
    pub mint_offered: Account<'info, Mint>,

    /// Vault owned by the escrow PDA (receives the deposit)
    #[account(
        mut,
        associated_token::mint = mint_offered,
        associated_token::authority = escrow,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Maker's token account for the offered mint (source of the deposit)
    #[account(
        mut,
        associated_token::mint = mint_offered,
        associated_token::authority = maker,
    )]
    pub maker_ata_offered: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Deposit<'info> {
    /// Transfer offered tokens from the maker into the vault
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.maker_ata_offered.to_account_info(),
            mint: self.mint_offered.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.mint_offered.decimals)
    }
}

/// Deposits are cumulative: the vault balance, not a record field, is the
/// authoritative funded amount.
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require_gt!(amount, 0, crate::errors::EscrowError::InvalidAmount);

    ctx.accounts.deposit(amount)?;

    msg!("deposited {} into vault", amount);
    Ok(())
}
