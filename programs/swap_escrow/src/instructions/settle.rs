use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{
        close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
    },
};

use crate::constants::ESCROW_SEED;
use crate::state::Escrow;

#[derive(Accounts)]
pub struct Settle<'info> {
    /// The taker accepting the exchange terms
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The maker who created the escrow; receives the requested tokens
    /// and the reclaimed rent
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Escrow record (closed on success, rent to maker)
    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = mint_offered,
        has_one = mint_requested,
        has_one = vault,
        seeds = [ESCROW_SEED, maker.key().as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    pub mint_offered: Box<Account<'info, Mint>>,

    pub mint_requested: Box<Account<'info, Mint>>,

    /// Vault holding the offered tokens (emptied and closed)
    #[account(
        mut,
        associated_token::mint = mint_offered,
        associated_token::authority = escrow,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Taker's token account for the offered mint (receives the vault)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_offered,
        associated_token::authority = taker,
    )]
    pub taker_ata_offered: Box<Account<'info, TokenAccount>>,

    /// Taker's token account for the requested mint (pays the maker)
    #[account(
        mut,
        associated_token::mint = mint_requested,
        associated_token::authority = taker,
    )]
    pub taker_ata_requested: Box<Account<'info, TokenAccount>>,

    /// Maker's token account for the requested mint (receives payment)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_requested,
        associated_token::authority = maker,
    )]
    pub maker_ata_requested: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Settle<'info> {
    /// Transfer exactly the requested amount from taker to maker
    pub fn pay_maker(&mut self) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.taker_ata_requested.to_account_info(),
            mint: self.mint_requested.to_account_info(),
            to: self.maker_ata_requested.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, self.escrow.amount_requested, self.mint_requested.decimals)
    }

    /// Release the full vault balance to the taker, signed with the escrow
    /// PDA seeds, then close the vault with rent back to the maker
    pub fn release_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            ESCROW_SEED,
            self.maker.key.as_ref(),
            &self.escrow.seed.to_le_bytes(),
            &[self.escrow.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_offered.to_account_info(),
            to: self.taker_ata_offered.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, self.vault.amount, self.mint_offered.decimals)?;

        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

/// `amount` is the taker's bid; the record's `amount_requested` is the source
/// of truth for what actually moves.
pub fn handler(ctx: Context<Settle>, amount: u64) -> Result<()> {
    require_gte!(
        amount,
        ctx.accounts.escrow.amount_requested,
        crate::errors::EscrowError::InsufficientFunds
    );

    ctx.accounts.pay_maker()?;
    ctx.accounts.release_and_close_vault()?;

    msg!("escrow settled: seed={}", ctx.accounts.escrow.seed);
    Ok(())
}
