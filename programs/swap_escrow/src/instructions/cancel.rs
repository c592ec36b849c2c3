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
pub struct Cancel<'info> {
    /// The maker who created the escrow; only they may cancel it
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Escrow record (closed on success, rent to maker)
    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = mint_offered,
        has_one = vault,
        seeds = [ESCROW_SEED, maker.key().as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    pub mint_offered: Account<'info, Mint>,

    /// Vault holding the offered tokens (emptied and closed)
    #[account(
        mut,
        associated_token::mint = mint_offered,
        associated_token::authority = escrow,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Maker's token account for the offered mint (receives the refund)
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_offered,
        associated_token::authority = maker,
    )]
    pub maker_ata_offered: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Cancel<'info> {
    /// Return the full vault balance to the maker and close the vault
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            ESCROW_SEED,
            self.maker.key.as_ref(),
            &self.escrow.seed.to_le_bytes(),
            &[self.escrow.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_offered.to_account_info(),
            to: self.maker_ata_offered.to_account_info(),
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

pub fn handler(ctx: Context<Cancel>) -> Result<()> {
    ctx.accounts.refund_and_close_vault()?;

    msg!("escrow cancelled: seed={}", ctx.accounts.escrow.seed);
    Ok(())
}
