use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("A2bxjw9SqFT14g7WPBiXoqrnW3e8k6k28EXJQ4xa84Xc");

#[program]
pub mod swap_escrow {
    use super::*;

    /// Create the escrow record and its empty vault; moves no tokens
    pub fn initialize(ctx: Context<Initialize>, seed: u64, amount_requested: u64) -> Result<()> {
        instructions::initialize::handler(ctx, seed, amount_requested)
    }

    /// Fund the vault from the maker's token account; repeatable, cumulative
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Accept the swap: taker pays the requested amount, receives the vault
    pub fn settle(ctx: Context<Settle>, amount: u64) -> Result<()> {
        instructions::settle::handler(ctx, amount)
    }

    /// Maker backs out: vault returns to the maker, escrow closes
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        instructions::cancel::handler(ctx)
    }
}
