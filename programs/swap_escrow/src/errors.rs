use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Insufficient funds: settle amount is below the requested amount")]
    InsufficientFunds,
}
