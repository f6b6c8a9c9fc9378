use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Amount `spender` may move out of `owner`'s balance
#[account]
#[derive(InitSpace)]
pub struct Allowance {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl Allowance {
    /// Overwrites the allowance; first approval also binds the record to its pair
    pub fn approve(&mut self, owner: Pubkey, spender: Pubkey, amount: u64, bump: u8) {
        self.owner = owner;
        self.spender = spender;
        self.amount = amount;
        self.bump = bump;
    }

    pub fn check_spend(&self, amount: u64) -> Result<()> {
        require!(amount <= self.amount, ErrorCode::InsufficientAllowance);
        Ok(())
    }

    pub fn spend(&mut self, amount: u64) -> Result<()> {
        self.check_spend(amount)?;
        self.amount -= amount;
        Ok(())
    }
}
