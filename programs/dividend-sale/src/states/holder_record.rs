use anchor_lang::prelude::*;
use ruint::aliases::U256;
use crate::errors::ErrorCode;
use crate::math::{accumulated_entitlement, SignedWide};

/// Per-holder balance and dividend bookkeeping
#[account]
#[derive(InitSpace, Default)]
pub struct HolderRecord {
    /// The holder's wallet address
    pub owner: Pubkey,
    /// Units held
    pub balance: u64,
    /// Signed adjustment cancelling entitlement a balance change would otherwise grant or revoke
    pub dividend_correction: SignedWide,
    /// Lamports claimed so far (never decreases)
    pub withdrawn: u64,
    /// Set on first touch; `init_if_needed` leaves it false
    pub initialized: bool,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl HolderRecord {
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            balance: 0,
            dividend_correction: SignedWide::ZERO,
            withdrawn: 0,
            initialized: true,
            bump,
        }
    }

    /// Records created by `init_if_needed` start zeroed until first touched
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Everything this holder has earned, claimed or not
    pub fn accumulated_dividends(&self, magnified_per_share: U256) -> Result<u64> {
        accumulated_entitlement(magnified_per_share, self.balance, self.dividend_correction)
    }

    /// Earned and not yet claimed
    pub fn claimable(&self, magnified_per_share: U256) -> Result<u64> {
        let accumulated = self.accumulated_dividends(magnified_per_share)?;
        let claimable = accumulated
            .checked_sub(self.withdrawn)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(claimable)
    }
}
