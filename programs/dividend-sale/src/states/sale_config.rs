use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::math::{bonus_bps, minted_amount};
use super::{HolderRecord, Ledger};

/// Sale parameters and the controller allowed to change them
#[account]
#[derive(InitSpace)]
pub struct SaleConfig {
    /// Sole identity allowed to configure the sale and mint without payment
    pub controller: Pubkey,
    /// Sale start (unix timestamp)
    pub start: i64,
    /// Units minted per lamport, before bonus
    pub exchange_rate: u64,
    /// Maximum lamports raised, external deposits included
    pub hardcap: u64,
    /// Lamports raised outside this program, counted against the hard cap
    pub alt_deposits: u64,
    /// Lamports accepted by purchases so far
    pub raised: u64,
    /// External recipient of purchase proceeds (treasury PDA when unset)
    pub vault: Option<Pubkey>,
    /// Treasury PDA holding proceeds when no vault is set
    pub treasury: Pubkey,
    /// Whether purchases are accepted
    pub ongoing: bool,
    /// Bump seed for the PDA
    pub bump: u8,
    /// Bump seed of the treasury PDA
    pub treasury_bump: u8,
}

/// Outcome of a validated purchase, applied only once every check has passed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseQuote {
    pub minted: u64,
    pub bonus_bps: u16,
    pub raised_after: u64,
}

impl SaleConfig {
    pub fn is_controller(&self, caller: &Pubkey) -> bool {
        self.controller == *caller
    }

    pub fn is_open(&self, now: i64) -> bool {
        self.ongoing && now >= self.start
    }

    /// Where purchase proceeds go
    pub fn forward_destination(&self) -> Pubkey {
        self.vault.unwrap_or(self.treasury)
    }

    /// Lamports still accepted before the hard cap is hit
    pub fn remaining_cap(&self) -> u64 {
        self.hardcap
            .saturating_sub(self.raised)
            .saturating_sub(self.alt_deposits)
    }

    /// Validates a purchase of `value` lamports at `now` and prices it
    pub fn quote_purchase(&self, value: u64, now: i64, minting_finished: bool) -> Result<PurchaseQuote> {
        require!(value > 0, ErrorCode::InvalidAmount);
        require!(!minting_finished && self.is_open(now), ErrorCode::SaleClosed);

        let raised_after = self.raised
            .checked_add(value)
            .ok_or(ErrorCode::MathOverflow)?;
        let committed = raised_after
            .checked_add(self.alt_deposits)
            .ok_or(ErrorCode::HardcapExceeded)?;
        require!(committed <= self.hardcap, ErrorCode::HardcapExceeded);

        let elapsed = now
            .checked_sub(self.start)
            .ok_or(ErrorCode::MathOverflow)?;
        let bonus_bps = bonus_bps(elapsed);
        let minted = minted_amount(value, self.exchange_rate, bonus_bps)?;

        Ok(PurchaseQuote {
            minted,
            bonus_bps,
            raised_after,
        })
    }

    /// Prices and books a purchase; nothing changes unless the mint succeeds
    pub fn purchase(
        &mut self,
        ledger: &mut Ledger,
        beneficiary: &mut HolderRecord,
        value: u64,
        now: i64,
    ) -> Result<PurchaseQuote> {
        let quote = self.quote_purchase(value, now, ledger.minting_finished)?;

        ledger.mint(beneficiary, quote.minted)?;
        self.raised = quote.raised_after;

        Ok(quote)
    }
}
