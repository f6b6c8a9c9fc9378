use anchor_lang::prelude::*;
use ruint::aliases::U256;
use crate::constants::{SALE_CONFIG_SEED, LEDGER_SEED, HOLDER_SEED, ALLOWANCE_SEED};
use crate::states::{SaleConfig, Ledger, HolderRecord, Allowance};

/// Response structure for holder query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct HolderInfo {
    pub owner: Pubkey,
    /// Units held
    pub balance: u64,
    /// Lamports earned so far, claimed or not
    pub accumulated: u64,
    /// Lamports earned and not yet claimed
    pub claimable: u64,
    /// Lamports claimed so far
    pub withdrawn: u64,
}

/// Response structure for sale query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct SaleInfo {
    pub controller: Pubkey,
    pub start: i64,
    pub exchange_rate: u64,
    pub hardcap: u64,
    pub alt_deposits: u64,
    pub raised: u64,
    /// Lamports still accepted before the hard cap
    pub remaining_cap: u64,
    pub vault: Option<Pubkey>,
    /// Where purchase proceeds currently go
    pub destination: Pubkey,
    pub ongoing: bool,
    pub total_supply: u64,
    pub holder_count: u32,
    pub minting_finished: bool,
    pub trading_started: bool,
    pub total_distributed: u64,
    pub total_withdrawn: u64,
}

/// Response structure for allowance query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AllowanceInfo {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

/// Query instruction to get a holder's balance and dividend position
#[derive(Accounts)]
pub struct QueryHolder<'info> {
    /// CHECK: Only the address is used, to derive the holder record
    pub owner: UncheckedAccount<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Absent for wallets that never held units
    #[account(
        seeds = [HOLDER_SEED, owner.key().as_ref()],
        bump = holder_record.bump
    )]
    pub holder_record: Option<Account<'info, HolderRecord>>,
}

impl HolderInfo {
    /// Position of `owner`; a wallet without a record holds and earned nothing
    pub fn new(owner: Pubkey, record: Option<&HolderRecord>, magnified_per_share: U256) -> Result<Self> {
        let Some(record) = record else {
            return Ok(Self {
                owner,
                balance: 0,
                accumulated: 0,
                claimable: 0,
                withdrawn: 0,
            });
        };

        Ok(Self {
            owner,
            balance: record.balance,
            accumulated: record.accumulated_dividends(magnified_per_share)?,
            claimable: record.claimable(magnified_per_share)?,
            withdrawn: record.withdrawn,
        })
    }
}

impl<'info> QueryHolder<'info> {
    pub fn handle(ctx: Context<QueryHolder>) -> Result<HolderInfo> {
        let holder_info = HolderInfo::new(
            ctx.accounts.owner.key(),
            ctx.accounts.holder_record.as_deref(),
            ctx.accounts.ledger.magnified_per_share(),
        )?;

        msg!("Holder info for: {}", holder_info.owner);
        msg!("Balance: {} units", holder_info.balance);
        msg!("Claimable: {} lamports", holder_info.claimable);
        msg!("Withdrawn: {} lamports", holder_info.withdrawn);

        Ok(holder_info)
    }
}

/// Query instruction to get the sale configuration and ledger totals
#[derive(Accounts)]
pub struct QuerySale<'info> {
    #[account(
        seeds = [SALE_CONFIG_SEED],
        bump = sale_config.bump
    )]
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

impl<'info> QuerySale<'info> {
    pub fn handle(ctx: Context<QuerySale>) -> Result<SaleInfo> {
        let sale_config = &ctx.accounts.sale_config;
        let ledger = &ctx.accounts.ledger;

        let sale_info = SaleInfo {
            controller: sale_config.controller,
            start: sale_config.start,
            exchange_rate: sale_config.exchange_rate,
            hardcap: sale_config.hardcap,
            alt_deposits: sale_config.alt_deposits,
            raised: sale_config.raised,
            remaining_cap: sale_config.remaining_cap(),
            vault: sale_config.vault,
            destination: sale_config.forward_destination(),
            ongoing: sale_config.ongoing,
            total_supply: ledger.total_supply,
            holder_count: ledger.holder_count,
            minting_finished: ledger.minting_finished,
            trading_started: ledger.trading_started,
            total_distributed: ledger.total_distributed,
            total_withdrawn: ledger.total_withdrawn,
        };

        msg!("Sale info:");
        msg!("Total supply: {} units", sale_info.total_supply);
        msg!("Raised: {} lamports of {}", sale_info.raised, sale_info.hardcap);
        msg!("Alt deposits: {} lamports", sale_info.alt_deposits);
        msg!("Outstanding dividends: {} lamports", ledger.outstanding_dividends());

        Ok(sale_info)
    }
}

#[derive(Accounts)]
pub struct QueryAllowance<'info> {
    /// CHECK: Only the address is used, to derive the allowance record
    pub owner: UncheckedAccount<'info>,

    /// CHECK: Only the address is used, to derive the allowance record
    pub spender: UncheckedAccount<'info>,

    #[account(
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.key().as_ref()],
        bump = allowance.bump
    )]
    pub allowance: Account<'info, Allowance>,
}

impl<'info> QueryAllowance<'info> {
    pub fn handle(ctx: Context<QueryAllowance>) -> Result<AllowanceInfo> {
        let allowance = &ctx.accounts.allowance;

        msg!("Allowance of {} for {}: {} units", allowance.spender, allowance.owner, allowance.amount);

        Ok(AllowanceInfo {
            owner: allowance.owner,
            spender: allowance.spender,
            amount: allowance.amount,
        })
    }
}
