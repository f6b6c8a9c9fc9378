use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::SALE_CONFIG_SEED;
use crate::events::SaleSetting;
use crate::states::SaleConfig;

/// Controller-only update of a single sale parameter
#[derive(Accounts)]
pub struct ConfigureSale<'info> {
    pub controller: Signer<'info>,

    #[account(
        mut,
        seeds = [SALE_CONFIG_SEED],
        bump = sale_config.bump,
        constraint = sale_config.is_controller(&controller.key()) @ ErrorCode::Unauthorized
    )]
    pub sale_config: Account<'info, SaleConfig>,
}

impl<'info> ConfigureSale<'info> {
    pub fn set_start(ctx: Context<ConfigureSale>, start: i64) -> Result<()> {
        msg!("Setting sale start: {}", start);
        ctx.accounts.sale_config.start = start;
        ctx.accounts.emit_update(SaleSetting::Start)
    }

    pub fn set_exchange_rate(ctx: Context<ConfigureSale>, exchange_rate: u64) -> Result<()> {
        require!(exchange_rate > 0, ErrorCode::InvalidAmount);

        msg!("Setting exchange rate: {} units per lamport", exchange_rate);
        ctx.accounts.sale_config.exchange_rate = exchange_rate;
        ctx.accounts.emit_update(SaleSetting::ExchangeRate)
    }

    pub fn set_hardcap(ctx: Context<ConfigureSale>, hardcap: u64) -> Result<()> {
        msg!("Setting hard cap: {} lamports", hardcap);
        ctx.accounts.sale_config.hardcap = hardcap;
        ctx.accounts.emit_update(SaleSetting::Hardcap)
    }

    pub fn set_alt_deposits(ctx: Context<ConfigureSale>, alt_deposits: u64) -> Result<()> {
        msg!("Setting alt deposits: {} lamports", alt_deposits);
        ctx.accounts.sale_config.alt_deposits = alt_deposits;
        ctx.accounts.emit_update(SaleSetting::AltDeposits)
    }

    pub fn set_vault(ctx: Context<ConfigureSale>, vault: Option<Pubkey>) -> Result<()> {
        if let Some(vault) = vault {
            require!(vault != Pubkey::default(), ErrorCode::InvalidVault);
        }

        ctx.accounts.sale_config.vault = vault;
        msg!("Proceeds destination: {}", ctx.accounts.sale_config.forward_destination());
        ctx.accounts.emit_update(SaleSetting::Vault)
    }

    pub fn set_ongoing(ctx: Context<ConfigureSale>, ongoing: bool) -> Result<()> {
        msg!("Setting sale ongoing: {}", ongoing);
        ctx.accounts.sale_config.ongoing = ongoing;
        ctx.accounts.emit_update(SaleSetting::Ongoing)
    }

    fn emit_update(&self, setting: SaleSetting) -> Result<()> {
        emit!(crate::events::SaleConfigUpdated {
            setting,
            controller: self.controller.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}
