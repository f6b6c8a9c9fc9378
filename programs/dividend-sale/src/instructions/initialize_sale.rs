use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::{
    SALE_CONFIG_SEED, LEDGER_SEED, TREASURY_SEED, DIVIDEND_POOL_SEED,
    DEFAULT_SALE_START, DEFAULT_EXCHANGE_RATE, DEFAULT_HARDCAP_LAMPORTS,
};
use crate::states::{SaleConfig, Ledger};

#[derive(Accounts)]
pub struct InitializeSale<'info> {
    /// Controller of the sale, pays for the accounts
    #[account(mut)]
    pub controller: Signer<'info>,

    /// Sale configuration PDA
    #[account(
        init,
        payer = controller,
        space = SaleConfig::DISCRIMINATOR.len() + SaleConfig::INIT_SPACE,
        seeds = [SALE_CONFIG_SEED],
        bump
    )]
    pub sale_config: Account<'info, SaleConfig>,

    /// Balance ledger and dividend accumulator PDA
    #[account(
        init,
        payer = controller,
        space = Ledger::DISCRIMINATOR.len() + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Proceeds held by the program when no vault is set
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    /// Lamports distributed to holders and not yet claimed
    #[account(
        mut,
        seeds = [DIVIDEND_POOL_SEED],
        bump
    )]
    pub dividend_pool: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeSaleParams {
    /// Sale start (0 = default)
    pub start: i64,
    /// Units per lamport before bonus (0 = default)
    pub exchange_rate: u64,
    /// Hard cap in lamports (0 = default)
    pub hardcap: u64,
    /// External proceeds recipient (None = treasury PDA)
    pub vault: Option<Pubkey>,
}

impl<'info> InitializeSale<'info> {
    pub fn handle(ctx: Context<InitializeSale>, params: InitializeSaleParams) -> Result<()> {
        msg!("Initializing sale for controller: {}", ctx.accounts.controller.key());

        if let Some(vault) = params.vault {
            require!(vault != Pubkey::default(), ErrorCode::InvalidVault);
        }

        fund_rent_reserve(ctx.accounts, ctx.accounts.treasury.to_account_info())?;
        fund_rent_reserve(ctx.accounts, ctx.accounts.dividend_pool.to_account_info())?;

        let sale_config_key = ctx.accounts.sale_config.key();
        let sale_config = &mut ctx.accounts.sale_config;

        sale_config.controller = ctx.accounts.controller.key();
        sale_config.start = if params.start == 0 { DEFAULT_SALE_START } else { params.start };
        sale_config.exchange_rate = if params.exchange_rate == 0 {
            DEFAULT_EXCHANGE_RATE
        } else {
            params.exchange_rate
        };
        sale_config.hardcap = if params.hardcap == 0 {
            DEFAULT_HARDCAP_LAMPORTS
        } else {
            params.hardcap
        };
        sale_config.alt_deposits = 0;
        sale_config.raised = 0;
        sale_config.vault = params.vault;
        sale_config.treasury = ctx.accounts.treasury.key();
        sale_config.ongoing = true;
        sale_config.bump = ctx.bumps.sale_config;
        sale_config.treasury_bump = ctx.bumps.treasury;

        // The sale itself holds the mint capability until minting finishes
        ctx.accounts.ledger.set_inner(Ledger::new(
            sale_config_key,
            ctx.bumps.ledger,
            ctx.bumps.dividend_pool,
        ));

        msg!("Sale start: {}", sale_config.start);
        msg!("Exchange rate: {} units per lamport", sale_config.exchange_rate);
        msg!("Hard cap: {} lamports", sale_config.hardcap);
        msg!("Proceeds destination: {}", sale_config.forward_destination());

        emit!(crate::events::SaleInitialized {
            sale_config: sale_config_key,
            controller: sale_config.controller,
            start: sale_config.start,
            exchange_rate: sale_config.exchange_rate,
            hardcap: sale_config.hardcap,
            vault: sale_config.vault,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Tops a program-held system account up to its rent-exempt minimum so later
/// transfers in and out never trip the rent check.
fn fund_rent_reserve<'info>(accounts: &InitializeSale<'info>, target: AccountInfo<'info>) -> Result<()> {
    let reserve = Rent::get()?.minimum_balance(0);
    let shortfall = reserve.saturating_sub(target.lamports());
    if shortfall == 0 {
        return Ok(());
    }

    anchor_lang::system_program::transfer(
        CpiContext::new(
            accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: accounts.controller.to_account_info(),
                to: target,
            },
        ),
        shortfall,
    )?;

    Ok(())
}
