use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::{SALE_CONFIG_SEED, LEDGER_SEED};
use crate::states::{SaleConfig, Ledger};

#[derive(Accounts)]
pub struct FinishMinting<'info> {
    pub controller: Signer<'info>,

    #[account(
        seeds = [SALE_CONFIG_SEED],
        bump = sale_config.bump,
        constraint = sale_config.is_controller(&controller.key()) @ ErrorCode::Unauthorized
    )]
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

impl<'info> FinishMinting<'info> {
    pub fn handle(ctx: Context<FinishMinting>) -> Result<()> {
        let controller = ctx.accounts.controller.key();
        let ledger = &mut ctx.accounts.ledger;

        ledger.finish_minting(controller)?;

        msg!("Final supply: {} units", ledger.total_supply);

        emit!(crate::events::MintingFinished {
            mint_authority: ledger.mint_authority,
            total_supply: ledger.total_supply,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
