use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::LEDGER_SEED;
use crate::states::Ledger;

/// Unlocks transfers; signed by whoever holds the mint capability after the handoff
#[derive(Accounts)]
pub struct StartTrading<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_mint_authority(&authority.key()) @ ErrorCode::Unauthorized
    )]
    pub ledger: Account<'info, Ledger>,
}

impl<'info> StartTrading<'info> {
    pub fn handle(ctx: Context<StartTrading>) -> Result<()> {
        ctx.accounts.ledger.start_trading()?;

        msg!("Trading started by {}", ctx.accounts.authority.key());

        emit!(crate::events::TradingStarted {
            authority: ctx.accounts.authority.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
