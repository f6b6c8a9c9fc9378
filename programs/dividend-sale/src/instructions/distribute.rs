use anchor_lang::prelude::*;
use crate::constants::{LEDGER_SEED, DIVIDEND_POOL_SEED};
use crate::states::Ledger;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributeParams {
    /// Lamports spread over the current supply
    pub value: u64,
}

/// Anyone may pay lamports in for the current holders
#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [DIVIDEND_POOL_SEED],
        bump = ledger.pool_bump
    )]
    pub dividend_pool: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Distribute<'info> {
    pub fn handle(ctx: Context<Distribute>, params: DistributeParams) -> Result<()> {
        msg!("Distributing {} lamports from {}", params.value, ctx.accounts.payer.key());

        ctx.accounts.ledger.distribute(params.value)?;

        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.dividend_pool.to_account_info(),
                },
            ),
            params.value,
        )?;

        let ledger = &ctx.accounts.ledger;
        msg!("Total supply: {} units", ledger.total_supply);
        msg!("Total distributed: {} lamports", ledger.total_distributed);

        emit!(crate::events::DividendsDistributed {
            from: ctx.accounts.payer.key(),
            value: params.value,
            total_supply: ledger.total_supply,
            total_distributed: ledger.total_distributed,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
