use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::{SALE_CONFIG_SEED, TREASURY_SEED};
use crate::states::SaleConfig;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct WithdrawProceedsParams {
    /// Amount of lamports to move out of the treasury
    pub amount: u64,
}

/// Controller moves sale proceeds held by the treasury PDA
#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    pub controller: Signer<'info>,

    #[account(
        seeds = [SALE_CONFIG_SEED],
        bump = sale_config.bump,
        constraint = sale_config.is_controller(&controller.key()) @ ErrorCode::Unauthorized
    )]
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = sale_config.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    /// CHECK: Any wallet chosen by the controller
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawProceeds<'info> {
    pub fn handle(ctx: Context<WithdrawProceeds>, params: WithdrawProceedsParams) -> Result<()> {
        msg!("Withdrawing {} lamports of proceeds to {}", params.amount, ctx.accounts.recipient.key());

        require!(params.amount > 0, ErrorCode::InvalidAmount);

        let reserve = Rent::get()?.minimum_balance(0);
        let available = ctx.accounts.treasury.lamports().saturating_sub(reserve);
        msg!("Treasury available: {} lamports", available);
        require!(params.amount <= available, ErrorCode::InsufficientBalance);

        let treasury_bump = [ctx.accounts.sale_config.treasury_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &treasury_bump]];

        anchor_lang::system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.treasury.to_account_info(),
                    to: ctx.accounts.recipient.to_account_info(),
                },
                signer_seeds,
            ),
            params.amount,
        )?;

        emit!(crate::events::ProceedsWithdrawn {
            recipient: ctx.accounts.recipient.key(),
            amount: params.amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
