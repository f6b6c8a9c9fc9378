use anchor_lang::prelude::*;
use crate::constants::ALLOWANCE_SEED;
use crate::states::Allowance;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ApproveParams {
    /// New allowance, replacing the previous one
    pub amount: u64,
}

#[derive(Accounts)]
pub struct ApproveSpender<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Only the address is used, to derive the allowance record
    pub spender: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = Allowance::DISCRIMINATOR.len() + Allowance::INIT_SPACE,
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.key().as_ref()],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    pub system_program: Program<'info, System>,
}

impl<'info> ApproveSpender<'info> {
    pub fn handle(ctx: Context<ApproveSpender>, params: ApproveParams) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        let spender = ctx.accounts.spender.key();

        ctx.accounts.allowance.approve(owner, spender, params.amount, ctx.bumps.allowance);

        msg!("{} approved {} for {} units", owner, spender, params.amount);

        emit!(crate::events::Approval {
            owner,
            spender,
            amount: params.amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
