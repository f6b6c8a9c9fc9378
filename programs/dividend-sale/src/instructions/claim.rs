use anchor_lang::prelude::*;
use crate::constants::{LEDGER_SEED, HOLDER_SEED, DIVIDEND_POOL_SEED};
use crate::states::{Ledger, HolderRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ClaimParams {
    /// Lamports to withdraw, at most the holder's claimable amount
    pub amount: u64,
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, holder.key().as_ref()],
        bump = holder_record.bump
    )]
    pub holder_record: Account<'info, HolderRecord>,

    #[account(
        mut,
        seeds = [DIVIDEND_POOL_SEED],
        bump = ledger.pool_bump
    )]
    pub dividend_pool: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Claim<'info> {
    pub fn handle(ctx: Context<Claim>, params: ClaimParams) -> Result<()> {
        msg!("Processing claim for holder: {}", ctx.accounts.holder.key());
        msg!("Amount: {} lamports", params.amount);

        let accounts = &mut *ctx.accounts;
        accounts.ledger.claim(&mut accounts.holder_record, params.amount)?;

        pay_from_pool(accounts, params.amount)?;

        let remaining = accounts.ledger.claimable(&accounts.holder_record)?;
        msg!("Withdrawn so far: {} lamports", accounts.holder_record.withdrawn);
        msg!("Still claimable: {} lamports", remaining);

        emit!(crate::events::DividendsClaimed {
            holder: accounts.holder.key(),
            amount: params.amount,
            withdrawn: accounts.holder_record.withdrawn,
            remaining,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

fn pay_from_pool(accounts: &Claim, amount: u64) -> Result<()> {
    let pool_bump = [accounts.ledger.pool_bump];
    let signer_seeds: &[&[&[u8]]] = &[&[DIVIDEND_POOL_SEED, &pool_bump]];

    anchor_lang::system_program::transfer(
        CpiContext::new_with_signer(
            accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: accounts.dividend_pool.to_account_info(),
                to: accounts.holder.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    Ok(())
}
