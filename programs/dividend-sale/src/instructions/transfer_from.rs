use anchor_lang::prelude::*;
use crate::constants::{LEDGER_SEED, HOLDER_SEED, ALLOWANCE_SEED};
use crate::states::{Ledger, HolderRecord, Allowance};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct TransferFromParams {
    pub amount: u64,
}

/// Transfer on behalf of `owner`, paid out of the spender's allowance
#[derive(Accounts)]
pub struct TransferFromBalance<'info> {
    #[account(mut)]
    pub spender: Signer<'info>,

    /// CHECK: Only the address is used, to derive the owner's records
    pub owner: UncheckedAccount<'info>,

    /// CHECK: Only the address is used, to derive the recipient's holder record
    pub recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.key().as_ref()],
        bump = allowance.bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, owner.key().as_ref()],
        bump = owner_record.bump
    )]
    pub owner_record: Account<'info, HolderRecord>,

    #[account(
        init_if_needed,
        payer = spender,
        space = HolderRecord::DISCRIMINATOR.len() + HolderRecord::INIT_SPACE,
        seeds = [HOLDER_SEED, recipient.key().as_ref()],
        bump
    )]
    pub recipient_record: Account<'info, HolderRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> TransferFromBalance<'info> {
    pub fn handle(ctx: Context<TransferFromBalance>, params: TransferFromParams) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        let recipient = ctx.accounts.recipient.key();
        msg!("Spender {} moving {} units from {} to {}",
            ctx.accounts.spender.key(), params.amount, owner, recipient);

        let bump = ctx.bumps.recipient_record;
        let accounts = &mut *ctx.accounts;

        accounts.ledger.touch_holder(&mut accounts.recipient_record, recipient, bump)?;
        accounts.ledger.transfer_from(
            &mut accounts.allowance,
            &mut accounts.owner_record,
            &mut accounts.recipient_record,
            params.amount,
        )?;

        msg!("Remaining allowance: {} units", accounts.allowance.amount);

        emit!(crate::events::Transfer {
            from: owner,
            to: recipient,
            amount: params.amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
