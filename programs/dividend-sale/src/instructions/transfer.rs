use anchor_lang::prelude::*;
use crate::constants::{LEDGER_SEED, HOLDER_SEED};
use crate::states::{Ledger, HolderRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct TransferParams {
    pub amount: u64,
}

#[derive(Accounts)]
pub struct TransferBalance<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

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
        seeds = [HOLDER_SEED, sender.key().as_ref()],
        bump = sender_record.bump
    )]
    pub sender_record: Account<'info, HolderRecord>,

    #[account(
        init_if_needed,
        payer = sender,
        space = HolderRecord::DISCRIMINATOR.len() + HolderRecord::INIT_SPACE,
        seeds = [HOLDER_SEED, recipient.key().as_ref()],
        bump
    )]
    pub recipient_record: Account<'info, HolderRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> TransferBalance<'info> {
    pub fn handle(ctx: Context<TransferBalance>, params: TransferParams) -> Result<()> {
        let sender = ctx.accounts.sender.key();
        let recipient = ctx.accounts.recipient.key();
        msg!("Transfer of {} units from {} to {}", params.amount, sender, recipient);

        let bump = ctx.bumps.recipient_record;
        let accounts = &mut *ctx.accounts;

        // On a self-transfer both slots hold copies of one record and the ledger writes neither
        accounts.ledger.touch_holder(&mut accounts.recipient_record, recipient, bump)?;
        accounts.ledger.transfer(
            &mut accounts.sender_record,
            &mut accounts.recipient_record,
            params.amount,
        )?;

        msg!("Sender balance: {} units", accounts.sender_record.balance);

        emit!(crate::events::Transfer {
            from: sender,
            to: recipient,
            amount: params.amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
