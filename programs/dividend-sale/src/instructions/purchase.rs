use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::{SALE_CONFIG_SEED, LEDGER_SEED, HOLDER_SEED};
use crate::states::{SaleConfig, Ledger, HolderRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct PurchaseParams {
    /// Lamports paid
    pub value: u64,
}

#[derive(Accounts)]
pub struct Purchase<'info> {
    /// Wallet paying for the units
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: Only the address is used, to derive the beneficiary's holder record
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SALE_CONFIG_SEED],
        bump = sale_config.bump
    )]
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_mint_authority(&sale_config.key()) @ ErrorCode::SaleClosed
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = HolderRecord::DISCRIMINATOR.len() + HolderRecord::INIT_SPACE,
        seeds = [HOLDER_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub beneficiary_record: Account<'info, HolderRecord>,

    /// CHECK: Must be the configured vault, or the treasury PDA when none is set
    #[account(
        mut,
        constraint = destination.key() == sale_config.forward_destination() @ ErrorCode::InvalidVault
    )]
    pub destination: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Purchase<'info> {
    pub fn handle(ctx: Context<Purchase>, params: PurchaseParams) -> Result<()> {
        msg!("Processing purchase from buyer: {}", ctx.accounts.buyer.key());
        msg!("Beneficiary: {}", ctx.accounts.beneficiary.key());
        msg!("Value: {} lamports", params.value);

        let now = Clock::get()?.unix_timestamp;
        let beneficiary = ctx.accounts.beneficiary.key();
        let bump = ctx.bumps.beneficiary_record;
        let accounts = &mut *ctx.accounts;

        accounts.ledger.touch_holder(&mut accounts.beneficiary_record, beneficiary, bump)?;

        let quote = accounts.sale_config.purchase(
            &mut accounts.ledger,
            &mut accounts.beneficiary_record,
            params.value,
            now,
        )?;

        msg!("Bonus: {} bps", quote.bonus_bps);
        msg!("Minted: {} units", quote.minted);

        forward_value(accounts, params.value)?;

        msg!("Purchase completed successfully!");

        emit!(crate::events::TokensPurchased {
            buyer: accounts.buyer.key(),
            beneficiary,
            value: params.value,
            minted: quote.minted,
            bonus_bps: quote.bonus_bps,
            destination: accounts.destination.key(),
            raised: accounts.sale_config.raised,
            timestamp: now,
        });

        Ok(())
    }
}

/// Sends the paid lamports on to the vault or treasury
fn forward_value(accounts: &Purchase, value: u64) -> Result<()> {
    anchor_lang::system_program::transfer(
        CpiContext::new(
            accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: accounts.buyer.to_account_info(),
                to: accounts.destination.to_account_info(),
            },
        ),
        value,
    )?;

    msg!("Forwarded {} lamports to {}", value, accounts.destination.key());
    Ok(())
}
