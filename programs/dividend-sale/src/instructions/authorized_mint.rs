use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::{SALE_CONFIG_SEED, LEDGER_SEED, HOLDER_SEED};
use crate::states::{SaleConfig, Ledger, HolderRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AuthorizedMintParams {
    pub amount: u64,
}

/// Mint without payment, outside the tier and cap logic
#[derive(Accounts)]
pub struct AuthorizedMint<'info> {
    #[account(mut)]
    pub controller: Signer<'info>,

    /// CHECK: Only the address is used, to derive the beneficiary's holder record
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        seeds = [SALE_CONFIG_SEED],
        bump = sale_config.bump,
        constraint = sale_config.is_controller(&controller.key()) @ ErrorCode::Unauthorized
    )]
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_mint_authority(&sale_config.key()) @ ErrorCode::MintingFinished
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = controller,
        space = HolderRecord::DISCRIMINATOR.len() + HolderRecord::INIT_SPACE,
        seeds = [HOLDER_SEED, beneficiary.key().as_ref()],
        bump
    )]
    pub beneficiary_record: Account<'info, HolderRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> AuthorizedMint<'info> {
    pub fn handle(ctx: Context<AuthorizedMint>, params: AuthorizedMintParams) -> Result<()> {
        msg!("Authorized mint of {} units to {}", params.amount, ctx.accounts.beneficiary.key());

        let beneficiary = ctx.accounts.beneficiary.key();
        let bump = ctx.bumps.beneficiary_record;
        let accounts = &mut *ctx.accounts;

        accounts.ledger.touch_holder(&mut accounts.beneficiary_record, beneficiary, bump)?;
        accounts.ledger.mint(&mut accounts.beneficiary_record, params.amount)?;

        msg!("Total supply: {} units", accounts.ledger.total_supply);

        emit!(crate::events::TokensMinted {
            beneficiary,
            amount: params.amount,
            total_supply: accounts.ledger.total_supply,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
