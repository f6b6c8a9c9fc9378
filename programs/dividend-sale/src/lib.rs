use anchor_lang::prelude::*;

declare_id!("hAKHBp4pvuGx6saXZK8nQibuEov6BsEm47R3YUnVwB2");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod math;

pub use instructions::*;
pub use events::*;

#[program]
pub mod dividend_sale {
    use super::*;

    pub fn initialize_sale(ctx: Context<InitializeSale>, params: InitializeSaleParams) -> Result<()> {
        InitializeSale::handle(ctx, params)
    }

    pub fn purchase(ctx: Context<Purchase>, params: PurchaseParams) -> Result<()> {
        Purchase::handle(ctx, params)
    }

    pub fn authorized_mint(ctx: Context<AuthorizedMint>, params: AuthorizedMintParams) -> Result<()> {
        AuthorizedMint::handle(ctx, params)
    }

    pub fn finish_minting(ctx: Context<FinishMinting>) -> Result<()> {
        FinishMinting::handle(ctx)
    }

    pub fn start_trading(ctx: Context<StartTrading>) -> Result<()> {
        StartTrading::handle(ctx)
    }

    pub fn set_start(ctx: Context<ConfigureSale>, start: i64) -> Result<()> {
        ConfigureSale::set_start(ctx, start)
    }

    pub fn set_exchange_rate(ctx: Context<ConfigureSale>, exchange_rate: u64) -> Result<()> {
        ConfigureSale::set_exchange_rate(ctx, exchange_rate)
    }

    pub fn set_hardcap(ctx: Context<ConfigureSale>, hardcap: u64) -> Result<()> {
        ConfigureSale::set_hardcap(ctx, hardcap)
    }

    pub fn set_alt_deposits(ctx: Context<ConfigureSale>, alt_deposits: u64) -> Result<()> {
        ConfigureSale::set_alt_deposits(ctx, alt_deposits)
    }

    pub fn set_vault(ctx: Context<ConfigureSale>, vault: Option<Pubkey>) -> Result<()> {
        ConfigureSale::set_vault(ctx, vault)
    }

    pub fn set_ongoing(ctx: Context<ConfigureSale>, ongoing: bool) -> Result<()> {
        ConfigureSale::set_ongoing(ctx, ongoing)
    }

    pub fn transfer(ctx: Context<TransferBalance>, params: TransferParams) -> Result<()> {
        TransferBalance::handle(ctx, params)
    }

    pub fn approve(ctx: Context<ApproveSpender>, params: ApproveParams) -> Result<()> {
        ApproveSpender::handle(ctx, params)
    }

    pub fn transfer_from(ctx: Context<TransferFromBalance>, params: TransferFromParams) -> Result<()> {
        TransferFromBalance::handle(ctx, params)
    }

    pub fn distribute(ctx: Context<Distribute>, params: DistributeParams) -> Result<()> {
        Distribute::handle(ctx, params)
    }

    pub fn claim(ctx: Context<Claim>, params: ClaimParams) -> Result<()> {
        Claim::handle(ctx, params)
    }

    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>, params: WithdrawProceedsParams) -> Result<()> {
        WithdrawProceeds::handle(ctx, params)
    }

    pub fn query_holder(ctx: Context<QueryHolder>) -> Result<HolderInfo> {
        QueryHolder::handle(ctx)
    }

    pub fn query_sale(ctx: Context<QuerySale>) -> Result<SaleInfo> {
        QuerySale::handle(ctx)
    }

    pub fn query_allowance(ctx: Context<QueryAllowance>) -> Result<AllowanceInfo> {
        QueryAllowance::handle(ctx)
    }
}
