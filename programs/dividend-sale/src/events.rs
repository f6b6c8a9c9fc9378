use anchor_lang::prelude::*;

/// Sale configuration field touched by a controller update
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaleSetting {
    Start,
    ExchangeRate,
    Hardcap,
    AltDeposits,
    Vault,
    Ongoing,
}

/// Event emitted when the sale and ledger are created
#[event]
pub struct SaleInitialized {
    /// Sale config PDA
    pub sale_config: Pubkey,
    /// Controller of the sale
    pub controller: Pubkey,
    /// Sale start (unix timestamp)
    pub start: i64,
    /// Units per lamport before bonus
    pub exchange_rate: u64,
    /// Hard cap in lamports
    pub hardcap: u64,
    /// Proceeds recipient (None = treasury PDA)
    pub vault: Option<Pubkey>,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted when the controller changes a sale parameter
#[event]
pub struct SaleConfigUpdated {
    pub setting: SaleSetting,
    pub controller: Pubkey,
    pub timestamp: i64,
}

/// Event emitted for each paid purchase
#[event]
pub struct TokensPurchased {
    /// Wallet paying for the units
    pub buyer: Pubkey,
    /// Wallet receiving the units
    pub beneficiary: Pubkey,
    /// Lamports paid
    pub value: u64,
    /// Units minted, bonus included
    pub minted: u64,
    /// Bonus applied in basis points
    pub bonus_bps: u16,
    /// Where the lamports were forwarded
    pub destination: Pubkey,
    /// Lamports raised so far
    pub raised: u64,
    pub timestamp: i64,
}

/// Event emitted for each mint made by the controller without payment
#[event]
pub struct TokensMinted {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
    pub timestamp: i64,
}

/// Event emitted when minting is closed for good
#[event]
pub struct MintingFinished {
    /// New holder of the mint capability
    pub mint_authority: Pubkey,
    /// Final supply
    pub total_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct TradingStarted {
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct Approval {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when lamports are paid in for holders
#[event]
pub struct DividendsDistributed {
    /// Wallet paying in
    pub from: Pubkey,
    /// Lamports distributed
    pub value: u64,
    /// Supply the value was spread over
    pub total_supply: u64,
    /// Lamports ever distributed
    pub total_distributed: u64,
    pub timestamp: i64,
}

/// Event emitted when a holder withdraws dividends
#[event]
pub struct DividendsClaimed {
    pub holder: Pubkey,
    pub amount: u64,
    /// Holder's lamports claimed so far
    pub withdrawn: u64,
    /// Holder's remaining claimable lamports
    pub remaining: u64,
    pub timestamp: i64,
}

/// Event emitted when the controller moves proceeds out of the treasury
#[event]
pub struct ProceedsWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
