use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the sale controller")]
    Unauthorized,
    #[msg("Sale is not open - not ongoing, not started, or minting finished")]
    SaleClosed,
    #[msg("Purchase would exceed the hard cap")]
    HardcapExceeded,
    #[msg("Minting has already finished")]
    MintingFinished,
    #[msg("Minting has not finished yet")]
    MintingNotFinished,
    #[msg("Trading has not started - transfers are locked")]
    TradingNotStarted,
    #[msg("Trading has already started")]
    TradingAlreadyStarted,
    #[msg("Insufficient balance for operation")]
    InsufficientBalance,
    #[msg("Insufficient allowance for transfer")]
    InsufficientAllowance,
    #[msg("Invalid amount - zero or above the allowed maximum")]
    InvalidAmount,
    #[msg("Cannot distribute dividends while total supply is zero")]
    ZeroSupplyDistribution,
    #[msg("Destination does not match the configured vault")]
    InvalidVault,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
