pub mod initialize_sale;
pub use initialize_sale::*;

pub mod configure_sale;
pub use configure_sale::*;

pub mod purchase;
pub use purchase::*;

pub mod authorized_mint;
pub use authorized_mint::*;

pub mod finish_minting;
pub use finish_minting::*;

pub mod start_trading;
pub use start_trading::*;

pub mod transfer;
pub use transfer::*;

pub mod approve;
pub use approve::*;

pub mod transfer_from;
pub use transfer_from::*;

pub mod distribute;
pub use distribute::*;

pub mod claim;
pub use claim::*;

pub mod withdraw_proceeds;
pub use withdraw_proceeds::*;

pub mod query;
pub use query::*;
