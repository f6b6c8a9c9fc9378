pub mod sale_config;
pub mod ledger;
pub mod holder_record;
pub mod allowance;

pub use sale_config::*;
pub use ledger::*;
pub use holder_record::*;
pub use allowance::*;
