// PDA Seeds
pub const SALE_CONFIG_SEED: &[u8] = b"sale_config";
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const HOLDER_SEED: &[u8] = b"holder";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const DIVIDEND_POOL_SEED: &[u8] = b"dividend_pool";

// Default sale parameters
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const DEFAULT_SALE_START: i64 = 1_609_372_800; // 2020-12-31T00:00:00Z
pub const DEFAULT_EXCHANGE_RATE: u64 = 200; // units per lamport
pub const DEFAULT_HARDCAP_LAMPORTS: u64 = 250_000 * LAMPORTS_PER_SOL;

// Bonus schedule
pub const BPS: u64 = 10_000;
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Upper bound of each bonus tier (exclusive, seconds since start) and its bonus in bps.
/// Purchases past the last bound get no bonus.
pub const BONUS_TIERS: [(i64, u16); 5] = [
    (3 * SECONDS_PER_HOUR, 3_000),   // +30%
    (24 * SECONDS_PER_HOUR, 2_000),  // +20%
    (72 * SECONDS_PER_HOUR, 1_000),  // +10%
    (168 * SECONDS_PER_HOUR, 500),   // +5%
    (336 * SECONDS_PER_HOUR, 250),   // +2.5%
];

// Dividend accumulator scale, as a power of two
pub const MAGNITUDE_SHIFT: usize = 128;
