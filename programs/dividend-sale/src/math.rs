use anchor_lang::prelude::*;
use ruint::aliases::U256;

use crate::constants::{BONUS_TIERS, BPS, MAGNITUDE_SHIFT};
use crate::errors::ErrorCode;

/// Signed 256-bit integer stored as two's complement little-endian limbs.
///
/// Dividend corrections only ever add or subtract unsigned magnitudes, and both
/// wrap modulo 2^256. A running sum of corrections is therefore exact as long as
/// the true result it is combined with fits in 255 bits.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct SignedWide {
    pub limbs: [u64; 4],
}

impl SignedWide {
    pub const ZERO: Self = Self { limbs: [0; 4] };

    fn raw(&self) -> U256 {
        U256::from_limbs(self.limbs)
    }

    fn from_raw(raw: U256) -> Self {
        Self { limbs: raw.into_limbs() }
    }

    pub fn is_negative(&self) -> bool {
        self.raw().bit(255)
    }

    pub fn plus(self, magnitude: U256) -> Self {
        Self::from_raw(self.raw().wrapping_add(magnitude))
    }

    pub fn minus(self, magnitude: U256) -> Self {
        Self::from_raw(self.raw().wrapping_sub(magnitude))
    }

    /// Returns `base + self`, failing if the exact result would be negative.
    pub fn offset(self, base: U256) -> Result<U256> {
        let sum = base.wrapping_add(self.raw());
        require!(!sum.bit(255), ErrorCode::MathOverflow);
        Ok(sum)
    }
}

/// Bonus in basis points for a purchase made `elapsed` seconds after the sale start.
pub fn bonus_bps(elapsed: i64) -> u16 {
    BONUS_TIERS
        .iter()
        .find(|(bound, _)| elapsed < *bound)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Units minted for `value` lamports: `value * rate * (1 + bonus)`, floored once at the end.
pub fn minted_amount(value: u64, exchange_rate: u64, bonus_bps: u16) -> Result<u64> {
    let scaled = U256::from(value)
        .checked_mul(U256::from(exchange_rate))
        .ok_or(ErrorCode::MathOverflow)?
        .checked_mul(U256::from(BPS + bonus_bps as u64))
        .ok_or(ErrorCode::MathOverflow)?;

    let minted = u64::try_from(scaled / U256::from(BPS)).map_err(|_| ErrorCode::MathOverflow)?;
    Ok(minted)
}

/// Accumulator increase for distributing `value` over `total_supply` units.
pub fn per_share_increment(value: u64, total_supply: u64) -> Result<U256> {
    require!(total_supply > 0, ErrorCode::ZeroSupplyDistribution);
    Ok((U256::from(value) << MAGNITUDE_SHIFT) / U256::from(total_supply))
}

/// `magnified_per_share * amount`, the magnified entitlement carried by `amount` units.
pub fn magnified_share(magnified_per_share: U256, amount: u64) -> Result<U256> {
    let product = magnified_per_share
        .checked_mul(U256::from(amount))
        .ok_or(ErrorCode::MathOverflow)?;
    Ok(product)
}

/// Total entitlement ever accrued: `floor((mps * balance + correction) / MAGNITUDE)`.
pub fn accumulated_entitlement(
    magnified_per_share: U256,
    balance: u64,
    correction: SignedWide,
) -> Result<u64> {
    let magnified = correction.offset(magnified_share(magnified_per_share, balance)?)?;
    let entitlement = u64::try_from(magnified >> MAGNITUDE_SHIFT).map_err(|_| ErrorCode::MathOverflow)?;
    Ok(entitlement)
}
