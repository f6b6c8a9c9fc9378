use anchor_lang::prelude::*;
use ruint::aliases::U256;
use crate::errors::ErrorCode;
use crate::math::{magnified_share, per_share_increment};
use super::{Allowance, HolderRecord};

/// Global balance ledger and dividend accumulator
#[account]
#[derive(InitSpace)]
pub struct Ledger {
    /// Identity holding the mint capability (sale config PDA, then the controller after finish_minting)
    pub mint_authority: Pubkey,
    /// Sum of all holder balances
    pub total_supply: u64,
    /// Dividends per unit scaled by 2^128, as little-endian U256 limbs
    pub magnified_per_share: [u64; 4],
    /// Lamports ever distributed
    pub total_distributed: u64,
    /// Lamports ever claimed
    pub total_withdrawn: u64,
    /// Holder records ever created
    pub holder_count: u32,
    /// One-way: no minting once set
    pub minting_finished: bool,
    /// One-way: transfers allowed once set
    pub trading_started: bool,
    /// Bump seed for the PDA
    pub bump: u8,
    /// Bump seed of the dividend pool PDA
    pub pool_bump: u8,
}

impl Ledger {
    pub fn new(mint_authority: Pubkey, bump: u8, pool_bump: u8) -> Self {
        Self {
            mint_authority,
            total_supply: 0,
            magnified_per_share: [0; 4],
            total_distributed: 0,
            total_withdrawn: 0,
            holder_count: 0,
            minting_finished: false,
            trading_started: false,
            bump,
            pool_bump,
        }
    }

    pub fn magnified_per_share(&self) -> U256 {
        U256::from_limbs(self.magnified_per_share)
    }

    pub fn is_mint_authority(&self, caller: &Pubkey) -> bool {
        self.mint_authority == *caller
    }

    /// Lamports distributed and not yet claimed
    pub fn outstanding_dividends(&self) -> u64 {
        self.total_distributed.saturating_sub(self.total_withdrawn)
    }

    /// Binds a freshly created holder record to its owner
    pub fn touch_holder(&mut self, record: &mut HolderRecord, owner: Pubkey, bump: u8) -> Result<()> {
        if !record.is_initialized() {
            self.holder_count = self.holder_count
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?;
            *record = HolderRecord::new(owner, bump);
        }
        Ok(())
    }

    /// Creates `amount` new units for `to`, keeping its past entitlement unchanged
    pub fn mint(&mut self, to: &mut HolderRecord, amount: u64) -> Result<()> {
        require!(!self.minting_finished, ErrorCode::MintingFinished);

        let total_supply = self.total_supply
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let balance = to.balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let correction = magnified_share(self.magnified_per_share(), amount)?;

        self.total_supply = total_supply;
        to.balance = balance;
        to.dividend_correction = to.dividend_correction.minus(correction);

        Ok(())
    }

    pub fn check_transfer(&self, from: &HolderRecord, amount: u64) -> Result<()> {
        require!(self.trading_started, ErrorCode::TradingNotStarted);
        require!(from.balance >= amount, ErrorCode::InsufficientBalance);
        Ok(())
    }

    /// Moves units between holders; entitlement stays with whoever held the units when it accrued.
    /// `from` and `to` may be two copies of one record, in which case nothing is written.
    pub fn transfer(&self, from: &mut HolderRecord, to: &mut HolderRecord, amount: u64) -> Result<()> {
        self.check_transfer(from, amount)?;
        if from.owner == to.owner {
            return Ok(());
        }

        let to_balance = to.balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let correction = magnified_share(self.magnified_per_share(), amount)?;

        from.balance -= amount;
        to.balance = to_balance;
        from.dividend_correction = from.dividend_correction.plus(correction);
        to.dividend_correction = to.dividend_correction.minus(correction);

        Ok(())
    }

    /// Delegated transfer: trading lock, balance and allowance are all checked before anything moves
    pub fn transfer_from(
        &self,
        allowance: &mut Allowance,
        from: &mut HolderRecord,
        to: &mut HolderRecord,
        amount: u64,
    ) -> Result<()> {
        self.check_transfer(from, amount)?;
        allowance.check_spend(amount)?;

        // Sending to the owner still spends the allowance
        self.transfer(from, to, amount)?;
        allowance.spend(amount)
    }

    /// Spreads `value` lamports over the current supply
    pub fn distribute(&mut self, value: u64) -> Result<()> {
        require!(value > 0, ErrorCode::InvalidAmount);

        let increment = per_share_increment(value, self.total_supply)?;
        let magnified_per_share = self.magnified_per_share()
            .checked_add(increment)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_distributed = self.total_distributed
            .checked_add(value)
            .ok_or(ErrorCode::MathOverflow)?;

        self.magnified_per_share = magnified_per_share.into_limbs();
        self.total_distributed = total_distributed;

        Ok(())
    }

    pub fn claimable(&self, holder: &HolderRecord) -> Result<u64> {
        holder.claimable(self.magnified_per_share())
    }

    /// Books a payout of `amount`; the caller moves the lamports in the same transaction
    pub fn claim(&mut self, holder: &mut HolderRecord, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(amount <= self.claimable(holder)?, ErrorCode::InvalidAmount);

        let withdrawn = holder.withdrawn
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_withdrawn = self.total_withdrawn
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        holder.withdrawn = withdrawn;
        self.total_withdrawn = total_withdrawn;

        Ok(())
    }

    /// Freezes the supply and hands the mint capability to `controller`
    pub fn finish_minting(&mut self, controller: Pubkey) -> Result<()> {
        require!(!self.minting_finished, ErrorCode::MintingFinished);

        self.minting_finished = true;
        self.mint_authority = controller;

        msg!("Minting finished, mint authority handed to {}", controller);
        Ok(())
    }

    pub fn start_trading(&mut self) -> Result<()> {
        require!(self.minting_finished, ErrorCode::MintingNotFinished);
        require!(!self.trading_started, ErrorCode::TradingAlreadyStarted);

        self.trading_started = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use crate::constants::LAMPORTS_PER_SOL;

    const UNIT: u64 = 1_000_000_000;
    const SOL: u64 = LAMPORTS_PER_SOL;

    struct Book {
        ledger: Ledger,
        holders: Vec<HolderRecord>,
    }

    impl Book {
        fn new(holders: usize) -> Self {
            let mut ledger = Ledger::new(Pubkey::new_unique(), 255, 254);
            let holders = (0..holders)
                .map(|_| {
                    let mut record = HolderRecord::default();
                    ledger.touch_holder(&mut record, Pubkey::new_unique(), 253).unwrap();
                    record
                })
                .collect();
            Self { ledger, holders }
        }

        fn with_balances(units: &[u64]) -> Self {
            let mut book = Self::new(units.len());
            for (i, amount) in units.iter().enumerate() {
                book.mint(i, amount * UNIT);
            }
            book
        }

        fn mint(&mut self, i: usize, amount: u64) {
            self.ledger.mint(&mut self.holders[i], amount).unwrap();
        }

        fn transfer(&mut self, from: usize, to: usize, amount: u64) -> Result<()> {
            let (a, b) = pair(&mut self.holders, from, to);
            self.ledger.transfer(a, b, amount)
        }

        fn claim(&mut self, i: usize, amount: u64) -> Result<()> {
            self.ledger.claim(&mut self.holders[i], amount)
        }

        fn claimable(&self, i: usize) -> u64 {
            self.ledger.claimable(&self.holders[i]).unwrap()
        }

        fn claimables(&self) -> Vec<u64> {
            (0..self.holders.len()).map(|i| self.claimable(i)).collect()
        }

        fn open_trading(&mut self) {
            self.ledger.finish_minting(Pubkey::new_unique()).unwrap();
            self.ledger.start_trading().unwrap();
        }

        fn assert_invariants(&self) {
            let balances: u64 = self.holders.iter().map(|h| h.balance).sum();
            assert_eq!(balances, self.ledger.total_supply);

            let mps = self.ledger.magnified_per_share();
            let mut claimable_sum = 0u64;
            for holder in &self.holders {
                let accumulated = holder.accumulated_dividends(mps).unwrap();
                assert!(holder.withdrawn <= accumulated);
                claimable_sum += accumulated - holder.withdrawn;
            }
            let outstanding = self.ledger.outstanding_dividends();
            assert!(claimable_sum <= outstanding);
            assert!(outstanding - claimable_sum <= self.ledger.holder_count as u64);
        }
    }

    fn pair(holders: &mut [HolderRecord], i: usize, j: usize) -> (&mut HolderRecord, &mut HolderRecord) {
        assert_ne!(i, j);
        if i < j {
            let (left, right) = holders.split_at_mut(j);
            (&mut left[i], &mut right[0])
        } else {
            let (left, right) = holders.split_at_mut(i);
            (&mut right[0], &mut left[j])
        }
    }

    /// Within one lamport of `expected`, never above it
    fn assert_rounded(actual: u64, expected: u64) {
        assert!(actual <= expected && expected - actual <= 1, "{actual} vs {expected}");
    }

    #[test]
    fn distributes_pro_rata_and_tracks_partial_claims() {
        let mut book = Book::with_balances(&[1, 2, 1, 0]);

        book.ledger.distribute(SOL).unwrap();
        assert_eq!(book.claimables(), vec![SOL / 4, SOL / 2, SOL / 4, 0]);

        book.claim(1, 40 * SOL / 100).unwrap();
        assert_eq!(book.claimables(), vec![SOL / 4, SOL / 10, SOL / 4, 0]);
        assert_eq!(book.holders[1].withdrawn, 40 * SOL / 100);
        assert_eq!(book.ledger.total_withdrawn, 40 * SOL / 100);
        book.assert_invariants();
    }

    #[test]
    fn entitlement_follows_balances_across_rounds() {
        let mut book = Book::with_balances(&[1, 2, 1, 0]);
        book.ledger.distribute(SOL).unwrap();

        book.mint(0, UNIT);
        book.claim(1, SOL / 4).unwrap();
        book.mint(3, 5 * UNIT);
        book.ledger.distribute(5 * SOL).unwrap();
        assert_eq!(
            book.claimables(),
            vec![125 * SOL / 100, 125 * SOL / 100, 75 * SOL / 100, 250 * SOL / 100]
        );

        book.open_trading();
        book.transfer(0, 2, UNIT).unwrap();
        book.transfer(0, 3, UNIT).unwrap();
        book.transfer(1, 0, UNIT).unwrap();
        book.transfer(1, 3, UNIT).unwrap();
        for value in [5, 2, 1, 2] {
            book.ledger.distribute(value * SOL).unwrap();
        }

        let expected = [225 * SOL / 100, 125 * SOL / 100, 275 * SOL / 100, 950 * SOL / 100];
        for (i, want) in expected.iter().enumerate() {
            assert_rounded(book.claimable(i), *want);
        }
        book.assert_invariants();
    }

    #[test]
    fn transfers_are_locked_before_trading() {
        let mut book = Book::with_balances(&[1, 1]);
        book.ledger.finish_minting(Pubkey::new_unique()).unwrap();

        let err = book.transfer(0, 1, UNIT / 2).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::TradingNotStarted));

        let mut allowance = Allowance {
            owner: book.holders[0].owner,
            spender: Pubkey::new_unique(),
            amount: UNIT,
            bump: 252,
        };
        let (from, to) = pair(&mut book.holders, 0, 1);
        let err = book.ledger.transfer_from(&mut allowance, from, to, UNIT / 2).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::TradingNotStarted));

        assert_eq!(allowance.amount, UNIT);
        assert_eq!(book.holders[0].balance, UNIT);
        assert_eq!(book.holders[1].balance, UNIT);
    }

    #[test]
    fn transfer_from_spends_allowance() {
        let mut book = Book::with_balances(&[1, 1]);
        book.open_trading();

        let mut allowance = Allowance {
            owner: book.holders[0].owner,
            spender: Pubkey::new_unique(),
            amount: UNIT,
            bump: 252,
        };
        let (from, to) = pair(&mut book.holders, 0, 1);
        book.ledger.transfer_from(&mut allowance, from, to, UNIT / 2).unwrap();
        assert_eq!(allowance.amount, UNIT / 2);
        assert_eq!(book.holders[0].balance, UNIT / 2);
        assert_eq!(book.holders[1].balance, 3 * UNIT / 2);

        let (from, to) = pair(&mut book.holders, 0, 1);
        let err = book.ledger.transfer_from(&mut allowance, from, to, UNIT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InsufficientBalance));

        let mut allowance = Allowance {
            owner: book.holders[1].owner,
            spender: Pubkey::new_unique(),
            amount: 1,
            bump: 252,
        };
        let (from, to) = pair(&mut book.holders, 1, 0);
        let err = book.ledger.transfer_from(&mut allowance, from, to, 2).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InsufficientAllowance));
        assert_eq!(allowance.amount, 1);
        book.assert_invariants();
    }

    #[test]
    fn transfer_keeps_accrued_entitlement_with_sender() {
        let mut book = Book::with_balances(&[1, 0]);
        book.ledger.distribute(SOL).unwrap();
        book.open_trading();

        book.transfer(0, 1, UNIT).unwrap();
        assert_eq!(book.claimables(), vec![SOL, 0]);

        book.ledger.distribute(SOL).unwrap();
        assert_eq!(book.claimables(), vec![SOL, SOL]);
        book.assert_invariants();
    }

    #[test]
    fn zero_amount_transfer_changes_nothing() {
        let mut book = Book::with_balances(&[1, 1]);
        book.ledger.distribute(SOL).unwrap();
        book.open_trading();

        let before = (book.holders[0].dividend_correction, book.holders[1].dividend_correction);
        book.transfer(0, 1, 0).unwrap();
        assert_eq!(before, (book.holders[0].dividend_correction, book.holders[1].dividend_correction));
        assert_eq!(book.claimables(), vec![SOL / 2, SOL / 2]);
    }

    #[test]
    fn self_transfer_validates_and_changes_nothing() {
        let mut book = Book::with_balances(&[2, 1]);
        book.ledger.distribute(3 * SOL).unwrap();

        let mut twin = book.holders[0].clone();
        let err = book.ledger.transfer(&mut book.holders[0], &mut twin, UNIT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::TradingNotStarted));

        book.open_trading();
        let err = book.ledger.transfer(&mut book.holders[0], &mut twin, 3 * UNIT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InsufficientBalance));

        book.ledger.transfer(&mut book.holders[0], &mut twin, UNIT).unwrap();
        assert_eq!(book.holders[0].balance, 2 * UNIT);
        assert_eq!(twin.balance, 2 * UNIT);
        assert_eq!(book.holders[0].dividend_correction, twin.dividend_correction);
        assert_eq!(book.claimables(), vec![2 * SOL, SOL]);
        book.assert_invariants();
    }

    #[test]
    fn transfer_from_to_owner_spends_allowance_only() {
        let mut book = Book::with_balances(&[2]);
        book.open_trading();

        let mut allowance = Allowance {
            owner: book.holders[0].owner,
            spender: Pubkey::new_unique(),
            amount: UNIT,
            bump: 252,
        };
        let mut twin = book.holders[0].clone();
        book.ledger.transfer_from(&mut allowance, &mut book.holders[0], &mut twin, UNIT / 4).unwrap();
        assert_eq!(allowance.amount, 3 * UNIT / 4);
        assert_eq!(book.holders[0].balance, 2 * UNIT);
        assert_eq!(twin.balance, 2 * UNIT);

        let err = book.ledger
            .transfer_from(&mut allowance, &mut book.holders[0], &mut twin, UNIT)
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InsufficientAllowance));
        assert_eq!(allowance.amount, 3 * UNIT / 4);
    }

    #[test]
    fn default_key_holder_is_touched_once() {
        let mut ledger = Ledger::new(Pubkey::new_unique(), 255, 254);
        let mut record = HolderRecord::default();

        ledger.touch_holder(&mut record, Pubkey::default(), 253).unwrap();
        ledger.mint(&mut record, 1_000).unwrap();
        ledger.touch_holder(&mut record, Pubkey::default(), 253).unwrap();
        ledger.mint(&mut record, 500).unwrap();

        assert_eq!(record.balance, 1_500);
        assert_eq!(record.balance, ledger.total_supply);
        assert_eq!(ledger.holder_count, 1);
    }

    #[test]
    fn rejects_over_claim_and_zero_claim() {
        let mut book = Book::with_balances(&[1, 2, 1]);
        book.ledger.distribute(SOL).unwrap();

        let err = book.claim(1, 51 * SOL / 100).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InvalidAmount));
        let err = book.claim(1, 0).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InvalidAmount));

        assert_eq!(book.claimable(1), SOL / 2);
        assert_eq!(book.holders[1].withdrawn, 0);
        assert_eq!(book.ledger.total_withdrawn, 0);
    }

    #[test]
    fn distribution_requires_supply_and_value() {
        let mut book = Book::new(2);
        let err = book.ledger.distribute(SOL).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::ZeroSupplyDistribution));
        assert_eq!(book.ledger.total_distributed, 0);

        book.mint(0, UNIT);
        let err = book.ledger.distribute(0).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InvalidAmount));
        assert_eq!(book.ledger.magnified_per_share(), U256::ZERO);
    }

    #[test]
    fn finish_minting_is_one_way_and_hands_off_authority() {
        let mut book = Book::with_balances(&[1]);
        let controller = Pubkey::new_unique();
        assert!(!book.ledger.is_mint_authority(&controller));

        book.ledger.finish_minting(controller).unwrap();
        assert!(book.ledger.minting_finished);
        assert!(book.ledger.is_mint_authority(&controller));

        let err = book.ledger.mint(&mut book.holders[0], UNIT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::MintingFinished));
        assert_eq!(book.ledger.total_supply, UNIT);

        let err = book.ledger.finish_minting(controller).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::MintingFinished));
    }

    #[test]
    fn trading_starts_only_after_minting_and_once() {
        let mut book = Book::with_balances(&[1]);
        let err = book.ledger.start_trading().unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::MintingNotFinished));

        book.open_trading();
        let err = book.ledger.start_trading().unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::TradingAlreadyStarted));
    }

    #[test]
    fn touch_counts_each_holder_once() {
        let mut book = Book::new(3);
        assert_eq!(book.ledger.holder_count, 3);

        let owner = book.holders[0].owner;
        book.ledger.touch_holder(&mut book.holders[0], owner, 253).unwrap();
        assert_eq!(book.ledger.holder_count, 3);
    }

    #[test]
    fn claimable_depends_only_on_balances_at_distribution_time() {
        let mut forward = Book::with_balances(&[1, 1, 1]);
        let mut reverse = Book::with_balances(&[1, 1, 1]);
        forward.ledger.distribute(3 * SOL).unwrap();
        reverse.ledger.distribute(3 * SOL).unwrap();

        forward.mint(1, 7 * UNIT);
        forward.mint(2, 3 * UNIT);
        forward.mint(0, 2 * UNIT);

        reverse.mint(0, 2 * UNIT);
        reverse.mint(2, 3 * UNIT);
        reverse.mint(1, 7 * UNIT);

        forward.ledger.distribute(SOL).unwrap();
        reverse.ledger.distribute(SOL).unwrap();
        assert_eq!(forward.claimables(), reverse.claimables());
    }

    #[test]
    fn invariants_hold_under_interleaved_operations() {
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next = move |bound: u64| {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (seed >> 33) % bound
        };

        let mut book = Book::new(6);
        for step in 0..600 {
            if step == 300 {
                book.open_trading();
            }
            let i = next(6) as usize;
            match next(4) {
                0 if !book.ledger.minting_finished => book.mint(i, next(1_000) * UNIT + next(UNIT)),
                0 | 1 => {
                    let j = (i + 1 + next(5) as usize) % 6;
                    let amount = next(book.holders[i].balance + 1);
                    if book.ledger.trading_started {
                        book.transfer(i, j, amount).unwrap();
                    } else {
                        assert!(book.transfer(i, j, amount).is_err());
                    }
                }
                2 if book.ledger.total_supply > 0 => book.ledger.distribute(next(50 * SOL) + 1).unwrap(),
                _ => {
                    let claimable = book.claimable(i);
                    if claimable > 0 {
                        book.claim(i, next(claimable) + 1).unwrap();
                    }
                }
            }
            book.assert_invariants();
        }
    }
}
