//! Single-column value helpers shared by the record generators.

use chrono::{Datelike, Days, NaiveDate};
use rand::{Rng, RngCore};
use rand::seq::IndexedRandom;
use uuid::Uuid;

use orderseed_core::OrderStatus;

use crate::errors::GenerationError;

pub const PHONE_DIGITS: usize = 10;
pub const MIN_DEADLINE_WEEKS: u64 = 1;
pub const MAX_DEADLINE_WEEKS: u64 = 5;
pub const MAX_RATE: u8 = 5;
pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 10;

/// Random (version 4) UUID drawn from `rng` so seeded runs repeat.
pub fn uuid_v4(rng: &mut dyn RngCore) -> Uuid {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// `prefix` followed by ten digits drawn independently.
pub fn phone_number(prefix: &str, rng: &mut dyn RngCore) -> String {
    let mut phone = String::with_capacity(prefix.len() + PHONE_DIGITS);
    phone.push_str(prefix);
    for _ in 0..PHONE_DIGITS {
        let digit = rng.random_range(0..10_u32);
        phone.push(char::from_digit(digit, 10).unwrap_or('0'));
    }
    phone
}

/// `creation_date` plus one to five whole weeks.
pub fn deadline_for(creation_date: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
    let weeks = rng.random_range(MIN_DEADLINE_WEEKS..=MAX_DEADLINE_WEEKS);
    creation_date
        .checked_add_days(Days::new(weeks * 7))
        .unwrap_or(NaiveDate::MAX)
}

/// Uniform date between January 1st of `today`'s year and `today`.
pub fn creation_date_this_year(today: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
    let Some(start) = NaiveDate::from_ymd_opt(today.year(), 1, 1) else {
        return today;
    };
    let span = today.signed_duration_since(start).num_days().max(0) as u64;
    let offset = rng.random_range(0..=span);
    start.checked_add_days(Days::new(offset)).unwrap_or(today)
}

/// Orders past their deadline are either completed or canceled.
pub fn select_status(deadline: NaiveDate, today: NaiveDate, rng: &mut dyn RngCore) -> OrderStatus {
    let choices: &[OrderStatus] = if today > deadline {
        &OrderStatus::TERMINAL
    } else {
        &OrderStatus::ALL
    };
    choices.choose(rng).copied().unwrap_or(OrderStatus::Pending)
}

/// Only completed orders carry a rating.
pub fn select_rate(status: OrderStatus, rng: &mut dyn RngCore) -> u8 {
    if status == OrderStatus::Completed {
        rng.random_range(0..=MAX_RATE)
    } else {
        0
    }
}

pub fn quantity(rng: &mut dyn RngCore) -> u8 {
    rng.random_range(MIN_QUANTITY..=MAX_QUANTITY)
}

/// bcrypt hash of `password` with a salt drawn from `rng`.
pub fn hash_password(
    password: &str,
    cost: u32,
    rng: &mut dyn RngCore,
) -> Result<String, GenerationError> {
    let mut salt = [0_u8; 16];
    rng.fill_bytes(&mut salt);
    let parts = bcrypt::hash_with_salt(password, cost, salt)?;
    Ok(parts.format_for_version(bcrypt::Version::TwoB))
}
