use multiversx_sc_scenario::api::DebugApi;

use shared_types::schedule::{
    day_of_week, fits_window, hour_of, intervals_overlap, valid_window, SECONDS_PER_DAY,
    SECONDS_PER_HOUR,
};
use shared_types::{PurchaseStatus, NEW_USER_GRANT_HOURS, TOKEN_PER_HOUR};

type ChronoTradeContract = chrono_trade::ContractObj<DebugApi>;
type TimeTokenContract = time_token::ContractObj<DebugApi>;

// 2024-01-01 00:00:00 UTC, a Monday.
const MONDAY_2024: u64 = 1_704_067_200;

fn try_approve(
    status: PurchaseStatus,
    now: u64,
    window_end: u64,
) -> Result<PurchaseStatus, &'static str> {
    if status != PurchaseStatus::Booked {
        return Err("ERR_INVALID_STATE");
    }
    if now < window_end {
        return Err("ERR_TIMEOUT_NOT_REACHED");
    }
    Ok(PurchaseStatus::Approved)
}

fn try_withdraw(status: PurchaseStatus) -> Result<PurchaseStatus, &'static str> {
    if status != PurchaseStatus::Approved {
        return Err("ERR_INVALID_STATE");
    }
    Ok(PurchaseStatus::Withdrawn)
}

fn try_book(bookings: &mut Vec<(u64, u64)>, start: u64, end: u64) -> Result<(), &'static str> {
    for (booked_start, booked_end) in bookings.iter() {
        if intervals_overlap(start, end, *booked_start, *booked_end) {
            return Err("ERR_SLOT_CONFLICT");
        }
    }
    bookings.push((start, end));
    Ok(())
}

#[test]
fn contract_objects_build() {
    let _: fn() -> ChronoTradeContract = chrono_trade::contract_obj;
    let _: fn() -> TimeTokenContract = time_token::contract_obj;
}

#[test]
fn day_of_week_is_epoch_anchored() {
    // 1970-01-01 was a Thursday.
    assert_eq!(day_of_week(0), 3);
    // 1970-01-05 was the first Monday after the epoch.
    assert_eq!(day_of_week(4 * SECONDS_PER_DAY), 0);
    assert_eq!(day_of_week(MONDAY_2024), 0);
    assert_eq!(day_of_week(MONDAY_2024 - SECONDS_PER_DAY), 6);
    assert_eq!(day_of_week(MONDAY_2024 + 2 * SECONDS_PER_DAY), 2);
}

#[test]
fn day_of_week_repeats_weekly() {
    for offset in 0u64..7 {
        let ts = MONDAY_2024 + offset * SECONDS_PER_DAY;
        assert_eq!(day_of_week(ts), day_of_week(ts + 7 * SECONDS_PER_DAY));
    }
}

#[test]
fn hour_extraction() {
    assert_eq!(hour_of(MONDAY_2024), 0);
    assert_eq!(hour_of(MONDAY_2024 + 10 * SECONDS_PER_HOUR), 10);
    assert_eq!(hour_of(MONDAY_2024 + SECONDS_PER_DAY - 1), 23);
    // sub-hour offsets truncate to the containing hour
    assert_eq!(hour_of(MONDAY_2024 + 10 * SECONDS_PER_HOUR + 1_800), 10);
}

#[test]
fn overlap_is_half_open() {
    // touching endpoints do not overlap
    assert!(!intervals_overlap(0, 10, 10, 20));
    assert!(!intervals_overlap(10, 20, 0, 10));
    assert!(intervals_overlap(0, 11, 10, 20));
    assert!(intervals_overlap(10, 20, 0, 11));
}

#[test]
fn overlap_is_symmetric() {
    let cases = [
        (0u64, 10u64, 5u64, 15u64),
        (5, 15, 0, 10),
        (0, 20, 5, 10),
        (5, 10, 0, 20),
        (0, 5, 10, 20),
    ];
    for (s1, e1, s2, e2) in cases {
        assert_eq!(
            intervals_overlap(s1, e1, s2, e2),
            intervals_overlap(s2, e2, s1, e1)
        );
    }
}

#[test]
fn overlap_identical_and_contained() {
    assert!(intervals_overlap(10, 20, 10, 20));
    assert!(intervals_overlap(10, 20, 12, 14));
    assert!(intervals_overlap(12, 14, 10, 20));
}

#[test]
fn window_fit_requires_full_duration() {
    // 9-17 window, two-hour service
    assert!(fits_window(9, 17, 9, 2));
    assert!(fits_window(9, 17, 10, 2));
    assert!(fits_window(9, 17, 15, 2));
    // ends past the window
    assert!(!fits_window(9, 17, 16, 2));
    // starts before the window
    assert!(!fits_window(9, 17, 8, 2));
    // exactly fills the window
    assert!(fits_window(9, 17, 9, 8));
    assert!(!fits_window(9, 17, 9, 9));
}

#[test]
fn window_validation() {
    assert!(valid_window(9, 17));
    assert!(valid_window(23, 24));
    assert!(valid_window(0, 1));
    // end before start
    assert!(!valid_window(12, 9));
    assert!(!valid_window(9, 9));
    assert!(!valid_window(0, 25));
}

#[test]
fn scheduled_monday_morning_fits_declared_slot() {
    let scheduled = MONDAY_2024 + 10 * SECONDS_PER_HOUR;
    assert_eq!(day_of_week(scheduled), 0);
    assert!(fits_window(9, 17, hour_of(scheduled), 2));
}

#[test]
fn double_booking_rejected() {
    let mut bookings = Vec::new();
    let start = MONDAY_2024 + 10 * SECONDS_PER_HOUR;
    let end = start + 2 * SECONDS_PER_HOUR;

    assert!(try_book(&mut bookings, start, end).is_ok());
    assert_eq!(
        try_book(&mut bookings, start, end),
        Err("ERR_SLOT_CONFLICT")
    );
    // one-hour shift still collides with the two-hour booking
    assert_eq!(
        try_book(&mut bookings, start + SECONDS_PER_HOUR, end + SECONDS_PER_HOUR),
        Err("ERR_SLOT_CONFLICT")
    );
    // back-to-back booking is allowed
    assert!(try_book(&mut bookings, end, end + 2 * SECONDS_PER_HOUR).is_ok());
    // next day is free
    assert!(try_book(&mut bookings, start + SECONDS_PER_DAY, end + SECONDS_PER_DAY).is_ok());
    assert_eq!(bookings.len(), 3);
}

#[test]
fn booked_slot_listing_window() {
    let bookings = [
        MONDAY_2024 + 10 * SECONDS_PER_HOUR,
        MONDAY_2024 + SECONDS_PER_DAY + 10 * SECONDS_PER_HOUR,
        MONDAY_2024 + 3 * SECONDS_PER_DAY,
    ];
    let from = MONDAY_2024;
    let to = MONDAY_2024 + 2 * SECONDS_PER_DAY;

    let listed: Vec<u64> = bookings
        .iter()
        .copied()
        .filter(|start| *start >= from && *start < to)
        .collect();
    assert_eq!(listed.len(), 2);
    // the range end is exclusive
    let listed_at_boundary: Vec<u64> = bookings
        .iter()
        .copied()
        .filter(|start| *start >= from && *start < bookings[2])
        .collect();
    assert_eq!(listed_at_boundary.len(), 2);
}

#[test]
fn pricing_is_duration_times_rate() {
    let two_hours = 2u128 * TOKEN_PER_HOUR as u128;
    assert_eq!(two_hours, 2_000_000_000_000_000_000u128);
    let grant = NEW_USER_GRANT_HOURS as u128 * TOKEN_PER_HOUR as u128;
    // the bootstrap grant covers exactly 24 traded hours
    assert_eq!(grant / TOKEN_PER_HOUR as u128, 24);
    assert!(grant >= two_hours);
}

#[test]
fn purchase_state_machine_lifecycle() {
    let scheduled = MONDAY_2024 + 10 * SECONDS_PER_HOUR;
    let window_end = scheduled + 2 * SECONDS_PER_HOUR;

    let booked = PurchaseStatus::Booked;
    // the service window has not elapsed yet
    assert!(try_approve(booked, scheduled, window_end) == Err("ERR_TIMEOUT_NOT_REACHED"));
    // withdrawal before approval is rejected
    assert!(try_withdraw(booked) == Err("ERR_INVALID_STATE"));

    let approved = try_approve(booked, window_end, window_end).unwrap();
    assert!(approved == PurchaseStatus::Approved);
    // a second approval is rejected
    assert!(try_approve(approved, window_end + 1, window_end) == Err("ERR_INVALID_STATE"));

    let withdrawn = try_withdraw(approved).unwrap();
    assert!(withdrawn == PurchaseStatus::Withdrawn);
    // a second withdrawal is rejected
    assert!(try_withdraw(withdrawn) == Err("ERR_INVALID_STATE"));
}

#[test]
fn insufficient_funds_leaves_state_untouched() {
    let balance = TOKEN_PER_HOUR as u128;
    let price = 2 * TOKEN_PER_HOUR as u128;
    let mut escrow = 0u128;
    let mut purchases = 0u64;

    if balance >= price {
        escrow += price;
        purchases += 1;
    }
    assert_eq!(escrow, 0);
    assert_eq!(purchases, 0);
}

#[test]
fn registration_is_once_only() {
    let mut registered: Vec<&str> = Vec::new();
    let register = |registered: &mut Vec<&str>, who: &'static str| -> Result<(), &'static str> {
        if registered.contains(&who) {
            return Err("ERR_ALREADY_REGISTERED");
        }
        registered.push(who);
        Ok(())
    };

    assert!(register(&mut registered, "seller").is_ok());
    assert_eq!(
        register(&mut registered, "seller"),
        Err("ERR_ALREADY_REGISTERED")
    );
    assert!(register(&mut registered, "buyer").is_ok());
    assert_eq!(registered.len(), 2);
}

#[test]
fn availability_replace_is_total() {
    let mut weekly: std::collections::BTreeMap<u8, Vec<(u8, u8)>> =
        std::collections::BTreeMap::new();

    for day in [0u8, 1, 2] {
        weekly.insert(day, vec![(9, 12), (14, 17)]);
    }
    assert!(weekly.contains_key(&0));
    assert!(weekly.contains_key(&2));

    // a later update replaces the whole relation
    weekly.clear();
    weekly.insert(4u8, vec![(8, 10)]);
    assert!(!weekly.contains_key(&0));
    assert!(!weekly.contains_key(&2));
    assert_eq!(weekly.get(&4).unwrap(), &vec![(8, 10)]);
}

#[test]
fn one_comment_per_buyer_and_service() {
    let mut commented: Vec<(&str, u64)> = Vec::new();
    let mut comment = |who: &'static str, service_id: u64| -> Result<(), &'static str> {
        if commented.contains(&(who, service_id)) {
            return Err("ERR_DUPLICATE_COMMENT");
        }
        commented.push((who, service_id));
        Ok(())
    };

    assert!(comment("buyer", 1).is_ok());
    assert_eq!(comment("buyer", 1), Err("ERR_DUPLICATE_COMMENT"));
    // same buyer, different service from the same seller
    assert!(comment("buyer", 2).is_ok());
}

#[test]
fn rating_bounds() {
    for rating in 1u8..=5 {
        assert!((shared_types::MIN_RATING..=shared_types::MAX_RATING).contains(&rating));
    }
    assert!(!(shared_types::MIN_RATING..=shared_types::MAX_RATING).contains(&0));
    assert!(!(shared_types::MIN_RATING..=shared_types::MAX_RATING).contains(&6));
}

#[test]
fn rating_aggregation() {
    let ratings = [5u64, 4, 5];
    let sum: u64 = ratings.iter().sum();
    let count = ratings.len() as u64;
    assert_eq!(sum, 14);
    assert_eq!(count, 3);
    // the client derives the average from the accumulators
    assert_eq!(sum * 10 / count, 46);
}
