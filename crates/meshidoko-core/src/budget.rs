//! Budget and price-tier mapping tables.

/// Estimated per-person budget in yen for a provider price tier.
///
/// Tier 1-4 map to fixed amounts; an unrecognized tier reads as the
/// middle-of-the-road 4000. A record without a tier keeps the amount the
/// user asked for, so the estimate is always positive.
#[must_use]
pub fn estimate_budget(price_level: Option<u8>, requested: u32) -> u32 {
    match price_level {
        Some(1) => 2000,
        Some(2) => 3500,
        Some(3) => 6000,
        Some(4) => 10_000,
        Some(_) => 4000,
        None => requested,
    }
}

/// Derives the provider's (minprice, maxprice) search window from the
/// requested per-person budget. Thresholds are fixed at 3000/6000/8000 yen.
#[must_use]
pub fn price_window(budget: u32) -> (u8, u8) {
    let min = if budget < 3000 {
        0
    } else if budget < 6000 {
        1
    } else {
        2
    };
    let max = if budget < 3000 {
        2
    } else if budget < 8000 {
        3
    } else {
        4
    };
    (min, max)
}
