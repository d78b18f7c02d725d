//! Button-group selection.
//!
//! The effective option is the first one, in declaration order, whose click
//! counter is non-zero. Once any button of a group has been clicked, clicking
//! a later button in the same group does not change the selection.

use crate::domain::market_data::{Interval, Period};

/// Option at the first non-zero counter, or the first option when none is.
///
/// Counters beyond the option list are ignored; missing counters count as
/// zero. An empty option list yields `None`.
pub fn resolve_first_clicked<T: Copy>(options: &[T], clicks: &[u32]) -> Option<T> {
    let index = clicks
        .iter()
        .take(options.len())
        .position(|&count| count != 0)
        .unwrap_or(0);
    options.get(index).copied()
}

pub fn resolve_period(clicks: &[u32]) -> Period {
    resolve_first_clicked(&Period::options(), clicks).unwrap_or(Period::OneDay)
}

pub fn resolve_interval(clicks: &[u32]) -> Interval {
    resolve_first_clicked(&Interval::options(), clicks).unwrap_or(Interval::OneMinute)
}
