//! Overtime tier allocation.
//!
//! Splits the time worked in a day into the regular, overtime-125 and
//! overtime-150 tiers. Tier boundaries are cumulative over the whole day, so
//! the caller passes the day's total rather than individual periods. The
//! split is available in decimal hours for reporting and in whole minutes
//! for exact pay.

use rust_decimal::Decimal;

use crate::config::ThresholdConfig;

/// Time worked in one day split by tier, in hours or minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierSplit {
    /// Time up to the regular threshold.
    pub regular: Decimal,
    /// Time between the regular and overtime-125 thresholds.
    pub overtime_125: Decimal,
    /// Time beyond the overtime-125 threshold.
    pub overtime_150: Decimal,
}

impl TierSplit {
    /// Bills all of `amount` at the overtime-150 tier.
    pub fn all_overtime_150(amount: Decimal) -> Self {
        Self {
            overtime_150: amount,
            ..Self::default()
        }
    }

    /// Sum of all three tiers.
    pub fn total(&self) -> Decimal {
        self.regular + self.overtime_125 + self.overtime_150
    }
}

/// Allocates a day's worked hours to the three tiers.
///
/// The first `regular_hours` go to the regular tier, hours up to
/// `overtime_125_hours` to the overtime-125 tier and the remainder to the
/// overtime-150 tier. The overtime-150 share is taken as what is left, so the
/// tiers always sum back to `worked_hours` exactly. Negative input allocates
/// nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::allocate_tiers;
/// use payroll_engine::config::ThresholdConfig;
/// use rust_decimal::Decimal;
///
/// let tiers = allocate_tiers(Decimal::new(11, 0), &ThresholdConfig::default());
///
/// assert_eq!(tiers.regular, Decimal::new(8, 0));
/// assert_eq!(tiers.overtime_125, Decimal::new(2, 0));
/// assert_eq!(tiers.overtime_150, Decimal::new(1, 0));
/// ```
pub fn allocate_tiers(worked_hours: Decimal, thresholds: &ThresholdConfig) -> TierSplit {
    split(
        worked_hours,
        thresholds.regular_hours,
        thresholds.overtime_125_hours,
    )
}

/// Allocates a day's worked minutes to the three tiers.
///
/// Same boundaries as [`allocate_tiers`], with the thresholds converted to
/// minutes. Every share is exact, so pay can be computed from it without
/// accumulating rounding.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::allocate_tier_minutes;
/// use payroll_engine::config::ThresholdConfig;
/// use rust_decimal::Decimal;
///
/// let tiers = allocate_tier_minutes(482, &ThresholdConfig::default());
///
/// assert_eq!(tiers.regular, Decimal::new(480, 0));
/// assert_eq!(tiers.overtime_125, Decimal::new(2, 0));
/// ```
pub fn allocate_tier_minutes(worked_minutes: i64, thresholds: &ThresholdConfig) -> TierSplit {
    let per_hour = Decimal::new(60, 0);
    split(
        Decimal::from(worked_minutes),
        thresholds.regular_hours * per_hour,
        thresholds.overtime_125_hours * per_hour,
    )
}

fn split(amount: Decimal, regular_threshold: Decimal, overtime_125_threshold: Decimal) -> TierSplit {
    if amount <= Decimal::ZERO {
        return TierSplit::default();
    }

    let regular_cap = regular_threshold.max(Decimal::ZERO);
    let overtime_125_width = (overtime_125_threshold - regular_cap).max(Decimal::ZERO);

    let regular = amount.min(regular_cap);
    let overtime_125 = (amount - regular).min(overtime_125_width);
    let overtime_150 = amount - regular - overtime_125;

    TierSplit {
        regular,
        overtime_125,
        overtime_150,
    }
}
