//! Delivery Time Control
//!
//! A range selector restricted to seven duration buckets. Continuous input
//! (a drag position normalised to 0-100) is snapped to the nearest bucket.

use serde::{Deserialize, Serialize};

/// Desired project delivery window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryTime {
    #[default]
    UnderOneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    EighteenMonths,
    TwoYears,
    OverTwoYears,
}

impl DeliveryTime {
    /// All options in slider order
    pub const ALL: [DeliveryTime; 7] = [
        DeliveryTime::UnderOneMonth,
        DeliveryTime::ThreeMonths,
        DeliveryTime::SixMonths,
        DeliveryTime::OneYear,
        DeliveryTime::EighteenMonths,
        DeliveryTime::TwoYears,
        DeliveryTime::OverTwoYears,
    ];

    /// Duration in months (25 stands for "more than two years")
    pub fn months(&self) -> u32 {
        match self {
            DeliveryTime::UnderOneMonth => 1,
            DeliveryTime::ThreeMonths => 3,
            DeliveryTime::SixMonths => 6,
            DeliveryTime::OneYear => 12,
            DeliveryTime::EighteenMonths => 18,
            DeliveryTime::TwoYears => 24,
            DeliveryTime::OverTwoYears => 25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryTime::UnderOneMonth => "< 1 month",
            DeliveryTime::ThreeMonths => "3 months",
            DeliveryTime::SixMonths => "6 months",
            DeliveryTime::OneYear => "1 year",
            DeliveryTime::EighteenMonths => "1.5 years",
            DeliveryTime::TwoYears => "2 years",
            DeliveryTime::OverTwoYears => "24+ months",
        }
    }

    pub fn from_months(months: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.months() == months)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|o| o == self).unwrap_or(0)
    }

    /// Position of this option on a 0-100 scale
    pub fn percentage(&self) -> f64 {
        let max_index = (Self::ALL.len() - 1) as f64;
        self.index() as f64 / max_index * 100.0
    }

    /// Nearest option for a 0-100 position. Out-of-range input clamps to the
    /// first/last option; NaN maps to the first.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage.is_nan() {
            return Self::ALL[0];
        }
        let max_index = Self::ALL.len() - 1;
        let raw = (percentage / 100.0 * max_index as f64).round();
        let index = raw.clamp(0.0, max_index as f64) as usize;
        Self::ALL[index]
    }

    /// Step size of the underlying range input
    pub fn step() -> f64 {
        100.0 / (Self::ALL.len() - 1) as f64
    }
}

/// Stateful control wrapping the current selection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeliveryTimeControl {
    value: DeliveryTime,
}

impl DeliveryTimeControl {
    pub fn new(value: DeliveryTime) -> Self {
        Self { value }
    }

    pub fn value(&self) -> DeliveryTime {
        self.value
    }

    pub fn percentage(&self) -> f64 {
        self.value.percentage()
    }

    /// Apply a drag position; returns the (possibly unchanged) snapped value
    pub fn drag_to(&mut self, percentage: f64) -> DeliveryTime {
        self.value = DeliveryTime::from_percentage(percentage);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_round_trips_every_option() {
        for option in DeliveryTime::ALL {
            assert_eq!(DeliveryTime::from_percentage(option.percentage()), option);
        }
    }

    #[test]
    fn test_percentage_endpoints() {
        assert_eq!(DeliveryTime::UnderOneMonth.percentage(), 0.0);
        assert_eq!(DeliveryTime::OverTwoYears.percentage(), 100.0);
        assert_eq!(DeliveryTime::OneYear.percentage(), 50.0);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(DeliveryTime::from_percentage(-40.0), DeliveryTime::UnderOneMonth);
        assert_eq!(DeliveryTime::from_percentage(250.0), DeliveryTime::OverTwoYears);
        assert_eq!(DeliveryTime::from_percentage(f64::NAN), DeliveryTime::UnderOneMonth);
        assert_eq!(DeliveryTime::from_percentage(f64::INFINITY), DeliveryTime::OverTwoYears);
    }

    #[test]
    fn test_drag_snaps_to_nearest() {
        let mut control = DeliveryTimeControl::default();
        // 6 buckets of ~16.67: 20% is nearest to index 1, 25% rounds to 2
        assert_eq!(control.drag_to(20.0), DeliveryTime::ThreeMonths);
        assert_eq!(control.drag_to(25.0), DeliveryTime::SixMonths);
        assert_eq!(control.drag_to(99.0), DeliveryTime::OverTwoYears);
        assert_eq!(control.value(), DeliveryTime::OverTwoYears);
    }

    #[test]
    fn test_months_lookup() {
        assert_eq!(DeliveryTime::from_months(18), Some(DeliveryTime::EighteenMonths));
        assert_eq!(DeliveryTime::from_months(25).map(|d| d.label()), Some("24+ months"));
        assert_eq!(DeliveryTime::from_months(7), None);
    }
}
