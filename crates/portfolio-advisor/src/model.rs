//! Domain Models
//!
//! Core data types for risk-tiered portfolio allocation.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{PlanError, Result};

/// Minimum accepted investment amount (mirrors the input form's floor)
pub const MIN_INVESTMENT: Decimal = dec!(1000);

/// Allowed time-horizon range in years
pub const MIN_HORIZON_YEARS: u8 = 1;
pub const MAX_HORIZON_YEARS: u8 = 30;

/// Client risk-tolerance tier
///
/// Closed set; every tier has exactly one row in the allocation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All tiers, in display order
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Low" | "low" => Ok(RiskLevel::Low),
            "Medium" | "medium" => Ok(RiskLevel::Medium),
            "High" | "high" => Ok(RiskLevel::High),
            other => Err(PlanError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// A specific instrument suggested for an asset class
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Display name (e.g., "Vanguard Total Bond Market ETF (BND)")
    pub name: String,

    /// Ticker symbol; `None` for instruments without one
    /// (savings accounts, money market funds)
    pub ticker: Option<String>,
}

impl Recommendation {
    pub fn new(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ticker: Some(ticker.into()),
        }
    }

    /// An instrument with no ticker symbol
    pub fn untickered(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ticker: None,
        }
    }

    /// One-line rendering for prompts and plain-text breakdowns
    pub fn display_line(&self) -> String {
        match &self.ticker {
            Some(ticker) => format!("{} [{}]", self.name, ticker),
            None => self.name.clone(),
        }
    }
}

/// One asset class within a risk tier's allocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAllocation {
    /// Asset class name (e.g., "Bonds", "Stocks", "ETFs", "Cash")
    pub asset_class: String,

    /// Share of the portfolio, whole percent. Per tier, these sum to 100.
    pub percentage: u8,

    /// Display color hint for charting
    pub color: String,

    /// Recommended instruments, in display order
    pub recommendations: Vec<Recommendation>,
}

/// A validated plan request
///
/// The original system left the amount/horizon bounds to UI widget
/// constraints. Here they are enforced at construction, so everything
/// downstream can treat the request as well-formed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvestmentRequest {
    /// Amount to invest, USD
    pub amount: Decimal,

    /// Risk tolerance tier
    pub risk_level: RiskLevel,

    /// Investment time horizon in years (1-30)
    pub horizon_years: u8,
}

impl InvestmentRequest {
    pub fn new(amount: Decimal, risk_level: RiskLevel, horizon_years: u8) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(PlanError::NonPositiveAmount(amount));
        }
        if amount < MIN_INVESTMENT {
            return Err(PlanError::AmountBelowMinimum {
                amount,
                minimum: MIN_INVESTMENT,
            });
        }
        if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&horizon_years) {
            return Err(PlanError::HorizonOutOfRange {
                years: horizon_years,
                min: MIN_HORIZON_YEARS,
                max: MAX_HORIZON_YEARS,
            });
        }

        Ok(Self {
            amount,
            risk_level,
            horizon_years,
        })
    }
}

/// One row of the per-asset-class dollar breakdown
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AllocationLine {
    /// Asset class name
    pub asset_class: String,

    /// Share of the portfolio, whole percent
    pub percentage: u8,

    /// Display color hint
    pub color: String,

    /// Dollar amount allocated to this class (exact, unrounded)
    pub amount: Decimal,

    /// Recommended instruments for this class
    pub recommendations: Vec<Recommendation>,
}

impl AllocationLine {
    /// Amount rounded to cents, half-even
    pub fn amount_cents(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    }
}

/// Scale an allocation to a dollar amount, preserving display order.
///
/// `amount * percentage / 100` is exact in `Decimal` for whole percentages,
/// so the line amounts always sum back to `amount`. Rounding to cents is a
/// display concern, applied per line via [`AllocationLine::amount_cents`].
pub fn breakdown(amount: Decimal, allocations: &[AssetAllocation]) -> Vec<AllocationLine> {
    allocations
        .iter()
        .map(|alloc| AllocationLine {
            asset_class: alloc.asset_class.clone(),
            percentage: alloc.percentage,
            color: alloc.color.clone(),
            amount: amount * Decimal::from(alloc.percentage) / dec!(100),
            recommendations: alloc.recommendations.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::allocations_for;

    #[test]
    fn test_risk_level_round_trip() {
        for level in RiskLevel::ALL {
            assert_eq!(level.as_str().parse::<RiskLevel>().unwrap(), level);
        }
        assert!("Reckless".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_request_validation() {
        assert!(InvestmentRequest::new(dec!(10000), RiskLevel::Medium, 5).is_ok());
        assert!(InvestmentRequest::new(dec!(1000), RiskLevel::Low, 1).is_ok());

        assert!(matches!(
            InvestmentRequest::new(dec!(500), RiskLevel::Medium, 5),
            Err(PlanError::AmountBelowMinimum { .. })
        ));
        assert!(matches!(
            InvestmentRequest::new(dec!(-100), RiskLevel::Medium, 5),
            Err(PlanError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            InvestmentRequest::new(dec!(10000), RiskLevel::Medium, 0),
            Err(PlanError::HorizonOutOfRange { .. })
        ));
        assert!(matches!(
            InvestmentRequest::new(dec!(10000), RiskLevel::Medium, 31),
            Err(PlanError::HorizonOutOfRange { .. })
        ));
    }

    #[test]
    fn test_breakdown_medium_10000() {
        let lines = breakdown(dec!(10000), allocations_for(RiskLevel::Medium));

        let amounts: Vec<(&str, Decimal)> = lines
            .iter()
            .map(|l| (l.asset_class.as_str(), l.amount))
            .collect();

        assert_eq!(
            amounts,
            vec![
                ("Bonds", dec!(4000)),
                ("Stocks", dec!(3000)),
                ("ETFs", dec!(2000)),
                ("Cash", dec!(1000)),
            ]
        );
    }

    #[test]
    fn test_breakdown_low_1000() {
        let lines = breakdown(dec!(1000), allocations_for(RiskLevel::Low));

        let amounts: Vec<(&str, Decimal)> = lines
            .iter()
            .map(|l| (l.asset_class.as_str(), l.amount))
            .collect();

        assert_eq!(
            amounts,
            vec![
                ("Bonds", dec!(700)),
                ("Cash", dec!(200)),
                ("ETFs", dec!(100)),
            ]
        );
    }

    #[test]
    fn test_breakdown_sums_to_amount() {
        for level in RiskLevel::ALL {
            for amount in [dec!(0), dec!(1000), dec!(12345.67), dec!(999999.99)] {
                let total: Decimal = breakdown(amount, allocations_for(level))
                    .iter()
                    .map(|l| l.amount)
                    .sum();
                assert_eq!(total, amount, "{level} breakdown must sum to {amount}");
            }
        }
    }

    #[test]
    fn test_amount_cents_rounds_half_even() {
        let line = AllocationLine {
            asset_class: "Bonds".into(),
            percentage: 70,
            color: "#4C78A8".into(),
            amount: dec!(7.005),
            recommendations: vec![],
        };
        assert_eq!(line.amount_cents(), dec!(7.00));
    }

    #[test]
    fn test_recommendation_display_line() {
        let tickered = Recommendation::new("Apple Inc. (AAPL)", "AAPL");
        assert_eq!(tickered.display_line(), "Apple Inc. (AAPL) [AAPL]");

        let plain = Recommendation::untickered("High-Yield Savings Account");
        assert_eq!(plain.display_line(), "High-Yield Savings Account");
    }
}
