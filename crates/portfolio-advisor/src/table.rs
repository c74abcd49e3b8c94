//! Portfolio Allocation Table
//!
//! The static, process-wide allocation data: each risk tier maps to an
//! ordered set of asset classes with fixed percentages, display colors, and
//! named instrument recommendations. Initialized once, never mutated.

use std::sync::LazyLock;

use crate::model::{AssetAllocation, Recommendation, RiskLevel};

// One stable chart color per asset class, shared across tiers.
const COLOR_BONDS: &str = "#4C78A8";
const COLOR_STOCKS: &str = "#F58518";
const COLOR_ETFS: &str = "#54A24B";
const COLOR_CASH: &str = "#EECA3B";

/// The full allocation table, indexed by risk tier
pub struct PortfolioTable {
    low: Vec<AssetAllocation>,
    medium: Vec<AssetAllocation>,
    high: Vec<AssetAllocation>,
}

impl PortfolioTable {
    /// Allocation row for a tier, in display order
    pub fn allocations_for(&self, level: RiskLevel) -> &[AssetAllocation] {
        match level {
            RiskLevel::Low => &self.low,
            RiskLevel::Medium => &self.medium,
            RiskLevel::High => &self.high,
        }
    }
}

static PORTFOLIO_TABLE: LazyLock<PortfolioTable> = LazyLock::new(|| PortfolioTable {
    low: vec![
        bonds(70),
        cash(20),
        AssetAllocation {
            asset_class: "ETFs".into(),
            percentage: 10,
            color: COLOR_ETFS.into(),
            recommendations: vec![
                Recommendation::new("Vanguard Total Stock Market ETF (VTI)", "VTI"),
                Recommendation::new("SPDR S&P 500 ETF Trust (SPY)", "SPY"),
            ],
        },
    ],
    medium: vec![
        bonds(40),
        AssetAllocation {
            asset_class: "Stocks".into(),
            percentage: 30,
            color: COLOR_STOCKS.into(),
            recommendations: vec![
                Recommendation::new("Apple Inc. (AAPL)", "AAPL"),
                Recommendation::new("Microsoft Corporation (MSFT)", "MSFT"),
                Recommendation::new("Amazon.com Inc. (AMZN)", "AMZN"),
            ],
        },
        AssetAllocation {
            asset_class: "ETFs".into(),
            percentage: 20,
            color: COLOR_ETFS.into(),
            recommendations: vec![
                Recommendation::new("Vanguard Total Stock Market ETF (VTI)", "VTI"),
                Recommendation::new("Invesco QQQ Trust (QQQ)", "QQQ"),
            ],
        },
        cash(10),
    ],
    high: vec![
        AssetAllocation {
            asset_class: "Stocks".into(),
            percentage: 70,
            color: COLOR_STOCKS.into(),
            recommendations: vec![
                Recommendation::new("Tesla Inc. (TSLA)", "TSLA"),
                Recommendation::new("NVIDIA Corporation (NVDA)", "NVDA"),
                Recommendation::new("Meta Platforms Inc. (META)", "META"),
                Recommendation::new("Alphabet Inc. (GOOGL)", "GOOGL"),
            ],
        },
        AssetAllocation {
            asset_class: "ETFs".into(),
            percentage: 20,
            color: COLOR_ETFS.into(),
            recommendations: vec![
                Recommendation::new("ARK Innovation ETF (ARKK)", "ARKK"),
                Recommendation::new(
                    "Global X Robotics & Artificial Intelligence ETF (BOTZ)",
                    "BOTZ",
                ),
            ],
        },
        cash(10),
    ],
});

// Bonds and Cash carry the same instruments in every tier that holds them.

fn bonds(percentage: u8) -> AssetAllocation {
    AssetAllocation {
        asset_class: "Bonds".into(),
        percentage,
        color: COLOR_BONDS.into(),
        recommendations: vec![
            Recommendation::new("Vanguard Total Bond Market ETF (BND)", "BND"),
            Recommendation::new("iShares Core U.S. Aggregate Bond ETF (AGG)", "AGG"),
        ],
    }
}

fn cash(percentage: u8) -> AssetAllocation {
    AssetAllocation {
        asset_class: "Cash".into(),
        percentage,
        color: COLOR_CASH.into(),
        recommendations: vec![
            Recommendation::untickered("High-Yield Savings Account"),
            Recommendation::untickered("Money Market Funds"),
        ],
    }
}

/// Resolve a risk tier to its allocation row.
///
/// Total over the closed `RiskLevel` enum; cannot fail.
pub fn allocations_for(level: RiskLevel) -> &'static [AssetAllocation] {
    PORTFOLIO_TABLE.allocations_for(level)
}
