//! Error Types for Portfolio Advisor

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Investment amount too small: {amount} is below the {minimum} minimum")]
    AmountBelowMinimum { amount: Decimal, minimum: Decimal },

    #[error("Investment amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Time horizon out of range: {years} years (allowed: {min}-{max})")]
    HorizonOutOfRange { years: u8, min: u8, max: u8 },

    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),
}
