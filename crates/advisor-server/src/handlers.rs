//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use portfolio_advisor::{
    AllocationLine, AssetAllocation, InvestmentRequest, Recommendation, RiskLevel,
    allocations_for, breakdown, format_usd,
};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider_connected: bool,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub amount: Decimal,
    pub risk_level: RiskLevel,
    pub horizon_years: u8,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan_id: String,
    /// Bar-chart data: one slice per asset class, in display order
    pub chart: Vec<ChartSlice>,
    /// Per-asset-class dollar breakdown with recommendations
    pub breakdown: Vec<BreakdownEntry>,
    /// Generated explanation, or the degradation text in its place
    pub explanation: String,
    /// True when the explanation text is an error message, not advice
    pub explanation_degraded: bool,
}

#[derive(Debug, Serialize)]
pub struct ChartSlice {
    pub asset_class: String,
    pub percentage: u8,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct BreakdownEntry {
    pub asset_class: String,
    pub percentage: u8,
    pub color: String,
    pub amount: Decimal,
    pub formatted_amount: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioTableResponse {
    #[serde(rename = "Low")]
    pub low: &'static [AssetAllocation],
    #[serde(rename = "Medium")]
    pub medium: &'static [AssetAllocation],
    #[serde(rename = "High")]
    pub high: &'static [AssetAllocation],
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<AllocationLine> for BreakdownEntry {
    fn from(line: AllocationLine) -> Self {
        let formatted_amount = format_usd(line.amount);
        let amount = line.amount_cents();
        Self {
            asset_class: line.asset_class,
            percentage: line.percentage,
            color: line.color,
            amount,
            formatted_amount,
            recommendations: line.recommendations,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider_connected = state.provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider_connected,
    })
}

/// Full allocation table, keyed by risk tier
pub async fn list_portfolios() -> Json<PortfolioTableResponse> {
    Json(PortfolioTableResponse {
        low: allocations_for(RiskLevel::Low),
        medium: allocations_for(RiskLevel::Medium),
        high: allocations_for(RiskLevel::High),
    })
}

/// Generate an investment plan: resolve the allocation, compute the dollar
/// breakdown, and request the explanation. The explanation call degrades to
/// an error message; chart and breakdown are always present.
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(payload): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request =
        InvestmentRequest::new(payload.amount, payload.risk_level, payload.horizon_years)
            .map_err(|e| {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse {
                        error: e.to_string(),
                        code: "INVALID_REQUEST".into(),
                    }),
                )
            })?;

    let allocations = allocations_for(request.risk_level);
    let lines = breakdown(request.amount, allocations);

    let explanation = state.explainer.explain(&request, allocations).await;
    if explanation.is_degraded() {
        tracing::warn!(
            risk_level = %request.risk_level,
            "serving plan with degraded explanation"
        );
    }

    Ok(Json(PlanResponse {
        plan_id: uuid::Uuid::new_v4().to_string(),
        chart: allocations
            .iter()
            .map(|a| ChartSlice {
                asset_class: a.asset_class.clone(),
                percentage: a.percentage,
                color: a.color.clone(),
            })
            .collect(),
        breakdown: lines.into_iter().map(BreakdownEntry::from).collect(),
        explanation_degraded: explanation.is_degraded(),
        explanation: explanation.text(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::provider::Completion;
    use advisor_core::{AdvisorError, GenerationOptions, LlmProvider, Message};
    use async_trait::async_trait;
    use portfolio_advisor::Explainer;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_breakdown_entry_formats_amount() {
        let lines = breakdown(dec!(10000), allocations_for(RiskLevel::Medium));
        let entries: Vec<BreakdownEntry> =
            lines.into_iter().map(BreakdownEntry::from).collect();

        assert_eq!(entries[0].asset_class, "Bonds");
        assert_eq!(entries[0].amount, dec!(4000.00));
        assert_eq!(entries[0].formatted_amount, "$4,000.00");
    }

    /// Provider that always fails the completion call
    struct RateLimitedProvider;

    #[async_trait]
    impl LlmProvider for RateLimitedProvider {
        async fn health_check(&self) -> advisor_core::Result<bool> {
            Ok(false)
        }

        async fn complete(
            &self,
            _messages: &[Message],
            _options: &GenerationOptions,
        ) -> advisor_core::Result<Completion> {
            Err(AdvisorError::RateLimited("rate limit exceeded".into()))
        }
    }

    #[tokio::test]
    async fn test_plan_still_renders_when_provider_fails() {
        let provider: Arc<dyn LlmProvider> = Arc::new(RateLimitedProvider);
        let state = AppState {
            provider: provider.clone(),
            explainer: Arc::new(Explainer::new(provider, GenerationOptions::default())),
        };

        let response = generate_plan(
            State(state),
            Json(PlanRequest {
                amount: dec!(10000),
                risk_level: RiskLevel::Medium,
                horizon_years: 5,
            }),
        )
        .await
        .expect("plan must render despite the provider failure");

        let plan = response.0;

        let classes: Vec<&str> = plan.chart.iter().map(|s| s.asset_class.as_str()).collect();
        assert_eq!(classes, vec!["Bonds", "Stocks", "ETFs", "Cash"]);

        let amounts: Vec<&str> = plan
            .breakdown
            .iter()
            .map(|e| e.formatted_amount.as_str())
            .collect();
        assert_eq!(
            amounts,
            vec!["$4,000.00", "$3,000.00", "$2,000.00", "$1,000.00"]
        );

        assert!(plan.explanation_degraded);
        assert_eq!(
            plan.explanation,
            "Error generating explanation: rate limit exceeded"
        );
    }

    #[test]
    fn test_plan_request_deserializes_from_json() {
        let payload: PlanRequest = serde_json::from_str(
            r#"{"amount": 10000, "risk_level": "Medium", "horizon_years": 5}"#,
        )
        .unwrap();

        assert_eq!(payload.amount, dec!(10000));
        assert_eq!(payload.risk_level, RiskLevel::Medium);
        assert_eq!(payload.horizon_years, 5);
    }
}
