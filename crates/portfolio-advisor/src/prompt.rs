//! Explanation Prompt
//!
//! Builds the single natural-language prompt sent to the LLM for a plan.

use std::fmt::Write;

use crate::format::format_usd;
use crate::model::{AssetAllocation, InvestmentRequest};

/// Fixed system instruction for every explanation request
pub const SYSTEM_PROMPT: &str =
    "You are a professional financial advisor providing clear and concise investment advice.";

/// Render the user prompt for one plan: amount, risk tier, horizon, and the
/// resolved allocation with its recommended instruments.
pub fn build_prompt(request: &InvestmentRequest, allocations: &[AssetAllocation]) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "Create a personalized investment explanation for a client with the following details:"
    );
    let _ = writeln!(prompt, "- Investment Amount: {}", format_usd(request.amount));
    let _ = writeln!(prompt, "- Risk Level: {}", request.risk_level);
    let _ = writeln!(prompt, "- Time Horizon: {} years", request.horizon_years);
    let _ = writeln!(prompt, "- Portfolio Allocation:");

    for alloc in allocations {
        let _ = writeln!(prompt, "  - {}: {}%", alloc.asset_class, alloc.percentage);
        for rec in &alloc.recommendations {
            let _ = writeln!(prompt, "    - {}", rec.display_line());
        }
    }

    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "Please provide a clear, professional explanation of why this portfolio is suitable for their risk profile and investment goals."
    );
    let _ = write!(
        prompt,
        "Include brief explanations of why each recommended stock/ETF is included in the portfolio."
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskLevel;
    use crate::table::allocations_for;
    use rust_decimal_macros::dec;

    #[test]
    fn test_prompt_embeds_request_fields() {
        let request = InvestmentRequest::new(dec!(10000), RiskLevel::Medium, 5).unwrap();
        let prompt = build_prompt(&request, allocations_for(request.risk_level));

        assert!(prompt.contains("- Investment Amount: $10,000.00"));
        assert!(prompt.contains("- Risk Level: Medium"));
        assert!(prompt.contains("- Time Horizon: 5 years"));
        assert!(prompt.contains("  - Bonds: 40%"));
        assert!(prompt.contains("Apple Inc. (AAPL) [AAPL]"));
        assert!(prompt.contains("High-Yield Savings Account"));
        assert!(prompt.ends_with("included in the portfolio."));
    }
}
