//! # portfolio-advisor
//!
//! Risk-tiered portfolio allocation with AI-generated explanations.
//!
//! Three client risk tiers map to fixed allocations; the only computation is
//! scaling the investment amount by each class's percentage. An external LLM
//! writes the narrative, and a failed call degrades to an error message
//! instead of failing the plan.
//!
//! ## Example: $10,000 at Medium risk
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │  Bonds   ████████████████████  $4,000 (40%)        │
//! │  Stocks  ███████████████       $3,000 (30%)        │
//! │  ETFs    ██████████            $2,000 (20%)        │
//! │  Cash    █████                 $1,000 (10%)        │
//! └────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod explain;
pub mod format;
pub mod model;
pub mod prompt;
pub mod table;

pub use error::{PlanError, Result};
pub use explain::{Explainer, Explanation, NO_EXPLANATION};
pub use format::format_usd;
pub use model::{
    AllocationLine, AssetAllocation, InvestmentRequest, Recommendation, RiskLevel, breakdown,
};
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use table::allocations_for;
