pub mod tiers;

pub use tiers::{classify_tier, prioritize, PrioritizedFix, PriorityTier};
