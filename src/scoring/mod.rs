// Trait scoring: weighted-sum formulas, qualitative tiers, and comparison.

pub mod compare;
pub mod describe;
pub mod style;
