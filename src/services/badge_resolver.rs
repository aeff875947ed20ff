use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BadgeTier {
    pub name: &'static str,
    pub min_score: i32,
}

/// Sorted ascending by `min_score`.
pub const BADGE_TIERS: [BadgeTier; 5] = [
    BadgeTier { name: "Beginner", min_score: 0 },
    BadgeTier { name: "Intermediate", min_score: 4 },
    BadgeTier { name: "Advanced", min_score: 7 },
    BadgeTier { name: "Expert", min_score: 9 },
    BadgeTier { name: "Master", min_score: 10 },
];

/// Index into `BADGE_TIERS` of the highest tier reached by `score`. Scores
/// below the lowest threshold land on the lowest tier.
pub fn tier_index(score: i32) -> usize {
    BADGE_TIERS
        .iter()
        .rposition(|tier| tier.min_score <= score)
        .unwrap_or(0)
}

pub fn resolve(score: i32) -> &'static str {
    BADGE_TIERS[tier_index(score)].name
}
