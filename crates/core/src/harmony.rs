//! Color-harmony scoring for outfit candidates.
//!
//! A thin heuristic, not color theory: each pair of item colors gets a
//! 0-10 score from a small relation table (neutrals pair with everything,
//! a few known complementary pairs score high, a few known clashes score
//! low, unknown colors sit in the middle). The outfit score is the rounded
//! average over all pairs.

use serde::Serialize;

/// Colors that pair acceptably with anything.
const NEUTRALS: &[&str] = &["black", "white", "gray", "grey", "beige", "navy", "denim"];

/// Color pairs considered particularly good together (order-insensitive).
const COMPLEMENTARY: &[(&str, &str)] = &[
    ("blue", "white"),
    ("blue", "brown"),
    ("red", "black"),
    ("green", "beige"),
    ("pink", "gray"),
    ("yellow", "blue"),
    ("purple", "white"),
];

/// Color pairs that tend to clash.
const CLASHING: &[(&str, &str)] = &[
    ("red", "pink"),
    ("red", "orange"),
    ("red", "green"),
    ("purple", "yellow"),
    ("brown", "gray"),
];

const SAME_COLOR_SCORE: u32 = 7;
const NEUTRAL_SCORE: u32 = 8;
const COMPLEMENTARY_SCORE: u32 = 9;
const CLASH_SCORE: u32 = 2;
const UNKNOWN_SCORE: u32 = 5;

/// Harmony quality buckets used by the dashboard summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyBucket {
    Excellent,
    Good,
    Average,
    Poor,
}

impl HarmonyBucket {
    pub fn from_score(score: u8) -> Self {
        match score {
            8.. => HarmonyBucket::Excellent,
            6..=7 => HarmonyBucket::Good,
            4..=5 => HarmonyBucket::Average,
            _ => HarmonyBucket::Poor,
        }
    }
}

/// Counts of outfits per harmony bucket.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct HarmonySummary {
    pub excellent: u32,
    pub good: u32,
    pub average: u32,
    pub poor: u32,
}

impl HarmonySummary {
    pub fn record(&mut self, score: u8) {
        match HarmonyBucket::from_score(score) {
            HarmonyBucket::Excellent => self.excellent += 1,
            HarmonyBucket::Good => self.good += 1,
            HarmonyBucket::Average => self.average += 1,
            HarmonyBucket::Poor => self.poor += 1,
        }
    }
}

/// Score an outfit's colors 0-10.
///
/// Outfits with fewer than two items (no pairs to judge) get the neutral
/// middle score.
pub fn harmony_score(colors: &[&str]) -> u8 {
    let lowered: Vec<String> = colors.iter().map(|c| c.trim().to_lowercase()).collect();

    let mut total = 0u32;
    let mut pairs = 0u32;
    for (i, a) in lowered.iter().enumerate() {
        for b in lowered.iter().skip(i + 1) {
            total += pair_score(a, b);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return UNKNOWN_SCORE as u8;
    }

    // Round to nearest integer.
    ((total + pairs / 2) / pairs) as u8
}

fn pair_score(a: &str, b: &str) -> u32 {
    if a == b {
        return SAME_COLOR_SCORE;
    }
    if NEUTRALS.contains(&a) || NEUTRALS.contains(&b) {
        return NEUTRAL_SCORE;
    }
    if in_table(COMPLEMENTARY, a, b) {
        return COMPLEMENTARY_SCORE;
    }
    if in_table(CLASHING, a, b) {
        return CLASH_SCORE;
    }
    UNKNOWN_SCORE
}

fn in_table(table: &[(&str, &str)], a: &str, b: &str) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}
