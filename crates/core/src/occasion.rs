//! Occasion and weather fit scoring for smart suggestions.
//!
//! Both scores are small integer adjustments layered on top of the color
//! harmony score; together they decide the smart suggestion ranking.

use crate::category::WardrobePiece;
use crate::weather::Recommendation;

/// Maximum bonus for an outfit whose styles all match the occasion.
const OCCASION_BONUS_MAX: i32 = 4;

/// Styles that suit a given occasion. Unknown occasions prefer nothing.
pub fn preferred_styles(occasion: &str) -> &'static [&'static str] {
    match occasion.trim().to_lowercase().as_str() {
        "daily" => &["casual", "minimalist"],
        "work" => &["formal", "elegant"],
        "school" => &["casual", "sporty"],
        "sport" => &["sporty"],
        "evening" => &["elegant", "bohemian"],
        _ => &[],
    }
}

/// Bonus (0..=4) proportional to the share of items styled for the occasion.
pub fn occasion_bonus<T: WardrobePiece>(items: &[&T], occasion: &str) -> i32 {
    let preferred = preferred_styles(occasion);
    if preferred.is_empty() || items.is_empty() {
        return 0;
    }

    let matching = items
        .iter()
        .filter(|item| preferred.contains(&item.item_style().to_lowercase().as_str()))
        .count() as i32;

    OCCASION_BONUS_MAX * matching / items.len() as i32
}

/// Adjustment for how the outfit suits the weather.
///
/// Cold or rainy weather rewards a layered outfit and penalizes a bare one;
/// hot weather does the opposite.
pub fn weather_fit(has_outerwear: bool, recommendation: Recommendation) -> i32 {
    match recommendation {
        Recommendation::Cold | Recommendation::Rainy => {
            if has_outerwear {
                2
            } else {
                -2
            }
        }
        Recommendation::Hot => {
            if has_outerwear {
                -2
            } else {
                1
            }
        }
        Recommendation::Normal => 0,
    }
}
