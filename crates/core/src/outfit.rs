//! Outfit combination generator.
//!
//! Pairs the first few tops and bottoms exhaustively, then fills the
//! remaining slots by uniform random sampling: shoes always (or a
//! missing-item placeholder when the wardrobe has none), outerwear with 50%
//! probability, an accessory with 40% probability. Results keep iteration
//! order (row-major over tops, then bottoms) and are capped, not ranked.
//! Nothing is deduplicated or persisted across calls.

use rand::Rng;
use serde::Serialize;

use crate::category::{bucket_items, CategoryGroup, WardrobePiece};

/// At most this many tops and bottoms participate in the cross product.
const MAX_PER_GROUP: usize = 5;

/// Cap on combinations returned by [`generate_combinations`].
const MAX_COMBINATIONS: usize = 10;

/// Chance of appending an outerwear item when any exist.
const OUTERWEAR_PROBABILITY: f64 = 0.5;

/// Chance of appending an accessory when any exist.
const ACCESSORY_PROBABILITY: f64 = 0.4;

/// Placeholder purchase link for categories the wardrobe lacks.
pub const MISSING_SHOES_LINK: &str = "https://example.com/shoes";

/// A category the wardrobe has no items for, surfaced as a purchase hint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub category: &'static str,
    pub description: &'static str,
    pub purchase_link: &'static str,
}

impl MissingItem {
    fn shoes() -> Self {
        MissingItem {
            category: CategoryGroup::Shoes.label(),
            description: "Shoes would complete this look",
            purchase_link: MISSING_SHOES_LINK,
        }
    }
}

/// A generated outfit candidate: top + bottom + optional extras.
#[derive(Debug)]
pub struct Outfit<'a, T> {
    pub name: String,
    pub items: Vec<&'a T>,
    pub missing_items: Vec<MissingItem>,
}

impl<T: WardrobePiece> Outfit<'_, T> {
    /// Whether any item in the outfit came from the outerwear group.
    pub fn has_outerwear(&self) -> bool {
        self.items
            .iter()
            .any(|item| CategoryGroup::Outerwear.matches(item.item_category()))
    }
}

/// Generate outfit combinations, capped at 10 in iteration order.
pub fn generate_combinations<'a, T, R>(items: &'a [T], rng: &mut R) -> Vec<Outfit<'a, T>>
where
    T: WardrobePiece,
    R: Rng + ?Sized,
{
    let mut outfits = generate_candidates(items, rng);
    outfits.truncate(MAX_COMBINATIONS);
    outfits
}

/// Generate the full (bounded) candidate set without the final cap.
///
/// Used by smart suggestions, which rank the candidates instead of taking
/// the first ten. Still bounded to `MAX_PER_GROUP^2` pairs.
pub fn generate_candidates<'a, T, R>(items: &'a [T], rng: &mut R) -> Vec<Outfit<'a, T>>
where
    T: WardrobePiece,
    R: Rng + ?Sized,
{
    let buckets = bucket_items(items);
    let mut outfits = Vec::new();

    for top in buckets.tops.iter().take(MAX_PER_GROUP) {
        for bottom in buckets.bottoms.iter().take(MAX_PER_GROUP) {
            let name = format!(
                "{} + {}",
                top.item_name().unwrap_or("Top"),
                bottom.item_name().unwrap_or("Bottom"),
            );

            let mut outfit = Outfit {
                name,
                items: vec![*top, *bottom],
                missing_items: Vec::new(),
            };

            match pick(&buckets.shoes, rng) {
                Some(shoe) => outfit.items.push(shoe),
                None => outfit.missing_items.push(MissingItem::shoes()),
            }

            if !buckets.outerwear.is_empty() && rng.random_bool(OUTERWEAR_PROBABILITY) {
                if let Some(layer) = pick(&buckets.outerwear, rng) {
                    outfit.items.push(layer);
                }
            }

            if !buckets.accessories.is_empty() && rng.random_bool(ACCESSORY_PROBABILITY) {
                if let Some(extra) = pick(&buckets.accessories, rng) {
                    outfit.items.push(extra);
                }
            }

            outfits.push(outfit);
        }
    }

    outfits
}

/// Uniformly pick one reference from a slice, or `None` when empty.
fn pick<'a, T, R>(pool: &[&'a T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.random_range(0..pool.len())])
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::category::WardrobePiece;

    struct Piece {
        name: String,
        category: &'static str,
    }

    impl Piece {
        fn new(name: &str, category: &'static str) -> Self {
            Piece {
                name: name.to_string(),
                category,
            }
        }
    }

    impl WardrobePiece for Piece {
        fn item_name(&self) -> Option<&str> {
            Some(&self.name)
        }
        fn item_category(&self) -> &str {
            self.category
        }
        fn item_color(&self) -> &str {
            "unknown"
        }
        fn item_style(&self) -> &str {
            "casual"
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn no_tops_or_bottoms_yields_nothing() {
        let items = vec![Piece::new("Boots", "boots")];
        assert!(generate_combinations(&items, &mut rng()).is_empty());
    }

    #[test]
    fn tops_and_bottoms_only_flags_missing_shoes() {
        let items = vec![
            Piece::new("Shirt", "shirt"),
            Piece::new("Jeans", "jeans"),
            Piece::new("Skirt", "skirt"),
        ];

        let outfits = generate_combinations(&items, &mut rng());
        assert_eq!(outfits.len(), 2);

        for outfit in &outfits {
            // Exactly one top and one bottom, nothing else.
            assert_eq!(outfit.items.len(), 2);
            assert_eq!(outfit.missing_items.len(), 1);
            let missing = &outfit.missing_items[0];
            assert_eq!(missing.category, "shoes");
            assert_eq!(missing.purchase_link, MISSING_SHOES_LINK);
        }
    }

    #[test]
    fn names_join_top_and_bottom() {
        let items = vec![Piece::new("Blue Shirt", "shirt"), Piece::new("Jeans", "jeans")];
        let outfits = generate_combinations(&items, &mut rng());
        assert_eq!(outfits[0].name, "Blue Shirt + Jeans");
    }

    #[test]
    fn results_cap_at_ten_in_row_major_order() {
        let mut items = Vec::new();
        for i in 0..6 {
            items.push(Piece::new(&format!("Top {i}"), "top"));
        }
        for i in 0..6 {
            items.push(Piece::new(&format!("Bottom {i}"), "bottom"));
        }

        let outfits = generate_combinations(&items, &mut rng());
        assert_eq!(outfits.len(), 10);

        // Row-major: the first five pair Top 0 with Bottom 0..=4.
        for (i, outfit) in outfits.iter().take(5).enumerate() {
            assert_eq!(outfit.name, format!("Top 0 + Bottom {i}"));
        }
        assert_eq!(outfits[5].name, "Top 1 + Bottom 0");
    }

    #[test]
    fn shoes_always_present_when_available() {
        let items = vec![
            Piece::new("Shirt", "shirt"),
            Piece::new("Jeans", "jeans"),
            Piece::new("Sneakers", "sneakers"),
        ];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outfits = generate_combinations(&items, &mut rng);
            for outfit in &outfits {
                assert!(outfit.missing_items.is_empty());
                assert!(outfit
                    .items
                    .iter()
                    .any(|item| item.item_category() == "sneakers"));
            }
        }
    }

    #[test]
    fn outerwear_is_optional_across_seeds() {
        let items = vec![
            Piece::new("Shirt", "shirt"),
            Piece::new("Jeans", "jeans"),
            Piece::new("Sneakers", "sneakers"),
            Piece::new("Coat", "coat"),
        ];

        let mut with_coat = 0;
        let mut without_coat = 0;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outfits = generate_candidates(&items, &mut rng);
            if outfits[0].has_outerwear() {
                with_coat += 1;
            } else {
                without_coat += 1;
            }
        }

        // 50% branch: both outcomes must occur over 50 seeds.
        assert!(with_coat > 0);
        assert!(without_coat > 0);
    }
}
