//! Category bucketing for wardrobe items.
//!
//! Item categories are free text. Each item is assigned to one of five
//! fixed groups by case-insensitive keyword membership; anything that
//! matches no keyword list belongs to no group and is ignored by the
//! combination generator.

/// The five outfit slots the generator works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryGroup {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Accessories,
}

impl CategoryGroup {
    /// Category keywords recognized for this group (lowercase).
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            CategoryGroup::Top => &["top", "shirt", "t-shirt", "blouse", "sweater"],
            CategoryGroup::Bottom => &["bottom", "pants", "jeans", "skirt", "shorts"],
            CategoryGroup::Shoes => &["shoes", "sneakers", "boots", "heels"],
            CategoryGroup::Outerwear => &["jacket", "coat", "blazer", "cardigan"],
            CategoryGroup::Accessories => &["accessory", "bag", "belt", "hat", "scarf"],
        }
    }

    /// Whether a free-text category belongs to this group.
    pub fn matches(self, category: &str) -> bool {
        let lowered = category.trim().to_lowercase();
        self.keywords().contains(&lowered.as_str())
    }

    /// Group label used in missing-item placeholders.
    pub fn label(self) -> &'static str {
        match self {
            CategoryGroup::Top => "top",
            CategoryGroup::Bottom => "bottom",
            CategoryGroup::Shoes => "shoes",
            CategoryGroup::Outerwear => "outerwear",
            CategoryGroup::Accessories => "accessories",
        }
    }
}

/// Accessors the generator needs from a wardrobe item.
///
/// Implemented by the database row type so core stays free of persistence
/// concerns.
pub trait WardrobePiece {
    fn item_name(&self) -> Option<&str>;
    fn item_category(&self) -> &str;
    fn item_color(&self) -> &str;
    fn item_style(&self) -> &str;
}

/// Items partitioned into the five generator groups.
///
/// Holds references; the wardrobe itself stays owned by the caller.
#[derive(Debug)]
pub struct WardrobeBuckets<'a, T> {
    pub tops: Vec<&'a T>,
    pub bottoms: Vec<&'a T>,
    pub shoes: Vec<&'a T>,
    pub outerwear: Vec<&'a T>,
    pub accessories: Vec<&'a T>,
}

/// Partition wardrobe items into category groups.
pub fn bucket_items<T: WardrobePiece>(items: &[T]) -> WardrobeBuckets<'_, T> {
    let filter = |group: CategoryGroup| {
        items
            .iter()
            .filter(|item| group.matches(item.item_category()))
            .collect::<Vec<_>>()
    };

    WardrobeBuckets {
        tops: filter(CategoryGroup::Top),
        bottoms: filter(CategoryGroup::Bottom),
        shoes: filter(CategoryGroup::Shoes),
        outerwear: filter(CategoryGroup::Outerwear),
        accessories: filter(CategoryGroup::Accessories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Piece {
        category: &'static str,
    }

    impl WardrobePiece for Piece {
        fn item_name(&self) -> Option<&str> {
            None
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

    #[test]
    fn matching_is_case_insensitive() {
        assert!(CategoryGroup::Top.matches("T-Shirt"));
        assert!(CategoryGroup::Shoes.matches("SNEAKERS"));
        assert!(CategoryGroup::Bottom.matches(" jeans "));
    }

    #[test]
    fn unknown_categories_match_no_group() {
        for group in [
            CategoryGroup::Top,
            CategoryGroup::Bottom,
            CategoryGroup::Shoes,
            CategoryGroup::Outerwear,
            CategoryGroup::Accessories,
        ] {
            assert!(!group.matches("swimsuit"));
        }
    }

    #[test]
    fn buckets_partition_by_keyword() {
        let items = vec![
            Piece { category: "shirt" },
            Piece { category: "jeans" },
            Piece { category: "boots" },
            Piece { category: "coat" },
            Piece { category: "hat" },
            Piece { category: "swimsuit" },
        ];

        let buckets = bucket_items(&items);
        assert_eq!(buckets.tops.len(), 1);
        assert_eq!(buckets.bottoms.len(), 1);
        assert_eq!(buckets.shoes.len(), 1);
        assert_eq!(buckets.outerwear.len(), 1);
        assert_eq!(buckets.accessories.len(), 1);
    }
}
