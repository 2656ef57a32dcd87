//! Integration tests for the repository layer against a real SQLite file:
//! - Wardrobe item create/list/delete
//! - Combination item-list serialization round trip
//! - Preference latest-row semantics
//! - Wear tracking and statistics aggregation

use chrono::{Duration, Utc};
use fitmatch_db::models::suggestion::CreateSuggestion;
use fitmatch_db::models::wardrobe_item::CreateWardrobeItem;
use fitmatch_db::repositories::{
    CombinationRepo, PreferenceRepo, StatisticsRepo, SuggestionRepo, WardrobeItemRepo,
    WearHistoryRepo,
};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(name: &str, category: &str) -> CreateWardrobeItem {
    CreateWardrobeItem {
        name: name.to_string(),
        category: category.to_string(),
        color: "blue".to_string(),
        style: "casual".to_string(),
        image_url: format!("/uploads/{name}.png"),
        price: None,
        season: None,
    }
}

// ---------------------------------------------------------------------------
// Wardrobe items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn item_create_round_trips_through_list(pool: SqlitePool) {
    let created = WardrobeItemRepo::create(&pool, &new_item("Blue Shirt", "shirt"))
        .await
        .unwrap();

    assert_eq!(created.name, "Blue Shirt");
    assert_eq!(created.category, "shirt");
    assert_eq!(created.wear_count, 0);
    assert!(created.last_worn.is_none());

    let items = WardrobeItemRepo::list_all(&pool).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, created.id);
    assert_eq!(items[0].image_url, created.image_url);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_newest_first(pool: SqlitePool) {
    let first = WardrobeItemRepo::create(&pool, &new_item("First", "shirt"))
        .await
        .unwrap();
    let second = WardrobeItemRepo::create(&pool, &new_item("Second", "jeans"))
        .await
        .unwrap();

    let items = WardrobeItemRepo::list_all(&pool).await.unwrap();
    assert_eq!(items[0].id, second.id);
    assert_eq!(items[1].id, first.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_reports_affected_rows(pool: SqlitePool) {
    let item = WardrobeItemRepo::create(&pool, &new_item("Shirt", "shirt"))
        .await
        .unwrap();

    assert_eq!(WardrobeItemRepo::delete(&pool, item.id).await.unwrap(), 1);
    // Deleting a missing id is not an error, just zero changes.
    assert_eq!(WardrobeItemRepo::delete(&pool, 9999).await.unwrap(), 0);
    assert_eq!(WardrobeItemRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Combinations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn combination_items_round_trip_as_json(pool: SqlitePool) {
    let items = serde_json::json!([{ "id": 1, "name": "Shirt" }, { "id": 2 }]);
    let created = CombinationRepo::create(&pool, "Monday Look", &items, "for work")
        .await
        .unwrap();

    assert_eq!(created.name, "Monday Look");
    assert_eq!(created.items, items);

    let listed = CombinationRepo::list_all(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].items, items);
    assert_eq!(listed[0].description, "for work");
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn suggestion_create_stores_all_fields(pool: SqlitePool) {
    let input = CreateSuggestion {
        combination_id: None,
        missing_item: Some("shoes".to_string()),
        purchase_link: Some("https://example.com/shoes".to_string()),
        description: Some("Shoes would complete this look".to_string()),
    };

    let created = SuggestionRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.missing_item.as_deref(), Some("shoes"));
    assert_eq!(
        created.purchase_link.as_deref(),
        Some("https://example.com/shoes")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn suggestion_accepts_unsaved_combination_id(pool: SqlitePool) {
    // Clients submit suggestions against generated combinations, which are
    // never persisted; the reference must not be rejected.
    let input = CreateSuggestion {
        combination_id: Some(7),
        missing_item: Some("shoes".to_string()),
        purchase_link: None,
        description: None,
    };

    let created = SuggestionRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.combination_id, Some(7));
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn latest_preference_wins(pool: SqlitePool) {
    assert!(PreferenceRepo::latest(&pool).await.unwrap().is_none());

    PreferenceRepo::create(&pool, "casual", "all", "daily")
        .await
        .unwrap();
    PreferenceRepo::create(&pool, "formal", "black", "work")
        .await
        .unwrap();

    let latest = PreferenceRepo::latest(&pool).await.unwrap().unwrap();
    assert_eq!(latest.style_preference, "formal");
    assert_eq!(latest.occasion_preference, "work");
}

// ---------------------------------------------------------------------------
// Wear tracking and statistics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn mark_worn_bumps_wear_tracking(pool: SqlitePool) {
    let shirt = WardrobeItemRepo::create(&pool, &new_item("Shirt", "shirt"))
        .await
        .unwrap();
    let jeans = WardrobeItemRepo::create(&pool, &new_item("Jeans", "jeans"))
        .await
        .unwrap();

    let now = Utc::now();
    let updated = WardrobeItemRepo::mark_worn(&pool, &[shirt.id, jeans.id], now)
        .await
        .unwrap();
    assert_eq!(updated, 2);

    let items = WardrobeItemRepo::list_all(&pool).await.unwrap();
    for item in &items {
        assert_eq!(item.wear_count, 1);
        assert!(item.last_worn.is_some());
    }

    WearHistoryRepo::create(&pool, "Shirt + Jeans", &[jeans.id, shirt.id], None, None)
        .await
        .unwrap();
    let sets = WearHistoryRepo::worn_item_sets(&pool).await.unwrap();
    // Sets come back sorted regardless of insertion order.
    assert_eq!(sets, vec![vec![shirt.id, jeans.id]]);
}

#[sqlx::test(migrations = "./migrations")]
async fn statistics_aggregate_the_wardrobe(pool: SqlitePool) {
    let mut shirt = new_item("Shirt", "shirt");
    shirt.price = Some(19.5);
    shirt.season = Some("summer".to_string());
    let shirt = WardrobeItemRepo::create(&pool, &shirt).await.unwrap();

    let mut jeans = new_item("Jeans", "jeans");
    jeans.price = Some(40.0);
    WardrobeItemRepo::create(&pool, &jeans).await.unwrap();

    // Mark the shirt worn recently so it drops out of the unused set.
    WardrobeItemRepo::mark_worn(&pool, &[shirt.id], Utc::now())
        .await
        .unwrap();

    let cutoff = Utc::now() - Duration::days(30);
    let stats = StatisticsRepo::gather(&pool, "summer", cutoff).await.unwrap();

    assert_eq!(stats.total_items, 2);
    assert!((stats.total_value - 59.5).abs() < f64::EPSILON);
    assert_eq!(stats.unused_count, 1);
    assert_eq!(stats.seasonal_percentage, 50);
    assert_eq!(stats.unused_items.len(), 1);
    assert_eq!(stats.unused_items[0].name, "Jeans");

    // Both items are blue; the histogram has a single bar of two.
    assert_eq!(stats.top_colors.len(), 1);
    assert_eq!(stats.top_colors[0].color, "blue");
    assert_eq!(stats.top_colors[0].count, 2);
}
