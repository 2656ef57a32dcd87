//! Handlers for outfit suggestions: random generation, user-submitted
//! missing-item suggestions, and scored "smart" suggestions.

use axum::extract::State;
use axum::Json;
use fitmatch_core::harmony::{harmony_score, HarmonySummary};
use fitmatch_core::occasion::{occasion_bonus, weather_fit};
use fitmatch_core::outfit::{generate_candidates, generate_combinations, MissingItem, Outfit};
use fitmatch_core::types::DbId;
use fitmatch_core::weather::Recommendation;
use fitmatch_db::models::suggestion::{CreateSuggestion, Suggestion};
use fitmatch_db::models::wardrobe_item::WardrobeItem;
use fitmatch_db::repositories::{SuggestionRepo, WardrobeItemRepo, WearHistoryRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Guidance shown when the wardrobe is too small to combine anything.
const GUIDANCE_MESSAGE: &str = "Add at least 2 items to your wardrobe to generate combinations";

/// Smart suggestions returned after ranking.
const SMART_LIMIT: usize = 12;

/// A generated outfit in API shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCombination {
    pub name: String,
    pub items: Vec<WardrobeItem>,
    pub missing_items: Vec<MissingItem>,
    /// Reserved slot the original clients expect; always empty.
    pub suggestions: Vec<serde_json::Value>,
}

impl From<Outfit<'_, WardrobeItem>> for GeneratedCombination {
    fn from(outfit: Outfit<'_, WardrobeItem>) -> Self {
        GeneratedCombination {
            name: outfit.name,
            items: outfit.items.into_iter().cloned().collect(),
            missing_items: outfit.missing_items,
            suggestions: Vec::new(),
        }
    }
}

/// Response for `POST /api/suggestions/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub combinations: Vec<GeneratedCombination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// POST /api/suggestions/generate
///
/// Recomputed from scratch on every call; nothing is persisted and no
/// permutation history is kept.
pub async fn generate(State(state): State<AppState>) -> AppResult<Json<GenerateResponse>> {
    let items = WardrobeItemRepo::list_all(&state.pool).await?;

    if items.len() < 2 {
        return Ok(Json(GenerateResponse {
            combinations: Vec::new(),
            message: Some(GUIDANCE_MESSAGE),
        }));
    }

    let mut rng = rand::rng();
    let combinations: Vec<GeneratedCombination> = generate_combinations(&items, &mut rng)
        .into_iter()
        .map(Into::into)
        .collect();

    tracing::debug!(count = combinations.len(), "Generated outfit combinations");

    Ok(Json(GenerateResponse {
        combinations,
        message: None,
    }))
}

/// POST /api/suggestions/missing
///
/// Persist a user-submitted missing-item suggestion.
pub async fn missing(
    State(state): State<AppState>,
    Json(input): Json<CreateSuggestion>,
) -> AppResult<Json<Suggestion>> {
    let suggestion = SuggestionRepo::create(&state.pool, &input).await?;

    tracing::info!(suggestion_id = suggestion.id, "Missing-item suggestion saved");

    Ok(Json(suggestion))
}

// ---------------------------------------------------------------------------
// Smart suggestions
// ---------------------------------------------------------------------------

/// Request body for `POST /api/suggestions/smart`.
#[derive(Debug, Default, Deserialize)]
pub struct SmartParams {
    pub occasion: Option<String>,
    /// The recommendation label from `GET /api/weather` (`cold`, `hot`,
    /// `rainy`, `normal`), echoed back by the client.
    pub weather: Option<String>,
}

/// A generated outfit with its scoring attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCombination {
    pub name: String,
    pub items: Vec<WardrobeItem>,
    pub missing_items: Vec<MissingItem>,
    /// Color harmony alone, 0-10.
    pub harmony_score: u8,
    /// Harmony plus occasion and weather adjustments; the ranking key.
    pub score: i32,
}

/// Response for `POST /api/suggestions/smart`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartResponse {
    pub combinations: Vec<ScoredCombination>,
    pub unworn_combinations: Vec<ScoredCombination>,
    pub color_harmony: HarmonySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// POST /api/suggestions/smart
///
/// Generate the bounded candidate set, score each candidate (color harmony
/// + occasion affinity + weather fit), and return the ranked top slice,
/// the not-yet-worn subset, and a harmony bucket summary.
pub async fn smart(
    State(state): State<AppState>,
    Json(params): Json<SmartParams>,
) -> AppResult<Json<SmartResponse>> {
    let items = WardrobeItemRepo::list_all(&state.pool).await?;

    if items.len() < 2 {
        return Ok(Json(SmartResponse {
            combinations: Vec::new(),
            unworn_combinations: Vec::new(),
            color_harmony: HarmonySummary::default(),
            message: Some(GUIDANCE_MESSAGE),
        }));
    }

    let occasion = params.occasion.as_deref().unwrap_or("daily");
    let recommendation = params
        .weather
        .as_deref()
        .map(Recommendation::from_label)
        .unwrap_or(Recommendation::Normal);

    let worn_sets = WearHistoryRepo::worn_item_sets(&state.pool).await?;

    let mut rng = rand::rng();
    let mut color_harmony = HarmonySummary::default();
    let mut scored: Vec<(Vec<DbId>, ScoredCombination)> = Vec::new();

    for outfit in generate_candidates(&items, &mut rng) {
        let colors: Vec<&str> = outfit.items.iter().map(|i| i.color.as_str()).collect();
        let harmony = harmony_score(&colors);
        color_harmony.record(harmony);

        let score = i32::from(harmony)
            + occasion_bonus(&outfit.items, occasion)
            + weather_fit(outfit.has_outerwear(), recommendation);

        let mut ids: Vec<DbId> = outfit.items.iter().map(|i| i.id).collect();
        ids.sort_unstable();

        scored.push((
            ids,
            ScoredCombination {
                name: outfit.name,
                items: outfit.items.into_iter().cloned().collect(),
                missing_items: outfit.missing_items,
                harmony_score: harmony,
                score,
            },
        ));
    }

    // Stable sort keeps generation order on equal scores.
    scored.sort_by(|a, b| b.1.score.cmp(&a.1.score));

    let mut unworn_combinations: Vec<ScoredCombination> = scored
        .iter()
        .filter(|(ids, _)| !worn_sets.contains(ids))
        .map(|(_, combo)| combo.clone())
        .collect();
    unworn_combinations.truncate(SMART_LIMIT);

    let mut combinations: Vec<ScoredCombination> =
        scored.into_iter().map(|(_, combo)| combo).collect();
    combinations.truncate(SMART_LIMIT);

    tracing::debug!(
        count = combinations.len(),
        unworn = unworn_combinations.len(),
        occasion = %occasion,
        "Scored smart suggestions",
    );

    Ok(Json(SmartResponse {
        combinations,
        unworn_combinations,
        color_harmony,
        message: None,
    }))
}
