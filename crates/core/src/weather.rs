//! Simulated weather and clothing recommendation.
//!
//! There is no external weather API; the report is synthesized from the
//! current month (seasonal base temperature plus random jitter) and a
//! season-weighted random condition. The recommendation drives smart
//! suggestion scoring and the dashboard banner.

use rand::Rng;
use serde::Serialize;

/// Season derived from the calendar month (northern hemisphere).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    /// Label matching the `season` column on wardrobe items.
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }

    fn base_temperature(self) -> i32 {
        match self {
            Season::Winter => 4,
            Season::Spring => 15,
            Season::Summer => 28,
            Season::Autumn => 13,
        }
    }

    /// Condition weights: (sunny, cloudy, rainy) out of 100.
    /// `cold` is not drawn; it is assigned from temperature afterwards.
    fn condition_weights(self) -> (u32, u32, u32) {
        match self {
            Season::Winter => (20, 45, 35),
            Season::Spring => (40, 35, 25),
            Season::Summer => (70, 20, 10),
            Season::Autumn => (30, 40, 30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Cold,
}

/// What kind of clothing the weather calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Cold,
    Hot,
    Rainy,
    Normal,
}

impl Recommendation {
    /// Parse the label clients echo back (e.g. in smart suggestion
    /// requests). Unknown labels fall back to `Normal`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "cold" => Recommendation::Cold,
            "hot" => Recommendation::Hot,
            "rainy" => Recommendation::Rainy,
            _ => Recommendation::Normal,
        }
    }
}

/// Temperature below which the recommendation is `cold`.
const COLD_THRESHOLD: i32 = 10;

/// Temperature above which the recommendation is `hot`.
const HOT_THRESHOLD: i32 = 25;

/// A simulated weather report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeatherReport {
    pub temperature: i32,
    pub condition: Condition,
    pub recommendation: Recommendation,
}

/// Synthesize a weather report for the given calendar month.
pub fn simulate_weather<R>(month: u32, rng: &mut R) -> WeatherReport
where
    R: Rng + ?Sized,
{
    let season = Season::from_month(month);
    let temperature = season.base_temperature() + rng.random_range(-5..=5);

    let condition = if temperature < COLD_THRESHOLD {
        Condition::Cold
    } else {
        draw_condition(season, rng)
    };

    WeatherReport {
        temperature,
        condition,
        recommendation: recommendation_for(temperature, condition),
    }
}

/// Derive the clothing recommendation from temperature and condition.
pub fn recommendation_for(temperature: i32, condition: Condition) -> Recommendation {
    if condition == Condition::Rainy {
        Recommendation::Rainy
    } else if temperature < COLD_THRESHOLD {
        Recommendation::Cold
    } else if temperature > HOT_THRESHOLD {
        Recommendation::Hot
    } else {
        Recommendation::Normal
    }
}

fn draw_condition<R>(season: Season, rng: &mut R) -> Condition
where
    R: Rng + ?Sized,
{
    let (sunny, cloudy, _rainy) = season.condition_weights();
    let roll = rng.random_range(0..100);
    if roll < sunny {
        Condition::Sunny
    } else if roll < sunny + cloudy {
        Condition::Cloudy
    } else {
        Condition::Rainy
    }
}
