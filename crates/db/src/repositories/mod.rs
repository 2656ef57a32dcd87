//! Repository layer: one struct of associated functions per table.

mod combination_repo;
mod preference_repo;
mod statistics_repo;
mod suggestion_repo;
mod wardrobe_item_repo;
mod wear_history_repo;

pub use combination_repo::CombinationRepo;
pub use preference_repo::PreferenceRepo;
pub use statistics_repo::StatisticsRepo;
pub use suggestion_repo::SuggestionRepo;
pub use wardrobe_item_repo::WardrobeItemRepo;
pub use wear_history_repo::WearHistoryRepo;
