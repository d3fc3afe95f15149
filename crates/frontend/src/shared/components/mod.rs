pub mod stat_card;
pub mod table;

pub use stat_card::StatCard;
