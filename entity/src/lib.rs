//! SeaORM entity models for the live bot database.

pub mod prelude;

pub mod scheduled_event;
pub mod series_logo;
pub mod user_mapping;
