//! Database repository layer.
//!
//! Repositories wrap SeaORM entity queries for the schedule store, the talent directory,
//! and the series logo lookup. They return domain models from `crate::model` so entity
//! types stay behind this boundary.

pub mod scheduled_event;
pub mod series_logo;
pub mod user_mapping;

#[cfg(test)]
mod test;
