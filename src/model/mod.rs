//! Domain models shared by the data, service, and bot layers.
//!
//! Entity models from the `entity` crate are converted into these types at the repository
//! boundary so that SeaORM types never leak into services.

pub mod embed;
pub mod reaction;
pub mod scheduled_event;
pub mod series_logo;
pub mod user_mapping;
