//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let event = factory::create_scheduled_event(&db).await?;
//!     let mapping = factory::create_user_mapping(&db, "Alice", 42).await?;
//!
//!     // Several posted events at once
//!     let events = factory::helpers::create_posted_events(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::scheduled_event::ScheduledEventFactory::new(&db)
//!     .series_name("GT4 Masters")
//!     .producer("Alice")
//!     .message_id(Some(1234))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `scheduled_event` - Create scheduled event entities
//! - `user_mapping` - Create talent name to Discord user mappings
//! - `series_logo` - Create series thumbnail entities
//! - `helpers` - Id generation and multi-entity helpers

pub mod helpers;
pub mod scheduled_event;
pub mod series_logo;
pub mod user_mapping;

pub use scheduled_event::create_scheduled_event;
pub use series_logo::create_series_logo;
pub use user_mapping::create_user_mapping;
