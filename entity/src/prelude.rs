pub use super::scheduled_event::Entity as ScheduledEvent;
pub use super::series_logo::Entity as SeriesLogo;
pub use super::user_mapping::Entity as UserMapping;
