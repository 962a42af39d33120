mod scheduled_event;
mod series_logo;
mod user_mapping;
