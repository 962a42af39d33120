use crate::data::series_logo::SeriesLogoRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_series_name;
mod upsert;
