use crate::{data::user_mapping::UserMappingRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod find_by_talent_names_in;
mod find_by_user_id;
mod upsert;
