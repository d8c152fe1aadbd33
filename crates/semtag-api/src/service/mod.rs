//! Service module

mod tag_api_service;

pub use tag_api_service::{SemtagApiService, SemtagApiServiceFull};
