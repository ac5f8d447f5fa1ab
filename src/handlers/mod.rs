pub mod districts;
pub mod states;

use axum::{Json, extract::Path};
use axum_extra::extract::WithRejection;

use crate::error::CovidError;

/// Raw path identifier, handed to the store unparsed. Rejections go through
/// [`CovidError`].
pub type IdPath = WithRejection<Path<String>, CovidError>;

/// JSON body extractor whose rejection goes through [`CovidError`].
pub type JsonBody<T> = WithRejection<Json<T>, CovidError>;
