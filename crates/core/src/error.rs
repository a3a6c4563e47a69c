use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{MediaError, ParseGreetingIdError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    UnknownGreeting(#[from] ParseGreetingIdError),
}
