pub mod api;
pub mod headhunter;
pub(crate) mod request;
pub mod salary;
pub mod superjob;

use thiserror::Error;

pub use api::{Location, VacancyList, VacancySource};
pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Location not found: '{0}'")]
    LocationNotFound(String),
    #[error("Malformed response: '{0}'")]
    MalformedResponse(String),
}
