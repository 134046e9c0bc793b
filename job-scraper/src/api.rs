use async_trait::async_trait;
use std::fmt::Display;

use crate::Result;

/// Human-readable geographic filter, resolved by each source into its own area id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub country: String,
    pub city: String,
}

impl Location {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// All vacancies fetched for one search together with the total the api reports.
/// `found` is the api's global count and may exceed `vacancies.len()`
#[derive(Debug)]
pub struct VacancyList<V> {
    pub vacancies: Vec<V>,
    pub found: u64,
}

impl<V> Default for VacancyList<V> {
    fn default() -> Self {
        Self {
            vacancies: Vec::new(),
            found: 0,
        }
    }
}

/// A job board that can be searched for vacancies of a programming language
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Vacancy: Send;

    /// Name used in logs and report titles
    fn name(&self) -> &str;

    /// Resolve a location into the area id used by `fetch_vacancies`.
    /// Fails with `Error::LocationNotFound` instead of returning an empty filter
    async fn resolve_location(&self, location: &Location) -> Result<u64>;

    /// Fetch every page of vacancies for `language` in the given area
    async fn fetch_vacancies(&self, language: &str, area_id: u64)
        -> Result<VacancyList<Self::Vacancy>>;

    /// Estimated monthly salary in RUB, `None` when the vacancy can't be estimated
    fn estimate_salary(&self, vacancy: &Self::Vacancy) -> Option<f64>;
}

/// Search phrase both job boards are queried with
pub fn search_text(language: &str) -> String {
    format!("Программист {}", language)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_search_text_keeps_prefix() {
        assert_eq!(search_text("C++"), "Программист C++");
        assert_eq!(search_text("GO"), "Программист GO");
    }
}
