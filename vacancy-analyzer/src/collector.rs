use std::time::Duration;

use job_scraper::{Result, VacancySource};
use tokio::time::sleep;

use crate::models::{LanguageStats, StatsTable};

/// Fetch the vacancies of every language from `source` and aggregate their salaries.
/// Languages are processed one after another, `delay` is waited after each fetch
pub async fn collect_language_statistics<S: VacancySource>(
    source: &S,
    area_id: u64,
    languages: &[String],
    delay: Duration,
) -> Result<StatsTable> {
    let mut table = StatsTable::new();
    for language in languages {
        log::info!("collecting {} vacancies for {}", source.name(), language);
        let list = source.fetch_vacancies(language, area_id).await?;
        sleep(delay).await;

        let salaries = list
            .vacancies
            .iter()
            .filter_map(|vacancy| source.estimate_salary(vacancy))
            .collect::<Vec<f64>>();
        let stats = LanguageStats::new(language.clone(), list.found, &salaries);
        log::info!(
            "{} {}: found {}, processed {}, average {:?}",
            source.name(),
            language,
            stats.vacancies_found,
            stats.vacancies_processed,
            stats.average_salary
        );
        table.push(stats);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use job_scraper::{salary, Error, Location, VacancyList};

    use super::*;

    type Bounds = (Option<f64>, Option<f64>);

    /// Serves canned vacancies per language and records the fetch order
    #[derive(Default)]
    struct FakeSource {
        vacancies: HashMap<String, (Vec<Bounds>, u64)>,
        fetched: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn with(mut self, language: &str, vacancies: Vec<Bounds>, found: u64) -> Self {
            self.vacancies
                .insert(language.to_owned(), (vacancies, found));
            self
        }
    }

    #[async_trait]
    impl VacancySource for FakeSource {
        type Vacancy = Bounds;

        fn name(&self) -> &str {
            "Fake"
        }

        async fn resolve_location(&self, _location: &Location) -> Result<u64> {
            Ok(1)
        }

        async fn fetch_vacancies(&self, language: &str, _area_id: u64) -> Result<VacancyList<Bounds>> {
            self.fetched.lock().unwrap().push(language.to_owned());
            let (vacancies, found) = self
                .vacancies
                .get(language)
                .cloned()
                .ok_or_else(|| Error::MalformedResponse(language.to_owned()))?;
            Ok(VacancyList { vacancies, found })
        }

        fn estimate_salary(&self, vacancy: &Bounds) -> Option<f64> {
            salary::estimate(vacancy.0, vacancy.1)
        }
    }

    fn languages(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[tokio::test]
    async fn test_skips_unestimable_vacancies() {
        let source = FakeSource::default().with(
            "Python",
            vec![(Some(1000.0), Some(2000.0)), (None, None)],
            2,
        );
        let table = collect_language_statistics(&source, 1, &languages(&["Python"]), Duration::ZERO)
            .await
            .unwrap();
        let stats = table.get("Python").unwrap();
        assert_eq!(stats.vacancies_found, 2);
        assert_eq!(stats.vacancies_processed, 1);
        assert_eq!(stats.average_salary, Some(1500));
    }

    #[tokio::test]
    async fn test_no_estimable_vacancies() {
        let source = FakeSource::default().with("C", vec![(None, None), (Some(0.0), Some(0.0))], 7);
        let table = collect_language_statistics(&source, 1, &languages(&["C"]), Duration::ZERO)
            .await
            .unwrap();
        let stats = table.get("C").unwrap();
        assert_eq!(stats.vacancies_found, 7);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, None);
    }

    #[tokio::test]
    async fn test_found_is_reported_total() {
        // the api total can be smaller than what was fetched
        let source = FakeSource::default().with(
            "Java",
            vec![(Some(100.0), None), (None, Some(100.0)), (Some(100.0), Some(300.0))],
            1,
        );
        let table = collect_language_statistics(&source, 1, &languages(&["Java"]), Duration::ZERO)
            .await
            .unwrap();
        let stats = table.get("Java").unwrap();
        assert_eq!(stats.vacancies_found, 1);
        assert_eq!(stats.vacancies_processed, 3);
        assert_eq!(stats.average_salary, Some(133));
    }

    #[tokio::test]
    async fn test_keeps_language_order() {
        let names = ["TypeScript", "C#", "Python", "GO"];
        let source = names.iter().fold(FakeSource::default(), |source, name| {
            source.with(name, vec![(Some(1000.0), None)], 1)
        });
        for order in [names.to_vec(), names.iter().rev().copied().collect()] {
            source.fetched.lock().unwrap().clear();
            let table = collect_language_statistics(&source, 1, &languages(&order), Duration::ZERO)
                .await
                .unwrap();
            let collected = table
                .iter()
                .map(|stats| stats.language.as_str())
                .collect::<Vec<_>>();
            assert_eq!(collected, order);
            assert_eq!(*source.fetched.lock().unwrap(), languages(&order));
        }
    }

    #[tokio::test]
    async fn test_stops_on_first_error() {
        let source = FakeSource::default().with("Ruby", vec![], 0);
        let result = collect_language_statistics(
            &source,
            1,
            &languages(&["Ruby", "PHP", "Shell"]),
            Duration::ZERO,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(*source.fetched.lock().unwrap(), languages(&["Ruby", "PHP"]));
    }
}
