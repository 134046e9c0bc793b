//! SuperJob (superjob.ru) job board

pub mod types;

use std::time::Duration;

use async_stream::try_stream;
use async_trait::async_trait;
use futures::{Stream, TryStreamExt};
use reqwest::Client;
use tokio::time::sleep;

use crate::api::{search_text, Location, VacancyList, VacancySource};
use crate::request::get_json;
use crate::{salary, Error, Result};
use types::{Towns, VacanciesPage};
pub use types::Vacancy;

const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    pub api_version: String,
    pub per_page: u32,
    pub page_delay: Duration,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru".to_owned(),
            api_version: "2.2".to_owned(),
            per_page: 100,
            page_delay: Duration::from_millis(200),
        }
    }
}

pub struct SuperJob {
    client: Client,
    api_key: String,
    config: SuperJobConfig,
}

impl SuperJob {
    pub fn new(api_key: String, config: SuperJobConfig) -> Self {
        Self::with_client(api_key, config, Client::new())
    }

    pub fn with_client(api_key: String, config: SuperJobConfig, client: Client) -> Self {
        Self {
            client,
            api_key,
            config,
        }
    }

    fn url(&self, method: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version,
            method
        )
    }

    async fn search_page(&self, language: &str, town_id: u64, page: u32) -> Result<VacanciesPage> {
        let request = self
            .client
            .get(self.url("vacancies/"))
            .header(API_KEY_HEADER, self.api_key.as_str())
            .query(&[
                ("keyword", search_text(language)),
                ("town", town_id.to_string()),
                ("page", page.to_string()),
                ("count", self.config.per_page.to_string()),
            ]);
        let vacancies: VacanciesPage = get_json(&self.client, request).await?;
        log::debug!(
            "sj page {} for {}: {} objects, total: {}, more: {}",
            page,
            language,
            vacancies.objects.len(),
            vacancies.total,
            vacancies.more
        );
        Ok(vacancies)
    }

    /// Pages of a search, continues while the api reports more results
    fn search_pages<'a>(
        &'a self,
        language: &'a str,
        town_id: u64,
    ) -> impl Stream<Item = Result<VacanciesPage>> + Send + 'a {
        try_stream! {
            let mut page = 0;
            loop {
                let vacancies = self.search_page(language, town_id, page).await?;
                let more = vacancies.more;
                page += 1;
                yield vacancies;
                if !more {
                    break;
                }
                sleep(self.config.page_delay).await;
            }
        }
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    type Vacancy = Vacancy;

    fn name(&self) -> &str {
        "SuperJob"
    }

    /// Towns are matched by title only, the country is not part of the lookup
    async fn resolve_location(&self, location: &Location) -> Result<u64> {
        let request = self.client.get(self.url("towns"));
        let towns: Towns = get_json(&self.client, request).await?;
        towns
            .objects
            .into_iter()
            .find(|town| town.title == location.city)
            .map(|town| town.id)
            .ok_or_else(|| Error::LocationNotFound(location.to_string()))
    }

    async fn fetch_vacancies(&self, language: &str, area_id: u64) -> Result<VacancyList<Vacancy>> {
        let pages = self.search_pages(language, area_id);
        tokio::pin!(pages);
        let mut list = VacancyList::default();
        while let Some(page) = pages.try_next().await? {
            list.found = page.total;
            list.vacancies.extend(page.objects);
        }
        log::info!(
            "fetched {} of {} sj vacancies for {}",
            list.vacancies.len(),
            list.found,
            language
        );
        Ok(list)
    }

    fn estimate_salary(&self, vacancy: &Vacancy) -> Option<f64> {
        salary::estimate(vacancy.payment_from, vacancy.payment_to)
    }
}
