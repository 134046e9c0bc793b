//! HeadHunter (hh.ru) job board

pub mod types;

use std::cmp::min;
use std::time::Duration;

use async_stream::try_stream;
use async_trait::async_trait;
use futures::{Stream, TryStreamExt};
use reqwest::Client;
use tokio::time::sleep;

use crate::api::{search_text, Location, VacancyList, VacancySource};
use crate::request::get_json;
use crate::{salary, Error, Result};
use types::{Area, VacanciesPage};
pub use types::{Salary, Vacancy};

const RUB: &str = "RUR";

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    /// hh.ru rejects requests without a user agent
    pub user_agent: String,
    /// Only vacancies published within this many days
    pub period_days: u32,
    pub per_page: u32,
    /// The api refuses to page past 2000 results
    pub max_pages: u32,
    pub page_delay: Duration,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru".to_owned(),
            user_agent: concat!("vacancy-radar/", env!("CARGO_PKG_VERSION")).to_owned(),
            period_days: 30,
            per_page: 100,
            max_pages: 20,
            page_delay: Duration::from_millis(200),
        }
    }
}

pub struct HeadHunter {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: HeadHunterConfig, client: Client) -> Self {
        Self { client, config }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), method)
    }

    async fn search_page(&self, language: &str, area_id: u64, page: u32) -> Result<VacanciesPage> {
        let request = self.client.get(self.url("vacancies")).query(&[
            ("area", area_id.to_string()),
            ("period", self.config.period_days.to_string()),
            ("text", search_text(language)),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ]);
        let vacancies: VacanciesPage = get_json(&self.client, request).await?;
        log::debug!(
            "hh page {} for {}: {} items, found: {}, pages: {}",
            page,
            language,
            vacancies.items.len(),
            vacancies.found,
            vacancies.pages
        );
        Ok(vacancies)
    }

    /// Pages of a search, the page limit is taken from the first response
    fn search_pages<'a>(
        &'a self,
        language: &'a str,
        area_id: u64,
    ) -> impl Stream<Item = Result<VacanciesPage>> + Send + 'a {
        try_stream! {
            let mut page = 0;
            let mut max_page = None;
            loop {
                let vacancies = self.search_page(language, area_id, page).await?;
                let last = *max_page.get_or_insert(min(vacancies.pages, self.config.max_pages));
                page += 1;
                yield vacancies;
                if page >= last {
                    break;
                }
                sleep(self.config.page_delay).await;
            }
        }
    }
}

fn find_city_id(areas: &[Area], location: &Location) -> Option<String> {
    areas
        .iter()
        .find(|country| country.name == location.country)?
        .areas
        .iter()
        .find(|city| city.name == location.city)
        .map(|city| city.id.clone())
}

#[async_trait]
impl VacancySource for HeadHunter {
    type Vacancy = Vacancy;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    async fn resolve_location(&self, location: &Location) -> Result<u64> {
        let request = self.client.get(self.url("areas"));
        let areas: Vec<Area> = get_json(&self.client, request).await?;
        let id = find_city_id(&areas, location)
            .ok_or_else(|| Error::LocationNotFound(location.to_string()))?;
        id.parse()
            .map_err(|_| Error::MalformedResponse(format!("area id '{}' is not numeric", id)))
    }

    async fn fetch_vacancies(&self, language: &str, area_id: u64) -> Result<VacancyList<Vacancy>> {
        let pages = self.search_pages(language, area_id);
        tokio::pin!(pages);
        let mut list = VacancyList::default();
        while let Some(page) = pages.try_next().await? {
            list.found = page.found;
            list.vacancies.extend(page.items);
        }
        log::info!(
            "fetched {} of {} hh vacancies for {}",
            list.vacancies.len(),
            list.found,
            language
        );
        Ok(list)
    }

    fn estimate_salary(&self, vacancy: &Vacancy) -> Option<f64> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUB) {
            return None;
        }
        salary::estimate(salary.from, salary.to)
    }
}
