use job_scraper::headhunter::HeadHunterConfig;
use job_scraper::superjob::SuperJobConfig;
use job_scraper::{HeadHunter, Location, SuperJob, VacancySource};
use vacancy_analyzer::{collect_language_statistics, format_table};

use crate::{Cli, Error, Result, Target};

/// A job board together with the area id of the requested location
pub struct Resolved<S> {
    source: S,
    location: Location,
    area_id: u64,
}

impl<S: VacancySource> Resolved<S> {
    async fn resolve(source: S, location: Location) -> Result<Self> {
        let area_id = source.resolve_location(&location).await?;
        log::info!("{} area id for {}: {}", source.name(), location, area_id);
        Ok(Self {
            source,
            location,
            area_id,
        })
    }

    /// Collect the stats of every language and render them
    async fn report(&self, languages: &[String], args: &Cli) -> Result<String> {
        let stats =
            collect_language_statistics(&self.source, self.area_id, languages, args.delay())
                .await?;
        let title = format!("{} {}", self.source.name(), self.location.city);
        Ok(format_table(&stats, &title))
    }
}

pub enum Board {
    Headhunter(Resolved<HeadHunter>),
    Superjob(Resolved<SuperJob>),
}

impl Board {
    /// Build the client for `target` and resolve its location, no vacancies are fetched yet
    pub async fn prepare(target: Target, args: &Cli) -> Result<Self> {
        let location = args.location();
        match target {
            Target::Headhunter => {
                let config = HeadHunterConfig {
                    base_url: args.headhunter_url.clone(),
                    page_delay: args.delay(),
                    ..Default::default()
                };
                let hh = HeadHunter::new(config)?;
                Ok(Board::Headhunter(Resolved::resolve(hh, location).await?))
            }
            Target::Superjob => {
                let api_key = args.superjob_key.clone().ok_or(Error::MissingApiKey)?;
                let config = SuperJobConfig {
                    base_url: args.superjob_url.clone(),
                    api_version: args.superjob_api_version.clone(),
                    page_delay: args.delay(),
                    ..Default::default()
                };
                let sj = SuperJob::new(api_key, config);
                Ok(Board::Superjob(Resolved::resolve(sj, location).await?))
            }
        }
    }

    pub async fn report(&self, languages: &[String], args: &Cli) -> Result<String> {
        match self {
            Board::Headhunter(hh) => hh.report(languages, args).await,
            Board::Superjob(sj) => sj.report(languages, args).await,
        }
    }
}
