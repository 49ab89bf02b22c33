//! League → club → ground scraping.
//!
//! Pages are fetched strictly one after another through a shared
//! [`Throttle`]. Failures are contained at the smallest unit: a broken club
//! page drops that club, a broken league page drops that league, and the run
//! always continues.

pub mod report;
pub mod source;

pub use report::{DropReason, DroppedClub, FailedLeague, LeagueFailure, ScrapeReport};
pub use source::{DocumentSource, StaticSource};

use std::collections::HashMap;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::extractor::{
    Document, EntityLink, extract_coordinates, extract_entity_links, extract_field,
};
use crate::fetcher::{FetchError, Throttle, backoff_delay};
use crate::model::{ClubRecord, LeagueDescriptor, ResolvedClub};

pub struct ScrapePipeline<S> {
    source: S,
    config: Config,
    throttle: Throttle,
}

impl<S: DocumentSource> ScrapePipeline<S> {
    pub fn new(source: S, config: Config) -> Self {
        let throttle = Throttle::new(config.request_interval());
        Self {
            source,
            config,
            throttle,
        }
    }

    /// Scrape every configured league.
    pub async fn run(&self) -> ScrapeReport {
        self.run_leagues(&self.config.leagues).await
    }

    pub async fn run_leagues(&self, leagues: &[LeagueDescriptor]) -> ScrapeReport {
        let mut report = ScrapeReport::default();
        let mut clubs: HashMap<String, ClubRecord> = HashMap::new();

        for league in leagues {
            info!("Scraping {}", league.name);
            let links = match self.league_links(league).await {
                Ok(links) => links,
                Err(reason) => {
                    warn!("[SKIP] {}: {}", league.name, reason);
                    report.failed_leagues.push(FailedLeague {
                        league_code: league.code.clone(),
                        name: league.name.clone(),
                        reason,
                    });
                    continue;
                }
            };
            info!("Found {} club links", links.len());

            for link in &links {
                match self.scrape_club(league, link).await {
                    Ok(record) => {
                        info!("[OK] {} -> {}", record.name, record.ground);
                        if let Some(previous) = clubs.insert(record.id.clone(), record) {
                            report.collisions += 1;
                            warn!(
                                "[COLLISION] {} replaced {} (id {})",
                                link.name, previous.name, previous.id
                            );
                        }
                    }
                    Err(reason) => {
                        warn!("[DROP] {} ({})", link.name, reason);
                        report.dropped.push(DroppedClub {
                            league_code: league.code.clone(),
                            name: link.name.clone(),
                            reason,
                        });
                    }
                }
            }
        }

        report.clubs = sorted_clubs(clubs);
        report
    }

    async fn league_links(
        &self,
        league: &LeagueDescriptor,
    ) -> Result<Vec<EntityLink>, LeagueFailure> {
        let url = Url::parse(&league.url).map_err(FetchError::from)?;
        let page = self.fetch(&url).await?;
        let links = extract_entity_links(&page, &self.config.policy);
        if links.is_empty() {
            return Err(LeagueFailure::NoStandingsTable);
        }
        Ok(links)
    }

    /// Club page → ground field → ground page → coordinates.
    pub async fn scrape_club(
        &self,
        league: &LeagueDescriptor,
        link: &EntityLink,
    ) -> Result<ClubRecord, DropReason> {
        let policy = &self.config.policy;

        let club_page = self.fetch(&link.url).await?;
        let ground = extract_field(&club_page, &policy.ground_labels, policy)
            .ok_or(DropReason::NoGround)?;

        let Some(ground_url) = ground.link else {
            return Err(DropReason::NoCoordinates {
                ground: ground.text,
            });
        };

        let ground_page = self.fetch(&ground_url).await?;
        let coords = extract_coordinates(&ground_page, policy).ok_or_else(|| {
            DropReason::NoCoordinates {
                ground: ground.text.clone(),
            }
        })?;

        let record = ClubRecord::build(ResolvedClub {
            league,
            name: &link.name,
            ground: &ground.text,
            lat: coords.lat,
            lon: coords.lon,
            source_ref: link.url.as_str(),
            location_ref: ground_url.as_str(),
        })?;
        Ok(record)
    }

    /// Throttled fetch, retrying transient failures with backoff.
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        let mut attempt = 0;
        loop {
            let result = {
                let _permit = self.throttle.acquire().await;
                self.source.fetch_document(url).await
            };
            match result {
                Ok(doc) => return Ok(doc),
                Err(err) if err.should_retry() && attempt < self.config.retry_attempts => {
                    let delay = backoff_delay(attempt, self.config.retry_base_backoff());
                    warn!("retrying {} in {:?} after: {}", url, delay, err);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn sorted_clubs(clubs: HashMap<String, ClubRecord>) -> Vec<ClubRecord> {
    let mut clubs: Vec<ClubRecord> = clubs.into_values().collect();
    clubs.sort_by(|a, b| {
        a.country
            .cmp(&b.country)
            .then(a.tier.cmp(&b.tier))
            .then_with(|| a.name.cmp(&b.name))
    });
    clubs
}
