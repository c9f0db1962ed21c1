use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Binomial, Distribution, Uniform};

use crate::api::API;
use crate::entities::MenuCategory;
use crate::error::{unexpected_error, Error};

const OWNERS: [&str; 5] = [
    "A. Daebak Sashimi",
    "B. Ocean Table",
    "C. Charcoal Grill",
    "D. Grandma's Hansik",
    "E. Harbor Pub",
];

const LOCATIONS: [&str; 4] = ["Gwangalli", "Haeundae", "Seomyeon", "Nampo"];

const BID_PROBABILITY: f64 = 0.6;
const ACCEPT_PROBABILITY: f64 = 0.7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub requests: u32,
    pub bids: u32,
    pub matches: u32,
}

/// Plays diners and owners against an API to seed demo data.
pub struct Simulation {
    rng: StdRng,
}

fn sample_binomial<R: Rng>(rng: &mut R, n: u64, p: f64) -> Result<u64, Error> {
    let bin = Binomial::new(n, p).map_err(|_| unexpected_error())?;
    Ok(bin.sample(rng))
}

fn handle_invocation_error<T>(result: Result<T, Error>) -> Result<Option<T>, Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_invalid_invocation_error() => {
            tracing::warn!("invalid invocation error");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

impl Simulation {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng }
    }

    #[tracing::instrument(skip(self, api))]
    pub async fn run<T: API + Sync>(&mut self, api: &T, rounds: u32) -> Result<Report, Error> {
        let mut report = Report::default();

        for _ in 0..rounds {
            self.round(api, &mut report).await?;
        }

        tracing::info!(?report, "simulation finished");

        Ok(report)
    }

    async fn round<T: API + Sync>(&mut self, api: &T, report: &mut Report) -> Result<(), Error> {
        let (location, party_size, menu_category) = self.sample_request();

        let request = api
            .create_request(location, party_size, menu_category)
            .await?;
        report.requests += 1;

        let vacancy = Uniform::new_inclusive(0.0, 1.0);
        let mut bid_ids = vec![];

        for owner in OWNERS {
            if sample_binomial(&mut self.rng, 1, BID_PROBABILITY)? == 0 {
                continue;
            }

            let vacancy_ratio = vacancy.sample(&mut self.rng);
            let placed = api.place_bid(owner.into(), request.id, vacancy_ratio).await;

            if let Some(bid) = handle_invocation_error(placed)? {
                report.bids += 1;
                bid_ids.push(bid.id);
            }
        }

        if bid_ids.is_empty() {
            tracing::info!("no owner answered, request stays open");
            return Ok(());
        }

        if sample_binomial(&mut self.rng, 1, ACCEPT_PROBABILITY)? > 0 {
            if let Some(&bid_id) = bid_ids.choose(&mut self.rng) {
                let accepted = api.accept_bid(request.id, bid_id).await;

                if handle_invocation_error(accepted)?.is_some() {
                    report.matches += 1;
                }
            }
        }

        Ok(())
    }

    fn sample_request(&mut self) -> (String, u8, MenuCategory) {
        let location = LOCATIONS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(LOCATIONS[0]);
        let party_size = self.rng.gen_range(1..=10);
        let menu_category = MenuCategory::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(MenuCategory::Korean);

        (location.into(), party_size, menu_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AdminAPI, DinerAPI};
    use crate::engine::Engine;
    use crate::entities::RequestStatus;

    #[test]
    fn seeded_run_keeps_store_consistent_test() {
        tokio_test::block_on(async {
            let engine = Engine::new();
            let mut simulation = Simulation::new(Some(42));

            let report = simulation.run(&engine, 30).await.unwrap();
            let dashboard = engine.dashboard().await.unwrap();

            assert_eq!(report.requests, 30);
            assert_eq!(dashboard.total_requests, 30);
            assert_eq!(dashboard.total_bids, report.bids as usize);
            assert_eq!(dashboard.total_matches, report.matches as usize);
            assert!(report.matches <= report.requests);

            for row in engine.match_log().await.unwrap() {
                let request = engine.find_request(row.request_id).await.unwrap();
                assert_eq!(request.status, RequestStatus::Matched);
            }
        });
    }

    #[test]
    fn same_seed_same_report_test() {
        tokio_test::block_on(async {
            let first = Simulation::new(Some(7))
                .run(&Engine::new(), 20)
                .await
                .unwrap();
            let second = Simulation::new(Some(7))
                .run(&Engine::new(), 20)
                .await
                .unwrap();

            assert_eq!(first, second);
        });
    }

    #[test]
    fn zero_rounds_is_noop_test() {
        tokio_test::block_on(async {
            let engine = Engine::new();
            let report = Simulation::new(None).run(&engine, 0).await.unwrap();

            assert_eq!(report, Report::default());
            assert!(engine.latest_view().await.unwrap().is_none());
        });
    }
}
