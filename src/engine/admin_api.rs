use super::helpers::match_log_row;
use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{AdminAPI, Dashboard, MatchLogRow},
    error::Error,
};

#[async_trait]
impl AdminAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn dashboard(&self) -> Result<Dashboard, Error> {
        let store = self.store.lock().await;

        Ok(Dashboard {
            total_requests: store.requests().len(),
            total_bids: store.bids().len(),
            total_matches: store.matches().len(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn match_log(&self) -> Result<Vec<MatchLogRow>, Error> {
        let store = self.store.lock().await;

        Ok(store.matches().iter().map(match_log_row).collect())
    }
}
