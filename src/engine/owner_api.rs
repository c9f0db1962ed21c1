use super::helpers::{open_request, owner_booking, validate_bid_input};
use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{OwnerAPI, OwnerView},
    entities::Bid,
    error::{invalid_invocation_error, Error},
};

#[async_trait]
impl OwnerAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn place_bid(
        &self,
        owner_name: String,
        request_id: Uuid,
        vacancy_ratio: f64,
    ) -> Result<Bid, Error> {
        validate_bid_input(&owner_name, vacancy_ratio)?;
        let owner_name = owner_name.trim().to_string();

        let mut store = self.store.lock().await;

        if store.fetch_request(&request_id)?.is_matched() {
            tracing::info!("request is already matched, returning early...");
            return Err(invalid_invocation_error());
        }

        if store.has_bid(&request_id, &owner_name) {
            tracing::info!("owner already bid on this request, returning early...");
            return Err(invalid_invocation_error());
        }

        let bid = Bid::generate(request_id, owner_name, vacancy_ratio, self.clock.now());

        store.fetch_request_mut(&request_id)?.receive_offer()?;
        store.insert_bid(bid.clone());

        tracing::info!(tag = bid.tag.name(), offer = %bid.offer_text, "offer sent");

        Ok(bid)
    }

    #[tracing::instrument(skip(self))]
    async fn owner_view(&self, owner_name: String) -> Result<OwnerView, Error> {
        let owner_name = owner_name.trim().to_string();
        let store = self.store.lock().await;

        let bookings = store
            .matches_for_owner(&owner_name)
            .map(|m| owner_booking(&store, m))
            .collect();

        let open_requests = store
            .open_requests()
            .map(|request| open_request(&store, request, &owner_name))
            .collect();

        Ok(OwnerView {
            owner_name,
            bookings,
            open_requests,
        })
    }
}
