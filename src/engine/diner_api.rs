use super::helpers::{diner_view, validate_request_input};
use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{DinerAPI, DinerView},
    entities::{Match, MenuCategory, Request},
    error::{invalid_input_error, invalid_invocation_error, Error},
};

#[async_trait]
impl DinerAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_request(
        &self,
        location: String,
        party_size: u8,
        menu_category: MenuCategory,
    ) -> Result<Request, Error> {
        validate_request_input(&location, party_size)?;

        let request = Request::new(
            location.trim().to_string(),
            party_size,
            menu_category,
            self.clock.now(),
        );

        self.store.lock().await.insert_request(request.clone());

        tracing::info!(id = %request.id, "request posted, notifying nearby owners");

        Ok(request)
    }

    #[tracing::instrument(skip(self))]
    async fn find_request(&self, id: Uuid) -> Result<Request, Error> {
        let store = self.store.lock().await;

        Ok(store.fetch_request(&id)?.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn diner_view(&self, request_id: Uuid) -> Result<DinerView, Error> {
        let store = self.store.lock().await;
        let request = store.fetch_request(&request_id)?;

        Ok(diner_view(&store, request))
    }

    #[tracing::instrument(skip(self))]
    async fn latest_view(&self) -> Result<Option<DinerView>, Error> {
        let store = self.store.lock().await;

        Ok(store
            .latest_request()
            .map(|request| diner_view(&store, request)))
    }

    #[tracing::instrument(skip(self))]
    async fn accept_bid(&self, request_id: Uuid, bid_id: Uuid) -> Result<Match, Error> {
        let mut store = self.store.lock().await;

        let bid = store
            .find_bid(&bid_id)
            .filter(|bid| bid.request_id == request_id)
            .cloned()
            .ok_or_else(invalid_input_error)?;

        if store.find_match_for_request(&request_id).is_some() {
            tracing::info!("request already matched, first acceptance wins");
            return Err(invalid_invocation_error());
        }

        store.fetch_request_mut(&request_id)?.close()?;

        let m = Match::accept(&bid, self.clock.now());
        store.insert_match(m.clone());

        tracing::info!(owner_name = %m.owner_name, "booking confirmed");

        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use crate::api::{DinerAPI, OwnerAPI};
    use crate::clock::FixedClock;
    use crate::engine::Engine;
    use crate::entities::{MenuCategory, RequestStatus};

    fn engine() -> Engine {
        Engine::with_clock(FixedClock(
            Local.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn create_request_awaits_bids_test() {
        let e = engine();

        let request = e
            .create_request(" Gwangalli ".into(), 4, MenuCategory::RawFishSeafood)
            .await
            .unwrap();

        assert_eq!(request.location, "Gwangalli");
        assert_eq!(request.status, RequestStatus::AwaitingBids);
        assert_eq!(e.find_request(request.id).await.unwrap().id, request.id);
    }

    #[tokio::test]
    async fn create_request_rejects_out_of_range_input_test() {
        let e = engine();

        let err = e
            .create_request("Gwangalli".into(), 0, MenuCategory::Meat)
            .await
            .unwrap_err();
        assert!(err.is_invalid_input_error());

        let err = e
            .create_request("".into(), 3, MenuCategory::Meat)
            .await
            .unwrap_err();
        assert!(err.is_invalid_input_error());

        assert!(e.latest_view().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn latest_view_tracks_last_request_test() {
        let e = engine();

        e.create_request("Seomyeon".into(), 2, MenuCategory::Meat)
            .await
            .unwrap();
        let last = e
            .create_request("Haeundae".into(), 6, MenuCategory::Korean)
            .await
            .unwrap();

        let view = e.latest_view().await.unwrap().unwrap();
        assert_eq!(view.request.id, last.id);
        assert!(view.bids.is_empty());
        assert!(view.confirmed.is_none());
    }

    #[tokio::test]
    async fn accept_bid_closes_request_test() {
        let e = engine();
        let request = e
            .create_request("Gwangalli".into(), 4, MenuCategory::RawFishSeafood)
            .await
            .unwrap();

        let first = e
            .place_bid("A. Daebak Sashimi".into(), request.id, 0.8)
            .await
            .unwrap();
        e.place_bid("B. Ocean Table".into(), request.id, 0.1)
            .await
            .unwrap();

        let view = e.diner_view(request.id).await.unwrap();
        assert_eq!(view.bids.len(), 2);

        let m = e.accept_bid(request.id, first.id).await.unwrap();
        assert_eq!(m.owner_name, "A. Daebak Sashimi");
        assert_eq!(m.offer_text, "20% off + free premium side");

        let view = e.diner_view(request.id).await.unwrap();
        assert_eq!(view.request.status, RequestStatus::Matched);
        assert!(view.bids.is_empty());

        let confirmed = view.confirmed.unwrap();
        assert_eq!(confirmed.owner_name, "A. Daebak Sashimi");
        assert_eq!(confirmed.offer_text, "20% off + free premium side");
    }

    #[tokio::test]
    async fn first_acceptance_wins_test() {
        let e = engine();
        let request = e
            .create_request("Gwangalli".into(), 4, MenuCategory::RawFishSeafood)
            .await
            .unwrap();

        let first = e.place_bid("A".into(), request.id, 0.5).await.unwrap();
        let second = e.place_bid("B".into(), request.id, 0.5).await.unwrap();

        e.accept_bid(request.id, first.id).await.unwrap();

        let err = e.accept_bid(request.id, second.id).await.unwrap_err();
        assert!(err.is_invalid_invocation_error());

        let err = e.accept_bid(request.id, first.id).await.unwrap_err();
        assert!(err.is_invalid_invocation_error());

        let confirmed = e.diner_view(request.id).await.unwrap().confirmed.unwrap();
        assert_eq!(confirmed.owner_name, "A");
    }

    #[tokio::test]
    async fn accept_bid_for_other_request_is_invalid_input_test() {
        let e = engine();
        let mine = e
            .create_request("Nampo".into(), 2, MenuCategory::Korean)
            .await
            .unwrap();
        let other = e
            .create_request("Nampo".into(), 3, MenuCategory::Korean)
            .await
            .unwrap();

        let bid = e.place_bid("G. Gukbap".into(), other.id, 0.2).await.unwrap();

        let err = e.accept_bid(mine.id, bid.id).await.unwrap_err();
        assert!(err.is_invalid_input_error());

        let err = e.accept_bid(mine.id, uuid::Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_invalid_input_error());

        assert_eq!(
            e.find_request(mine.id).await.unwrap().status,
            RequestStatus::AwaitingBids
        );
    }

    #[tokio::test]
    async fn unknown_request_is_invalid_input_test() {
        let e = engine();

        let err = e.diner_view(uuid::Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_invalid_input_error());
    }
}
