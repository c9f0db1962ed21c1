use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Bid, Match, MenuCategory, OfferTier, Request};
use crate::error::Error;

/// What a diner sees for one of their requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DinerView {
    pub request: Request,
    /// Offers still open for acceptance; empty once the request is matched.
    pub bids: Vec<Bid>,
    pub confirmed: Option<ConfirmedBooking>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfirmedBooking {
    pub owner_name: String,
    pub offer_text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OwnerView {
    pub owner_name: String,
    pub bookings: Vec<OwnerBooking>,
    pub open_requests: Vec<OpenRequest>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OwnerBooking {
    #[serde(rename = "match")]
    pub matched: Match,
    pub request: Option<Request>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpenRequest {
    pub request: Request,
    pub already_bid: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub total_requests: usize,
    pub total_bids: usize,
    pub total_matches: usize,
}

/// One row of the admin match log export.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchLogRow {
    pub bid_id: Uuid,
    pub request_id: Uuid,
    pub owner_name: String,
    pub offer_text: String,
    pub tag: OfferTier,
    pub offered_at: String,
    pub matched_at: String,
}

#[async_trait]
pub trait DinerAPI {
    async fn create_request(
        &self,
        location: String,
        party_size: u8,
        menu_category: MenuCategory,
    ) -> Result<Request, Error>;
    async fn find_request(&self, id: Uuid) -> Result<Request, Error>;
    async fn diner_view(&self, request_id: Uuid) -> Result<DinerView, Error>;
    async fn latest_view(&self) -> Result<Option<DinerView>, Error>;
    async fn accept_bid(&self, request_id: Uuid, bid_id: Uuid) -> Result<Match, Error>;
}

#[async_trait]
pub trait OwnerAPI {
    async fn place_bid(
        &self,
        owner_name: String,
        request_id: Uuid,
        vacancy_ratio: f64,
    ) -> Result<Bid, Error>;
    async fn owner_view(&self, owner_name: String) -> Result<OwnerView, Error>;
}

#[async_trait]
pub trait AdminAPI {
    async fn dashboard(&self) -> Result<Dashboard, Error>;
    async fn match_log(&self) -> Result<Vec<MatchLogRow>, Error>;
}

pub trait API: DinerAPI + OwnerAPI + AdminAPI {}
