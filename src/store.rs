use uuid::Uuid;

use crate::entities::{Bid, Match, Request};
use crate::error::{invalid_input_error, Error};

/// The three append-only collections every role reads from.
///
/// Lookups are linear scans by foreign key. Records are never removed; only
/// `Request::status` changes after insertion.
#[derive(Debug, Default)]
pub struct Store {
    requests: Vec<Request>,
    bids: Vec<Bid>,
    matches: Vec<Match>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn insert_request(&mut self, request: Request) {
        self.requests.push(request);
    }

    pub fn insert_bid(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    pub fn insert_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    pub fn find_request(&self, id: &Uuid) -> Option<&Request> {
        self.requests.iter().find(|r| &r.id == id)
    }

    pub fn fetch_request(&self, id: &Uuid) -> Result<&Request, Error> {
        self.find_request(id).ok_or_else(invalid_input_error)
    }

    pub fn fetch_request_mut(&mut self, id: &Uuid) -> Result<&mut Request, Error> {
        self.requests
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(invalid_input_error)
    }

    pub fn latest_request(&self) -> Option<&Request> {
        self.requests.last()
    }

    pub fn open_requests(&self) -> impl Iterator<Item = &Request> {
        self.requests.iter().filter(|r| r.is_open())
    }

    pub fn find_bid(&self, id: &Uuid) -> Option<&Bid> {
        self.bids.iter().find(|b| &b.id == id)
    }

    pub fn bids_for_request<'a>(&'a self, request_id: &'a Uuid) -> impl Iterator<Item = &'a Bid> {
        self.bids.iter().filter(move |b| &b.request_id == request_id)
    }

    pub fn has_bid(&self, request_id: &Uuid, owner_name: &str) -> bool {
        self.bids
            .iter()
            .any(|b| &b.request_id == request_id && b.owner_name == owner_name)
    }

    pub fn find_match_for_request(&self, request_id: &Uuid) -> Option<&Match> {
        self.matches.iter().find(|m| &m.request_id == request_id)
    }

    pub fn matches_for_owner<'a>(&'a self, owner_name: &'a str) -> impl Iterator<Item = &'a Match> {
        self.matches.iter().filter(move |m| m.owner_name == owner_name)
    }
}
