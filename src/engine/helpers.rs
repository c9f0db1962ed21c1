use chrono::{DateTime, Local};

use crate::{
    api::{ConfirmedBooking, DinerView, MatchLogRow, OpenRequest, OwnerBooking},
    entities::{Match, Request},
    error::{invalid_input_error, Error},
    store::Store,
};

pub const MAX_PARTY_SIZE: u8 = 10;

const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn validate_request_input(location: &str, party_size: u8) -> Result<(), Error> {
    if location.trim().is_empty() {
        return Err(invalid_input_error());
    }

    if !(1..=MAX_PARTY_SIZE).contains(&party_size) {
        return Err(invalid_input_error());
    }

    Ok(())
}

pub fn validate_bid_input(owner_name: &str, vacancy_ratio: f64) -> Result<(), Error> {
    if owner_name.trim().is_empty() {
        return Err(invalid_input_error());
    }

    // also rejects NaN
    if !(0.0..=1.0).contains(&vacancy_ratio) {
        return Err(invalid_input_error());
    }

    Ok(())
}

#[tracing::instrument(skip(store, request), fields(request_id = %request.id))]
pub fn diner_view(store: &Store, request: &Request) -> DinerView {
    if request.is_matched() {
        let confirmed = store
            .find_match_for_request(&request.id)
            .map(|m| ConfirmedBooking {
                owner_name: m.owner_name.clone(),
                offer_text: m.offer_text.clone(),
            });

        if confirmed.is_none() {
            tracing::warn!("matched request has no match record, skipping confirmation");
        }

        return DinerView {
            request: request.clone(),
            bids: vec![],
            confirmed,
        };
    }

    DinerView {
        request: request.clone(),
        bids: store.bids_for_request(&request.id).cloned().collect(),
        confirmed: None,
    }
}

pub fn owner_booking(store: &Store, m: &Match) -> OwnerBooking {
    OwnerBooking {
        matched: m.clone(),
        request: store.find_request(&m.request_id).cloned(),
    }
}

pub fn open_request(store: &Store, request: &Request, owner_name: &str) -> OpenRequest {
    OpenRequest {
        request: request.clone(),
        already_bid: store.has_bid(&request.id, owner_name),
    }
}

pub fn match_log_row(m: &Match) -> MatchLogRow {
    MatchLogRow {
        bid_id: m.bid_id,
        request_id: m.request_id,
        owner_name: m.owner_name.clone(),
        offer_text: m.offer_text.clone(),
        tag: m.tag,
        offered_at: format_timestamp(&m.offered_at),
        matched_at: format_timestamp(&m.created_at),
    }
}

fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(LOG_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Bid, MenuCategory};

    #[test]
    fn matched_request_without_match_has_no_confirmation_test() {
        let mut store = Store::new();
        let mut request = Request::new(
            "Gwangalli".into(),
            4,
            MenuCategory::RawFishSeafood,
            Local::now(),
        );
        store.insert_bid(Bid::generate(request.id, "A".into(), 0.5, Local::now()));
        request.close().unwrap();
        store.insert_request(request.clone());

        let view = diner_view(&store, &request);

        assert!(view.confirmed.is_none());
        assert!(view.bids.is_empty());
    }

    #[test]
    fn match_without_request_is_listed_without_details_test() {
        let store = Store::new();
        let bid = Bid::generate(uuid::Uuid::new_v4(), "A".into(), 0.8, Local::now());
        let m = Match::accept(&bid, Local::now());

        let booking = owner_booking(&store, &m);

        assert!(booking.request.is_none());
        assert_eq!(booking.matched.bid_id, bid.id);
    }

    #[test]
    fn request_input_bounds_test() {
        assert!(validate_request_input("Gwangalli", 1).is_ok());
        assert!(validate_request_input("Gwangalli", 10).is_ok());
        assert!(validate_request_input("Gwangalli", 0).is_err());
        assert!(validate_request_input("Gwangalli", 11).is_err());
        assert!(validate_request_input("   ", 4).is_err());
    }

    #[test]
    fn bid_input_bounds_test() {
        assert!(validate_bid_input("F. Hansik", 0.0).is_ok());
        assert!(validate_bid_input("F. Hansik", 1.0).is_ok());
        assert!(validate_bid_input("F. Hansik", 1.01).is_err());
        assert!(validate_bid_input("F. Hansik", -0.1).is_err());
        assert!(validate_bid_input("F. Hansik", f64::NAN).is_err());
        assert!(validate_bid_input("", 0.5).is_err());
    }
}
