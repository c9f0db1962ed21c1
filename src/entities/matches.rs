use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Bid, OfferTier};

/// The accepted bid that closed a request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Match {
    pub request_id: Uuid,
    pub bid_id: Uuid,
    pub owner_name: String,
    pub offer_text: String,
    pub tag: OfferTier,
    pub offered_at: DateTime<Local>,
    pub created_at: DateTime<Local>,
}

impl Match {
    pub fn accept(bid: &Bid, created_at: DateTime<Local>) -> Self {
        Self {
            request_id: bid.request_id,
            bid_id: bid.id,
            owner_name: bid.owner_name.clone(),
            offer_text: bid.offer_text.clone(),
            tag: bid.tag,
            offered_at: bid.created_at,
            created_at,
        }
    }
}

#[test]
fn match_copies_accepted_bid_test() {
    use chrono::Duration;

    let offered_at = Local::now();
    let bid = Bid::generate(Uuid::new_v4(), "C. Grill".into(), 0.5, offered_at);
    let accepted_at = offered_at + Duration::minutes(3);

    let m = Match::accept(&bid, accepted_at);

    assert_eq!(m.request_id, bid.request_id);
    assert_eq!(m.bid_id, bid.id);
    assert_eq!(m.owner_name, "C. Grill");
    assert_eq!(m.offer_text, bid.offer_text);
    assert_eq!(m.tag, bid.tag);
    assert_eq!(m.offered_at, offered_at);
    assert_eq!(m.created_at, accepted_at);
}
