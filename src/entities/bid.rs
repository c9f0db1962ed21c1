use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owner's offer in response to a request. Immutable once generated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bid {
    pub id: Uuid,
    pub request_id: Uuid,
    pub owner_name: String,
    pub offer_text: String,
    pub tag: OfferTier,
    pub created_at: DateTime<Local>,
}

/// How aggressive an offer is. Serializes as the tag shown to diners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferTier {
    #[serde(rename = "hot deal")]
    HotDeal,
    #[serde(rename = "recommended")]
    Recommended,
    #[serde(rename = "standard")]
    Standard,
}

const HOT_DEAL_VACANCY: f64 = 0.7;
const RECOMMENDED_VACANCY: f64 = 0.3;
const HOT_DEAL_HOURS: std::ops::RangeInclusive<u32> = 14..=17;

impl OfferTier {
    /// First matching rule wins. The afternoon window is inclusive of both
    /// boundary hours.
    pub fn select(vacancy_ratio: f64, hour: u32) -> Self {
        if vacancy_ratio >= HOT_DEAL_VACANCY || HOT_DEAL_HOURS.contains(&hour) {
            Self::HotDeal
        } else if vacancy_ratio >= RECOMMENDED_VACANCY {
            Self::Recommended
        } else {
            Self::Standard
        }
    }

    pub fn offer_text(&self) -> &'static str {
        match self {
            Self::HotDeal => "20% off + free premium side",
            Self::Recommended => "10% off + free drink",
            Self::Standard => "one free drink",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HotDeal => "hot deal",
            Self::Recommended => "recommended",
            Self::Standard => "standard",
        }
    }
}

impl Bid {
    pub fn generate(
        request_id: Uuid,
        owner_name: String,
        vacancy_ratio: f64,
        now: DateTime<Local>,
    ) -> Self {
        let tier = OfferTier::select(vacancy_ratio, now.hour());

        Self {
            id: Uuid::new_v4(),
            request_id,
            owner_name,
            offer_text: tier.offer_text().into(),
            tag: tier,
            created_at: now,
        }
    }
}
