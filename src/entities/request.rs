use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::MenuCategory;
use crate::error::{invalid_invocation_error, Error};

/// A diner's posted dining need.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Request {
    pub id: Uuid,
    pub location: String,
    pub party_size: u8,
    pub menu_category: MenuCategory,
    pub status: Status,
    pub created_at: DateTime<Local>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    AwaitingBids,
    OffersReceived,
    Matched,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::AwaitingBids => "awaiting_bids".into(),
            Self::OffersReceived => "offers_received".into(),
            Self::Matched => "matched".into(),
        }
    }
}

impl Request {
    pub fn new(
        location: String,
        party_size: u8,
        menu_category: MenuCategory,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            location,
            party_size,
            menu_category,
            status: Status::AwaitingBids,
            created_at,
        }
    }

    pub fn is_open(&self) -> bool {
        match self.status {
            Status::AwaitingBids | Status::OffersReceived => true,
            Status::Matched => false,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.status == Status::Matched
    }

    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub fn receive_offer(&mut self) -> Result<(), Error> {
        match self.status {
            Status::AwaitingBids | Status::OffersReceived => {
                self.status = Status::OffersReceived;
                Ok(())
            }
            Status::Matched => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub fn close(&mut self) -> Result<(), Error> {
        match self.status {
            Status::AwaitingBids | Status::OffersReceived => {
                self.status = Status::Matched;
                Ok(())
            }
            Status::Matched => Err(invalid_invocation_error()),
        }
    }
}
