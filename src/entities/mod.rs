mod bid;
mod matches;
mod menu;
mod request;

pub use bid::{Bid, OfferTier};
pub use matches::Match;
pub use menu::MenuCategory;
pub use request::{Request, Status as RequestStatus};
