use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::OwnerView;
use crate::entities::Bid;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct BidParams {
    pub request_id: Uuid,
    pub vacancy_ratio: f64,
}

pub async fn view(
    Extension(api): Extension<DynAPI>,
    Path(name): Path<String>,
) -> Result<Json<OwnerView>, Error> {
    let view = api.owner_view(name).await?;

    Ok(view.into())
}

pub async fn bid(
    Extension(api): Extension<DynAPI>,
    Path(name): Path<String>,
    Json(params): Json<BidParams>,
) -> Result<Json<Bid>, Error> {
    let bid = api
        .place_bid(name, params.request_id, params.vacancy_ratio)
        .await?;

    Ok(bid.into())
}
