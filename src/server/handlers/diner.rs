use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DinerView;
use crate::entities::{Match, MenuCategory, Request};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    pub location: String,
    pub party_size: u8,
    pub menu_category: MenuCategory,
}

#[derive(Serialize, Deserialize)]
pub struct AcceptParams {
    pub bid_id: Uuid,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Request>, Error> {
    let request = api
        .create_request(params.location, params.party_size, params.menu_category)
        .await?;

    Ok(request.into())
}

pub async fn view(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<DinerView>, Error> {
    let view = api.diner_view(id).await?;

    Ok(view.into())
}

pub async fn latest(Extension(api): Extension<DynAPI>) -> Result<Json<Option<DinerView>>, Error> {
    let view = api.latest_view().await?;

    Ok(view.into())
}

pub async fn accept(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<AcceptParams>,
) -> Result<Json<Match>, Error> {
    let m = api.accept_bid(id, params.bid_id).await?;

    Ok(m.into())
}
