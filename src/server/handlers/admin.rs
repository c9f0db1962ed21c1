use axum::extract::{Extension, Json};

use crate::api::{Dashboard, MatchLogRow};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn dashboard(Extension(api): Extension<DynAPI>) -> Result<Json<Dashboard>, Error> {
    let dashboard = api.dashboard().await?;

    Ok(dashboard.into())
}

pub async fn matches(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<MatchLogRow>>, Error> {
    let rows = api.match_log().await?;

    Ok(rows.into())
}
