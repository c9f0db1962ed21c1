pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{admin, diner, owners};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/diner/requests", post(diner::create))
        .route("/diner/requests/:id", get(diner::view))
        .route("/diner/requests/:id/accept", patch(diner::accept))
        .route("/diner/latest", get(diner::latest))
        .route("/owners/:name", get(owners::view))
        .route("/owners/:name/bids", post(owners::bid))
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/matches", get(admin::matches))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(router(api).into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
