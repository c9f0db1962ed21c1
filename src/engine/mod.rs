mod admin_api;
mod diner_api;
mod helpers;
mod owner_api;

use tokio::sync::Mutex;

use crate::{
    api::API,
    clock::{Clock, SystemClock},
    store::Store,
};

pub struct Engine {
    store: Mutex<Store>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock<C>(clock: C) -> Self
    where
        C: Clock + Send + Sync + 'static,
    {
        Self {
            store: Mutex::new(Store::new()),
            clock: Box::new(clock),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl API for Engine {}
