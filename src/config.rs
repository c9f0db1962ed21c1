use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::{config_error, Error};

const ADDR_VAR: &str = "TABLEMATCH_ADDR";
const SIMULATION_ROUNDS_VAR: &str = "TABLEMATCH_SIMULATION_ROUNDS";
const SIMULATION_SEED_VAR: &str = "TABLEMATCH_SIMULATION_SEED";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub simulation_rounds: u32,
    pub simulation_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            simulation_rounds: 0,
            simulation_seed: None,
        }
    }
}

impl Config {
    /// Reads `.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!("no .env file loaded: {}", err);
        }

        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let defaults = Self::default();

        Ok(Self {
            addr: parse_var(&lookup, ADDR_VAR)?.unwrap_or(defaults.addr),
            simulation_rounds: parse_var(&lookup, SIMULATION_ROUNDS_VAR)?
                .unwrap_or(defaults.simulation_rounds),
            simulation_seed: parse_var(&lookup, SIMULATION_SEED_VAR)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    match lookup(key) {
        Ok(value) => value.trim().parse().map(Some).map_err(config_error),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
