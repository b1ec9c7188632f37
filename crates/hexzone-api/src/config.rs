//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use hexzone_game::domain::board::BoardConfig;
use tokio::net::TcpListener;

use crate::error::AppError;

/// Settings for one server process.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// File holding the saved game.
    pub snapshot_path: PathBuf,
    /// Parameters for newly started games.
    pub board: BoardConfig,
    /// Fixed RNG seed, for reproducible games.
    pub seed: Option<u64>,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `SNAPSHOT_PATH`, `NUM_TILES`,
    /// `ZONE_PROBABILITY`, `ITEM_COUNT` and `GAME_SEED`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable cannot be parsed or the
    /// board it describes is not playable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable cannot be parsed or the
    /// board it describes is not playable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = BoardConfig::default();
        let board = BoardConfig {
            num_tiles: parse_or(&lookup, "NUM_TILES", defaults.num_tiles)?,
            zone_probability: parse_or(&lookup, "ZONE_PROBABILITY", defaults.zone_probability)?,
            item_count: parse_or(&lookup, "ITEM_COUNT", defaults.item_count)?,
        };
        board
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            snapshot_path: lookup("SNAPSHOT_PATH")
                .map_or_else(|| PathBuf::from("game_save.json"), PathBuf::from),
            board,
            seed: lookup("GAME_SEED")
                .map(|raw| parse("GAME_SEED", &raw))
                .transpose()?,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Binds the listening socket.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address
    /// and `AppError::Server` if the bind itself fails.
    pub async fn bind(&self) -> Result<TcpListener, AppError> {
        let addr = self.socket_addr()?;
        Ok(TcpListener::bind(addr).await?)
    }
}

fn parse<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{key} is invalid ({raw:?}): {e}")))
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| parse(key, &raw))
}
