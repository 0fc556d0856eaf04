use async_trait::async_trait;
use ::redis::aio::MultiplexedConnection;
use ::redis::{Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, cmd};

use super::{DigestStore, StoreError};
use crate::config::StoreConfig;

/// Redis-backed store.
///
/// Holds one multiplexed connection; each command runs on a clone of it, so
/// concurrent requests pipeline over the same socket without extra locking.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Open the connection and verify it with `PING`.
    ///
    /// # Errors
    /// Returns an error if the server is unreachable, rejects the credentials
    /// or database index, or answers `PING` with anything but `PONG`.
    pub async fn connect(cfg: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::open(connection_info(cfg))?;
        let mut conn = client.get_multiplexed_async_connection().await?;

        let pong: String = cmd("PING").query_async(&mut conn).await?;
        if pong != "PONG" {
            return Err(StoreError::Unavailable(format!(
                "unexpected PING reply: {pong}"
            )));
        }

        tracing::info!(host = %cfg.host, port = cfg.port, db = cfg.db, "connected to redis");
        Ok(Self { conn })
    }
}

fn connection_info(cfg: &StoreConfig) -> ConnectionInfo {
    let password = cfg
        .password
        .as_ref()
        .filter(|p| !p.is_empty())
        .map(|p| p.expose().to_owned());

    ConnectionInfo {
        addr: ConnectionAddr::Tcp(cfg.host.clone(), cfg.port),
        redis: RedisConnectionInfo {
            db: cfg.db,
            password,
            ..Default::default()
        },
    }
}

#[async_trait]
impl DigestStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = cmd("GET").arg(key).query_async(&mut conn).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let () = cmd("SET")
            .arg(key)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}
