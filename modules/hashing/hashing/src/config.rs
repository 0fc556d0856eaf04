use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;

use hashgate_bootstrap::{EnvSource, LoggingConfig, SecretString, load_config};
use serde::{Deserialize, Serialize};

const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 50051));

/// Environment sources for the hashing service.
///
/// `HASHING__STORE__HOST` style variables, plus the variable names used by
/// existing deployments. Passwords are read verbatim.
pub const ENV: EnvSource = EnvSource::prefixed("HASHING__")
    .with_aliases(&[
        ("REDIS_HOST", "store.host"),
        ("REDIS_PORT", "store.port"),
        ("DB_NUM", "store.db"),
    ])
    .with_verbatim(&[
        ("REDIS_PASSWD", "store.password"),
        ("HASHING__STORE__PASSWORD", "store.password"),
    ]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    pub grpc: GrpcConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrpcConfig {
    pub listen_addr: SocketAddr,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
        }
    }
}

/// Redis connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    /// Empty or absent means no `AUTH`.
    pub password: Option<SecretString>,
    /// Logical database index.
    pub db: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 6379,
            password: None,
            db: 0,
        }
    }
}

impl HashingConfig {
    /// Load from defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    /// Returns an error if the file is missing or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        load_config(path, ENV)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    const ALL_VARS: [&str; 7] = [
        "REDIS_HOST",
        "REDIS_PORT",
        "REDIS_PASSWD",
        "DB_NUM",
        "HASHING__STORE__HOST",
        "HASHING__STORE__PASSWORD",
        "HASHING__GRPC__LISTEN_ADDR",
    ];

    #[test]
    fn defaults() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let cfg = HashingConfig::load(None).unwrap();
            assert_eq!(cfg.grpc.listen_addr.to_string(), "0.0.0.0:50051");
            assert_eq!(cfg.store.host, "127.0.0.1");
            assert_eq!(cfg.store.port, 6379);
            assert_eq!(cfg.store.db, 0);
            assert!(cfg.store.password.is_none());
        });
    }

    #[test]
    fn legacy_variables_are_honored() {
        temp_env::with_vars(
            [
                ("REDIS_HOST", Some("redis")),
                ("REDIS_PORT", Some("6380")),
                ("REDIS_PASSWD", Some("secret")),
                ("DB_NUM", Some("2")),
                ("HASHING__STORE__HOST", None),
                ("HASHING__STORE__PASSWORD", None),
            ],
            || {
                let cfg = HashingConfig::load(None).unwrap();
                assert_eq!(cfg.store.host, "redis");
                assert_eq!(cfg.store.port, 6380);
                assert_eq!(cfg.store.db, 2);
                assert_eq!(cfg.store.password.unwrap().expose(), "secret");
            },
        );
    }

    #[test]
    fn prefixed_variables_override_legacy_ones() {
        temp_env::with_vars(
            [
                ("REDIS_HOST", Some("legacy")),
                ("HASHING__STORE__HOST", Some("modern")),
                ("HASHING__GRPC__LISTEN_ADDR", Some("127.0.0.1:6000")),
            ],
            || {
                let cfg = HashingConfig::load(None).unwrap();
                assert_eq!(cfg.store.host, "modern");
                assert_eq!(cfg.grpc.listen_addr.port(), 6000);
            },
        );
    }

    #[test]
    fn passwords_are_taken_verbatim() {
        for raw in ["0123", "true", "1.5"] {
            temp_env::with_vars(
                [("REDIS_PASSWD", Some(raw)), ("HASHING__STORE__PASSWORD", None)],
                || {
                    let cfg = HashingConfig::load(None).unwrap();
                    assert_eq!(cfg.store.password.unwrap().expose(), raw);
                },
            );
            temp_env::with_vars(
                [("REDIS_PASSWD", None), ("HASHING__STORE__PASSWORD", Some(raw))],
                || {
                    let cfg = HashingConfig::load(None).unwrap();
                    assert_eq!(cfg.store.password.unwrap().expose(), raw);
                },
            );
        }
    }

    #[test]
    fn prefixed_password_overrides_legacy_one() {
        temp_env::with_vars(
            [
                ("REDIS_PASSWD", Some("0123")),
                ("HASHING__STORE__PASSWORD", Some("true")),
            ],
            || {
                let cfg = HashingConfig::load(None).unwrap();
                assert_eq!(cfg.store.password.unwrap().expose(), "true");
            },
        );
    }

    #[test]
    fn password_is_redacted_when_printed() {
        let cfg = HashingConfig {
            store: StoreConfig {
                password: Some(SecretString::new("hunter2")),
                ..StoreConfig::default()
            },
            ..HashingConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("[REDACTED]"));
    }
}
