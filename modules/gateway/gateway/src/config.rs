use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;
use std::time::Duration;

use hashgate_bootstrap::{EnvSource, LoggingConfig, load_config};
use hashgate_transport_grpc::GrpcClientConfig;
use serde::{Deserialize, Serialize};

const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// `GATEWAY__HASHING__ENDPOINT` style variables.
pub const ENV: EnvSource = EnvSource::prefixed("GATEWAY__");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub http: HttpConfig,
    pub hashing: HashingClientConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub listen_addr: SocketAddr,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
        }
    }
}

/// Connection to the hashing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingClientConfig {
    pub endpoint: String,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    /// Per-call deadline; unset means calls wait as long as the server takes.
    #[serde(with = "humantime_serde")]
    pub rpc_timeout: Option<Duration>,
    /// Dial on first request, so the gateway can start before the hashing service.
    pub lazy_connect: bool,
}

impl Default for HashingClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://hashing-service:50051".to_owned(),
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: None,
            lazy_connect: true,
        }
    }
}

impl HashingClientConfig {
    #[must_use]
    pub fn transport(&self) -> GrpcClientConfig {
        GrpcClientConfig::new(hashing_sdk::SERVICE_NAME)
            .with_connect_timeout(self.connect_timeout)
            .with_rpc_timeout(self.rpc_timeout)
            .with_lazy_connect(self.lazy_connect)
    }
}

impl GatewayConfig {
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

    #[test]
    fn defaults() {
        temp_env::with_vars_unset(
            [
                "GATEWAY__HASHING__ENDPOINT",
                "GATEWAY__HASHING__RPC_TIMEOUT",
                "GATEWAY__HTTP__LISTEN_ADDR",
            ],
            || {
                let cfg = GatewayConfig::load(None).unwrap();
                assert_eq!(cfg.http.listen_addr.port(), 8080);
                assert_eq!(cfg.hashing.endpoint, "http://hashing-service:50051");
                assert_eq!(cfg.hashing.connect_timeout, Duration::from_secs(10));
                assert_eq!(cfg.hashing.rpc_timeout, None);
                assert!(cfg.hashing.lazy_connect);
            },
        );
    }

    #[test]
    fn env_overrides() {
        temp_env::with_vars(
            [
                ("GATEWAY__HASHING__ENDPOINT", Some("http://127.0.0.1:6000")),
                ("GATEWAY__HASHING__RPC_TIMEOUT", Some("1500ms")),
                ("GATEWAY__HTTP__LISTEN_ADDR", Some("127.0.0.1:9090")),
            ],
            || {
                let cfg = GatewayConfig::load(None).unwrap();
                assert_eq!(cfg.hashing.endpoint, "http://127.0.0.1:6000");
                assert_eq!(cfg.hashing.rpc_timeout, Some(Duration::from_millis(1500)));
                assert_eq!(cfg.http.listen_addr.port(), 9090);
            },
        );
    }

    #[test]
    fn transport_settings_follow_config() {
        let cfg = HashingClientConfig {
            rpc_timeout: Some(Duration::from_secs(3)),
            lazy_connect: false,
            ..HashingClientConfig::default()
        };
        let transport = cfg.transport();
        assert_eq!(transport.service_name, hashing_sdk::SERVICE_NAME);
        assert_eq!(transport.rpc_timeout, Some(Duration::from_secs(3)));
        assert!(!transport.lazy);
    }
}
