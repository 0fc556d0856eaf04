//! gRPC client transport configuration and connection utilities.
//!
//! - Configurable connect timeout and optional per-RPC deadline
//! - HTTP/2 keepalive settings for connection health
//! - Eager or lazy channel establishment
//! - Tracing span around connection establishment
//!
//! No retries are performed here: a failed RPC is reported to the caller as is.

use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::Instrument;

fn duration_to_u64_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Configuration for the gRPC client transport stack.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing a connection.
    pub connect_timeout: Duration,

    /// Deadline applied to every RPC. `None` leaves calls unbounded.
    pub rpc_timeout: Option<Duration>,

    /// Defer dialing until the first RPC instead of connecting up front.
    pub lazy: bool,

    /// Service name for tracing.
    pub service_name: &'static str,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: None,
            lazy: false,
            service_name: "grpc_client",
        }
    }
}

impl GrpcClientConfig {
    #[must_use]
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_rpc_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.rpc_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_lazy_connect(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }
}

/// Build a tonic `Endpoint` with timeouts and keepalive settings.
fn build_endpoint(uri: String, cfg: &GrpcClientConfig) -> Result<Endpoint, tonic::transport::Error> {
    let mut endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10))
        .keep_alive_while_idle(true);

    if let Some(timeout) = cfg.rpc_timeout {
        endpoint = endpoint.timeout(timeout);
    }

    Ok(endpoint)
}

/// Connect to a gRPC service with the configured transport stack.
///
/// With [`GrpcClientConfig::lazy`] set, only the URI is validated here and the
/// connection is established by the first RPC. A lazy channel must be created
/// inside a Tokio runtime.
///
/// # Example
///
/// ```ignore
/// use hashgate_transport_grpc::client::{connect_with_stack, GrpcClientConfig};
///
/// let config = GrpcClientConfig::new("hashing.v1.HashingService");
/// let client: HashingServiceClient<Channel> =
///     connect_with_stack("http://localhost:50051", &config).await?;
/// ```
///
/// # Errors
/// Returns an error if the URI is invalid or, for eager connections, if the
/// server cannot be reached within the connect timeout.
pub async fn connect_with_stack<TClient>(
    uri: impl Into<String>,
    cfg: &GrpcClientConfig,
) -> anyhow::Result<TClient>
where
    TClient: From<Channel>,
{
    let uri_string = uri.into();
    let span = tracing::debug_span!(
        "grpc_connect",
        service = cfg.service_name,
        uri = %uri_string,
        lazy = cfg.lazy
    );

    async move {
        let endpoint = build_endpoint(uri_string, cfg)?;
        let channel = if cfg.lazy {
            endpoint.connect_lazy()
        } else {
            endpoint.connect().await?
        };

        tracing::info!(
            service_name = cfg.service_name,
            connect_timeout_ms = duration_to_u64_ms(cfg.connect_timeout),
            rpc_timeout_ms = cfg.rpc_timeout.map(duration_to_u64_ms),
            lazy = cfg.lazy,
            "gRPC client ready"
        );

        Ok(TClient::from(channel))
    }
    .instrument(span)
    .await
}
