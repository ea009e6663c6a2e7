mod config;
mod shutdown;

pub use config::{LogFormat, TelemetryConfig};
pub use shutdown::TelemetryGuard;

use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "locustgen=info,tower_http=debug";

/// Logs go to stderr so a script printed on stdout stays clean
pub fn init_telemetry() -> crate::Result<TelemetryGuard> {
    let config = TelemetryConfig::from_env();

    if config.enabled {
        // Try to initialize with OpenTelemetry, but fall back to stderr-only if it fails
        match build_provider(&config) {
            Ok(provider) => {
                init_subscriber(&config, Some(&provider));
                tracing::info!(
                    "OpenTelemetry initialized with endpoint: {}",
                    config.endpoint
                );
                return Ok(TelemetryGuard::new(Some(provider)));
            }
            Err(e) => {
                eprintln!(
                    "Failed to initialize OpenTelemetry: {}. Falling back to stderr-only logging.",
                    e
                );
            }
        }
    }

    init_subscriber(&config, None);
    tracing::debug!("Tracing initialized (OpenTelemetry disabled)");
    Ok(TelemetryGuard::default())
}

fn build_provider(config: &TelemetryConfig) -> crate::Result<SdkTracerProvider> {
    // Create HTTP client explicitly
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .map_err(|e| {
            crate::LocustGenError::ServerError(format!("Failed to build HTTP client: {}", e))
        })?;

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_http_client(client)
        .with_endpoint(&config.endpoint)
        .with_protocol(opentelemetry_otlp::Protocol::HttpBinary)
        .with_timeout(std::time::Duration::from_secs(5))
        .with_headers(config.headers.clone())
        .build()
        .map_err(|e| {
            crate::LocustGenError::ServerError(format!("Failed to build OTLP exporter: {}", e))
        })?;

    // Create resource with service metadata
    let resource = opentelemetry_sdk::Resource::builder_empty()
        .with_service_name(config.service_name.clone())
        .with_attributes([KeyValue::new("service.version", env!("CARGO_PKG_VERSION"))])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_sampler(Sampler::TraceIdRatioBased(config.sample_rate))
        .with_resource(resource)
        .build();

    opentelemetry::global::set_tracer_provider(provider.clone());

    Ok(provider)
}

fn init_subscriber(config: &TelemetryConfig, provider: Option<&SdkTracerProvider>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
            .boxed(),
    };

    let otel_layer = provider.map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer("locustgen"))
    });

    // try_init so a second call (tests, embedding) does not panic
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();
}
