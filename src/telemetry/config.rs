use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub headers: HashMap<String, String>,
    pub service_name: String,
    pub sample_rate: f64,
    pub log_format: LogFormat,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = lookup("OTEL_ENABLED")
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        let endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
            .unwrap_or_else(|| "http://localhost:4318/v1/traces".to_string());

        let service_name = lookup("OTEL_SERVICE_NAME").unwrap_or_else(|| "locustgen".to_string());

        let mut headers = HashMap::new();
        if let Some(raw) = lookup("OTEL_EXPORTER_OTLP_HEADERS") {
            // Parse "key=value,key2=value2" format or "key=value" format
            for pair in raw.split(',') {
                if let Some((k, v)) = pair.split_once('=') {
                    headers.insert(k.trim().to_string(), v.trim().to_string());
                }
            }
        }

        let sample_rate = lookup("OTEL_TRACES_SAMPLER_ARG")
            .and_then(|v| v.parse::<f64>().ok())
            .map(|rate| rate.clamp(0.0, 1.0))
            .unwrap_or(1.0);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            enabled,
            endpoint,
            headers,
            service_name,
            sample_rate,
            log_format,
        }
    }
}
