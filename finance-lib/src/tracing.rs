use crate::config::TelemetryConfig;
use anyhow::Context;
use opentelemetry::sdk::trace::Tracer;
use opentelemetry::sdk::Resource;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use std::collections::HashMap;
use tonic::metadata::{Ascii, MetadataKey, MetadataMap, MetadataValue};
use tracing_actix_web::{DefaultRootSpanBuilder, TracingLogger};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::registry::LookupSpan;

pub fn create_middleware() -> TracingLogger<DefaultRootSpanBuilder> {
    TracingLogger::<DefaultRootSpanBuilder>::new()
}

fn metadata_map(headers: &HashMap<String, String>) -> Result<MetadataMap, anyhow::Error> {
    let mut metadata_map = MetadataMap::with_capacity(headers.len());
    for (name, value) in headers {
        let key = MetadataKey::<Ascii>::from_bytes(name.as_bytes())
            .with_context(|| format!("Invalid telemetry header name {}", name))?;
        let value: MetadataValue<Ascii> = value
            .parse()
            .with_context(|| format!("Invalid value for telemetry header {}", name))?;
        metadata_map.insert(key, value);
    }
    Ok(metadata_map)
}

pub fn create_opentelemetry_layer<S>(
    service_name: &'static str,
    config: &TelemetryConfig,
) -> Result<OpenTelemetryLayer<S, Tracer>, anyhow::Error>
where
    S: tracing::Subscriber + for<'span> LookupSpan<'span>,
{
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(config.endpoint.as_str())
        .with_metadata(metadata_map(&config.headers)?);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_trace_config(
            opentelemetry::sdk::trace::config().with_resource(Resource::new(vec![KeyValue::new(
                "service.name",
                service_name,
            )])),
        )
        .with_exporter(exporter)
        .install_simple()
        .context("Unable to create tracer")?;
    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    Ok(telemetry_layer)
}
