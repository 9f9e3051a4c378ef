use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::utils::{Method, Metrics, Status as StatusUtils, TracingContext};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

/// Span and metrics bookkeeping shared by the API client services.
#[derive(Debug, Clone)]
pub struct ClientTelemetry {
    tracer_name: String,
    metrics: Arc<Mutex<Metrics>>,
}

impl ClientTelemetry {
    pub async fn new(
        tracer_name: impl Into<String>,
        subject: &str,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let tracer_name = tracer_name.into();
        let metrics = Metrics::new();
        let prefix = tracer_name.replace('-', "_");
        metrics.register(&mut *registry.lock().await, &prefix, subject);

        Self {
            tracer_name,
            metrics: Arc::new(Mutex::new(metrics)),
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer(self.tracer_name.clone())
    }

    pub fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    pub async fn complete_tracing_success(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, true, message)
            .await;
    }

    pub async fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message)
            .await;
    }

    async fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("Operation completed successfully: {message}");
        } else {
            error!("Operation failed: {message}");
        }

        self.metrics.lock().await.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    /// Closes the span for `result` and hands it back unchanged.
    pub async fn complete<T, E: std::fmt::Display>(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        success_message: &str,
        result: Result<T, E>,
    ) -> Result<T, E> {
        match &result {
            Ok(_) => {
                self.complete_tracing_success(tracing_ctx, method, success_message)
                    .await
            }
            Err(err) => {
                self.complete_tracing_error(tracing_ctx, method, &err.to_string())
                    .await
            }
        }
        result
    }
}
