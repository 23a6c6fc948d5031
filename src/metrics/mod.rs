//! Prometheus metrics for the template service.
//!
//! This module provides metrics for monitoring the service:
//! - Render metrics (renders, failures, latency, variable counts, output size)
//! - Template store metrics (saves by category, stored gauge, backend latency/errors)
//! - Asset upload metrics (uploads, failures, payload size)

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter, register_int_counter_vec,
    register_int_gauge, Encoder, Histogram, HistogramVec, IntCounter, IntCounterVec, IntGauge,
    TextEncoder,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "letterpress";

lazy_static! {
    // ============================================================================
    // Render Metrics
    // ============================================================================

    /// Total successful renders
    pub static ref RENDERS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total documents rendered"
    ).unwrap();

    /// Total failed renders (caller contract violations)
    pub static ref RENDER_FAILURES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_render_failures_total", METRIC_PREFIX),
        "Total render requests rejected"
    ).unwrap();

    /// Render latency
    pub static ref RENDER_DURATION_SECONDS: Histogram = register_histogram!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Render latency in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]
    ).unwrap();

    /// Variables supplied per render
    pub static ref RENDER_VARIABLES: Histogram = register_histogram!(
        format!("{}_render_variables", METRIC_PREFIX),
        "Distribution of variable counts per render",
        vec![0.0, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0]
    ).unwrap();

    /// Composed document size
    pub static ref RENDER_OUTPUT_BYTES: Histogram = register_histogram!(
        format!("{}_render_output_bytes", METRIC_PREFIX),
        "Composed document size in bytes",
        vec![256.0, 1024.0, 4096.0, 16384.0, 65536.0, 262144.0, 1048576.0]
    ).unwrap();

    // ============================================================================
    // Template Store Metrics
    // ============================================================================

    /// Templates saved by category
    pub static ref TEMPLATES_SAVED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_templates_saved_total", METRIC_PREFIX),
        "Total templates saved",
        &["category"]
    ).unwrap();

    /// Templates currently stored
    pub static ref TEMPLATES_STORED: IntGauge = register_int_gauge!(
        format!("{}_templates_stored", METRIC_PREFIX),
        "Number of templates currently stored"
    ).unwrap();

    /// Listing requests served
    pub static ref TEMPLATE_LISTINGS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_template_listings_total", METRIC_PREFIX),
        "Total template listing requests served"
    ).unwrap();

    /// Store operation latency
    pub static ref STORE_OPERATION_LATENCY: HistogramVec = register_histogram_vec!(
        format!("{}_store_operation_latency_seconds", METRIC_PREFIX),
        "Template store operation latency in seconds",
        &["backend", "operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    ).unwrap();

    /// Store operation errors
    pub static ref STORE_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_store_errors_total", METRIC_PREFIX),
        "Total template store operation errors",
        &["backend", "operation"]
    ).unwrap();

    // ============================================================================
    // Asset Upload Metrics
    // ============================================================================

    /// Successful uploads
    pub static ref UPLOADS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_uploads_total", METRIC_PREFIX),
        "Total assets uploaded via the relay"
    ).unwrap();

    /// Failed uploads
    pub static ref UPLOAD_FAILURES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_upload_failures_total", METRIC_PREFIX),
        "Total asset uploads that failed"
    ).unwrap();

    /// Upload payload size
    pub static ref UPLOAD_BYTES: Histogram = register_histogram!(
        format!("{}_upload_bytes", METRIC_PREFIX),
        "Uploaded asset size in bytes",
        vec![1024.0, 10240.0, 102400.0, 1048576.0, 5242880.0, 10485760.0]
    ).unwrap();
}

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record a successful render
    pub fn record_success(variable_count: usize, output_bytes: usize) {
        RENDERS_TOTAL.inc();
        RENDER_VARIABLES.observe(variable_count as f64);
        RENDER_OUTPUT_BYTES.observe(output_bytes as f64);
    }

    /// Record a rejected render request
    pub fn record_failure() {
        RENDER_FAILURES_TOTAL.inc();
    }

    /// Start a latency timer; the observation is recorded on drop
    pub fn duration_timer() -> prometheus::HistogramTimer {
        RENDER_DURATION_SECONDS.start_timer()
    }
}

/// Helper struct for recording template store metrics
pub struct StoreMetrics;

impl StoreMetrics {
    /// Start a latency timer for a store operation
    pub fn operation_timer(backend: &str, operation: &str) -> prometheus::HistogramTimer {
        STORE_OPERATION_LATENCY
            .with_label_values(&[backend, operation])
            .start_timer()
    }

    /// Record a failed store operation
    pub fn record_error(backend: &str, operation: &str) {
        STORE_ERRORS_TOTAL
            .with_label_values(&[backend, operation])
            .inc();
    }
}

/// Helper struct for recording upload metrics
pub struct UploadMetrics;

impl UploadMetrics {
    /// Record a successful upload
    pub fn record_success(bytes: usize) {
        UPLOADS_TOTAL.inc();
        UPLOAD_BYTES.observe(bytes as f64);
    }

    /// Record a failed upload
    pub fn record_failure() {
        UPLOAD_FAILURES_TOTAL.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_metrics() {
        // Initialize some metrics first (lazy_static requires first access)
        RENDERS_TOTAL.inc();

        // Verify encoding doesn't panic and contains expected prefix
        let result = encode_metrics();
        assert!(result.is_ok());
        let output = result.unwrap();
        assert!(output.contains("letterpress_renders_total"));
    }

    #[test]
    fn test_render_metrics() {
        RenderMetrics::record_success(3, 2048);
        RenderMetrics::record_failure();
        let timer = RenderMetrics::duration_timer();
        drop(timer);
        // Just verify no panics
    }

    #[test]
    fn test_store_metrics() {
        let timer = StoreMetrics::operation_timer("memory", "save");
        drop(timer);
        StoreMetrics::record_error("postgres", "find");
        TEMPLATES_SAVED_TOTAL.with_label_values(&["custom"]).inc();
        TEMPLATES_STORED.set(5);
        // Just verify no panics
    }

    #[test]
    fn test_upload_metrics() {
        UploadMetrics::record_success(1024);
        UploadMetrics::record_failure();
        // Just verify no panics
    }
}
