use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::Datelike;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Default reporting year for CSV files and demo batches without one.
pub(crate) fn current_year() -> i32 {
    chrono::Local::now().year()
}
