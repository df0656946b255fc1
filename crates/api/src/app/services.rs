use std::sync::{Arc, Mutex};

use upkeep_ai::{AnalysisConfig, LocalJobExecutor};
use upkeep_core::TenantId;

/// Sink for usage-metering events (billing collaborator boundary).
///
/// Fire-and-forget: analytics responses never wait on, or fail because of,
/// metering. The billing pipeline consumes these events elsewhere.
pub trait UsageMeter: Send + Sync + 'static {
    fn record(&self, tenant_id: TenantId, event: &str);
}

/// In-memory meter for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryUsageMeter {
    inner: Mutex<Vec<(TenantId, String)>>,
}

impl InMemoryUsageMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<(TenantId, String)> {
        self.inner.lock().unwrap().clone()
    }
}

impl UsageMeter for InMemoryUsageMeter {
    fn record(&self, tenant_id: TenantId, event: &str) {
        tracing::info!(%tenant_id, event, "usage event recorded");
        self.inner.lock().unwrap().push((tenant_id, event.to_string()));
    }
}

/// Shared service wiring for the API process.
pub struct AppServices {
    executor: LocalJobExecutor,
    config: AnalysisConfig,
    meter: Arc<dyn UsageMeter>,
}

impl AppServices {
    pub fn build() -> Self {
        Self {
            // One shared executor serves every tenant; each job still runs
            // under its own tenant scope check.
            executor: LocalJobExecutor::any(),
            config: AnalysisConfig::default(),
            meter: Arc::new(InMemoryUsageMeter::new()),
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_meter(mut self, meter: Arc<dyn UsageMeter>) -> Self {
        self.meter = meter;
        self
    }

    pub fn executor(&self) -> &LocalJobExecutor {
        &self.executor
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn meter(&self) -> &dyn UsageMeter {
        self.meter.as_ref()
    }
}
