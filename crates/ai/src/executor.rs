use upkeep_core::TenantId;

use crate::job::AnalyticsJob;
use crate::result::AnalyticsError;

/// Tenant scope for execution.
///
/// - `Any`: run jobs for any tenant (shared workers).
/// - `Tenant`: only accept jobs for the specified tenant (single-tenant
///   worker or per-request executor).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TenantScope {
    Any,
    Tenant(TenantId),
}

impl TenantScope {
    pub fn allows(&self, tenant_id: TenantId) -> bool {
        match self {
            TenantScope::Any => true,
            TenantScope::Tenant(t) => *t == tenant_id,
        }
    }
}

/// Executor for analytics jobs.
///
/// Intentionally minimal and runtime agnostic; the default `run` enforces the
/// tenant boundary before delegating to the job.
pub trait JobExecutor: Send + Sync + 'static {
    fn scope(&self) -> TenantScope;

    fn run<J: AnalyticsJob>(&self, job: J) -> Result<J::Output, AnalyticsError> {
        if !self.scope().allows(job.tenant_id()) {
            return Err(AnalyticsError::invalid_input(
                "tenant_id",
                "tenant scope violation (job tenant not allowed by executor)",
            ));
        }
        job.run()
    }
}

/// Simple synchronous executor that runs jobs immediately in-process.
#[derive(Debug, Copy, Clone)]
pub struct LocalJobExecutor {
    scope: TenantScope,
}

impl LocalJobExecutor {
    pub fn new(scope: TenantScope) -> Self {
        Self { scope }
    }

    pub fn any() -> Self {
        Self::new(TenantScope::Any)
    }

    pub fn for_tenant(tenant_id: TenantId) -> Self {
        Self::new(TenantScope::Tenant(tenant_id))
    }
}

impl JobExecutor for LocalJobExecutor {
    fn scope(&self) -> TenantScope {
        self.scope
    }
}
