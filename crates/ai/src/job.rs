use upkeep_core::TenantId;

use crate::result::AnalyticsError;

/// A tenant-scoped analytics inference unit.
///
/// Jobs consume **already-materialized snapshots** via their `Input` type and
/// produce a typed `Output`. This crate stays storage-agnostic: inputs are
/// resolved by callers (infra/API), and jobs perform no I/O of their own.
pub trait AnalyticsJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;
    type Output: Send + Sync + 'static;

    /// The tenant this job belongs to (tenant-safe execution model).
    fn tenant_id(&self) -> TenantId;

    /// The input snapshot the job will run inference on.
    fn input(&self) -> &Self::Input;

    /// Execute inference and return the typed result.
    ///
    /// Must be deterministic for a given input and must not mutate domain
    /// state.
    fn run(&self) -> Result<Self::Output, AnalyticsError>;
}
