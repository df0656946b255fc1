use upkeep_core::TenantId;

/// Tenant context for a request.
///
/// Installed by the tenant middleware from the gateway-validated header; it
/// is immutable and must be present for all analytics routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TenantContext {
    tenant_id: TenantId,
}

impl TenantContext {
    pub fn new(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}
