use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use upkeep_core::TenantId;

use crate::context::TenantContext;

/// Header carrying the validated tenant identity.
///
/// Authentication itself happens upstream: the gateway validates the caller
/// and installs this header. This service only refuses requests the gateway
/// did not stamp.
pub const TENANT_HEADER: &str = "x-tenant-id";

pub async fn tenant_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let tenant_id = extract_tenant(req.headers())?;

    req.extensions_mut().insert(TenantContext::new(tenant_id));

    Ok(next.run(req).await)
}

fn extract_tenant(headers: &HeaderMap) -> Result<TenantId, StatusCode> {
    let header = headers
        .get(TENANT_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    header
        .trim()
        .parse::<TenantId>()
        .map_err(|_| StatusCode::UNAUTHORIZED)
}
