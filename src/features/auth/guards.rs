//! Role-based authorization guards.
//!
//! These guards extract the authenticated user and verify they have the
//! required roles.
//!
//! Role hierarchy (from highest to lowest):
//! - super_admin: global admin
//! - supervisor: reviews submitted intervention records (approve/reject)
//! - tecnico: opens and edits intervention records
//!
//! Each higher role includes all permissions of lower roles.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if user has supervisor level access.
///
/// Allows users with "super_admin" or "supervisor" roles.
/// Use this for the approve/reject review operations.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireSupervisor(user): RequireSupervisor) { ... }
/// ```
pub struct RequireSupervisor(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireSupervisor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.has_supervisor_access() {
            return Err(AppError::Forbidden(
                "Supervisor access required".to_string(),
            ));
        }

        Ok(RequireSupervisor(user.clone()))
    }
}

/// Guard for checking if user has technical-team level access.
///
/// Allows users with "super_admin", "supervisor" or "tecnico" roles.
/// Use this for record creation and editing operations.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireTecnico(user): RequireTecnico) { ... }
/// ```
pub struct RequireTecnico(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireTecnico
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.has_tecnico_access() {
            return Err(AppError::Forbidden(
                "Technical team access required".to_string(),
            ));
        }

        Ok(RequireTecnico(user.clone()))
    }
}
