use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{ROLE_SUPERVISOR, ROLE_SUPER_ADMIN, ROLE_TECNICO};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    /// Display name, when the identity provider includes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user is super admin
    pub fn is_super_admin(&self) -> bool {
        self.has_role(ROLE_SUPER_ADMIN)
    }

    /// Check if user is a supervisor (reviews submitted intervention records)
    pub fn is_supervisor(&self) -> bool {
        self.has_role(ROLE_SUPERVISOR)
    }

    /// Check if user belongs to the technical team (creates and edits records)
    pub fn is_tecnico(&self) -> bool {
        self.has_role(ROLE_TECNICO)
    }

    /// Supervisor-level access: supervisors and super admins
    pub fn has_supervisor_access(&self) -> bool {
        self.is_super_admin() || self.is_supervisor()
    }

    /// Technical-team-level access: any of the three roles
    pub fn has_tecnico_access(&self) -> bool {
        self.has_supervisor_access() || self.is_tecnico()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "u-1".to_string(),
            nombre: None,
            roles: roles.iter().map(|r| (*r).to_string()).collect(),
        }
    }

    #[test]
    fn test_supervisor_access_includes_super_admin() {
        assert!(user_with_roles(&["super_admin"]).has_supervisor_access());
        assert!(user_with_roles(&["supervisor"]).has_supervisor_access());
        assert!(!user_with_roles(&["tecnico"]).has_supervisor_access());
    }

    #[test]
    fn test_tecnico_access_hierarchy() {
        assert!(user_with_roles(&["tecnico"]).has_tecnico_access());
        assert!(user_with_roles(&["supervisor"]).has_tecnico_access());
        assert!(!user_with_roles(&[]).has_tecnico_access());
    }
}
