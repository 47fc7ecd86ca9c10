/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Technical team role - caseworkers who open and edit intervention records
pub const ROLE_TECNICO: &str = "tecnico";

/// Supervisor role - reviewers who approve or reject submitted records
pub const ROLE_SUPERVISOR: &str = "supervisor";

/// Super admin role - global administrative access
pub const ROLE_SUPER_ADMIN: &str = "super_admin";
