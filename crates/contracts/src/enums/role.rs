use serde::{Deserialize, Serialize};

/// Application role returned by the login endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    /// Any role other than "Admin" is treated as a regular user
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// Route the client lands on after login
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/users",
            Role::User => "/timesheets",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("Admin"), Role::Admin);
        assert_eq!(Role::from_code("User"), Role::User);
        assert_eq!(Role::from_code("Manager"), Role::User);
        assert_eq!(Role::Admin.home_path(), "/admin/users");
    }
}
