use contracts::enums::Role;

/// Authenticated identity passed explicitly to every API call
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer() {
        let session = Session::new("abc", Role::User);
        assert_eq!(session.bearer(), "Bearer abc");
        assert!(!session.is_admin());
        assert!(Session::new("x", Role::Admin).is_admin());
    }
}
