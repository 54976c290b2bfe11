use serde::{Deserialize, Serialize};

use crate::enums::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub role: String,
}

impl LoginResponse {
    /// The source API may answer 200 with an incomplete body
    pub fn validate(&self) -> Result<Role, String> {
        if self.token.trim().is_empty() || self.role.trim().is_empty() {
            return Err("La réponse de l'API ne contient pas le rôle ou le token.".into());
        }
        Ok(Role::from_code(&self.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_names() {
        let json = serde_json::to_value(LoginRequest {
            user_name: "jdoe".into(),
            password: "secret".into(),
            remember_me: true,
        })
        .unwrap();
        assert_eq!(json["userName"], "jdoe");
        assert_eq!(json["rememberMe"], true);
    }

    #[test]
    fn test_login_response_validation() {
        let ok = LoginResponse { token: "t".into(), role: "Admin".into() };
        assert_eq!(ok.validate(), Ok(Role::Admin));
        let missing = LoginResponse { token: "t".into(), role: String::new() };
        assert!(missing.validate().is_err());
    }
}
