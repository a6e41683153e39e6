use serde::{Deserialize, Serialize};

/// Claims carried by every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub is_admin: bool,
    pub iat: i64,
    pub exp: i64,
}
