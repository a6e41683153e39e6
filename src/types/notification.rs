use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validation::{check_max_len, check_required, MESSAGE_MAX};

/// Body of the admin `POST /notifications`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RNotificationCreate {
    pub user_id: i32,
    pub message: String,
}

impl RNotificationCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        check_required("message", &self.message)?;
        check_max_len("message", Some(&self.message), MESSAGE_MAX)
    }
}
