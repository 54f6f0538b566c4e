//! Uniform outcome of mutating operations.

use crate::domain::Rejection;
use serde::{Deserialize, Serialize};

/// `{acknowledged, message}` result returned by insert, update, and delete.
///
/// Rejections never surface as errors; they come back here with
/// `acknowledged == false` and a message naming the reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledgement {
    pub acknowledged: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Acknowledgement {
    /// The operation was applied.
    pub fn accepted() -> Self {
        Self {
            acknowledged: true,
            message: None,
        }
    }

    /// The operation was refused for the given reason.
    pub fn rejected(reason: Rejection) -> Self {
        Self {
            acknowledged: false,
            message: Some(reason.message().to_string()),
        }
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}

impl From<Rejection> for Acknowledgement {
    fn from(reason: Rejection) -> Self {
        Self::rejected(reason)
    }
}
