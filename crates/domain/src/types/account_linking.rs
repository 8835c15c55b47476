//! Account linking types

use serde::{Deserialize, Serialize};

/// Response of `GET /me?fields=recipient&account_linking_token=...`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLinking {
    /// Page-scoped ID of the user who completed the linking flow
    #[serde(default)]
    pub recipient: String,
}

impl AccountLinking {
    pub fn into_psid(self) -> String {
        self.recipient
    }
}
