//! Admin credential checks.
//!
//! Credentials come from configuration and are fixed for the lifetime of the
//! process. The ledger itself never sees them: the REST layer asks this
//! service before calling a protected operation.

use tracing::{info, warn};

/// Admin username and password, as loaded from configuration
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AdminAuthService {
    credentials: AdminCredentials,
}

impl AdminAuthService {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }

    /// Check an admin login attempt
    pub fn login(&self, username: &str, password: &str) -> bool {
        let ok = username == self.credentials.username && password == self.credentials.password;
        if ok {
            info!("Admin login succeeded for '{}'", username);
        } else {
            warn!("Admin login failed for '{}'", username);
        }
        ok
    }

    /// Check the password a caller supplied to confirm a destructive operation
    pub fn confirm_deletion(&self, password: Option<&str>) -> bool {
        let ok = password == Some(self.credentials.password.as_str());
        if !ok {
            warn!("Deletion confirmation rejected");
        }
        ok
    }
}
