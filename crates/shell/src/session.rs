//! Signed-in state around the API handle.

use std::sync::{Mutex, PoisonError};

use quanngon_api::Api;
use quanngon_api::error::AuthError;
use quanngon_api::token::TokenStoreError;
use quanngon_api::types::UserProfile;
use tracing::{info, instrument, warn};

/// The session: the API handle plus the profile of whoever is signed in.
///
/// Constructed once at startup. The profile is only ever populated from
/// `GET /auth/me`, so it always reflects what the backend last said, not
/// what a form submitted.
#[derive(Debug)]
pub struct SessionShell {
    api: Api,
    user: Mutex<Option<UserProfile>>,
}

impl SessionShell {
    #[must_use]
    pub const fn new(api: Api) -> Self {
        Self {
            api,
            user: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn api(&self) -> &Api {
        &self.api
    }

    /// Restore the session from the stored token, run once at startup.
    ///
    /// No token means signed out without touching the network. A token
    /// that the backend rejects is stale and gets cleared, so the next
    /// start skips the probe too.
    #[instrument(skip(self))]
    pub async fn resume(&self) -> Option<UserProfile> {
        match self.api.tokens().get() {
            Ok(Some(_)) => {}
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "token store unreadable; starting signed out");
                return None;
            }
        }

        match self.api.auth().me().await {
            Ok(profile) => {
                *self.lock_user() = Some(profile.clone());
                Some(profile)
            }
            Err(e) => {
                info!(error = %e, "stored session is stale; signing out");
                if let Err(e) = self.api.auth().logout() {
                    warn!(error = %e, "failed to clear stale token");
                }
                *self.lock_user() = None;
                None
            }
        }
    }

    /// Log in and populate the profile in one step.
    ///
    /// # Errors
    ///
    /// `AuthError::Rejected` with the user-facing message on bad
    /// credentials; if the follow-up profile fetch fails, the fresh token
    /// is cleared again and that error is returned.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let auth = self.api.auth();
        auth.login(email, password).await?;

        match auth.me().await {
            Ok(profile) => {
                *self.lock_user() = Some(profile.clone());
                Ok(profile)
            }
            Err(e) => {
                // A token that cannot fetch its own profile is useless.
                if let Err(e) = auth.logout() {
                    warn!(error = %e, "failed to clear token after profile fetch failure");
                }
                *self.lock_user() = None;
                Err(e)
            }
        }
    }

    /// Drop the profile and the stored token. No network call.
    ///
    /// # Errors
    ///
    /// The profile is cleared even if the token store write fails.
    #[instrument(skip(self))]
    pub fn sign_out(&self) -> Result<(), TokenStoreError> {
        *self.lock_user() = None;
        self.api.auth().logout()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.lock_user().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock_user().is_some()
    }

    /// Role gate for the admin navigation and back-office commands.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.lock_user().as_ref().is_some_and(UserProfile::is_admin)
    }

    fn lock_user(&self) -> std::sync::MutexGuard<'_, Option<UserProfile>> {
        self.user.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
