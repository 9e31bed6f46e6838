//! Signed-in user and their settings.
//!
//! Profile edits and settings changes stay in the session; nothing is written
//! back to the store.

use log::{debug, info};

use crate::db::{ColdStoreApi, RepositoryError, RepositoryResult};
use crate::models::{TemperatureUnit, User, UserPatch, UserRole, UserSettings};

#[derive(Debug, Clone, Default)]
pub struct Session {
    current_user: Option<User>,
    settings: UserSettings,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.settings.preferences.temperature_unit
    }

    /// Sign in as the user registered under `email`.
    ///
    /// On failure the previous user (if any) stays signed in.
    pub async fn sign_in(
        &mut self,
        api: &ColdStoreApi,
        email: &str,
        password: &str,
    ) -> RepositoryResult<&User> {
        let user = api.auth().login(email, password).await?;
        info!("Session: signed in as {}", user.email);
        Ok(&*self.current_user.insert(user))
    }

    /// Register a new account and sign in as it.
    ///
    /// `role` is the role label, e.g. `"operator"`.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If `role` is not a known label
    pub async fn sign_up(
        &mut self,
        api: &ColdStoreApi,
        email: &str,
        password: &str,
        name: &str,
        role: &str,
    ) -> RepositoryResult<&User> {
        let role: UserRole = role.parse().map_err(RepositoryError::ValidationError)?;
        let user = api.auth().register(email, password, name, role).await?;
        info!("Session: registered and signed in as {}", user.email);
        Ok(&*self.current_user.insert(user))
    }

    /// Forget the current user. Settings are kept.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!("Session: {} logged out", user.email);
        }
    }

    /// Merge a profile edit into the signed-in user.
    ///
    /// Returns `None` when nobody is signed in.
    pub fn update_profile(&mut self, patch: UserPatch) -> Option<&User> {
        let user = self.current_user.as_mut()?;
        debug!("Session: updating profile of {}", user.id);
        user.apply_patch(patch);
        Some(&*user)
    }

    pub fn update_settings(&mut self, settings: UserSettings) {
        debug!("Session: settings changed");
        self.settings = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{LatencyProfile, LocalRepository};
    use crate::models::Theme;

    fn api() -> ColdStoreApi {
        ColdStoreApi::new(LocalRepository::seeded(), LatencyProfile::disabled())
    }

    #[tokio::test]
    async fn test_sign_in_and_logout() {
        let api = api();
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        let user = session
            .sign_in(&api, "admin@example.com", "anything")
            .await
            .unwrap();
        assert_eq!(user.name, "Admin User");
        assert!(session.is_authenticated());

        session.logout();
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_previous_user() {
        let api = api();
        let mut session = Session::new();
        session
            .sign_in(&api, "manager@example.com", "pw")
            .await
            .unwrap();

        let err = session
            .sign_in(&api, "nobody@example.com", "pw")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(session.current_user().unwrap().email, "manager@example.com");
    }

    #[tokio::test]
    async fn test_sign_up_rejects_unknown_role() {
        let api = api();
        let mut session = Session::new();
        let err = session
            .sign_up(&api, "new@example.com", "pw", "New", "superuser")
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError(_)));
        assert!(!session.is_authenticated());

        let user = session
            .sign_up(&api, "new@example.com", "pw", "New", "operator")
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Operator);
        assert!(user.permissions.is_empty());
    }

    #[tokio::test]
    async fn test_profile_edit_stays_local() {
        let api = api();
        let mut session = Session::new();
        session
            .sign_in(&api, "admin@example.com", "pw")
            .await
            .unwrap();

        let patch = UserPatch {
            name: Some("Site Admin".to_string()),
            ..UserPatch::default()
        };
        assert_eq!(session.update_profile(patch).unwrap().name, "Site Admin");

        let stored = api
            .auth()
            .login("admin@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(stored.name, "Admin User");
    }

    #[test]
    fn test_update_profile_without_user() {
        let mut session = Session::new();
        assert!(session.update_profile(UserPatch::default()).is_none());
    }

    #[test]
    fn test_settings_survive_logout() {
        let mut session = Session::new();
        let mut settings = UserSettings::default();
        settings.preferences.theme = Theme::Dark;
        settings.preferences.temperature_unit = TemperatureUnit::Fahrenheit;
        session.update_settings(settings);
        session.logout();
        assert_eq!(session.settings().preferences.theme, Theme::Dark);
        assert_eq!(session.temperature_unit(), TemperatureUnit::Fahrenheit);
    }
}
