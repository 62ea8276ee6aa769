//! User profile record
//!
//! A profile owns its identity fields, a password digest, a couple of flags
//! and an append-only activity log. Every mutating operation appends exactly
//! one entry to the log. Deleting a profile drops the identity fields but
//! keeps the flags and the log readable.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::email::is_valid_email;
use super::result::{Error, Result};
use super::visibility::Visibility;
use crate::ports::{CredentialHasher, Logger, NotificationGateway};

/// Collaborators injected into every profile
#[derive(Clone)]
pub struct Collaborators {
    pub logger: Arc<dyn Logger>,
    pub hasher: Arc<dyn CredentialHasher>,
    pub gateway: Arc<dyn NotificationGateway>,
}

impl Collaborators {
    pub fn new(
        logger: Arc<dyn Logger>,
        hasher: Arc<dyn CredentialHasher>,
        gateway: Arc<dyn NotificationGateway>,
    ) -> Self {
        Self {
            logger,
            hasher,
            gateway,
        }
    }
}

/// Identity data that only exists while the profile is active
#[derive(Debug, Clone)]
struct Identity {
    username: String,
    email: String,
    age: u32,
    credential_hash: String,
}

#[derive(Debug, Clone)]
enum ProfileState {
    Active(Identity),
    Deleted,
}

/// Optional changes applied by [`ProfileRecord::update`]
///
/// `None` means "leave as is". An empty username or email is treated the
/// same as `None`; an age of `0` is applied.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub age: Option<u32>,
    pub email: Option<String>,
    pub username: Option<String>,
    /// Raw visibility name; values other than `public`/`private` are ignored
    pub visibility: Option<String>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }
}

/// Plain view of every field of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub username: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub credential_hash: Option<String>,
    pub verified: bool,
    pub visibility: Visibility,
    pub two_factor_enabled: bool,
    pub deleted: bool,
    pub activity_log: Vec<String>,
}

/// A user profile
pub struct ProfileRecord {
    state: ProfileState,
    verified: bool,
    visibility: Visibility,
    two_factor_enabled: bool,
    activity_log: Vec<String>,
    collaborators: Collaborators,
}

impl ProfileRecord {
    /// Create a profile
    ///
    /// Fails with [`Error::InvalidEmail`] when `email` does not pass
    /// [`is_valid_email`]. The activity log starts empty.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        age: u32,
        password: &str,
        collaborators: Collaborators,
    ) -> Result<Self> {
        let username = username.into();
        let email = email.into();

        check_email(collaborators.logger.as_ref(), &email)?;
        let credential_hash = collaborators.hasher.hash(password)?;

        collaborators.logger.info(&format!(
            "User profile created for {} with email {}.",
            username, email
        ));

        Ok(Self {
            state: ProfileState::Active(Identity {
                username,
                email,
                age,
                credential_hash,
            }),
            verified: false,
            visibility: Visibility::default(),
            two_factor_enabled: false,
            activity_log: Vec::new(),
            collaborators,
        })
    }

    pub fn username(&self) -> Option<&str> {
        self.identity().map(|i| i.username.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.identity().map(|i| i.email.as_str())
    }

    pub fn age(&self) -> Option<u32> {
        self.identity().map(|i| i.age)
    }

    pub fn credential_hash(&self) -> Option<&str> {
        self.identity().map(|i| i.credential_hash.as_str())
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn two_factor_enabled(&self) -> bool {
        self.two_factor_enabled
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self.state, ProfileState::Deleted)
    }

    pub fn activity_log(&self) -> &[String] {
        &self.activity_log
    }

    /// Validate and store a new email address
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        if self.is_deleted() {
            return Err(Error::ProfileDeleted);
        }

        let email = email.into();
        check_email(self.collaborators.logger.as_ref(), &email)?;

        self.identity_mut()?.email = email;
        self.activity_log.push("Email updated.".to_string());
        Ok(())
    }

    /// Replace the stored password digest
    pub fn set_password(&mut self, password: &str) -> Result<()> {
        if self.is_deleted() {
            return Err(Error::ProfileDeleted);
        }

        let digest = self.collaborators.hasher.hash(password)?;

        self.identity_mut()?.credential_hash = digest;
        self.activity_log.push("Password updated.".to_string());
        self.collaborators.logger.info("Password for user updated.");
        Ok(())
    }

    /// Check `password` against the stored digest
    pub fn verify_password(&self, password: &str) -> Result<bool> {
        let identity = self.identity().ok_or(Error::ProfileDeleted)?;
        self.collaborators
            .hasher
            .verify(password, &identity.credential_hash)
    }

    /// Mark the profile verified and ask the gateway for a verification code
    ///
    /// The profile is marked verified before the gateway is called, so it
    /// stays verified even when the gateway fails. The code is returned and
    /// not kept.
    pub fn send_verification_email(&mut self) -> Result<i64> {
        let email = self
            .identity()
            .ok_or(Error::ProfileDeleted)?
            .email
            .clone();

        self.verified = true;
        self.activity_log.push("Verification email sent.".to_string());

        let code = self.collaborators.gateway.issue_code(&email)?;
        self.collaborators.logger.info(&format!(
            "{} --- Verification email sent to {}",
            code, email
        ));
        Ok(code)
    }

    /// Apply a set of optional changes
    ///
    /// The email, when present, is validated before anything else is touched,
    /// so a rejected email leaves the profile unchanged. Appends a single
    /// activity entry no matter which fields changed.
    pub fn update(&mut self, changes: ProfileUpdate) -> Result<()> {
        if self.is_deleted() {
            return Err(Error::ProfileDeleted);
        }

        let email = changes.email.filter(|e| !e.is_empty());
        if let Some(email) = &email {
            check_email(self.collaborators.logger.as_ref(), email)?;
        }

        if let Some(visibility) = changes.visibility.as_deref().and_then(Visibility::parse) {
            self.visibility = visibility;
        }

        let identity = self.identity_mut()?;
        if let Some(email) = email {
            identity.email = email;
        }
        if let Some(username) = changes.username.filter(|u| !u.is_empty()) {
            identity.username = username;
        }
        if let Some(age) = changes.age {
            identity.age = age;
        }
        let username = identity.username.clone();

        self.activity_log.push("User profile updated.".to_string());
        self.collaborators.logger.info(&format!(
            "User profile for {} updated with new details.",
            username
        ));
        Ok(())
    }

    /// Turn on two-factor authentication
    pub fn enable_two_factor(&mut self) -> Result<()> {
        if self.is_deleted() {
            return Err(Error::ProfileDeleted);
        }

        self.two_factor_enabled = true;
        self.activity_log.push("2FA enabled.".to_string());
        self.collaborators
            .logger
            .info("Two-factor authentication enabled.");
        Ok(())
    }

    /// Drop the identity fields; the profile cannot be used afterwards
    pub fn delete(&mut self) -> Result<()> {
        let username = self.identity().ok_or(Error::ProfileDeleted)?.username.clone();

        self.collaborators
            .logger
            .info(&format!("Deleting user profile for {}.", username));
        self.state = ProfileState::Deleted;
        self.activity_log.push("User profile deleted.".to_string());
        Ok(())
    }

    /// Copy every field into a serializable view
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            username: self.username().map(str::to_string),
            email: self.email().map(str::to_string),
            age: self.age(),
            credential_hash: self.credential_hash().map(str::to_string),
            verified: self.verified,
            visibility: self.visibility,
            two_factor_enabled: self.two_factor_enabled,
            deleted: self.is_deleted(),
            activity_log: self.activity_log.clone(),
        }
    }

    fn identity(&self) -> Option<&Identity> {
        match &self.state {
            ProfileState::Active(identity) => Some(identity),
            ProfileState::Deleted => None,
        }
    }

    fn identity_mut(&mut self) -> Result<&mut Identity> {
        match &mut self.state {
            ProfileState::Active(identity) => Ok(identity),
            ProfileState::Deleted => Err(Error::ProfileDeleted),
        }
    }
}

impl fmt::Debug for ProfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileRecord")
            .field("username", &self.username())
            .field("email", &self.email())
            .field("age", &self.age())
            .field("verified", &self.verified)
            .field("visibility", &self.visibility)
            .field("two_factor_enabled", &self.two_factor_enabled)
            .field("deleted", &self.is_deleted())
            .field("activity_log", &self.activity_log)
            .finish_non_exhaustive()
    }
}

/// Run the shape check, logging rejected values
fn check_email(logger: &dyn Logger, email: &str) -> Result<()> {
    if !is_valid_email(email) {
        logger.error(&format!("Invalid email attempt: {}", email));
        return Err(Error::invalid_email(email));
    }
    logger.info(&format!("Email for user set to {}.", email));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::adapters::{MemoryLogger, Sha256Hasher};

    /// Gateway returning queued results in order
    struct ScriptedGateway {
        responses: Mutex<Vec<Result<i64>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(mut responses: Vec<Result<i64>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl NotificationGateway for ScriptedGateway {
        fn name(&self) -> &str {
            "scripted"
        }

        fn issue_code(&self, email: &str) -> Result<i64> {
            self.calls.lock().unwrap().push(email.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(Error::gateway("no scripted response")))
        }
    }

    fn collaborators(
        gateway: Arc<ScriptedGateway>,
    ) -> (Collaborators, Arc<MemoryLogger>) {
        let logger = Arc::new(MemoryLogger::new());
        let collaborators =
            Collaborators::new(logger.clone(), Arc::new(Sha256Hasher::new()), gateway);
        (collaborators, logger)
    }

    fn test_profile() -> (ProfileRecord, Arc<MemoryLogger>) {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(1)]));
        let (collaborators, logger) = collaborators(gateway);
        let profile =
            ProfileRecord::new("testuser", "test@example.com", 25, "securepassword", collaborators)
                .unwrap();
        (profile, logger)
    }

    #[test]
    fn test_new_profile_defaults() {
        let (profile, logger) = test_profile();

        assert_eq!(profile.username(), Some("testuser"));
        assert_eq!(profile.email(), Some("test@example.com"));
        assert_eq!(profile.age(), Some(25));
        assert!(!profile.is_verified());
        assert!(!profile.two_factor_enabled());
        assert_eq!(profile.visibility(), Visibility::Private);
        assert!(profile.activity_log().is_empty());
        assert!(logger
            .infos()
            .contains(&"User profile created for testuser with email test@example.com.".to_string()));
    }

    #[test]
    fn test_new_rejects_invalid_email() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let (collaborators, logger) = collaborators(gateway);

        let err = ProfileRecord::new("u", "not-an-email", 30, "pw", collaborators).unwrap_err();
        assert!(matches!(err, Error::InvalidEmail(ref v) if v == "not-an-email"));
        assert_eq!(logger.errors(), vec!["Invalid email attempt: not-an-email".to_string()]);
    }

    #[test]
    fn test_password_is_never_stored_in_plaintext() {
        let (profile, _) = test_profile();
        let hash = profile.credential_hash().unwrap();
        assert_ne!(hash, "securepassword");
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_set_email_validates_and_logs_activity() {
        let (mut profile, _) = test_profile();

        profile.set_email("new@example.com").unwrap();
        assert_eq!(profile.email(), Some("new@example.com"));
        assert_eq!(profile.activity_log(), ["Email updated."]);

        let err = profile.set_email("user@nodotcom").unwrap_err();
        assert!(matches!(err, Error::InvalidEmail(_)));
        assert_eq!(profile.email(), Some("new@example.com"));
        assert_eq!(profile.activity_log().len(), 1);
    }

    #[test]
    fn test_set_and_verify_password() {
        let (mut profile, _) = test_profile();
        assert!(profile.verify_password("securepassword").unwrap());
        assert!(!profile.verify_password("wrongpassword").unwrap());

        profile.set_password("newsecurepassword").unwrap();
        assert!(profile.verify_password("newsecurepassword").unwrap());
        assert!(!profile.verify_password("securepassword").unwrap());
        assert_eq!(profile.activity_log(), ["Password updated."]);
    }

    #[test]
    fn test_update_visibility() {
        let (mut profile, _) = test_profile();

        profile
            .update(ProfileUpdate::new().with_visibility("public"))
            .unwrap();
        assert_eq!(profile.visibility(), Visibility::Public);

        profile
            .update(ProfileUpdate::new().with_visibility("bogus"))
            .unwrap();
        assert_eq!(profile.visibility(), Visibility::Public);
        assert_eq!(profile.activity_log().len(), 2);
    }

    #[test]
    fn test_update_all_fields() {
        let (mut profile, logger) = test_profile();

        profile
            .update(
                ProfileUpdate::new()
                    .with_username("user2")
                    .with_email("user2@example.com")
                    .with_age(22)
                    .with_visibility("public"),
            )
            .unwrap();

        assert_eq!(profile.username(), Some("user2"));
        assert_eq!(profile.email(), Some("user2@example.com"));
        assert_eq!(profile.age(), Some(22));
        assert_eq!(profile.visibility(), Visibility::Public);
        assert_eq!(profile.activity_log(), ["User profile updated."]);
        assert!(logger
            .infos()
            .contains(&"User profile for user2 updated with new details.".to_string()));
    }

    #[test]
    fn test_update_empty_values_mean_no_change() {
        let (mut profile, _) = test_profile();

        profile
            .update(ProfileUpdate::new().with_username("").with_email(""))
            .unwrap();
        assert_eq!(profile.username(), Some("testuser"));
        assert_eq!(profile.email(), Some("test@example.com"));

        profile.update(ProfileUpdate::new().with_age(0)).unwrap();
        assert_eq!(profile.age(), Some(0));
    }

    #[test]
    fn test_update_with_invalid_email_changes_nothing() {
        let (mut profile, _) = test_profile();

        let err = profile
            .update(
                ProfileUpdate::new()
                    .with_visibility("public")
                    .with_username("other")
                    .with_email("invalidemail"),
            )
            .unwrap_err();

        assert!(matches!(err, Error::InvalidEmail(_)));
        assert_eq!(profile.visibility(), Visibility::Private);
        assert_eq!(profile.username(), Some("testuser"));
        assert!(profile.activity_log().is_empty());
    }

    #[test]
    fn test_send_verification_email_returns_code() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(42)]));
        let (collaborators, logger) = collaborators(gateway.clone());
        let mut profile =
            ProfileRecord::new("asd", "asd@gmail.com", 25, "1234", collaborators).unwrap();

        let code = profile.send_verification_email().unwrap();

        assert_eq!(code, 42);
        assert!(profile.is_verified());
        assert_eq!(profile.activity_log(), ["Verification email sent."]);
        assert_eq!(*gateway.calls.lock().unwrap(), vec!["asd@gmail.com".to_string()]);
        assert!(logger
            .infos()
            .contains(&"42 --- Verification email sent to asd@gmail.com".to_string()));
    }

    #[test]
    fn test_gateway_failure_propagates() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(Error::gateway("HTTP 503"))]));
        let (collaborators, _) = collaborators(gateway);
        let mut profile =
            ProfileRecord::new("asd", "asd@gmail.com", 25, "1234", collaborators).unwrap();

        let err = profile.send_verification_email().unwrap_err();
        assert!(matches!(err, Error::Gateway(_)));
        // Marked before the call, not rolled back
        assert!(profile.is_verified());
        assert_eq!(profile.activity_log(), ["Verification email sent."]);
    }

    #[test]
    fn test_enable_two_factor() {
        let (mut profile, logger) = test_profile();

        profile.enable_two_factor().unwrap();
        assert!(profile.two_factor_enabled());
        assert_eq!(profile.activity_log(), ["2FA enabled."]);
        assert!(logger
            .infos()
            .contains(&"Two-factor authentication enabled.".to_string()));
    }

    #[test]
    fn test_delete_clears_identity() {
        let (mut profile, logger) = test_profile();

        profile.delete().unwrap();

        assert!(profile.is_deleted());
        assert_eq!(profile.username(), None);
        assert_eq!(profile.email(), None);
        assert_eq!(profile.age(), None);
        assert_eq!(profile.credential_hash(), None);
        assert_eq!(profile.activity_log(), ["User profile deleted."]);
        assert!(logger
            .infos()
            .contains(&"Deleting user profile for testuser.".to_string()));
    }

    #[test]
    fn test_operations_after_delete_fail() {
        let (mut profile, _) = test_profile();
        profile.delete().unwrap();

        assert!(matches!(profile.set_password("x"), Err(Error::ProfileDeleted)));
        assert!(matches!(profile.verify_password("x"), Err(Error::ProfileDeleted)));
        assert!(matches!(profile.set_email("a@b.cd"), Err(Error::ProfileDeleted)));
        assert!(matches!(profile.update(ProfileUpdate::new()), Err(Error::ProfileDeleted)));
        assert!(matches!(profile.send_verification_email(), Err(Error::ProfileDeleted)));
        assert!(matches!(profile.enable_two_factor(), Err(Error::ProfileDeleted)));
        assert!(matches!(profile.delete(), Err(Error::ProfileDeleted)));
        assert_eq!(profile.activity_log().len(), 1);
    }

    #[test]
    fn test_snapshot_after_delete() {
        let (mut profile, _) = test_profile();
        profile.enable_two_factor().unwrap();
        profile.delete().unwrap();

        let snapshot = profile.snapshot();
        assert!(snapshot.deleted);
        assert!(snapshot.two_factor_enabled);
        assert!(snapshot.username.is_none());
        assert!(snapshot.credential_hash.is_none());
        assert_eq!(snapshot.activity_log, vec!["2FA enabled.", "User profile deleted."]);
    }

    #[test]
    fn test_snapshot_json_uses_camel_case_keys() {
        let (mut profile, _) = test_profile();
        profile.enable_two_factor().unwrap();

        let json = serde_json::to_value(profile.snapshot()).unwrap();
        assert_eq!(json["twoFactorEnabled"], true);
        assert_eq!(json["activityLog"][0], "2FA enabled.");
        assert!(json["credentialHash"].is_string());
        assert!(json.get("two_factor_enabled").is_none());
    }
}
