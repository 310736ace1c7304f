// crates/core/src/auth.rs
//! Single-user credential check against the configured username/password.

use subtle::ConstantTimeEq;

/// The one username/password pair allowed to log in.
///
/// Either half may be unconfigured, in which case no login can succeed.
#[derive(Clone, Default)]
pub struct Credentials {
    username: Option<String>,
    password: Option<String>,
}

impl Credentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    /// Whether both halves are configured.
    pub fn is_configured(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Exact comparison of both fields. Both are always compared so the
    /// result does not reveal which one was wrong.
    pub fn check(&self, username: &str, password: &str) -> bool {
        let (Some(expected_user), Some(expected_pass)) = (&self.username, &self.password) else {
            return false;
        };
        let user_ok = expected_user.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = expected_pass.as_bytes().ct_eq(password.as_bytes());
        (user_ok & pass_ok).into()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Credentials {
        Credentials::new(Some("admin".into()), Some("secret".into()))
    }

    #[test]
    fn test_correct_credentials() {
        assert!(admin().check("admin", "secret"));
    }

    #[test]
    fn test_wrong_password() {
        assert!(!admin().check("admin", "Secret"));
        assert!(!admin().check("admin", ""));
    }

    #[test]
    fn test_wrong_username() {
        assert!(!admin().check("root", "secret"));
        assert!(!admin().check("admin ", "secret"));
    }

    #[test]
    fn test_unconfigured_never_matches() {
        let creds = Credentials::new(None, Some("secret".into()));
        assert!(!creds.is_configured());
        assert!(!creds.check("", "secret"));
        assert!(!Credentials::default().check("", ""));
    }

    #[test]
    fn test_debug_redacts_password() {
        let dbg = format!("{:?}", admin());
        assert!(dbg.contains("admin"));
        assert!(!dbg.contains("secret"));
    }
}
