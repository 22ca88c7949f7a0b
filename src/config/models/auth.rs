//! Account lifecycle configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Free-trial window length in days
    #[serde(default = "default_trial_days")]
    pub trial_days: u32,
    /// Password rules applied at signup
    #[serde(default)]
    pub password_policy: PasswordPolicy,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            trial_days: default_trial_days(),
            password_policy: PasswordPolicy::default(),
        }
    }
}

/// Password rules
///
/// The default only enforces a minimum length of 6, matching what account
/// creation has always accepted. [`PasswordPolicy::strict`] is the rule set
/// the signup form shows to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters
    pub min_length: usize,
    /// Require at least one uppercase letter
    pub require_uppercase: bool,
    /// Require at least one lowercase letter
    pub require_lowercase: bool,
    /// Require at least one digit
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
        }
    }
}

impl PasswordPolicy {
    /// Signup-form rules: 8+ characters with upper, lower and digit
    pub fn strict() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
        }
    }

    /// Check a password, returning the message for the first violated rule
    pub fn check(&self, password: &str) -> Result<(), String> {
        if password.chars().count() < self.min_length {
            return Err(format!(
                "Password must be at least {} characters",
                self.min_length
            ));
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err("Password must contain at least one uppercase letter".to_string());
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err("Password must contain at least one lowercase letter".to_string());
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err("Password must contain at least one number".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_only_checks_length() {
        let policy = PasswordPolicy::default();
        assert!(policy.check("abcdef").is_ok());
        assert_eq!(
            policy.check("abc").unwrap_err(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_strict_policy() {
        let policy = PasswordPolicy::strict();
        assert!(policy.check("Passw0rdX").is_ok());
        assert_eq!(
            policy.check("password1").unwrap_err(),
            "Password must contain at least one uppercase letter"
        );
        assert_eq!(
            policy.check("PASSWORD1").unwrap_err(),
            "Password must contain at least one lowercase letter"
        );
        assert_eq!(
            policy.check("Password").unwrap_err(),
            "Password must contain at least one number"
        );
        assert_eq!(
            policy.check("Pw1").unwrap_err(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_policy_from_yaml_defaults_flags() {
        let policy: PasswordPolicy = serde_yaml::from_str("min_length: 10").unwrap();
        assert_eq!(policy.min_length, 10);
        assert!(!policy.require_digit);
    }
}
