/// Source of environment variables for configuration loading
///
/// Settings read through this trait instead of `std::env` so tests can supply
/// their own values without touching the process environment, which parallel
/// tests would otherwise race on.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of variables for tests
#[cfg(test)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn new(vars: std::collections::HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn empty() -> Self {
        Self::new(std::collections::HashMap::new())
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_environment_provider() {
        unsafe {
            std::env::set_var("WEARHOUSE_TEST_VAR_12345", "test_value");
        }

        assert_eq!(
            SystemEnvironment.get_var("WEARHOUSE_TEST_VAR_12345"),
            Some("test_value".to_string())
        );
        assert_eq!(SystemEnvironment.get_var("WEARHOUSE_UNSET_VAR_98765"), None);

        unsafe {
            std::env::remove_var("WEARHOUSE_TEST_VAR_12345");
        }
    }

    #[test]
    fn test_mock_environment_provider() {
        let provider = MockEnvironment::empty()
            .with_var("USER_STORE", "file")
            .with_vars(&[("PORT", "8080"), ("HOST", "127.0.0.1")]);

        assert_eq!(provider.get_var("USER_STORE"), Some("file".to_string()));
        assert_eq!(provider.get_var("PORT"), Some("8080".to_string()));
        assert_eq!(provider.get_var("HOST"), Some("127.0.0.1".to_string()));
        assert_eq!(provider.get_var("USERS_FILE"), None);
    }
}
