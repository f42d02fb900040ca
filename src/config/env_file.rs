use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const SEARCH_API_KEY: &str = "SEARCH_API_KEY";
pub const SEARCH_CONTEXT_ID: &str = "SEARCH_CONTEXT_ID";
pub const LLM_API_KEY: &str = "LLM_API_KEY";

/// API credentials, resolved once at startup and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub search_api_key: String,
    pub search_context_id: String,
    pub llm_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("search_api_key", &"<redacted>")
            .field("search_context_id", &self.search_context_id)
            .field("llm_api_key", &"<redacted>")
            .finish()
    }
}

/// Parses an env file without touching the process environment. A missing
/// file reads as empty.
pub fn read_env_file<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No env file at {}", path.display());
        return Ok(HashMap::new());
    }

    let mut vars = HashMap::new();
    for entry in dotenv::from_path_iter(path)? {
        let (key, value) = entry?;
        vars.insert(key, value);
    }
    tracing::debug!("Read {} variables from {}", vars.len(), path.display());
    Ok(vars)
}

impl Credentials {
    /// File values win over the process environment. The LLM key is taken
    /// from the file only; a value already in the environment is ignored.
    pub fn resolve<F>(file_vars: &HashMap<String, String>, process_env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_file_or_env =
            |key: &str| file_vars.get(key).cloned().or_else(|| process_env(key));

        let search_api_key = from_file_or_env(SEARCH_API_KEY);
        let search_context_id = from_file_or_env(SEARCH_CONTEXT_ID);
        let llm_api_key = file_vars.get(LLM_API_KEY).cloned();

        Ok(Self {
            search_api_key: validate_required_field(SEARCH_API_KEY, &search_api_key)?.clone(),
            search_context_id: validate_required_field(SEARCH_CONTEXT_ID, &search_context_id)?
                .clone(),
            llm_api_key: validate_required_field(LLM_API_KEY, &llm_api_key)?.clone(),
        })
    }

    pub fn load<P: AsRef<Path>>(env_file: P) -> Result<Self> {
        let file_vars = read_env_file(env_file)?;
        Self::resolve(&file_vars, |key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PulseError;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_file_values_override_environment() {
        let file = vars(&[
            (SEARCH_API_KEY, "file-key"),
            (SEARCH_CONTEXT_ID, "file-cx"),
            (LLM_API_KEY, "file-llm"),
        ]);
        let creds = Credentials::resolve(&file, |_| Some("env".to_string())).unwrap();
        assert_eq!(creds.search_api_key, "file-key");
        assert_eq!(creds.search_context_id, "file-cx");
        assert_eq!(creds.llm_api_key, "file-llm");
    }

    #[test]
    fn test_search_values_fall_back_to_environment() {
        let file = vars(&[(LLM_API_KEY, "file-llm")]);
        let creds = Credentials::resolve(&file, |key| Some(format!("env-{}", key))).unwrap();
        assert_eq!(creds.search_api_key, "env-SEARCH_API_KEY");
        assert_eq!(creds.search_context_id, "env-SEARCH_CONTEXT_ID");
    }

    #[test]
    fn test_llm_key_from_environment_is_ignored() {
        let file = vars(&[(SEARCH_API_KEY, "k"), (SEARCH_CONTEXT_ID, "cx")]);
        let err = Credentials::resolve(&file, |_| Some("stale".to_string())).unwrap_err();
        assert!(matches!(err, PulseError::MissingConfigError { field } if field == LLM_API_KEY));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let creds = Credentials {
            search_api_key: "secret-1".into(),
            search_context_id: "cx".into(),
            llm_api_key: "secret-2".into(),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("cx"));
    }

    #[test]
    fn test_missing_env_file_reads_empty() {
        let vars = read_env_file("/nonexistent/dir/.env").unwrap();
        assert!(vars.is_empty());
    }
}
