use crate::adapters::memory::InMemoryLayoutRepository;
use crate::config::{ActiveModules, DEFAULT_CONFLICTING_MODULE, DEFAULT_VIEW_COOKIE};
use crate::domain::model::Layout;
use crate::utils::error::{PageContextError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContextConfig {
    #[serde(default)]
    pub modules: ModulesConfig,
    #[serde(default)]
    pub view_preference: ViewPreferenceConfig,
    #[serde(default)]
    pub layouts: Vec<Layout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    #[serde(default)]
    pub active: Vec<String>,
    #[serde(default = "default_conflicting_module")]
    pub conflicting: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewPreferenceConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_conflicting_module() -> String {
    DEFAULT_CONFLICTING_MODULE.to_string()
}

fn default_cookie_name() -> String {
    DEFAULT_VIEW_COOKIE.to_string()
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            conflicting: default_conflicting_module(),
        }
    }
}

impl Default for ViewPreferenceConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

impl PageContextConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PageContextError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ACTIVE_MODULE}); unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PageContextError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn active_modules(&self) -> ActiveModules {
        self.modules.active.iter().cloned().collect()
    }

    pub fn cookie_name(&self) -> &str {
        &self.view_preference.cookie_name
    }

    pub fn conflicting_module(&self) -> &str {
        &self.modules.conflicting
    }

    pub fn layout_repository(&self) -> InMemoryLayoutRepository {
        self.layouts.iter().cloned().collect()
    }
}

impl Validate for PageContextConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_cookie_name("view_preference.cookie_name", self.cookie_name())?;
        validation::validate_non_empty_string("modules.conflicting", self.conflicting_module())?;

        for layout in &self.layouts {
            validation::validate_positive_number("layouts.id", layout.id.0, 1)?;
        }
        validation::validate_unique("layouts.id", self.layouts.iter().map(|layout| layout.id))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LayoutId;
    use crate::domain::ports::LayoutRepository;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[modules]
active = ["FrameworkBundle", "NewsBundle"]

[view_preference]
cookie_name = "VIEW"

[[layouts]]
id = 1
name = "Desktop"

[[layouts]]
id = 5
name = "Mobile"
"#;

        let config = PageContextConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.cookie_name(), "VIEW");
        assert_eq!(config.conflicting_module(), DEFAULT_CONFLICTING_MODULE);
        assert!(config.active_modules().contains("NewsBundle"));
        assert_eq!(
            config.layout_repository().find_layout(LayoutId(5)),
            Some(Layout::new(5, "Mobile"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PageContextConfig::from_toml_str("").unwrap();

        assert_eq!(config.cookie_name(), DEFAULT_VIEW_COOKIE);
        assert_eq!(config.conflicting_module(), DEFAULT_CONFLICTING_MODULE);
        assert!(config.active_modules().is_empty());
        assert!(config.layouts.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PAGE_CONTEXT_TEST_MODULE", "ContaoMobilePageLayoutBundle");

        let toml_content = r#"
[modules]
active = ["${PAGE_CONTEXT_TEST_MODULE}", "${PAGE_CONTEXT_UNSET_VARIABLE}"]
"#;

        let config = PageContextConfig::from_toml_str(toml_content).unwrap();
        assert!(config
            .active_modules()
            .contains("ContaoMobilePageLayoutBundle"));
        assert!(config
            .active_modules()
            .contains("${PAGE_CONTEXT_UNSET_VARIABLE}"));

        std::env::remove_var("PAGE_CONTEXT_TEST_MODULE");
    }

    #[test]
    fn test_config_validation() {
        let bad_cookie = PageContextConfig::from_toml_str(
            r#"
[view_preference]
cookie_name = "TL VIEW"
"#,
        )
        .unwrap();
        assert!(bad_cookie.validate().is_err());

        let zero_layout = PageContextConfig::from_toml_str(
            r#"
[[layouts]]
id = 0
name = "Broken"
"#,
        )
        .unwrap();
        assert!(zero_layout.validate().is_err());

        let duplicate_layouts = PageContextConfig::from_toml_str(
            r#"
[[layouts]]
id = 3
name = "A"

[[layouts]]
id = 3
name = "B"
"#,
        )
        .unwrap();
        assert!(duplicate_layouts.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = PageContextConfig::from_toml_str("[modules\nactive = 1").unwrap_err();
        assert!(matches!(err, PageContextError::ConfigParseError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[modules]
active = ["ContaoMobilePageLayoutBundle"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = PageContextConfig::from_file(temp_file.path()).unwrap();
        assert!(config.active_modules().contains(DEFAULT_CONFLICTING_MODULE));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PageContextConfig::from_file("/nonexistent/page-context.toml").unwrap_err();
        assert!(matches!(err, PageContextError::IoError(_)));
    }
}
