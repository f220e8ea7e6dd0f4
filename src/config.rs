use crate::error::{ReadabilityError, Result};
use crate::types::config::ReadabilityConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "readability.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".readability/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/llm-readability/config.toml";

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"[input]
# Extensions read as plain text; other files are scored as "(Unsupported file type)".
extensions = ["txt", "md"]
recursive = true

[thresholds]
# Exit with code 1 when any document scores below warn_below,
# and with code 2 when any document scores below fail_below.
warn_below = 45.0
fail_below = 25.0

[report]
format = "md"
"#;

pub fn load_config(root: &Path) -> Result<Option<ReadabilityConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges the global, repository and local layers, later layers winning.
/// Returns `None` when none of them exist.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ReadabilityConfig>> {
    let mut layers = Vec::new();
    if let Some(path) = global_path {
        layers.push(path.to_path_buf());
    }
    layers.push(root.join(DEFAULT_CONFIG_FILE));
    layers.push(root.join(DEFAULT_LOCAL_FILE));

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    for path in &layers {
        if merge_file_if_exists(&mut merged, path)? {
            tracing::debug!(path = %path.display(), "merged config layer");
            found = true;
        }
    }
    if !found {
        return Ok(None);
    }

    let cfg: ReadabilityConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ReadabilityError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

pub fn write_default_config(root: &Path, force: bool) -> Result<PathBuf> {
    let path = root.join(DEFAULT_CONFIG_FILE);
    if path.exists() && !force {
        return Err(ReadabilityError::ConfigExists(path.display().to_string()));
    }
    std::fs::create_dir_all(root)?;
    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(path)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ReadabilityError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_uses_global_layer_alone() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(
            &global_path,
            r#"
[report]
format = "sarif"
"#,
        )
        .expect("global config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global config should be found");
        assert_eq!(cfg.report_format(), Some(OutputFormat::Sarif));
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[thresholds]
warn_below = 50.0
fail_below = 20.0

[report]
format = "json"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[input]
extensions = ["txt"]

[thresholds]
warn_below = 40.0
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".readability"))
            .expect("local readability dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[input]
recursive = false
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.input.extensions, vec!["txt"]);
        assert!(!cfg.input.recursive);
        assert_eq!(cfg.thresholds().warn_below, Some(40.0));
        assert_eq!(cfg.thresholds().fail_below, Some(20.0));
        assert_eq!(cfg.report_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn load_config_rejects_invalid_merged_thresholds() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[thresholds]
warn_below = 20.0
fail_below = 30.0
"#,
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, ReadabilityError::ConfigParse(_)));
    }

    #[test]
    fn load_config_reports_malformed_toml_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[input\nextensions = ")
            .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn default_template_parses_and_validates() {
        let cfg: ReadabilityConfig =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.report_format(), Some(OutputFormat::Md));
    }

    #[test]
    fn write_default_config_refuses_to_overwrite_without_force() {
        let root = TempDir::new().expect("root temp dir should be created");
        let path = write_default_config(root.path(), false).expect("first write should succeed");
        assert!(path.exists());

        let err = write_default_config(root.path(), false).expect_err("second write should fail");
        assert!(matches!(err, ReadabilityError::ConfigExists(_)));

        write_default_config(root.path(), true).expect("forced write should succeed");
    }
}
