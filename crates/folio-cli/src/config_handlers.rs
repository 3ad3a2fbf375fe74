//! `folio config` subcommands.

use crate::cli::ConfigAction;
use crate::config::{FolioConfig, scalar_text};
use folio_core::{Error, Result};
use std::path::PathBuf;

// ============================================================================
// Command dispatch
// ============================================================================

/// Run one `folio config` action.
///
/// Takes the `--config` flag rather than a loaded [`FolioConfig`]: `path` and
/// `init` must work when no file exists yet.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => {
            println!("{}", cmd_config_get(config_path, &key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let path = cmd_config_set(config_path, &key, &value)?;
            println!("Set {key} = {value} in {}", path.display());
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
        ConfigAction::Export { docker_env } => {
            let config = FolioConfig::load(config_path)?;
            for line in export_lines(&config, docker_env)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = FolioConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("No config directory on this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(not created yet; `folio config init` writes the defaults there)");
    }
    Ok(())
}

/// Effective value of a dotted key, file and environment applied.
fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let tree = FolioConfig::load(config_path)?.to_toml_value()?;
    lookup(&tree, key)
        .map(scalar_text)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<PathBuf> {
    let mut file = ConfigFile::open(config_path)?;
    file.assign(key, value)?;
    file.save()?;
    Ok(file.path)
}

fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = file
        .map(PathBuf::from)
        .or_else(FolioConfig::default_config_path)
        .ok_or_else(|| Error::config("No config directory on this platform"))?;

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    std::fs::write(&path, FolioConfig::default().to_toml_string()?)
        .map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// Configuration as `KEY=value` lines, or Docker `--env` flags.
fn export_lines(config: &FolioConfig, docker_env: bool) -> Result<Vec<String>> {
    let flag = if docker_env { "--env " } else { "" };
    Ok(config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| format!("{flag}{key}={value}"))
        .collect())
}

// ============================================================================
// Config file editing
// ============================================================================

/// An existing config file held as a TOML tree while it is edited.
struct ConfigFile {
    path: PathBuf,
    doc: toml::Value,
}

impl ConfigFile {
    fn open(config_path: Option<&str>) -> Result<Self> {
        let path = FolioConfig::resolve_config_path(config_path)
            .ok_or_else(|| Error::config("No config directory on this platform"))?;
        if !path.exists() {
            return Err(Error::config(format!(
                "Config file does not exist at {}. Run `folio config init` first.",
                path.display()
            )));
        }
        let text = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let doc = toml::from_str(&text)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(Self { path, doc })
    }

    /// Store `text` at `key`, typed the way the config expects.
    ///
    /// The inferred scalar is tried first and the plain string second, so
    /// `404` stays a string where a string is wanted. The tree is unchanged
    /// when neither reading yields a valid [`FolioConfig`].
    fn assign(&mut self, key: &str, text: &str) -> Result<()> {
        let mut first_error = None;
        for candidate in [infer_scalar(text), toml::Value::String(text.to_string())] {
            let mut doc = self.doc.clone();
            insert(&mut doc, key, candidate)?;
            let rendered = toml::to_string(&doc).map_err(|e| Error::config(e.to_string()))?;
            match toml::from_str::<FolioConfig>(&rendered) {
                Ok(_) => {
                    self.doc = doc;
                    return Ok(());
                }
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        let reason = first_error.map(|e| e.to_string()).unwrap_or_default();
        Err(Error::config(format!("Invalid value for '{key}': {reason}")))
    }

    fn save(&self) -> Result<()> {
        let text = toml::to_string_pretty(&self.doc).map_err(|e| Error::config(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| Error::io_with_path(e, &self.path))
    }
}

// ============================================================================
// Dotted keys
// ============================================================================

fn lookup<'a>(tree: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(tree, |node, part| node.as_table()?.get(part))
}

/// Insert `value` at a dotted key, adding missing tables on the way.
fn insert(tree: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(Error::config(format!("Malformed key '{key}'")));
    }

    let mut node = tree;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        node = node
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("'{key}' runs through a non-table value")))?
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }
    node.as_table_mut()
        .ok_or_else(|| Error::config(format!("'{key}' runs through a non-table value")))?
        .insert(leaf.to_string(), value);
    Ok(())
}

/// Best-guess TOML scalar for command-line text.
fn infer_scalar(text: &str) -> toml::Value {
    if let Ok(b) = text.parse::<bool>() {
        toml::Value::Boolean(b)
    } else if let Ok(i) = text.parse::<i64>() {
        toml::Value::Integer(i)
    } else if let Ok(f) = text.parse::<f64>() {
        toml::Value::Float(f)
    } else {
        toml::Value::String(text.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
