use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use arbor_refs::{CommitHash, InMemoryReferenceStore, Reference};

/// Settings for an `arbor` session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ArborConfig {
    pub default_branch: String,
    pub default_hash: String,
    pub output: OutputConfig,
    pub references: Vec<Reference>,
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            default_branch: "main".into(),
            default_hash: "0".repeat(64),
            output: OutputConfig::default(),
            references: Vec::new(),
        }
    }
}

/// Output defaults; command-line flags can only turn these on.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
    pub verbose: bool,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            verbose: false,
            color: true,
        }
    }
}

impl ArborConfig {
    /// Read a config file, or fall back to defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Build the session's reference store from the configured seed.
    pub fn build_store(&self) -> anyhow::Result<InMemoryReferenceStore> {
        let head = CommitHash::parse(&self.default_hash).context("default_hash")?;
        let store = InMemoryReferenceStore::with_default_branch(&self.default_branch, head)?;
        for reference in &self.references {
            store
                .insert(reference.clone())
                .with_context(|| format!("seeding reference {}", reference.name))?;
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_refs::ReferenceStore;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ArborConfig::default();
        assert_eq!(c.default_branch, "main");
        assert_eq!(c.default_hash.len(), 64);
        assert!(c.output.color);
        assert!(!c.output.json);
        assert!(c.references.is_empty());
    }

    #[test]
    fn load_without_path_uses_defaults() {
        let c = ArborConfig::load(None).unwrap();
        assert_eq!(c.default_branch, "main");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
default_branch = "trunk"
default_hash = "aaaa"

[output]
verbose = true

[[references]]
name = "v1"
kind = "TAG"
hash = "cccc"
"#
        )
        .unwrap();

        let c = ArborConfig::load(Some(file.path())).unwrap();
        assert_eq!(c.default_branch, "trunk");
        assert!(c.output.verbose);
        assert!(c.output.color);

        let store = c.build_store().unwrap();
        assert_eq!(store.default_branch().unwrap(), "trunk");
        assert!(store.get_reference("v1").unwrap().is_tag());
        assert_eq!(store.list_references().unwrap().len(), 2);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ArborConfig::load(Some(dir.path().join("nope.toml").as_path())).is_err());
    }

    #[test]
    fn seeding_default_branch_as_tag_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
default_hash = "aaaa"

[[references]]
name = "main"
kind = "TAG"
hash = "bbbb"
"#
        )
        .unwrap();

        let c = ArborConfig::load(Some(file.path())).unwrap();
        let err = c.build_store().unwrap_err();
        assert!(format!("{err:#}").contains("seeding reference main"));
    }

    #[test]
    fn bad_default_hash_fails_to_build() {
        let c = ArborConfig {
            default_hash: "xyz".into(),
            ..ArborConfig::default()
        };
        assert!(c.build_store().is_err());
    }
}
