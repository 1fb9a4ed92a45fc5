//! Populates the embedded registry from a TOML description of the tree.
//!
//! Tables become sub-contexts and every other value becomes a leaf, in file order:
//!
//! ```toml
//! [java.comp.env]
//! mode = "dev"
//! retries = 3
//! optional = "@null"
//! ```

use anyhow::{Context, Result, bail};
use jview_naming::{EmbeddedRegistry, child_path};
use std::fs;
use std::path::Path;
use toml::{Table, Value};

/// String value that binds a null leaf.
pub(crate) const NULL_MARKER: &str = "@null";

/// Reads `path` and binds its contents; returns the number of leaves bound.
pub(crate) fn load_file(registry: &EmbeddedRegistry, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    load_str(registry, &content).with_context(|| format!("Invalid seed file {}", path.display()))
}

pub(crate) fn load_str(registry: &EmbeddedRegistry, content: &str) -> Result<usize> {
    let table: Table = toml::from_str(content).context("Seed is not valid TOML")?;
    let mut leaves = 0;
    populate(registry, "", &table, &mut leaves)?;
    Ok(leaves)
}

fn populate(
    registry: &EmbeddedRegistry,
    prefix: &str,
    table: &Table,
    leaves: &mut usize,
) -> Result<()> {
    for (name, value) in table {
        if name.contains('/') {
            bail!("Failed to bind {}: name '{name}' contains '/'", child_path(prefix, name));
        }
        let path = child_path(prefix, name);

        let bound = match value {
            Value::Table(inner) => {
                registry.create_subcontext(&path)?;
                populate(registry, &path, inner, leaves)?;
                continue;
            },
            Value::String(s) if s == NULL_MARKER => registry.bind_null(&path),
            Value::String(s) => registry.bind(&path, s.as_str()),
            Value::Integer(i) => registry.bind(&path, *i),
            Value::Float(f) => registry.bind(&path, *f),
            Value::Boolean(b) => registry.bind(&path, *b),
            Value::Datetime(dt) => registry.bind(&path, dt.to_string()),
            Value::Array(_) => registry.bind(&path, value.to_string()),
        };
        bound.with_context(|| format!("Failed to bind {path}"))?;
        *leaves += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jview_naming::{BoundValue, NamingDirectory, Resolved};

    #[test]
    fn tables_become_contexts_and_scalars_leaves() {
        let registry = EmbeddedRegistry::new();
        let leaves = load_str(
            &registry,
            "top = \"t\"\n\n[app]\nname = \"demo\"\nport = 8080\nratio = 0.25\nenabled = false\n\n[app.empty]\n",
        )
        .unwrap();

        assert_eq!(leaves, 5);
        let leaf = |path: &str| match registry.lookup(path).unwrap() {
            Resolved::Leaf(value) => value,
            Resolved::Context(_) => panic!("{path} is a context"),
        };
        assert_eq!(leaf("/top"), Some("t".into()));
        assert_eq!(leaf("/app/port"), Some(BoundValue::Integer(8080)));
        assert_eq!(leaf("/app/ratio"), Some(BoundValue::Float(0.25)));
        assert_eq!(leaf("/app/enabled"), Some(BoundValue::Boolean(false)));
        assert!(registry.lookup("/app/empty").unwrap().is_sub_context());
    }

    #[test]
    fn null_marker_binds_null_leaf() {
        let registry = EmbeddedRegistry::new();
        load_str(&registry, "[env]\noptional = \"@null\"\n").unwrap();

        assert_eq!(registry.lookup("/env/optional").unwrap(), Resolved::Leaf(None));
    }

    #[test]
    fn arrays_and_datetimes_are_stored_as_text() {
        let registry = EmbeddedRegistry::new();
        load_str(&registry, "hosts = [\"a\", \"b\"]\nsince = 1979-05-27\n").unwrap();

        let hosts = registry.lookup("/hosts").unwrap().display_value().unwrap();
        assert!(hosts.contains("\"a\"") && hosts.contains("\"b\""), "{hosts}");
        assert_eq!(registry.lookup("/since").unwrap().display_value().unwrap(), "1979-05-27");
    }

    #[test]
    fn file_order_is_kept() {
        let registry = EmbeddedRegistry::new();
        load_str(&registry, "zeta = 1\nalpha = 2\nmid = 3\n").unwrap();

        let names: Vec<_> = registry.list("").unwrap().into_iter().map(|b| b.name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let registry = EmbeddedRegistry::new();
        assert!(load_str(&registry, "[unclosed\n").is_err());
    }

    #[test]
    fn names_with_separators_are_rejected() {
        let registry = EmbeddedRegistry::new();
        let err = load_str(&registry, "\"a/b\" = 1\n\n[a]\nc = 2\n").unwrap_err();

        assert!(err.to_string().contains("a/b"), "{err}");
        assert!(registry.list("/a").is_err(), "nothing may be bound under /a");
    }

    #[test]
    fn relative_names_are_rejected() {
        let registry = EmbeddedRegistry::new();
        assert!(load_str(&registry, "\"..\" = 1\n").is_err());
    }
}
