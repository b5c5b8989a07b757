//! Loading dashboard definitions from YAML or JSON
//!
//! Definition format:
//!
//! ```yaml
//! name: users
//! search_mode: strict        # optional, defaults to fuzzy
//! attributes:
//!   - name: name
//!   - name: email
//!     searchable: false
//!   - name: owner
//!     association:
//!       searchable_fields: [first_name, last_name]
//!       related_table: owners    # optional
//! ```
//!
//! Filters are closures and cannot appear in a definition; register them on
//! the loaded dashboard afterwards.

use serde::Deserialize;
use std::path::Path;

use super::{Attribute, AttributeKind, Dashboard, SearchMode};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct DashboardDef {
    name: String,
    #[serde(default)]
    search_mode: SearchMode,
    #[serde(default)]
    attributes: Vec<AttributeDef>,
}

#[derive(Debug, Deserialize)]
struct AttributeDef {
    name: String,
    #[serde(default = "default_searchable")]
    searchable: bool,
    #[serde(default)]
    association: Option<AssociationDef>,
}

#[derive(Debug, Deserialize)]
struct AssociationDef {
    #[serde(default)]
    searchable_fields: Vec<String>,
    #[serde(default)]
    related_table: Option<String>,
}

fn default_searchable() -> bool {
    true
}

/// Load a dashboard definition from a YAML file
pub fn load_dashboard<C>(path: impl AsRef<Path>) -> Result<Dashboard<C>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::DashboardRead {
        path: path.to_path_buf(),
        source,
    })?;
    from_yaml(&content)
}

/// Build a dashboard from a YAML definition
pub fn from_yaml<C>(content: &str) -> Result<Dashboard<C>> {
    let def: DashboardDef = serde_yaml::from_str(content)?;
    build(def)
}

/// Build a dashboard from a JSON definition
pub fn from_json<C>(content: &str) -> Result<Dashboard<C>> {
    let def: DashboardDef = serde_json::from_str(content)?;
    build(def)
}

fn build<C>(def: DashboardDef) -> Result<Dashboard<C>> {
    let mut dashboard = Dashboard::new(def.name);
    dashboard.search_mode = def.search_mode;

    for attr_def in def.attributes {
        validate_identifier(&attr_def.name)?;

        if dashboard.attributes.iter().any(|a| a.name == attr_def.name) {
            return Err(Error::DuplicateAttribute {
                dashboard: dashboard.name.clone(),
                name: attr_def.name,
            });
        }

        let kind = match attr_def.association {
            Some(assoc) => {
                for field in &assoc.searchable_fields {
                    validate_identifier(field)?;
                }
                if let Some(table) = &assoc.related_table {
                    validate_identifier(table)?;
                }
                AttributeKind::Association {
                    searchable_fields: assoc.searchable_fields,
                    related_table: assoc.related_table,
                }
            }
            None => AttributeKind::Scalar,
        };

        dashboard.attributes.push(Attribute {
            name: attr_def.name,
            searchable: attr_def.searchable,
            kind,
        });
    }

    Ok(dashboard)
}

/// Validate an attribute, field, or table identifier.
///
/// Rules:
/// - Must be non-empty
/// - Only ASCII letters, digits, and underscore
/// - Cannot start with a digit
fn validate_identifier(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidIdentifier {
            value: value.to_string(),
            reason: "cannot be empty",
        });
    }

    for (i, c) in value.chars().enumerate() {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Err(Error::InvalidIdentifier {
                value: value.to_string(),
                reason: "contains invalid characters (only letters, digits, and underscore allowed)",
            });
        }
        if i == 0 && c.is_ascii_digit() {
            return Err(Error::InvalidIdentifier {
                value: value.to_string(),
                reason: "cannot start with a digit",
            });
        }
    }

    Ok(())
}
