// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! This module defines the `GroupDefinition` type, which describes one named
//! aggregate (a wedge) and, optionally, its breakdown into child groups.

use serde::{Deserialize, Serialize};

use crate::Error;

/// How the value of a group is computed.
#[derive(Clone, Debug, PartialEq)]
pub enum GroupKind {
    /// The sum of the values of the given codes.
    Sum { codes: Vec<String> },
    /// The reference value of the level, minus the sum of all explicit
    /// siblings.
    Remainder,
}

impl GroupKind {
    /// Returns the codes summed by the group, or an empty slice for
    /// remainder groups.
    pub fn codes(&self) -> &[String] {
        match self {
            Self::Sum { codes } => codes,
            Self::Remainder => &[],
        }
    }
}

/// A node describing one named aggregate.
///
/// `label` and `color` are presentation metadata and are passed through the
/// aggregation unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGroupDefinition", into = "RawGroupDefinition")]
pub struct GroupDefinition {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) color: String,
    pub(crate) kind: GroupKind,
    pub(crate) children: Vec<GroupDefinition>,
}

impl GroupDefinition {
    /// Creates a group whose value is the sum of the given codes.
    pub fn sum<C: Into<String>>(
        id: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        codes: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            kind: GroupKind::Sum {
                codes: codes.into_iter().map(Into::into).collect(),
            },
            children: Vec::new(),
        }
    }

    /// Creates a group whose value is whatever its explicit siblings leave
    /// over from the level's reference value.
    pub fn remainder(
        id: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            kind: GroupKind::Remainder,
            children: Vec::new(),
        }
    }

    /// Replaces the children of the group with the given breakdown.
    pub fn with_children(mut self, children: impl IntoIterator<Item = GroupDefinition>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> &GroupKind {
        &self.kind
    }

    pub fn children(&self) -> &[GroupDefinition] {
        &self.children
    }

    pub fn codes(&self) -> &[String] {
        self.kind.codes()
    }

    pub fn is_remainder(&self) -> bool {
        self.kind == GroupKind::Remainder
    }

    /// Parses a list of top-level definitions from JSON.
    pub fn forest_from_json(json: &str) -> Result<Vec<Self>, Error> {
        serde_json::from_str(json)
            .map_err(|e| Error::parse(format!("Invalid JSON group definitions: {e}")))
    }

    /// Parses a list of top-level definitions from YAML.
    pub fn forest_from_yaml(yaml: &str) -> Result<Vec<Self>, Error> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::parse(format!("Invalid YAML group definitions: {e}")))
    }
}

/// The serialized shape of a `GroupDefinition`.
///
/// The aliases accept the spellings used by older definition tables.
#[derive(Serialize, Deserialize)]
struct RawGroupDefinition {
    #[serde(alias = "code")]
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    color: String,
    #[serde(default, alias = "sum", skip_serializing_if = "Option::is_none")]
    codes: Option<Vec<String>>,
    #[serde(
        default,
        alias = "remainder",
        alias = "reminder",
        skip_serializing_if = "std::ops::Not::not"
    )]
    is_remainder: bool,
    #[serde(default, alias = "breakdown", skip_serializing_if = "Vec::is_empty")]
    children: Vec<GroupDefinition>,
}

impl TryFrom<RawGroupDefinition> for GroupDefinition {
    type Error = Error;

    fn try_from(raw: RawGroupDefinition) -> Result<Self, Self::Error> {
        if raw.id.is_empty() {
            return Err(Error::invalid_definition(
                "Group definitions must have a non-empty id.",
            ));
        }
        let kind = match (raw.codes, raw.is_remainder) {
            (Some(codes), false) => GroupKind::Sum { codes },
            (None, true) => GroupKind::Remainder,
            (Some(_), true) => {
                return Err(Error::invalid_definition(format!(
                    "Group {} can't have both codes and a remainder flag.",
                    raw.id
                )))
            }
            (None, false) => {
                return Err(Error::invalid_definition(format!(
                    "Group {} must have either codes or a remainder flag.",
                    raw.id
                )))
            }
        };
        Ok(Self {
            id: raw.id,
            label: raw.label,
            color: raw.color,
            kind,
            children: raw.children,
        })
    }
}

impl From<GroupDefinition> for RawGroupDefinition {
    fn from(def: GroupDefinition) -> Self {
        let (codes, is_remainder) = match def.kind {
            GroupKind::Sum { codes } => (Some(codes), false),
            GroupKind::Remainder => (None, true),
        };
        Self {
            id: def.id,
            label: def.label,
            color: def.color,
            codes,
            is_remainder,
            children: def.children,
        }
    }
}
