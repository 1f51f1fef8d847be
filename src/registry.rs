use crate::error::{DataVizError, DvResult};
use crate::{DeleteFlag, NodeType, PanelOrigin, ResourceOptType};
use serde::Serialize;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// The four independent constant namespaces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstantGroup {
    NewPanelFrom,
    DeleteFlag,
    NodeType,
    ResourceOptType,
}

impl ConstantGroup {
    /// All members of this group, in declaration order.
    pub fn entries(self) -> Vec<ConstantEntry> {
        match self {
            Self::NewPanelFrom => entries_of::<PanelOrigin>().collect(),
            Self::DeleteFlag => entries_of::<DeleteFlag>().collect(),
            Self::NodeType => entries_of::<NodeType>().collect(),
            Self::ResourceOptType => entries_of::<ResourceOptType>().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Str(&'static str),
    Bool(bool),
}

impl Literal {
    /// Strings compare exactly; booleans accept `true`/`false`.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Str(s) => *s == raw,
            Self::Bool(b) => raw.parse::<bool>().is_ok_and(|v| v == *b),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConstantEntry {
    pub group: ConstantGroup,
    pub name: &'static str,
    pub value: Literal,
}

/// A typed view over one constant namespace.
pub trait Constant: Copy + IntoEnumIterator + 'static {
    const GROUP: ConstantGroup;

    /// The constant's symbolic name, e.g. `NEW_LEAF`.
    fn name(self) -> &'static str;

    fn literal(self) -> Literal;

    fn entry(self) -> ConstantEntry {
        ConstantEntry {
            group: Self::GROUP,
            name: self.name(),
            value: self.literal(),
        }
    }

    fn parse_literal(raw: &str) -> DvResult<Self> {
        Self::iter()
            .find(|c| c.literal().matches(raw))
            .ok_or_else(|| DataVizError::UnknownValue {
                group: Self::GROUP,
                value: raw.to_string(),
            })
    }
}

fn entries_of<C: Constant>() -> impl Iterator<Item = ConstantEntry> {
    C::iter().map(C::entry)
}

/// Every entry, or only those of `group` when given.
pub fn entries(group: Option<ConstantGroup>) -> Vec<ConstantEntry> {
    match group {
        Some(g) => g.entries(),
        None => ConstantGroup::iter().flat_map(ConstantGroup::entries).collect(),
    }
}

pub fn lookup(group: ConstantGroup, name: &str) -> Option<ConstantEntry> {
    group.entries().into_iter().find(|e| e.name == name)
}

/// Finds the member of `group` whose value is `raw`.
pub fn resolve(group: ConstantGroup, raw: &str) -> DvResult<ConstantEntry> {
    match group.entries().into_iter().find(|e| e.value.matches(raw)) {
        Some(entry) => Ok(entry),
        None => {
            debug!("No {} member has value '{}'", group, raw);
            Err(DataVizError::UnknownValue {
                group,
                value: raw.to_string(),
            })
        }
    }
}

/// Fails on the first pair of members in a group that share a value.
pub fn verify_distinct() -> DvResult<()> {
    for group in ConstantGroup::iter() {
        let members = group.entries();
        for (i, a) in members.iter().enumerate() {
            if let Some(b) = members[i + 1..].iter().find(|b| b.value == a.value) {
                return Err(DataVizError::DuplicateValue {
                    group,
                    value: a.value.to_string(),
                    first: a.name,
                    second: b.name,
                });
            }
        }
        debug!("{}: {} distinct members", group, members.len());
    }
    Ok(())
}
