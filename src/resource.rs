//! Resource-tree node kinds and the operations clients request on them.

use crate::consts::{node_type, resource_opt_type};
use crate::registry::{Constant, ConstantGroup, Literal};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Folder,
    Leaf,
}

impl NodeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Folder => node_type::FOLDER,
            Self::Leaf => node_type::LEAF,
        }
    }

    pub const fn is_folder(self) -> bool {
        matches!(self, Self::Folder)
    }
}

impl Constant for NodeType {
    const GROUP: ConstantGroup = ConstantGroup::NodeType;

    fn name(self) -> &'static str {
        match self {
            Self::Folder => "FOLDER",
            Self::Leaf => "LEAF",
        }
    }

    fn literal(self) -> Literal {
        Literal::Str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ResourceOptType {
    NewLeaf,
    NewFolder,
    Move,
    Rename,
    Copy,
}

impl ResourceOptType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewLeaf => resource_opt_type::NEW_LEAF,
            Self::NewFolder => resource_opt_type::NEW_FOLDER,
            Self::Move => resource_opt_type::MOVE,
            Self::Rename => resource_opt_type::RENAME,
            Self::Copy => resource_opt_type::COPY,
        }
    }

    pub const fn creates_node(self) -> bool {
        matches!(self, Self::NewLeaf | Self::NewFolder)
    }

    /// The kind of node a create operation adds. `None` for operations on
    /// existing nodes.
    pub const fn node_type(self) -> Option<NodeType> {
        match self {
            Self::NewLeaf => Some(NodeType::Leaf),
            Self::NewFolder => Some(NodeType::Folder),
            Self::Move | Self::Rename | Self::Copy => None,
        }
    }
}

impl Constant for ResourceOptType {
    const GROUP: ConstantGroup = ConstantGroup::ResourceOptType;

    fn name(self) -> &'static str {
        match self {
            Self::NewLeaf => "NEW_LEAF",
            Self::NewFolder => "NEW_FOLDER",
            Self::Move => "MOVE",
            Self::Rename => "RENAME",
            Self::Copy => "COPY",
        }
    }

    fn literal(self) -> Literal {
        Literal::Str(self.as_str())
    }
}
