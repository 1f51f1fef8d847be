use crate::consts::delete_flag;
use crate::registry::{Constant, ConstantGroup, Literal};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Soft-delete marker. Stored as a plain boolean column.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(from = "bool", into = "bool")]
pub enum DeleteFlag {
    #[strum(serialize = "true")]
    Deleted,
    #[default]
    #[strum(serialize = "false")]
    Available,
}

impl DeleteFlag {
    pub const fn as_bool(self) -> bool {
        match self {
            Self::Deleted => delete_flag::DELETED,
            Self::Available => delete_flag::AVAILABLE,
        }
    }

    pub const fn is_deleted(self) -> bool {
        self.as_bool()
    }
}

impl From<bool> for DeleteFlag {
    fn from(value: bool) -> Self {
        if value == delete_flag::DELETED {
            Self::Deleted
        } else {
            Self::Available
        }
    }
}

impl From<DeleteFlag> for bool {
    fn from(flag: DeleteFlag) -> Self {
        flag.as_bool()
    }
}

impl Constant for DeleteFlag {
    const GROUP: ConstantGroup = ConstantGroup::DeleteFlag;

    fn name(self) -> &'static str {
        match self {
            Self::Deleted => "DELETED",
            Self::Available => "AVAILABLE",
        }
    }

    fn literal(self) -> Literal {
        Literal::Bool(self.as_bool())
    }
}
