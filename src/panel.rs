use crate::consts::new_panel_from;
use crate::registry::{Constant, ConstantGroup, Literal};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How a dashboard came into existence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PanelOrigin {
    New,
    NewInnerTemplate,
    NewOuterTemplate,
    NewMarketTemplate,
}

impl PanelOrigin {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => new_panel_from::NEW,
            Self::NewInnerTemplate => new_panel_from::NEW_INNER_TEMPLATE,
            Self::NewOuterTemplate => new_panel_from::NEW_OUTER_TEMPLATE,
            Self::NewMarketTemplate => new_panel_from::NEW_MARKET_TEMPLATE,
        }
    }

    /// True for every origin except a blank dashboard.
    pub const fn is_template(self) -> bool {
        !matches!(self, Self::New)
    }
}

impl Constant for PanelOrigin {
    const GROUP: ConstantGroup = ConstantGroup::NewPanelFrom;

    fn name(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::NewInnerTemplate => "NEW_INNER_TEMPLATE",
            Self::NewOuterTemplate => "NEW_OUTER_TEMPLATE",
            Self::NewMarketTemplate => "NEW_MARKET_TEMPLATE",
        }
    }

    fn literal(self) -> Literal {
        Literal::Str(self.as_str())
    }
}
