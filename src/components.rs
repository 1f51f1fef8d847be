//! Lookup table for canvas components and their attribute panels.
//!
//! Each component on a dashboard canvas has a view and, for most kinds, an
//! attribute panel registered under `<Key>Attr`. `find_component` resolves
//! either key. Keys are case-sensitive.

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize)]
pub enum CanvasComponent {
    VText,
    VQuery,
    Group,
    UserView,
    Picture,
    CanvasBoard,
    CanvasIcon,
    DeTabs,
    DeGraphical,
    CircleShape,
    RectShape,
    SvgTriangle,
}

impl CanvasComponent {
    pub const fn key(self) -> &'static str {
        match self {
            Self::VText => "VText",
            Self::VQuery => "VQuery",
            Self::Group => "Group",
            Self::UserView => "UserView",
            Self::Picture => "Picture",
            Self::CanvasBoard => "CanvasBoard",
            Self::CanvasIcon => "CanvasIcon",
            Self::DeTabs => "DeTabs",
            Self::DeGraphical => "DeGraphical",
            Self::CircleShape => "CircleShape",
            Self::RectShape => "RectShape",
            Self::SvgTriangle => "SvgTriangle",
        }
    }

    /// Query components have no attribute panel.
    pub const fn attr_key(self) -> Option<&'static str> {
        match self {
            Self::VText => Some("VTextAttr"),
            Self::VQuery => None,
            Self::Group => Some("GroupAttr"),
            Self::UserView => Some("UserViewAttr"),
            Self::Picture => Some("PictureAttr"),
            Self::CanvasBoard => Some("CanvasBoardAttr"),
            Self::CanvasIcon => Some("CanvasIconAttr"),
            Self::DeTabs => Some("DeTabsAttr"),
            Self::DeGraphical => Some("DeGraphicalAttr"),
            Self::CircleShape => Some("CircleShapeAttr"),
            Self::RectShape => Some("RectShapeAttr"),
            Self::SvgTriangle => Some("SvgTriangleAttr"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComponentRole {
    View,
    Attr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentRef {
    pub component: CanvasComponent,
    pub role: ComponentRole,
    /// The registry key this reference was found under.
    pub key: &'static str,
}

pub fn find_component(key: &str) -> Option<ComponentRef> {
    for component in CanvasComponent::iter() {
        if component.key() == key {
            return Some(ComponentRef {
                component,
                role: ComponentRole::View,
                key: component.key(),
            });
        }
        if let Some(attr) = component.attr_key().filter(|a| *a == key) {
            return Some(ComponentRef {
                component,
                role: ComponentRole::Attr,
                key: attr,
            });
        }
    }
    debug!("No canvas component registered under '{}'", key);
    None
}

/// Every registered key, views first then attribute panels per component.
pub fn all_keys() -> Vec<&'static str> {
    CanvasComponent::iter()
        .flat_map(|c| std::iter::once(c.key()).chain(c.attr_key()))
        .collect()
}
