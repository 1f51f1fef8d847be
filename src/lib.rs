pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod flags;
pub mod panel;
pub mod registry;
pub mod resource;
// cmd and reports belong to the binary (main.rs) and are not exported here.

pub use error::{DataVizError, DvResult};
pub use flags::DeleteFlag;
pub use panel::PanelOrigin;
pub use registry::{ConstantEntry, ConstantGroup, Literal};
pub use resource::{NodeType, ResourceOptType};
