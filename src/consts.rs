//! Literal values shared with persisted dashboard records and frontend callers.
//!
//! These strings are stored verbatim in the database and sent over the API, so
//! they must never change. The typed enums in `panel`, `flags` and `resource`
//! are built on top of them.

/// Where a new dashboard was created from.
pub mod new_panel_from {
    /// Created from scratch.
    pub const NEW: &str = "new";

    /// Created from an internal template.
    pub const NEW_INNER_TEMPLATE: &str = "new_inner_template";

    /// Created from an external (uploaded) template.
    pub const NEW_OUTER_TEMPLATE: &str = "new_outer_template";

    /// Created from the template marketplace.
    pub const NEW_MARKET_TEMPLATE: &str = "new_market_template";
}

/// Soft-delete marker on resource rows.
pub mod delete_flag {
    pub const DELETED: bool = true;
    pub const AVAILABLE: bool = false;
}

/// Node kinds in the resource tree.
pub mod node_type {
    /// Directory node.
    pub const FOLDER: &str = "folder";
    /// Terminal resource (a dashboard or screen).
    pub const LEAF: &str = "leaf";
}

/// Operations a client can request on the resource tree.
pub mod resource_opt_type {
    pub const NEW_LEAF: &str = "newLeaf";
    pub const NEW_FOLDER: &str = "newFolder";
    pub const MOVE: &str = "move";
    pub const RENAME: &str = "rename";
    pub const COPY: &str = "copy";
}
