pub mod check;
pub mod component;
pub mod list;
