pub mod edit;
pub mod list;

pub use edit::edit_tags;
pub use list::list_tags;
