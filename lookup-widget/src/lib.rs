//! A dictionary lookup widget: a search input, a results container rendered
//! as an element tree, and the last searched word kept in local storage.

pub mod render;
pub mod storage;
pub mod view;
pub mod widget;

pub use storage::Storage;
pub use widget::LookupWidget;
