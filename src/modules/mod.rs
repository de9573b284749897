//! Overlay panels
//!
//! Each panel implements the Module trait and keeps its own cursor state:
//! - picker: catalog checkboxes per tab and the custom widget form
//! - menu: compact list of every visible widget with remove

pub mod menu;
pub mod picker;

pub use menu::CompactMenu;
pub use picker::{Picker, PickerFocus};
