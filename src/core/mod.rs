pub mod action;
pub mod context;
pub mod id;
pub mod module;

pub use action::{Action, NotifyLevel};
pub use context::{Context, VisibleWidget};
pub use id::{IdSource, SequentialIds, TimestampIds};
pub use module::Module;
