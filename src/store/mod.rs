pub mod dashboard;
pub mod state;

pub use dashboard::{Dashboard, ToggleOutcome};
pub use state::{DashboardState, SectionFilter};
