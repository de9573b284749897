pub mod catalog;
pub mod section;
pub mod selection;
pub mod visualization;
pub mod widget;

pub use catalog::{CatalogEntry, CatalogTab, ParseTabError};
pub use section::SectionName;
pub use selection::{recompute_selection, SelectionMap};
pub use visualization::{select_visualization, Datum, LabelStyle, RenderSpec};
pub use widget::{Draft, VisualizationKind, Widget, WidgetId};
