//! Core-Domänentypen: Striche, Closure, Klassifikation, Fitting, Spatial-Index.
//!
//! Dieses Layer ist frei von App-Zustand und I/O; alle Algorithmen
//! arbeiten auf reinen Punktfolgen.

pub mod classifier;
pub mod closure;
pub mod rect_fit;
pub mod shape_event;
pub mod spatial;
pub mod stroke;

pub use classifier::{ClassifyPolicy, ShapeClassifier};
pub use closure::is_stroke_closed;
pub use rect_fit::{PrincipalAxisFitter, RectFitStrategy, ViewPlaneFitter};
pub use shape_event::{ShapeEvent, ShapeKind};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use stroke::{StrokeBuilder, MIN_PUBLISH_POINTS};
