//! AirSketch Library.
//! Stroke-Capture, Formerkennung und Shape-Event-Dispatch als Library
//! exportiert für Tests, Benchmarks und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod trace;

pub use app::processors::{
    DoorPlan, DoorProcessor, MountainPlan, MountainProcessor, TreePlacement, TreeProcessor,
    ViewBasis, WallPlan, WallProcessor,
};
pub use app::{
    CommandLog, DebugCaptureProcessor, DeleteCollaborator, GeneratorMode, ProcessContext,
    ProcessorRegistry, RectangleStyle, ShapeEventListener, ShapeProcessor, SketchCommand,
    SketchController, SketchIntent, SketchMode, SketchState, SpatialDeleteQueue,
};
pub use core::{
    is_stroke_closed, ClassifyPolicy, PrincipalAxisFitter, RectFitStrategy, ShapeClassifier,
    ShapeEvent, ShapeKind, SpatialIndex, SpatialMatch, StrokeBuilder, ViewPlaneFitter,
};
pub use shared::SketchOptions;
pub use trace::{
    load_sketch_trace, parse_sketch_trace, write_sketch_trace, SketchTrace, TraceSample,
};
