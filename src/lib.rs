//! Adsmith turns one editing session (source images, text options, a CTA button and a set of
//! platform sizes) into a batch of advertising creatives.
//!
//! - Edit an [`OptionModel`] through [`ModelUpdate`]s
//! - Expand it into [`Variant`]s with [`expand_model`]
//! - Render one creative with [`compose`] on any [`RasterSurface`]
//! - Generate the full image × platform × variant batch with [`BatchOrchestrator`]
//! - Drive an interactive preview with [`PreviewLoop`], or the whole session with [`Studio`]
#![forbid(unsafe_code)]

pub mod assets;
pub mod batch;
pub mod collab;
pub mod config;
pub mod expand;
pub mod foundation;
pub mod geometry;
pub mod model;
pub mod preview;
pub mod render;
pub mod studio;

pub use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{AdsmithError, AdsmithResult};

pub use crate::assets::{DecodedImage, ImageCache, decode_image};
pub use crate::batch::{
    ArchiveSink, BatchOrchestrator, BatchReport, BusyFlag, InMemoryArchive, SkippedEntry,
    ZipArchiveSink,
};
pub use crate::collab::{
    AnalyticsSink, FeedbackRecord, FeedbackSink, Labels, NoopAnalytics, TracingAnalytics,
    submit_feedback,
};
pub use crate::config::{JobDef, LoadedJob};
pub use crate::expand::{ConcreteText, Variant, expand_model, expand_variants, variant_count};
pub use crate::geometry::{PercentPoint, ViewRect};
pub use crate::model::{
    Applied, ButtonSpec, GroupId, ImageScaleSettings, ModelUpdate, OptionModel,
    PlatformDimension, SourceImage, TextGroup, TextPosition, TextStyle, UploadMode,
};
pub use crate::preview::{Cursor, DragState, DragTarget, PreviewFrame, PreviewLoop};
pub use crate::render::{
    Composed, CpuSurface, FontBook, RasterSurface, RecordingSurface, RenderRequest, compose,
    render_png,
};
pub use crate::studio::{GeneratedArchive, Studio};
