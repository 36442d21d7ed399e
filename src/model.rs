//! The option model: text groups, the CTA button, uploads, platforms and scaling settings.

pub mod button;
pub mod images;
pub mod platform;
pub mod scale;
pub mod state;
pub mod templates;
pub mod text;
pub mod update;

pub use button::{ButtonSpec, ButtonStylePatch};
pub use images::{MAX_SOURCE_IMAGES, SourceImage, SourceImages, UploadMode};
pub use platform::{PlatformDimension, PlatformSet};
pub use scale::{ImageScaleSettings, ScaleMode, StretchMode};
pub use state::OptionModel;
pub use text::{GroupId, TextGroup, TextPosition, TextStyle, TextStylePatch};
pub use update::{Applied, ModelUpdate};
