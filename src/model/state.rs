use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::model::button::ButtonSpec;
use crate::model::images::SourceImages;
use crate::model::platform::{PlatformDimension, PlatformSet};
use crate::model::scale::ImageScaleSettings;
use crate::model::text::{GroupId, TextGroup};
use serde::{Deserialize, Serialize};

/// Everything the user is editing in one session.
///
/// The renderer and the expander read snapshots of this; the UI layer mutates it only through
/// [`OptionModel::apply`](crate::model::update::ModelUpdate).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionModel {
    pub text_groups: Vec<TextGroup>,
    pub button: ButtonSpec,
    pub platforms: PlatformSet,
    pub image_scale: ImageScaleSettings,
    /// Platform whose size drives the preview; falls back to the first selected one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_platform: Option<String>,
    #[serde(skip)]
    pub images: SourceImages,
    next_group_id: u64,
}

impl OptionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn allocate_group_id(&mut self) -> GroupId {
        let used_max = self.text_groups.iter().map(|g| g.id.0 + 1).max().unwrap_or(0);
        let id = self.next_group_id.max(used_max);
        self.next_group_id = id + 1;
        GroupId(id)
    }

    pub fn group(&self, id: GroupId) -> Option<&TextGroup> {
        self.text_groups.iter().find(|g| g.id == id)
    }

    pub(crate) fn group_mut(&mut self, id: GroupId) -> AdsmithResult<&mut TextGroup> {
        self.text_groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| AdsmithError::validation(format!("unknown text group {}", id.0)))
    }

    pub fn selected_platforms(&self) -> Vec<&PlatformDimension> {
        self.platforms.selected().collect()
    }

    /// The platform the preview renders at, if any.
    pub fn preview_platform(&self) -> Option<&PlatformDimension> {
        self.preview_platform
            .as_deref()
            .and_then(|k| self.platforms.get(k))
            .or_else(|| self.platforms.selected().next())
    }
}
