use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::geometry::{PercentPoint, clamp_percent};
use crate::model::button::ButtonStylePatch;
use crate::model::images::{SourceImage, UploadMode};
use crate::model::scale::ImageScaleSettings;
use crate::model::state::OptionModel;
use crate::model::templates::{button_template, combined_template};
use crate::model::text::{GroupId, TextGroup, TextStylePatch};

/// A single edit to the option model.
#[derive(Clone, Debug)]
pub enum ModelUpdate {
    AddTextGroup,
    RemoveTextGroup(GroupId),
    AddTextOption(GroupId),
    UpdateTextOption {
        group: GroupId,
        index: usize,
        value: String,
    },
    /// Ignored when it would remove the last option.
    RemoveTextOption { group: GroupId, index: usize },
    PatchTextStyle(GroupId, TextStylePatch),
    /// Stored clamped to `[0, 100]`.
    SetTextPosition(GroupId, PercentPoint),
    AddCtaOption,
    UpdateCtaOption { index: usize, value: String },
    /// Ignored when it would remove the last option.
    RemoveCtaOption(usize),
    PatchButtonStyle(ButtonStylePatch),
    /// Stored clamped to `[0, 100]`.
    SetButtonPosition(PercentPoint),
    SetPlatformSelected { key: String, selected: bool },
    /// Sides are clamped to `[100, 3000]`; `None` restores the preset side.
    SetPlatformSize {
        key: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    SetPreviewPlatform(Option<String>),
    SetImageScale(ImageScaleSettings),
    UploadImages {
        images: Vec<SourceImage>,
        mode: UploadMode,
    },
    SelectImage(usize),
    NextImage,
    PreviousImage,
    ApplyButtonTemplate(String),
    ApplyCombinedTemplate(String),
}

/// What an applied update changed, for listeners that only care about some edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Changed,
    /// The edit was valid but had no effect (e.g. removing the last option).
    Unchanged,
    /// A group was created.
    GroupAdded(GroupId),
    /// Uploads accepted after applying the five-image cap.
    ImagesAccepted(usize),
}

impl OptionModel {
    pub fn apply(&mut self, update: ModelUpdate) -> AdsmithResult<Applied> {
        match update {
            ModelUpdate::AddTextGroup => {
                let id = self.allocate_group_id();
                self.text_groups.push(TextGroup::new(id));
                Ok(Applied::GroupAdded(id))
            }
            ModelUpdate::RemoveTextGroup(id) => {
                let before = self.text_groups.len();
                self.text_groups.retain(|g| g.id != id);
                if self.text_groups.len() == before {
                    return Err(unknown_group(id));
                }
                Ok(Applied::Changed)
            }
            ModelUpdate::AddTextOption(id) => {
                self.group_mut(id)?.options.push(String::new());
                Ok(Applied::Changed)
            }
            ModelUpdate::UpdateTextOption {
                group,
                index,
                value,
            } => {
                let g = self.group_mut(group)?;
                let slot = g
                    .options
                    .get_mut(index)
                    .ok_or_else(|| out_of_range("text option", index))?;
                *slot = value;
                Ok(Applied::Changed)
            }
            ModelUpdate::RemoveTextOption { group, index } => {
                let g = self.group_mut(group)?;
                remove_keeping_one(&mut g.options, index, "text option")
            }
            ModelUpdate::PatchTextStyle(id, patch) => {
                patch.apply_to(&mut self.group_mut(id)?.style);
                Ok(Applied::Changed)
            }
            ModelUpdate::SetTextPosition(id, p) => {
                let p = p.clamped();
                let style = &mut self.group_mut(id)?.style;
                style.x = Some(p.x);
                style.y = Some(p.y);
                Ok(Applied::Changed)
            }
            ModelUpdate::AddCtaOption => {
                self.button.text_options.push(String::new());
                Ok(Applied::Changed)
            }
            ModelUpdate::UpdateCtaOption { index, value } => {
                let slot = self
                    .button
                    .text_options
                    .get_mut(index)
                    .ok_or_else(|| out_of_range("CTA option", index))?;
                *slot = value;
                Ok(Applied::Changed)
            }
            ModelUpdate::RemoveCtaOption(index) => {
                remove_keeping_one(&mut self.button.text_options, index, "CTA option")
            }
            ModelUpdate::PatchButtonStyle(patch) => {
                patch.apply_to(&mut self.button);
                Ok(Applied::Changed)
            }
            ModelUpdate::SetButtonPosition(p) => {
                self.button.x = Some(clamp_percent(p.x));
                self.button.y = Some(clamp_percent(p.y));
                Ok(Applied::Changed)
            }
            ModelUpdate::SetPlatformSelected { key, selected } => {
                self.platforms
                    .get_mut(&key)
                    .ok_or_else(|| unknown_platform(&key))?
                    .selected = selected;
                Ok(Applied::Changed)
            }
            ModelUpdate::SetPlatformSize { key, width, height } => {
                self.platforms
                    .get_mut(&key)
                    .ok_or_else(|| unknown_platform(&key))?
                    .set_custom_size(width, height);
                Ok(Applied::Changed)
            }
            ModelUpdate::SetPreviewPlatform(key) => {
                if let Some(k) = &key {
                    if self.platforms.get(k).is_none() {
                        return Err(unknown_platform(k));
                    }
                }
                self.preview_platform = key;
                Ok(Applied::Changed)
            }
            ModelUpdate::SetImageScale(settings) => {
                self.image_scale = settings;
                Ok(Applied::Changed)
            }
            ModelUpdate::UploadImages { images, mode } => {
                Ok(Applied::ImagesAccepted(self.images.upload(images, mode)))
            }
            ModelUpdate::SelectImage(index) => {
                self.images.select(index);
                Ok(Applied::Changed)
            }
            ModelUpdate::NextImage => {
                self.images.next();
                Ok(Applied::Changed)
            }
            ModelUpdate::PreviousImage => {
                self.images.previous();
                Ok(Applied::Changed)
            }
            ModelUpdate::ApplyButtonTemplate(name) => {
                let t = button_template(&name).ok_or_else(|| unknown_template(&name))?;
                t.apply_to(&mut self.button);
                Ok(Applied::Changed)
            }
            ModelUpdate::ApplyCombinedTemplate(name) => {
                let t = combined_template(&name).ok_or_else(|| unknown_template(&name))?;
                t.button_template().apply_to(&mut self.button);
                self.text_groups.clear();
                for text in t.texts {
                    let id = self.allocate_group_id();
                    self.text_groups.push(TextGroup {
                        id,
                        options: vec![text.text.to_string()],
                        style: text.style(),
                    });
                }
                Ok(Applied::Changed)
            }
        }
    }
}

fn remove_keeping_one(
    options: &mut Vec<String>,
    index: usize,
    what: &str,
) -> AdsmithResult<Applied> {
    if index >= options.len() {
        return Err(out_of_range(what, index));
    }
    if options.len() == 1 {
        return Ok(Applied::Unchanged);
    }
    options.remove(index);
    Ok(Applied::Changed)
}

fn unknown_group(id: GroupId) -> AdsmithError {
    AdsmithError::validation(format!("unknown text group {}", id.0))
}

fn unknown_platform(key: &str) -> AdsmithError {
    AdsmithError::validation(format!("unknown platform \"{key}\""))
}

fn unknown_template(name: &str) -> AdsmithError {
    AdsmithError::validation(format!("unknown template \"{name}\""))
}

fn out_of_range(what: &str, index: usize) -> AdsmithError {
    AdsmithError::validation(format!("{what} index {index} is out of range"))
}

#[cfg(test)]
#[path = "../../tests/unit/model/update.rs"]
mod tests;
