//! JSON job files: one editing session (uploads, option groups, button, platforms, fonts)
//! in a form the CLI can load.

use crate::collab::Labels;
use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::model::platform::clamp_side;
use crate::model::{
    Applied, ButtonSpec, ImageScaleSettings, ModelUpdate, OptionModel, PlatformDimension,
    SourceImage, TextGroup, TextStyle, UploadMode,
};
use crate::render::FontBook;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobDef {
    /// Source images, resolved relative to the job file.
    pub images: Vec<PathBuf>,
    #[serde(default)]
    pub upload_mode: UploadMode,
    /// Combined template applied first; listed `text_groups` are appended to its groups.
    #[serde(default)]
    pub template: Option<String>,
    /// Button template applied after `template`.
    #[serde(default)]
    pub button_template: Option<String>,
    #[serde(default)]
    pub text_groups: Vec<TextGroupDef>,
    /// Replaces whatever the templates chose.
    #[serde(default)]
    pub button: Option<ButtonSpec>,
    #[serde(default)]
    pub image_scale: ImageScaleSettings,
    /// Platforms to select. Empty keeps the catalog's default selection.
    #[serde(default)]
    pub platforms: Vec<PlatformSelection>,
    #[serde(default)]
    pub preview_platform: Option<String>,
    #[serde(default)]
    pub fonts: Vec<FontFaceDef>,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextGroupDef {
    pub options: Vec<String>,
    #[serde(flatten)]
    pub style: TextStyle,
}

/// A font file registered under a CSS family alias.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFaceDef {
    pub family: String,
    pub path: PathBuf,
    #[serde(default)]
    pub bold: bool,
}

/// `"Facebook_Square"` or `{ "key": "...", "width": 1000, "height": 500 }`.
///
/// Keys outside the catalog need both sides and add a new platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformSelection {
    pub key: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl<'de> Deserialize<'de> for PlatformSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Key(String),
            Obj {
                key: String,
                #[serde(default)]
                width: Option<u32>,
                #[serde(default)]
                height: Option<u32>,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Key(key) => Ok(Self {
                key,
                width: None,
                height: None,
            }),
            Repr::Obj { key, width, height } => Ok(Self { key, width, height }),
        }
    }
}

/// A job with its files read: the option model, registered fonts and labels.
#[derive(Debug)]
pub struct LoadedJob {
    pub model: OptionModel,
    pub fonts: FontBook,
    pub labels: Labels,
}

impl JobDef {
    pub fn from_json_str(s: &str) -> AdsmithResult<Self> {
        serde_json::from_str(s).map_err(|e| AdsmithError::serde(format!("parse job JSON: {e}")))
    }

    /// Read a job file and everything it references.
    #[tracing::instrument]
    pub fn load(path: &Path) -> AdsmithResult<LoadedJob> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read job file '{}'", path.display()))?;
        let job = Self::from_json_str(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        let mut images = Vec::with_capacity(job.images.len());
        for rel in &job.images {
            let p = base.join(rel);
            let bytes =
                std::fs::read(&p).with_context(|| format!("read image '{}'", p.display()))?;
            let name = p
                .file_name()
                .map_or_else(|| p.display().to_string(), |n| n.to_string_lossy().into_owned());
            images.push(SourceImage::new(name, bytes));
        }

        let mut fonts = FontBook::new();
        for face in &job.fonts {
            let p = base.join(&face.path);
            let bytes = std::fs::read(&p).with_context(|| format!("read font '{}'", p.display()))?;
            fonts.register(&face.family, bytes, face.bold)?;
        }

        let labels = job.labels.clone();
        let model = job.into_model(images)?;
        Ok(LoadedJob {
            model,
            fonts,
            labels,
        })
    }

    /// Build the option model, with `images` standing in for the listed paths.
    pub fn into_model(self, images: Vec<SourceImage>) -> AdsmithResult<OptionModel> {
        let mut model = OptionModel::new();
        if let Some(name) = self.template {
            model.apply(ModelUpdate::ApplyCombinedTemplate(name))?;
        }
        if let Some(name) = self.button_template {
            model.apply(ModelUpdate::ApplyButtonTemplate(name))?;
        }

        for def in self.text_groups {
            let id = model.allocate_group_id();
            let mut options = def.options;
            if options.is_empty() {
                options.push(String::new());
            }
            model.text_groups.push(TextGroup {
                id,
                options,
                style: def.style,
            });
        }

        if let Some(button) = self.button {
            model.button = button;
        }
        if model.button.text_options.is_empty() {
            model.button.text_options.push(String::new());
        }
        model.image_scale = self.image_scale;

        if !self.platforms.is_empty() {
            for p in &mut model.platforms.0 {
                p.selected = false;
            }
            for sel in self.platforms {
                select_platform(&mut model, sel)?;
            }
        }
        if self.preview_platform.is_some() {
            model.apply(ModelUpdate::SetPreviewPlatform(self.preview_platform))?;
        }

        let offered = images.len();
        if let Applied::ImagesAccepted(n) = model.apply(ModelUpdate::UploadImages {
            images,
            mode: self.upload_mode,
        })? {
            if n < offered {
                tracing::warn!(offered, accepted = n, "image limit reached; extra images ignored");
            }
        }
        Ok(model)
    }
}

fn select_platform(model: &mut OptionModel, sel: PlatformSelection) -> AdsmithResult<()> {
    if let Some(p) = model.platforms.get_mut(&sel.key) {
        p.selected = true;
        if sel.width.is_some() || sel.height.is_some() {
            p.set_custom_size(sel.width, sel.height);
        }
        return Ok(());
    }
    let (Some(width), Some(height)) = (sel.width, sel.height) else {
        return Err(AdsmithError::validation(format!(
            "unknown platform \"{}\" (custom platforms need width and height)",
            sel.key
        )));
    };
    model.platforms.0.push(PlatformDimension {
        name: sel.key.clone(),
        key: sel.key,
        width: clamp_side(width),
        height: clamp_side(height),
        selected: true,
        custom_width: None,
        custom_height: None,
    });
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
