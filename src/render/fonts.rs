use crate::foundation::error::{AdsmithError, AdsmithResult};
use crate::geometry::TextMetrics;
use crate::render::surface::FontSpec;
use std::borrow::Cow;
use std::sync::Arc;

/// Parley brush; color is applied by the surface when glyphs are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrush;

#[derive(Clone, Debug)]
struct FontFace {
    alias: String,
    family_name: String,
    bold: bool,
    data: vello_cpu::peniko::FontData,
}

/// A single shaped line, glyph positions relative to the line box's top-left corner.
#[derive(Clone, Debug)]
pub struct ShapedText {
    pub font: vello_cpu::peniko::FontData,
    pub font_size: f32,
    pub glyphs: Vec<vello_cpu::Glyph>,
    pub metrics: TextMetrics,
}

/// Generic CSS families and the installed families tried for them, in order.
const SANS_SERIF_FAMILIES: &[&str] = &[
    "arial",
    "helvetica",
    "liberation sans",
    "dejavu sans",
    "noto sans",
    "freesans",
];
const SERIF_FAMILIES: &[&str] = &[
    "times new roman",
    "times",
    "liberation serif",
    "dejavu serif",
    "noto serif",
    "freeserif",
];
const MONOSPACE_FAMILIES: &[&str] = &[
    "courier new",
    "courier",
    "liberation mono",
    "dejavu sans mono",
    "noto sans mono",
    "freemono",
];

enum SystemFonts {
    Disabled,
    Unloaded,
    Loaded(Arc<usvg::fontdb::Database>),
}

/// A system lookup result, cached per family list and weight (misses included).
struct SystemFace {
    family_list: String,
    bold: bool,
    face: Option<FontFace>,
}

/// Registered font faces plus the Parley contexts used to shape against them.
///
/// Faces are looked up by the alias they were registered under, so CSS family lists coming from
/// the option model (`"'Times New Roman', serif"`) resolve to whatever file the job provided.
/// Families no registered face answers to are looked up among the installed system fonts.
pub struct FontBook {
    faces: Vec<FontFace>,
    system: SystemFonts,
    system_faces: Vec<SystemFace>,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    warned_missing: bool,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("aliases", &self.aliases().collect::<Vec<_>>())
            .field("system_fonts", &!matches!(self.system, SystemFonts::Disabled))
            .finish()
    }
}

impl FontBook {
    /// Empty book that falls back to system fonts (loaded on first use).
    pub fn new() -> Self {
        Self::with_system(SystemFonts::Unloaded)
    }

    /// Empty book that only ever uses registered faces.
    pub fn without_system_fonts() -> Self {
        Self::with_system(SystemFonts::Disabled)
    }

    fn with_system(system: SystemFonts) -> Self {
        Self {
            faces: Vec::new(),
            system,
            system_faces: Vec::new(),
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            warned_missing: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.faces.iter().map(|f| f.alias.as_str())
    }

    /// Register font file bytes under `alias`.
    pub fn register(&mut self, alias: &str, bytes: Vec<u8>, bold: bool) -> AdsmithResult<()> {
        let alias = alias.trim();
        if alias.is_empty() {
            return Err(AdsmithError::validation("font alias must be non-empty"));
        }
        let face = self.load_face(alias, bytes, 0, None, bold)?;
        tracing::debug!(alias, family = %face.family_name, bold, "registered font face");
        self.faces.push(face);
        Ok(())
    }

    fn load_face(
        &mut self,
        alias: &str,
        bytes: Vec<u8>,
        index: u32,
        family_hint: Option<&str>,
        bold: bool,
    ) -> AdsmithResult<FontFace> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let mut names = Vec::new();
        for (id, _) in &families {
            if let Some(name) = self.font_ctx.collection.family_name(*id) {
                names.push(name.to_string());
            }
        }
        let family_name = family_hint
            .and_then(|hint| names.iter().find(|n| n.eq_ignore_ascii_case(hint)))
            .or_else(|| names.first())
            .cloned()
            .ok_or_else(|| {
                AdsmithError::validation(format!("no font families found in face '{alias}'"))
            })?;

        Ok(FontFace {
            alias: alias.to_string(),
            family_name,
            bold,
            data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index),
        })
    }

    fn resolve(&mut self, family_list: &str, bold: bool) -> Option<FontFace> {
        let (listed, any) = {
            let keys: Vec<(&str, &str, bool)> = self
                .faces
                .iter()
                .map(|f| (f.alias.as_str(), f.family_name.as_str(), f.bold))
                .collect();
            (pick_face(&keys, family_list, bold), first_face(&keys, bold))
        };
        if let Some(i) = listed {
            return Some(self.faces[i].clone());
        }
        if let Some(face) = self.system_face(family_list, bold) {
            return Some(face);
        }
        any.map(|i| self.faces[i].clone())
    }

    fn system_face(&mut self, family_list: &str, bold: bool) -> Option<FontFace> {
        if let Some(hit) = self
            .system_faces
            .iter()
            .find(|s| s.family_list == family_list && s.bold == bold)
        {
            return hit.face.clone();
        }
        let db = self.system_db()?;

        let face = match read_system_face(&db, family_list, bold) {
            Some(found) => {
                let loaded = self.load_face(
                    family_list,
                    found.bytes,
                    found.index,
                    Some(&found.family),
                    found.bold,
                );
                match loaded {
                    Ok(face) => {
                        tracing::debug!(
                            requested = family_list,
                            family = %face.family_name,
                            bold = face.bold,
                            "using system font"
                        );
                        Some(face)
                    }
                    Err(e) => {
                        tracing::warn!(requested = family_list, "system font unusable: {e}");
                        None
                    }
                }
            }
            None => None,
        };
        self.system_faces.push(SystemFace {
            family_list: family_list.to_string(),
            bold,
            face: face.clone(),
        });
        face
    }

    fn system_db(&mut self) -> Option<Arc<usvg::fontdb::Database>> {
        if matches!(self.system, SystemFonts::Unloaded) {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            self.system = SystemFonts::Loaded(Arc::new(db));
        }
        match &self.system {
            SystemFonts::Loaded(db) => Some(db.clone()),
            _ => None,
        }
    }

    /// Shape `text` as a single unwrapped line. `Ok(None)` when no usable face exists.
    pub fn shape(&mut self, text: &str, font: &FontSpec) -> AdsmithResult<Option<ShapedText>> {
        if !font.is_drawable() {
            return Err(AdsmithError::render("font size must be finite and > 0"));
        }
        let Some(face) = self.resolve(&font.family, font.bold) else {
            if !self.warned_missing {
                self.warned_missing = true;
                tracing::warn!("no usable font faces; text layers will not be drawn");
            }
            return Ok(None);
        };

        let size_px = font.size_px as f32;
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if face.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let mut x = run.offset();
                let y = run.baseline();
                for g in run.glyphs() {
                    glyphs.push(vello_cpu::Glyph {
                        id: g.id,
                        x: x + g.x,
                        y: y - g.y,
                    });
                    x += g.advance;
                }
            }
        }

        Ok(Some(ShapedText {
            font: face.data,
            font_size: size_px,
            glyphs,
            metrics: TextMetrics {
                width: f64::from(layout.width()),
                height: f64::from(layout.height()),
            },
        }))
    }

    /// Measured line box, or the approximate metric when no face can be used.
    pub fn measure(&mut self, text: &str, font: &FontSpec) -> TextMetrics {
        match self.shape(text, font) {
            Ok(Some(shaped)) => shaped.metrics,
            _ => TextMetrics::approximate(text, font.size_px),
        }
    }
}

/// Split a CSS family list into lowercase, unquoted names.
pub(crate) fn family_candidates(list: &str) -> Vec<String> {
    list.split(',')
        .map(|f| {
            f.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .trim()
                .to_ascii_lowercase()
        })
        .filter(|f| !f.is_empty())
        .collect()
}

/// Choose a face for `family_list` among `(alias, family name, bold)` entries.
///
/// The first listed family with any match wins; within it a face whose weight matches `bold` is
/// preferred. `None` when no listed family matches.
pub(crate) fn pick_face(
    faces: &[(&str, &str, bool)],
    family_list: &str,
    bold: bool,
) -> Option<usize> {
    for want in family_candidates(family_list) {
        let matching: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, (alias, family, _))| {
                alias.eq_ignore_ascii_case(&want) || family.eq_ignore_ascii_case(&want)
            })
            .map(|(i, _)| i)
            .collect();
        if let Some(i) = prefer_weight(faces, &matching, bold) {
            return Some(i);
        }
    }
    None
}

/// Last resort among registered faces: the first one, preferring a matching weight.
pub(crate) fn first_face(faces: &[(&str, &str, bool)], bold: bool) -> Option<usize> {
    let all: Vec<usize> = (0..faces.len()).collect();
    prefer_weight(faces, &all, bold)
}

fn prefer_weight(faces: &[(&str, &str, bool)], candidates: &[usize], bold: bool) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .find(|&i| faces[i].2 == bold)
        .or_else(|| candidates.first().copied())
}

/// Lowercase family names to look for among system fonts, generic families expanded, ending
/// with the sans-serif list.
pub(crate) fn system_family_order(family_list: &str) -> Vec<String> {
    let mut out = Vec::new();
    for want in family_candidates(family_list) {
        match want.as_str() {
            "sans-serif" | "system-ui" => push_all(&mut out, SANS_SERIF_FAMILIES),
            "serif" => push_all(&mut out, SERIF_FAMILIES),
            "monospace" => push_all(&mut out, MONOSPACE_FAMILIES),
            _ => push_unique(&mut out, &want),
        }
    }
    push_all(&mut out, SANS_SERIF_FAMILIES);
    out
}

fn push_all(out: &mut Vec<String>, names: &[&str]) {
    for name in names {
        push_unique(out, name);
    }
}

fn push_unique(out: &mut Vec<String>, name: &str) {
    if !out.iter().any(|n| n == name) {
        out.push(name.to_string());
    }
}

struct SystemFontBytes {
    bytes: Vec<u8>,
    index: u32,
    family: String,
    bold: bool,
}

/// Best installed face for `family_list`: upright, normal width, closest weight. Any installed
/// face is used when none of the families is present.
fn read_system_face(
    db: &usvg::fontdb::Database,
    family_list: &str,
    bold: bool,
) -> Option<SystemFontBytes> {
    use usvg::fontdb::{FaceInfo, Stretch, Style};

    let target: i32 = if bold { 700 } else { 400 };
    let rank = |f: &&FaceInfo| {
        (
            f.style != Style::Normal,
            f.stretch != Stretch::Normal,
            (i32::from(f.weight.0) - target).abs(),
        )
    };

    let picked = system_family_order(family_list)
        .iter()
        .find_map(|want| {
            db.faces()
                .filter(|f| f.families.iter().any(|(name, _)| name.eq_ignore_ascii_case(want)))
                .min_by_key(rank)
        })
        .or_else(|| db.faces().min_by_key(rank))?;

    let family = picked.families.first().map(|(name, _)| name.clone())?;
    let face_bold = picked.weight.0 >= 600;
    let (bytes, index) = db.with_face_data(picked.id, |data, index| (data.to_vec(), index))?;
    Some(SystemFontBytes {
        bytes,
        index,
        family,
        bold: face_bold,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
