//! Cartesian expansion of the option model into concrete, renderable variants.

use crate::model::{ButtonSpec, GroupId, OptionModel, TextGroup, TextStyle};
use serde::Serialize;

/// One resolved option of a text group, carrying the group's styling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConcreteText {
    pub group: GroupId,
    pub text: String,
    pub style: TextStyle,
}

/// One concrete choice from every text group plus one CTA label.
///
/// Variants are not bound to a source image or platform; the batch pairs them with both.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Variant {
    pub texts: Vec<ConcreteText>,
    /// Empty when the CTA axis had no non-blank labels.
    pub cta_text: String,
}

impl Variant {
    pub fn is_image_only(&self) -> bool {
        self.texts.is_empty() && self.cta_text.trim().is_empty()
    }
}

/// Expand every group's non-blank options and the non-blank CTA labels into their cross product.
///
/// Ordering follows nested loops: the first group varies slowest, the CTA label fastest. Axes with
/// no usable options contribute a single absent choice, so the result is never empty.
pub fn expand_variants(groups: &[TextGroup], button: &ButtonSpec) -> Vec<Variant> {
    let mut tuples: Vec<Vec<ConcreteText>> = vec![Vec::new()];
    for group in groups {
        let options: Vec<&str> = group.expandable_options().collect();
        if options.is_empty() {
            continue;
        }
        tuples = tuples
            .into_iter()
            .flat_map(|prefix| {
                options.iter().map(move |opt| {
                    let mut tuple = prefix.clone();
                    tuple.push(ConcreteText {
                        group: group.id,
                        text: (*opt).to_string(),
                        style: group.style.clone(),
                    });
                    tuple
                })
            })
            .collect();
    }

    let mut ctas: Vec<&str> = button.expandable_options().collect();
    if ctas.is_empty() {
        ctas.push("");
    }

    let mut out = Vec::with_capacity(tuples.len() * ctas.len());
    for texts in &tuples {
        for cta in &ctas {
            out.push(Variant {
                texts: texts.clone(),
                cta_text: (*cta).to_string(),
            });
        }
    }
    out
}

pub fn expand_model(model: &OptionModel) -> Vec<Variant> {
    expand_variants(&model.text_groups, &model.button)
}

/// Number of variants [`expand_variants`] would produce, without materializing them.
pub fn variant_count(groups: &[TextGroup], button: &ButtonSpec) -> usize {
    let texts: usize = groups
        .iter()
        .map(|g| g.expandable_options().count().max(1))
        .product();
    texts * button.expandable_options().count().max(1)
}

#[cfg(test)]
#[path = "../tests/unit/expand.rs"]
mod tests;
