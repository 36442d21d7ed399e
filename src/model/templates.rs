//! Built-in style presets: CTA button looks and complete title/subtitle/button combinations.

use crate::foundation::core::Rgba8;
use crate::model::button::ButtonSpec;
use crate::model::text::{TextPosition, TextStyle};

pub struct ButtonTemplate {
    pub name: &'static str,
    background: Rgba8,
    text: Rgba8,
    radius: &'static str,
    padding: &'static str,
    labels: &'static [&'static str],
    font: &'static str,
}

pub struct TextTemplate {
    pub text: &'static str,
    color: Rgba8,
    position: TextPosition,
    font: &'static str,
    size: f64,
}

/// Button look of a combined template: a catalog entry or one used only by that combination.
enum ButtonChoice {
    Catalog(usize),
    Own(ButtonTemplate),
}

pub struct CombinedTemplate {
    pub name: &'static str,
    button: ButtonChoice,
    pub texts: &'static [TextTemplate],
}

const ARIAL: &str = "Arial, sans-serif";
const TIMES: &str = "'Times New Roman', serif";
const GEORGIA: &str = "Georgia, serif";
const YAHEI: &str = "'Microsoft YaHei', sans-serif";
const VERDANA: &str = "Verdana, sans-serif";
const INK: Rgba8 = Rgba8::rgb(0x1e, 0x29, 0x3b);
const RED: Rgba8 = Rgba8::rgb(0xef, 0x44, 0x44);
const GREEN: Rgba8 = Rgba8::rgb(0x10, 0xb9, 0x81);
const SLATE: Rgba8 = Rgba8::rgb(0x64, 0x74, 0x8b);

const fn button(
    name: &'static str,
    background: Rgba8,
    text: Rgba8,
    radius: &'static str,
    padding: &'static str,
    labels: &'static [&'static str],
    font: &'static str,
) -> ButtonTemplate {
    ButtonTemplate {
        name,
        background,
        text,
        radius,
        padding,
        labels,
        font,
    }
}

const fn title(text: &'static str, color: Rgba8, font: &'static str, size: f64) -> TextTemplate {
    TextTemplate {
        text,
        color,
        position: TextPosition::Top,
        font,
        size,
    }
}

const fn subtitle(text: &'static str, color: Rgba8, font: &'static str) -> TextTemplate {
    TextTemplate {
        text,
        color,
        position: TextPosition::Bottom,
        font,
        size: 0.9,
    }
}

pub static BUTTON_TEMPLATES: &[ButtonTemplate] = &[
    button(
        "modern_blue",
        Rgba8::rgb(0x3b, 0x82, 0xf6),
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Buy Now", "Learn More"],
        ARIAL,
    ),
    button(
        "minimal_black",
        Rgba8::BLACK,
        Rgba8::WHITE,
        "4px",
        "12px 24px",
        &["SHOP NOW", "Shop Today"],
        ARIAL,
    ),
    button(
        "coral_pill",
        Rgba8::rgb(0xff, 0x7f, 0x50),
        Rgba8::WHITE,
        "50px",
        "12px 32px",
        &["Limited Offer", "Grab It Now"],
        ARIAL,
    ),
    button(
        "mint",
        Rgba8::rgb(0x4a, 0xde, 0x80),
        Rgba8::rgb(0x1e, 0x3a, 0x8a),
        "8px",
        "12px 24px",
        &["View Details", "Learn More"],
        ARIAL,
    ),
    button(
        "deep_purple",
        Rgba8::rgb(0x7e, 0x22, 0xce),
        Rgba8::WHITE,
        "12px",
        "12px 28px",
        &["Try It Now", "Get Started"],
        ARIAL,
    ),
    button(
        "ocean",
        Rgba8::rgb(0x03, 0x69, 0xa1),
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Explore", "View All"],
        ARIAL,
    ),
    button(
        "rose_gold",
        Rgba8::rgb(0xf9, 0xa8, 0xd4),
        Rgba8::rgb(0x83, 0x18, 0x43),
        "16px",
        "12px 24px",
        &["Shop Now", "View Details"],
        TIMES,
    ),
    button(
        "matte_black",
        Rgba8::rgb(0x1f, 0x29, 0x37),
        Rgba8::WHITE,
        "0px",
        "14px 28px",
        &["SHOP NOW", "EXPLORE"],
        ARIAL,
    ),
    button(
        "bright_red",
        RED,
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Limited Deal", "Grab It Now"],
        ARIAL,
    ),
    button(
        "blue_violet",
        Rgba8::rgb(0x3b, 0x82, 0xf6),
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Buy Now", "Learn More"],
        ARIAL,
    ),
    button(
        "plain_white",
        Rgba8::WHITE,
        Rgba8::BLACK,
        "4px",
        "12px 24px",
        &["View Details", "Learn More"],
        ARIAL,
    ),
    button(
        "amber",
        Rgba8::rgb(0xf5, 0x9e, 0x0b),
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Grab It Now", "Special Offer"],
        ARIAL,
    ),
    button(
        "deep_navy",
        Rgba8::rgb(0x0f, 0x17, 0x2a),
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Buy Now", "Learn More"],
        YAHEI,
    ),
    button(
        "soft_pink",
        Rgba8::rgb(0xfe, 0xcd, 0xd3),
        Rgba8::rgb(0x9d, 0x17, 0x4d),
        "50px",
        "12px 32px",
        &["View Details", "Shop Now"],
        YAHEI,
    ),
    button(
        "sky",
        Rgba8::rgb(0x0e, 0xa5, 0xe9),
        Rgba8::WHITE,
        "4px",
        "12px 24px",
        &["Try It Now", "Free Trial"],
        ARIAL,
    ),
    button(
        "emerald",
        GREEN,
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Shop Now", "Learn More"],
        ARIAL,
    ),
    button(
        "premium_gold",
        Rgba8::rgb(0xfb, 0xbf, 0x24),
        Rgba8::BLACK,
        "0px",
        "12px 24px",
        &["Buy Now", "View Collection"],
        GEORGIA,
    ),
    button(
        "graphite",
        Rgba8::rgb(0x1f, 0x29, 0x37),
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Learn More", "View Details"],
        ARIAL,
    ),
    button(
        "fashion_purple",
        Rgba8::rgb(0xa8, 0x55, 0xf7),
        Rgba8::WHITE,
        "12px",
        "12px 28px",
        &["Buy Now", "View Details"],
        VERDANA,
    ),
    button(
        "business_slate",
        Rgba8::rgb(0x47, 0x55, 0x69),
        Rgba8::WHITE,
        "8px",
        "12px 24px",
        &["Enquire Now", "Learn More"],
        ARIAL,
    ),
];

pub static COMBINED_TEMPLATES: &[CombinedTemplate] = &[
    CombinedTemplate {
        name: "simple",
        button: ButtonChoice::Catalog(0),
        texts: &[
            title("Curated Picks", Rgba8::BLACK, ARIAL, 1.2),
            subtitle("Quality Guaranteed · Limited Offer", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "minimal",
        button: ButtonChoice::Catalog(1),
        texts: &[
            title("NEW COLLECTION", Rgba8::BLACK, ARIAL, 1.2),
            subtitle("Premium Quality", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "promo",
        button: ButtonChoice::Catalog(2),
        texts: &[
            title("Flash Sale", RED, YAHEI, 1.3),
            subtitle("Up To 50% Off", RED, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "fresh",
        button: ButtonChoice::Catalog(3),
        texts: &[
            title("Spring Arrivals", GREEN, ARIAL, 1.2),
            subtitle("Natural Comfort · Better Living", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "premium",
        button: ButtonChoice::Catalog(4),
        texts: &[
            title("Signature Series", INK, TIMES, 1.2),
            subtitle("Crafted To Last", INK, TIMES),
        ],
    },
    CombinedTemplate {
        name: "fashion",
        button: ButtonChoice::Catalog(7),
        texts: &[
            title("FASHION", Rgba8::BLACK, ARIAL, 1.4),
            subtitle("NEW COLLECTION 2024", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "jewelry",
        button: ButtonChoice::Catalog(16),
        texts: &[
            title("Fine Jewelry", INK, GEORGIA, 1.3),
            subtitle("Exclusive Limited Release", INK, GEORGIA),
        ],
    },
    CombinedTemplate {
        name: "tech",
        button: ButtonChoice::Catalog(14),
        texts: &[
            title("Smart Tech", Rgba8::rgb(0x0e, 0xa5, 0xe9), ARIAL, 1.2),
            subtitle("Better Living · Leading The Future", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "beauty",
        button: ButtonChoice::Catalog(13),
        texts: &[
            title("Radiant Skin", Rgba8::rgb(0x9d, 0x17, 0x4d), YAHEI, 1.2),
            subtitle("Natural Care · Bloom With Confidence", SLATE, YAHEI),
        ],
    },
    CombinedTemplate {
        name: "home",
        button: ButtonChoice::Catalog(15),
        texts: &[
            title("Cozy Home", GREEN, ARIAL, 1.2),
            subtitle("Quality Living · Starts At Home", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "food",
        button: ButtonChoice::Catalog(11),
        texts: &[
            title("Gourmet Selection", Rgba8::BLACK, YAHEI, 1.2),
            subtitle("Fresh Ingredients · Healthy Living", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "travel",
        button: ButtonChoice::Own(button(
            "travel",
            Rgba8::rgb(0x03, 0x69, 0xa1),
            Rgba8::WHITE,
            "8px",
            "12px 24px",
            &["Explore The World", "Explore", "Start Your Journey"],
            ARIAL,
        )),
        texts: &[
            title("Explore The World", Rgba8::rgb(0x03, 0x69, 0xa1), ARIAL, 1.3),
            subtitle("Begin The Journey · Discover The Unknown", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "sport",
        button: ButtonChoice::Catalog(8),
        texts: &[
            title("Pro Sports", Rgba8::BLACK, ARIAL, 1.2),
            subtitle("Push Your Limits · Challenge Yourself", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "electronics",
        button: ButtonChoice::Catalog(12),
        texts: &[
            title("Smart Devices", Rgba8::rgb(0x0f, 0x17, 0x2a), YAHEI, 1.2),
            subtitle("Innovative Experience · Quality Living", SLATE, YAHEI),
        ],
    },
    CombinedTemplate {
        name: "kids",
        button: ButtonChoice::Catalog(3),
        texts: &[
            title("Happy Childhood", Rgba8::rgb(0x4a, 0xde, 0x80), ARIAL, 1.2),
            subtitle("Safe Care · Healthy Growth", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "books",
        button: ButtonChoice::Catalog(19),
        texts: &[
            title("The Joy Of Reading", INK, GEORGIA, 1.2),
            subtitle("Explore Knowledge · Grow Your Mind", SLATE, GEORGIA),
        ],
    },
    CombinedTemplate {
        name: "music",
        button: ButtonChoice::Own(button(
            "music",
            Rgba8::rgb(0x3b, 0x82, 0xf6),
            Rgba8::WHITE,
            "8px",
            "12px 24px",
            &["Try It Now", "Listen Now", "Music Feast"],
            ARIAL,
        )),
        texts: &[
            title("Music Festival", Rgba8::rgb(0x3b, 0x82, 0xf6), ARIAL, 1.2),
            subtitle("Immersive Sound · Enjoy The Music", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "art",
        button: ButtonChoice::Catalog(17),
        texts: &[
            title("Art Collection", Rgba8::BLACK, GEORGIA, 1.2),
            subtitle("Unique Creativity · Artful Living", INK, GEORGIA),
        ],
    },
    CombinedTemplate {
        name: "wellness",
        button: ButtonChoice::Catalog(15),
        texts: &[
            title("Healthy Living", GREEN, ARIAL, 1.2),
            subtitle("Natural Care · Quality Assured", SLATE, ARIAL),
        ],
    },
    CombinedTemplate {
        name: "luxury",
        button: ButtonChoice::Catalog(16),
        texts: &[
            title("Luxury Experience", Rgba8::BLACK, GEORGIA, 1.3),
            subtitle("Noble Quality · Extraordinary Experience", INK, GEORGIA),
        ],
    },
];

impl ButtonTemplate {
    /// Restyle `button` with this template. Position is kept.
    pub fn apply_to(&self, button: &mut ButtonSpec) {
        button.background_color = self.background;
        button.text_color = self.text;
        button.border_radius = self.radius.to_string();
        button.padding = self.padding.to_string();
        button.text_options = self.labels.iter().map(|s| s.to_string()).collect();
        button.font = self.font.to_string();
        button.size = Some(1.0);
    }
}

impl TextTemplate {
    pub fn style(&self) -> TextStyle {
        TextStyle {
            color: self.color,
            font: self.font.to_string(),
            position: self.position,
            x: None,
            y: None,
            size: Some(self.size),
        }
    }
}

impl CombinedTemplate {
    pub fn button_template(&self) -> &ButtonTemplate {
        match &self.button {
            ButtonChoice::Catalog(i) => &BUTTON_TEMPLATES[*i],
            ButtonChoice::Own(t) => t,
        }
    }
}

pub fn button_template(name: &str) -> Option<&'static ButtonTemplate> {
    BUTTON_TEMPLATES.iter().find(|t| t.name == name)
}

pub fn combined_template(name: &str) -> Option<&'static CombinedTemplate> {
    COMBINED_TEMPLATES.iter().find(|t| t.name == name)
}

#[cfg(test)]
#[path = "../../tests/unit/model/templates.rs"]
mod tests;
