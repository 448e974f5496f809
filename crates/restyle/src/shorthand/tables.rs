//! Keyword tables used to classify shorthand components.

use crate::types::Value;

/// Immutable keyword sets consulted by the shorthand transforms.
///
/// All lookups are ASCII case-insensitive.
#[derive(Debug)]
pub struct KeywordTables {
    pub css_wide: &'static [&'static str],
    pub border_styles: &'static [&'static str],
    pub border_widths: &'static [&'static str],
    pub named_colors: &'static [&'static str],
    pub font_styles: &'static [&'static str],
    pub font_variants: &'static [&'static str],
    pub font_weights: &'static [&'static str],
    pub font_sizes: &'static [&'static str],
    pub background_repeats: &'static [&'static str],
    pub background_attachments: &'static [&'static str],
    pub background_positions: &'static [&'static str],
    pub image_functions: &'static [&'static str],
}

static STANDARD: KeywordTables = KeywordTables {
    css_wide: &["inherit", "initial", "unset", "revert", "revert-layer"],
    border_styles: &[
        "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
    ],
    border_widths: &["thin", "medium", "thick"],
    named_colors: NAMED_COLORS,
    font_styles: &["italic", "oblique"],
    font_variants: &["small-caps"],
    font_weights: &["bold", "bolder", "lighter"],
    font_sizes: &[
        "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large", "larger", "smaller",
    ],
    background_repeats: &["repeat", "repeat-x", "repeat-y", "no-repeat", "space", "round"],
    background_attachments: &["scroll", "fixed", "local"],
    background_positions: &["left", "right", "top", "bottom", "center"],
    image_functions: &["image", "image-set", "cross-fade", "element"],
};

const NAMED_COLORS: &[&str] = &[
    "transparent", "currentcolor",
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell",
    "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen",
    "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

fn contains(table: &[&str], value: &Value) -> bool {
    value
        .as_keyword()
        .is_some_and(|word| table.iter().any(|known| known.eq_ignore_ascii_case(word)))
}

impl KeywordTables {
    /// The built-in tables.
    pub fn standard() -> &'static KeywordTables {
        &STANDARD
    }

    /// `inherit`, `initial`, `unset`, `revert`, `revert-layer`.
    pub fn is_css_wide(&self, value: &Value) -> bool {
        contains(self.css_wide, value)
    }

    pub fn is_border_style(&self, value: &Value) -> bool {
        contains(self.border_styles, value)
    }

    /// A length or `thin|medium|thick`.
    pub fn is_border_width(&self, value: &Value) -> bool {
        matches!(value, Value::Size(_)) || contains(self.border_widths, value)
    }

    /// Hex color, color function or named color.
    pub fn is_color(&self, value: &Value) -> bool {
        matches!(value, Value::Color(_)) || contains(self.named_colors, value)
    }

    pub fn is_font_style(&self, value: &Value) -> bool {
        contains(self.font_styles, value)
    }

    pub fn is_font_variant(&self, value: &Value) -> bool {
        contains(self.font_variants, value)
    }

    /// `bold|bolder|lighter` or a unitless weight from 100 to 900.
    pub fn is_font_weight(&self, value: &Value) -> bool {
        match value {
            Value::Size(size) => size.unit().is_none() && (100.0..=900.0).contains(&size.value()),
            other => contains(self.font_weights, other),
        }
    }

    /// A length/percentage or an absolute/relative size keyword.
    pub fn is_font_size(&self, value: &Value) -> bool {
        matches!(value, Value::Size(_)) || contains(self.font_sizes, value)
    }

    /// `url(...)`, `none`, a gradient or another image function.
    pub fn is_image(&self, value: &Value) -> bool {
        match value {
            Value::Url(_) => true,
            Value::Function(function) => {
                let name = function.name.to_ascii_lowercase();
                name.ends_with("gradient") || self.image_functions.contains(&name.as_str())
            }
            other => other.is_keyword("none"),
        }
    }

    pub fn is_background_repeat(&self, value: &Value) -> bool {
        contains(self.background_repeats, value)
    }

    pub fn is_background_attachment(&self, value: &Value) -> bool {
        contains(self.background_attachments, value)
    }

    /// A position keyword or a length/percentage.
    pub fn is_background_position(&self, value: &Value) -> bool {
        matches!(value, Value::Size(_)) || contains(self.background_positions, value)
    }
}
