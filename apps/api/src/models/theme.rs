use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Broad grouping used by theme pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeCategory {
    Professional,
    Modern,
    Creative,
    Minimal,
}

impl ThemeCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Some(Self::Professional),
            "modern" => Some(Self::Modern),
            "creative" => Some(Self::Creative),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}

/// A color layer. Every field is optional so the same shape serves the
/// registry, a document's `design.colors` and a partial customization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Body text color. Only consulted when no `text` color is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_titles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<String>,
}

impl ColorPalette {
    /// Returns a copy where every field set in `top` replaces the one here.
    pub fn overlay(&self, top: &ColorPalette) -> ColorPalette {
        fn pick(top: &Option<String>, base: &Option<String>) -> Option<String> {
            top.clone().or_else(|| base.clone())
        }
        ColorPalette {
            primary: pick(&top.primary, &self.primary),
            secondary: pick(&top.secondary, &self.secondary),
            background: pick(&top.background, &self.background),
            text: pick(&top.text, &self.text),
            accent: pick(&top.accent, &self.accent),
            border: pick(&top.border, &self.border),
            body: pick(&top.body, &self.body),
            name: pick(&top.name, &self.name),
            headline: pick(&top.headline, &self.headline),
            section_titles: pick(&top.section_titles, &self.section_titles),
            links: pick(&top.links, &self.links),
            connections: pick(&top.connections, &self.connections),
        }
    }
}

/// A typography layer. `line_height` also accepts the document spelling
/// `line_spacing`, and the camelCase keys UI clients send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    #[serde(alias = "fontFamily", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(alias = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(
        alias = "lineHeight",
        alias = "line_spacing",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_height: Option<String>,
    #[serde(alias = "headingFont", skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(alias = "headingSize", skip_serializing_if = "Option::is_none")]
    pub heading_size: Option<String>,
    #[serde(alias = "headingLineHeight", skip_serializing_if = "Option::is_none")]
    pub heading_line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ThemeCategory,
    pub colors: ColorPalette,
    pub typography: Typography,
}

/// The override layer a document carries under `design`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOverride {
    #[serde(default)]
    pub colors: ColorPalette,
    #[serde(default)]
    pub typography: Typography,
}

impl StyleOverride {
    /// Reads `design.colors` / `design.typography` from an untyped `design`
    /// mapping. Non-string values are skipped field by field rather than
    /// discarding the whole layer.
    pub fn from_design(design: Option<&Value>) -> Option<Self> {
        let design = design?.as_object()?;
        let colors = design.get("colors").map(string_fields_only);
        let typography = design.get("typography").map(string_fields_only);
        if colors.is_none() && typography.is_none() {
            return None;
        }
        Some(StyleOverride {
            colors: colors
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default(),
            typography: typography
                .as_ref()
                .and_then(Value::as_object)
                .map(Typography::from_fields)
                .unwrap_or_default(),
        })
    }
}

impl Typography {
    /// Builds a layer key by key. When several spellings of one field are
    /// present, the first spelling listed wins.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let pick = |keys: &[&str]| {
            keys.iter()
                .find_map(|k| fields.get(*k).and_then(Value::as_str))
                .map(str::to_string)
        };
        Typography {
            font_family: pick(&["font_family", "fontFamily"]),
            font_size: pick(&["font_size", "fontSize"]),
            line_height: pick(&["line_height", "lineHeight", "line_spacing"]),
            heading_font: pick(&["heading_font", "headingFont"]),
            heading_size: pick(&["heading_size", "headingSize"]),
            heading_line_height: pick(&["heading_line_height", "headingLineHeight"]),
            alignment: pick(&["alignment"]),
        }
    }
}

/// Keeps only string-valued keys; numbers like `font_size: 10` are
/// stringified so they still count as set.
fn string_fields_only(value: &Value) -> Value {
    let Some(map) = value.as_object() else {
        return Value::Object(Default::default());
    };
    let kept = map
        .iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k.clone(), Value::String(s.clone()))),
            Value::Number(n) => Some((k.clone(), Value::String(n.to_string()))),
            _ => None,
        })
        .collect();
    Value::Object(kept)
}
