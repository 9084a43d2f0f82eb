//! Semantic color roles mapped onto terminal styles.
//!
//! The role-to-style mapping is an explicit configuration structure rather
//! than ambient global state: renderers are built with a [`Palette`], and a
//! [`PaletteDefinition`] can be deserialized from YAML to override any of
//! the four roles. Each style names its color as exactly one of `name`,
//! `rgb` or `ansi`.

use std::fs::File;

use crossterm::style::{Attribute, Color, ContentStyle};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::text::{Role, Segment};

/// One configured style: a color given in exactly one form, plus weight.
#[derive(Deserialize, Debug, Clone)]
pub struct StyleDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
    pub bold: Option<bool>,
}

impl StyleDefinition {
    fn as_content_style(&self) -> Result<ContentStyle> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        // Error if more than one color form is defined
        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        let foreground = match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "darkgrey" => Color::DarkGrey,
                "red" => Color::Red,
                "darkred" => Color::DarkRed,
                "green" => Color::Green,
                "darkgreen" => Color::DarkGreen,
                "yellow" => Color::Yellow,
                "darkyellow" => Color::DarkYellow,
                "blue" => Color::Blue,
                "darkblue" => Color::DarkBlue,
                "magenta" => Color::Magenta,
                "darkmagenta" => Color::DarkMagenta,
                "cyan" => Color::Cyan,
                "darkcyan" => Color::DarkCyan,
                "white" => Color::White,
                "grey" => Color::Grey,
                _ => return Err(Error::UnknownColorName(name.to_string())),
            }),
            (None, None, None) => None,
            _ => unreachable!(), // This case is prevented by the earlier check
        };

        Ok(style(foreground, self.bold.unwrap_or(false)))
    }
}

/// Per-role overrides, deserializable from YAML. Missing roles keep the
/// stock palette.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PaletteDefinition {
    pub keyword: Option<StyleDefinition>,
    pub choice: Option<StyleDefinition>,
    pub default: Option<StyleDefinition>,
    pub metavar: Option<StyleDefinition>,
}

/// Resolved role-to-style table used while emitting help text.
#[derive(Clone, Debug)]
pub struct Palette {
    keyword: ContentStyle,
    choice: ContentStyle,
    default_value: ContentStyle,
    metavar: ContentStyle,
}

fn style(foreground: Option<Color>, bold: bool) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = foreground;
    if bold {
        style.attributes.set(Attribute::Bold);
    }
    style
}

impl Default for Palette {
    /// The stock palette: keywords green, choices blue, defaults bold blue,
    /// metavars bold red.
    fn default() -> Self {
        Self {
            keyword: style(Some(Color::DarkGreen), false),
            choice: style(Some(Color::DarkBlue), false),
            default_value: style(Some(Color::DarkBlue), true),
            metavar: style(Some(Color::DarkRed), true),
        }
    }
}

impl Palette {
    /// Builds a palette from a definition, falling back to the stock style
    /// for any role left out.
    ///
    /// # Errors
    ///
    /// Returns an error if a style defines more than one color form or
    /// names an unknown color.
    pub fn from_definition(definition: &PaletteDefinition) -> Result<Self> {
        let stock = Self::default();
        Ok(Self {
            keyword: resolve(&definition.keyword, stock.keyword)?,
            choice: resolve(&definition.choice, stock.choice)?,
            default_value: resolve(&definition.default, stock.default_value)?,
            metavar: resolve(&definition.metavar, stock.metavar)?,
        })
    }

    /// Reads a palette definition from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid YAML,
    /// or describes an invalid style.
    pub fn load(path: &str) -> Result<Self> {
        let reader = match File::open(path) {
            Ok(reader) => reader,
            Err(e) => return Err(Error::io_error("palette".to_string(), path.to_string(), e)),
        };

        let definition: serde_yaml::Result<PaletteDefinition> = serde_yaml::from_reader(reader);
        match definition {
            Ok(definition) => Self::from_definition(&definition),
            Err(e) => Err(Error::yaml_error(
                "reading".to_string(),
                "palette".to_string(),
                path.to_string(),
                e,
            )),
        }
    }

    pub fn style_for(&self, role: Role) -> ContentStyle {
        match role {
            Role::Keyword => self.keyword,
            Role::Choice => self.choice,
            Role::Default => self.default_value,
            Role::Metavar => self.metavar,
        }
    }

    /// Renders one segment. Role-tagged segments are styled only when color
    /// is enabled; the styling is a pure overlay over the plain text.
    pub fn paint(&self, segment: &Segment, color_enabled: bool) -> String {
        match segment.role {
            Some(role) if color_enabled => {
                self.style_for(role).apply(&segment.text).to_string()
            }
            _ => segment.text.clone(),
        }
    }
}

fn resolve(definition: &Option<StyleDefinition>, stock: ContentStyle) -> Result<ContentStyle> {
    match definition {
        None => Ok(stock),
        Some(definition) => definition.as_content_style(),
    }
}
