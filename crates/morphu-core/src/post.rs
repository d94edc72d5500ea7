//! Post data model: content plus the full visual style record.

use crate::accessibility::StyleProps;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Unique identifier for posts.
pub type PostId = Uuid;

/// Border style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    /// Get the CSS value for this border style.
    pub fn css_value(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }

    /// Get all available border styles.
    pub fn all() -> &'static [BorderStyle] {
        &[BorderStyle::Solid, BorderStyle::Dashed, BorderStyle::Dotted]
    }
}

/// Horizontal text alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// Get the CSS value for this alignment.
    pub fn css_value(&self) -> &'static str {
        match self {
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
            TextAlignment::Right => "right",
        }
    }

    /// Get all available alignments.
    pub fn all() -> &'static [TextAlignment] {
        &[TextAlignment::Left, TextAlignment::Center, TextAlignment::Right]
    }
}

/// Text flow direction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextOrientation {
    /// Normal horizontal flow (default).
    #[default]
    Horizontal,
    /// Vertical flow, top to bottom.
    Vertical,
}

impl TextOrientation {
    /// Get all available orientations.
    pub fn all() -> &'static [TextOrientation] {
        &[TextOrientation::Horizontal, TextOrientation::Vertical]
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Light weight.
    Light,
    /// Regular weight (default).
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    /// Get the CSS numeric weight token.
    pub fn css_value(&self) -> &'static str {
        match self {
            FontWeight::Light => "300",
            FontWeight::Regular => "400",
            FontWeight::Bold => "700",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            FontWeight::Light => "Light",
            FontWeight::Regular => "Regular",
            FontWeight::Bold => "Bold",
        }
    }

    /// Get all available font weights.
    pub fn all() -> &'static [FontWeight] {
        &[FontWeight::Light, FontWeight::Regular, FontWeight::Bold]
    }
}

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// Get the CSS value for this font style.
    pub fn css_value(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }

    /// Get all available font styles.
    pub fn all() -> &'static [FontStyle] {
        &[FontStyle::Normal, FontStyle::Italic, FontStyle::Oblique]
    }
}

/// Visual style of a post.
///
/// Colors are CSS hex strings; sizes are pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostStyle {
    /// Corner radius.
    pub border_radius: f64,
    /// Border color.
    pub border_color: String,
    /// Border width.
    pub border_width: f64,
    /// Border style.
    pub border_style: BorderStyle,
    /// Padding, one field per edge.
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
    /// Text size in pixels.
    pub text_size: f64,
    /// Text flow direction.
    pub text_orientation: TextOrientation,
    /// Horizontal alignment.
    pub text_align: TextAlignment,
    /// Font family name.
    pub font_family: String,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font style.
    pub font_style: FontStyle,
    /// Background color.
    pub background_color: String,
    /// Text color.
    pub text_color: String,
}

impl Default for PostStyle {
    fn default() -> Self {
        Self {
            border_radius: 8.0,
            border_color: "#000000".to_string(),
            border_width: 1.0,
            border_style: BorderStyle::default(),
            padding_top: 12.0,
            padding_right: 16.0,
            padding_bottom: 12.0,
            padding_left: 16.0,
            text_size: 16.0,
            text_orientation: TextOrientation::default(),
            text_align: TextAlignment::default(),
            font_family: "sans-serif".to_string(),
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
        }
    }
}

impl PostStyle {
    /// Set the text color.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set the text size.
    pub fn with_text_size(mut self, size: f64) -> Self {
        self.text_size = size;
        self
    }

    /// Set the font weight.
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Extract the properties the accessibility checker evaluates.
    pub fn accessibility_props(&self) -> StyleProps {
        StyleProps::new(
            self.text_color.clone(),
            self.background_color.clone(),
            self.text_size,
            self.font_weight.css_value(),
        )
    }
}

/// A styled text post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostData {
    /// Unique post identifier.
    pub id: PostId,
    /// The text content.
    pub content: String,
    /// Visual style.
    pub style: PostStyle,
    /// Creation timestamp.
    pub created_at: SystemTime,
}

impl PostData {
    /// Create a new post with default styling.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            style: PostStyle::default(),
            created_at: SystemTime::now(),
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: PostStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }
}
