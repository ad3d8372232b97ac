//! Drawable label objects

use crate::units::Length;

use super::{Affine, Color, ColorOrField, FilenameOrField};

/// A drawable object placed on a label
///
/// `w` and `h` are the object's size, except for lines where they are the
/// `dx`/`dy` deltas from `(x0, y0)` to the line's end point.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelObject {
    pub x0: Length,
    pub y0: Length,
    pub w: Length,
    pub h: Length,
    pub matrix: Affine,
    pub shadow: Option<Shadow>,
    pub kind: ObjectKind,
}

/// Variant-specific parts of a label object
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Box(ShapeStyle),
    Ellipse(ShapeStyle),
    Line(LineStyle),
    Image(ImageObject),
    Text(TextObject),
    /// Reserved; there is no codec for barcodes yet
    Barcode(BarcodeObject),
}

impl ObjectKind {
    /// Short name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Box(_) => "box",
            ObjectKind::Ellipse(_) => "ellipse",
            ObjectKind::Line(_) => "line",
            ObjectKind::Image(_) => "image",
            ObjectKind::Text(_) => "text",
            ObjectKind::Barcode(_) => "barcode",
        }
    }
}

/// Drop shadow drawn behind an object
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub x: Length,
    pub y: Length,
    pub color: ColorOrField,
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            x: Length::pt(1.3),
            y: Length::pt(1.3),
            color: ColorOrField::Literal(Color::BLACK),
            opacity: 0.5,
        }
    }
}

/// Outline and fill of boxes and ellipses
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub line_width: Length,
    pub line_color: ColorOrField,
    pub fill_color: ColorOrField,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            line_width: Length::pt(1.0),
            line_color: ColorOrField::Literal(Color::BLACK),
            fill_color: ColorOrField::Literal(Color::TRANSPARENT),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub line_width: Length,
    pub line_color: ColorOrField,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_width: Length::pt(1.0),
            line_color: ColorOrField::Literal(Color::BLACK),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageObject {
    /// Carried over from the common object attributes; images do not draw an outline
    pub line_width: Length,
    pub filename: FilenameOrField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(FontWeight::Normal),
            "bold" => Some(FontWeight::Bold),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(HAlign::Left),
            "center" => Some(HAlign::Center),
            "right" => Some(HAlign::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Middle => "middle",
            VAlign::Bottom => "bottom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(VAlign::Top),
            "middle" => Some(VAlign::Middle),
            "bottom" => Some(VAlign::Bottom),
            _ => None,
        }
    }
}

/// A block of styled text
#[derive(Debug, Clone, PartialEq)]
pub struct TextObject {
    pub color: ColorOrField,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub italic: bool,
    pub underline: bool,
    /// Multiplier applied to the font's natural line height
    pub line_spacing: f64,
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Paragraphs separated by `'\n'`
    pub text: String,
}

impl TextObject {
    /// The text's paragraphs in order; empty text has none
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        let text = if self.text.is_empty() {
            None
        } else {
            Some(self.text.as_str())
        };
        text.into_iter().flat_map(|t| t.split('\n'))
    }

    /// Replace the text with the given paragraphs
    pub fn set_paragraphs<I, S>(&mut self, paragraphs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.text = paragraphs
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
    }
}

impl Default for TextObject {
    fn default() -> Self {
        Self {
            color: ColorOrField::Literal(Color::BLACK),
            font_family: "Sans".to_string(),
            font_size: 10.0,
            font_weight: FontWeight::Normal,
            italic: false,
            underline: false,
            line_spacing: 1.0,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            text: String::new(),
        }
    }
}

/// Barcode placeholder held by the editor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarcodeObject {
    pub style: String,
    pub data: String,
    pub color: ColorOrField,
    pub show_text: bool,
    pub checksum: bool,
}

impl LabelObject {
    fn with_kind(x0: Length, y0: Length, w: Length, h: Length, kind: ObjectKind) -> Self {
        Self {
            x0,
            y0,
            w,
            h,
            matrix: Affine::IDENTITY,
            shadow: None,
            kind,
        }
    }

    pub fn new_box(x0: Length, y0: Length, w: Length, h: Length, style: ShapeStyle) -> Self {
        Self::with_kind(x0, y0, w, h, ObjectKind::Box(style))
    }

    pub fn new_ellipse(x0: Length, y0: Length, w: Length, h: Length, style: ShapeStyle) -> Self {
        Self::with_kind(x0, y0, w, h, ObjectKind::Ellipse(style))
    }

    pub fn new_line(x0: Length, y0: Length, dx: Length, dy: Length, style: LineStyle) -> Self {
        Self::with_kind(x0, y0, dx, dy, ObjectKind::Line(style))
    }

    pub fn new_image(x0: Length, y0: Length, w: Length, h: Length, filename: FilenameOrField) -> Self {
        Self::with_kind(
            x0,
            y0,
            w,
            h,
            ObjectKind::Image(ImageObject {
                line_width: Length::zero(),
                filename,
            }),
        )
    }

    pub fn new_text(x0: Length, y0: Length, w: Length, h: Length, text: TextObject) -> Self {
        Self::with_kind(x0, y0, w, h, ObjectKind::Text(text))
    }

    pub fn new_barcode(x0: Length, y0: Length, w: Length, h: Length, barcode: BarcodeObject) -> Self {
        Self::with_kind(x0, y0, w, h, ObjectKind::Barcode(barcode))
    }

    pub fn with_matrix(mut self, matrix: Affine) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}
