//! Label stock description referenced by a document
//!
//! Templates come from the template database; a document only records the
//! one it was designed on.

use crate::units::Length;

/// A label template: the sheet and where labels sit on it
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub brand: String,
    pub part: String,
    pub description: String,
    /// Paper size id such as `US-Letter` or `A4`, or `Other`
    pub paper_id: String,
    pub page_width: Length,
    pub page_height: Length,
    pub categories: Vec<String>,
    pub frame: Frame,
}

impl Template {
    /// Name shown to users, e.g. `Avery 5160`
    pub fn name(&self) -> String {
        format!("{} {}", self.brand, self.part)
    }

    /// Number of labels on one sheet
    pub fn labels_per_sheet(&self) -> u32 {
        self.frame.layouts.iter().map(|l| l.nx * l.ny).sum()
    }
}

/// The outline of a single label and its placements on the sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub id: String,
    pub shape: FrameShape,
    pub markups: Vec<Markup>,
    pub layouts: Vec<Layout>,
}

impl Frame {
    /// Width and height of the label
    pub fn size(&self) -> (Length, Length) {
        match &self.shape {
            FrameShape::Rect { w, h, .. } | FrameShape::Ellipse { w, h, .. } => (*w, *h),
            FrameShape::Round { r, .. } => {
                let d = Length::pt(2.0 * r.points());
                (d, d)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameShape {
    Rect {
        w: Length,
        h: Length,
        /// Corner radius
        r: Length,
        x_waste: Length,
        y_waste: Length,
    },
    Round {
        r: Length,
        waste: Length,
    },
    Ellipse {
        w: Length,
        h: Length,
        waste: Length,
    },
}

/// Guide lines drawn in the editor only
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Margin {
        size: Length,
    },
    Line {
        x1: Length,
        y1: Length,
        x2: Length,
        y2: Length,
    },
    Circle {
        x0: Length,
        y0: Length,
        r: Length,
    },
    Rect {
        x1: Length,
        y1: Length,
        w: Length,
        h: Length,
        r: Length,
    },
}

/// A grid of `nx` by `ny` labels starting at `(x0, y0)` with pitch `(dx, dy)`
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub nx: u32,
    pub ny: u32,
    pub x0: Length,
    pub y0: Length,
    pub dx: Length,
    pub dy: Length,
}
