//! Shared builders for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use glabels_xml::model::{
    Affine, Color, ColorOrField, Frame, FrameShape, LabelDocument, LabelObject, Layout,
    LineStyle, LiteralOrField, Markup, Shadow, ShapeStyle, Template, TextObject,
};
use glabels_xml::units::Length;

pub fn avery_5160() -> Arc<Template> {
    Arc::new(Template {
        brand: "Avery".to_string(),
        part: "5160".to_string(),
        description: "Address Labels".to_string(),
        paper_id: "US-Letter".to_string(),
        page_width: Length::pt(612.0),
        page_height: Length::pt(792.0),
        categories: vec!["label".to_string(), "mail".to_string()],
        frame: Frame {
            id: "0".to_string(),
            shape: FrameShape::Rect {
                w: Length::pt(189.0),
                h: Length::pt(72.0),
                r: Length::pt(5.0),
                x_waste: Length::zero(),
                y_waste: Length::zero(),
            },
            markups: vec![Markup::Margin {
                size: Length::pt(9.0),
            }],
            layouts: vec![Layout {
                nx: 3,
                ny: 10,
                x0: Length::pt(11.25),
                y0: Length::pt(36.0),
                dx: Length::pt(200.25),
                dy: Length::pt(72.0),
            }],
        },
    })
}

/// The 10mm/10mm/50mm/20mm box with a black outline and a field-bound fill
pub fn field_filled_box() -> LabelObject {
    LabelObject::new_box(
        Length::mm(10.0),
        Length::mm(10.0),
        Length::mm(50.0),
        Length::mm(20.0),
        ShapeStyle {
            line_width: Length::pt(1.0),
            line_color: ColorOrField::Literal(Color(0x0000_00FF)),
            fill_color: ColorOrField::field("Color"),
        },
    )
}

pub fn two_line_text() -> LabelObject {
    LabelObject::new_text(
        Length::pt(5.0),
        Length::pt(5.0),
        Length::pt(150.0),
        Length::pt(40.0),
        TextObject {
            text: "Line1\nLine2".to_string(),
            ..Default::default()
        },
    )
}

/// One object of every serializable kind, with varied bindings
pub fn mixed_objects() -> Vec<LabelObject> {
    let l = Length::pt;
    vec![
        field_filled_box(),
        LabelObject::new_ellipse(
            l(20.0),
            l(30.0),
            l(40.0),
            l(25.5),
            ShapeStyle {
                line_width: l(0.5),
                line_color: ColorOrField::field("Outline"),
                fill_color: ColorOrField::Literal(Color::from_rgba(0x33, 0x66, 0x99, 0x80)),
            },
        )
        .with_shadow(Shadow {
            x: l(1.3),
            y: l(1.3),
            color: ColorOrField::Literal(Color::BLACK),
            opacity: 0.5,
        }),
        LabelObject::new_line(
            l(0.0),
            l(72.0),
            l(189.0),
            l(-72.0),
            LineStyle {
                line_width: l(2.0),
                line_color: ColorOrField::Literal(Color::WHITE),
            },
        ),
        LabelObject::new_image(
            l(100.0),
            l(0.0),
            l(72.0),
            l(72.0),
            LiteralOrField::field("Photo"),
        )
        .with_matrix(Affine::rotation(30.0)),
        two_line_text().with_shadow(Shadow {
            x: l(-2.0),
            y: l(2.0),
            color: ColorOrField::field("ShadowInk"),
            opacity: 0.25,
        }),
        LabelObject::new_text(
            l(0.0),
            l(0.0),
            l(10.0),
            l(10.0),
            TextObject::default(),
        ),
    ]
}

pub fn document(objects: Vec<LabelObject>) -> LabelDocument {
    let mut document = LabelDocument::new(avery_5160());
    document.objects = objects;
    document
}
