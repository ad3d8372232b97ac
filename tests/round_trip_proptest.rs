//! Property-based round-trip tests
//!
//! Any document built from finite values must read back exactly as written,
//! whatever mix of object kinds, literal/field bindings, shadows and
//! paragraph text it holds.

mod common;

use proptest::prelude::*;

use glabels_xml::model::merge::KNOWN_IDS;
use glabels_xml::model::{
    Affine, Color, ColorOrField, FontWeight, HAlign, ImageObject, LabelDocument, LabelObject,
    LineStyle, LiteralOrField, MergeSource, ObjectKind, Shadow, ShapeStyle, TextObject, VAlign,
};
use glabels_xml::units::Length;
use glabels_xml::{deserialize_objects, read_buffer, serialize_objects, write_buffer, LabelError};

fn length_strategy() -> impl Strategy<Value = Length> {
    (-1.0e6..1.0e6f64).prop_map(Length::pt)
}

fn field_key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}"
}

fn color_or_field_strategy() -> impl Strategy<Value = ColorOrField> {
    prop_oneof![
        any::<u32>().prop_map(|rgba| ColorOrField::Literal(Color(rgba))),
        field_key_strategy().prop_map(ColorOrField::Field),
    ]
}

fn shadow_strategy() -> impl Strategy<Value = Option<Shadow>> {
    proptest::option::of(
        (
            length_strategy(),
            length_strategy(),
            color_or_field_strategy(),
            0.0..=1.0f64,
        )
            .prop_map(|(x, y, color, opacity)| Shadow {
                x,
                y,
                color,
                opacity,
            }),
    )
}

fn affine_strategy() -> impl Strategy<Value = Affine> {
    prop::array::uniform6(-10.0..10.0f64).prop_map(Affine::from_coefficients)
}

/// Paragraphs joined by newlines, including empty and markup-like ones
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9 <>&'\"]{0,12}", 0..4).prop_map(|p| p.join("\n"))
}

fn shape_style_strategy() -> impl Strategy<Value = ShapeStyle> {
    (
        length_strategy(),
        color_or_field_strategy(),
        color_or_field_strategy(),
    )
        .prop_map(|(line_width, line_color, fill_color)| ShapeStyle {
            line_width,
            line_color,
            fill_color,
        })
}

fn text_object_strategy() -> impl Strategy<Value = TextObject> {
    (
        color_or_field_strategy(),
        "[A-Za-z][A-Za-z ]{0,10}",
        1.0..200.0f64,
        prop_oneof![Just(FontWeight::Normal), Just(FontWeight::Bold)],
        any::<bool>(),
        any::<bool>(),
        0.5..3.0f64,
        prop_oneof![Just(HAlign::Left), Just(HAlign::Center), Just(HAlign::Right)],
        prop_oneof![Just(VAlign::Top), Just(VAlign::Middle), Just(VAlign::Bottom)],
        text_strategy(),
    )
        .prop_map(|(color, font_family, font_size, font_weight, italic, underline, line_spacing, h_align, v_align, text)| {
            TextObject {
                color,
                font_family,
                font_size,
                font_weight,
                italic,
                underline,
                line_spacing,
                h_align,
                v_align,
                text,
            }
        })
}

fn kind_strategy() -> impl Strategy<Value = ObjectKind> {
    prop_oneof![
        shape_style_strategy().prop_map(ObjectKind::Box),
        shape_style_strategy().prop_map(ObjectKind::Ellipse),
        (length_strategy(), color_or_field_strategy()).prop_map(|(line_width, line_color)| {
            ObjectKind::Line(LineStyle {
                line_width,
                line_color,
            })
        }),
        (
            length_strategy(),
            prop_oneof![
                "[a-z]{1,8}\\.png".prop_map(LiteralOrField::Literal),
                field_key_strategy().prop_map(LiteralOrField::Field),
            ]
        )
            .prop_map(|(line_width, filename)| ObjectKind::Image(ImageObject {
                line_width,
                filename
            })),
        text_object_strategy().prop_map(ObjectKind::Text),
    ]
}

fn object_strategy() -> impl Strategy<Value = LabelObject> {
    (
        length_strategy(),
        length_strategy(),
        length_strategy(),
        length_strategy(),
        affine_strategy(),
        shadow_strategy(),
        kind_strategy(),
    )
        .prop_map(|(x0, y0, w, h, matrix, shadow, kind)| LabelObject {
            x0,
            y0,
            w,
            h,
            matrix,
            shadow,
            kind,
        })
}

fn merge_strategy() -> impl Strategy<Value = MergeSource> {
    prop_oneof![
        Just(MergeSource::None),
        (prop::sample::select(KNOWN_IDS), "[a-z]{1,8}\\.csv")
            .prop_map(|(id, source)| MergeSource::external(id, source)),
        ("[A-Z][a-z]{1,6}/[A-Z][a-z]{1,6}", "[a-z]{0,8}")
            .prop_map(|(id, source)| MergeSource::external(id, source)),
    ]
}

fn document_strategy() -> impl Strategy<Value = LabelDocument> {
    (
        prop::collection::vec(object_strategy(), 0..6),
        any::<bool>(),
        merge_strategy(),
    )
        .prop_map(|(objects, rotate, merge)| {
            let mut document = common::document(objects);
            document.rotate = rotate;
            document.merge = merge;
            document
        })
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_document_round_trip(document in document_strategy()) {
            let bytes = write_buffer(&document).unwrap();
            let back = read_buffer(&bytes).unwrap();
            prop_assert_eq!(back, document);
        }

        #[test]
        fn test_fragment_round_trip(objects in prop::collection::vec(object_strategy(), 0..6)) {
            let bytes = serialize_objects(&objects).unwrap();
            let back = deserialize_objects(&bytes).unwrap();
            prop_assert_eq!(back, objects);
        }

        #[test]
        fn test_written_lengths_are_readable(
            x in prop_oneof![
                Just(f64::INFINITY),
                Just(f64::NEG_INFINITY),
                Just(f64::NAN),
                any::<f64>(),
            ]
        ) {
            let mut object = common::field_filled_box();
            object.x0 = Length::pt(x);
            match serialize_objects(&[object.clone()]) {
                Ok(bytes) => {
                    prop_assert!(x.is_finite());
                    let back = deserialize_objects(&bytes).unwrap();
                    prop_assert_eq!(back, vec![object]);
                }
                Err(err) => {
                    prop_assert!(!x.is_finite());
                    prop_assert!(matches!(err, LabelError::Encode(_)), "{:?}", err);
                }
            }
        }
    }
}
