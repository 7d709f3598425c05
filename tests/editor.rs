use std::{cell::RefCell, rc::Rc};

use approx::assert_abs_diff_eq;
use hexswatch::{
    editor::EditState,
    layout::{resolve, IntrinsicHeights, LayoutMetrics, LayoutMode, Size},
    models::{Model, Srgb},
    parse_hex, Color, ColorChangeListener, Component, HexColorEditor, Space,
};

const EPSILON: Component = 1.0 / i16::MAX as Component;

/// Stands in for a host view that mirrors the editor's color.
#[derive(Default)]
struct Preview {
    shown: RefCell<Option<String>>,
}

impl ColorChangeListener for Preview {
    fn color_changed(&self, editor: &HexColorEditor, _color: &Color) {
        *self.shown.borrow_mut() = Some(editor.label().to_string());
    }
}

fn srgb(color: &Color) -> Srgb {
    Srgb::from_color(&color.to_space(Space::Srgb))
}

#[test]
fn typing_a_code_key_by_key() {
    let preview = Rc::new(Preview::default());
    let mut editor = HexColorEditor::with_color(&Color::new(Space::Srgb, 1.0, 1.0, 1.0, 1.0));
    editor.set_listener(&preview);

    editor.focus();
    assert_eq!(editor.state(), EditState::Editing);

    let mut labels = vec![];
    for (i, c) in "#3B82F6".chars().enumerate() {
        assert!(editor.edit_text(i..i, &c.to_string()));
        labels.push(editor.label().to_string());
    }
    editor.blur();

    // "#3B8" is a valid short form, everything else before the last key is
    // incomplete and keeps the last valid color.
    assert_eq!(
        labels,
        ["#FFFFFF", "#FFFFFF", "#FFFFFF", "#33BB88", "#33BB88", "#33BB88", "#3B82F6"]
    );
    assert_eq!(preview.shown.borrow().as_deref(), Some("#3B82F6"));
    assert!(!editor.is_interaction_active());
}

#[test]
fn nine_characters_is_the_limit() {
    let mut editor = HexColorEditor::new();
    // Without a leading '#' the field holds at most 8 characters.
    assert!(!editor.edit_text(0..0, "#12345678"));
    assert_eq!(editor.text_field().text(), "");

    assert!(editor.edit_text(0..0, "#"));
    assert!(editor.edit_text(1..1, "12345678"));
    assert!(!editor.edit_text(9..9, "9"));
    assert_eq!(editor.text_field().text(), "#12345678");
    assert_eq!(editor.label(), "#12345678");
}

#[test]
fn round_trip_keeps_alpha() {
    let color = parse_hex("#40806020").unwrap();
    let editor = HexColorEditor::with_color(&color);

    let expected = srgb(&color);
    let actual = srgb(&editor.color());
    assert_abs_diff_eq!(actual.red, expected.red, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.green, expected.green, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.blue, expected.blue, epsilon = EPSILON);
    assert_abs_diff_eq!(editor.components().alpha, 32.0 / 255.0, epsilon = EPSILON);
    assert_eq!(editor.hex_string(), "#40806020");
}

#[test]
fn layout_from_configured_metrics() {
    let metrics = LayoutMetrics::from_toml("margin = 10.0\nswatch_height = 50.0").unwrap();
    let editor = HexColorEditor::new().with_metrics(metrics);

    let frames = resolve(
        &editor.layout(LayoutMode::Compact),
        Size::new(200.0, 200.0),
        &IntrinsicHeights {
            label: 20.0,
            text_field: 30.0,
        },
    )
    .unwrap();

    assert_eq!(frames.swatch.origin.y, 10.0);
    assert_eq!(frames.swatch.size.height, 50.0);
    assert_eq!(frames.label.origin.y, 70.0);
    assert_eq!(frames.text_field.origin.y, 100.0);
    assert_eq!(frames.text_field.size.width, 180.0);
    assert!(frames.satisfied);
}
