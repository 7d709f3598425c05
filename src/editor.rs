//! The [`HexColorEditor`] lets the user type a hex code and shows the result
//! as a swatch and a label.
//!
//! The editor is headless. It keeps the current color as HSB components and
//! exposes what a host UI needs to draw it: the [`Swatch`], the label text
//! and the [`TextField`] contents. Hosts forward text field events to
//! [`HexColorEditor::edit_text`] (or to [`HexColorEditor::should_accept_edit`]
//! and [`HexColorEditor::on_text_changed`] separately) and focus changes to
//! [`HexColorEditor::focus`] and [`HexColorEditor::blur`].
//!
//! ```rust
//! use hexswatch::editor::HexColorEditor;
//!
//! let mut editor = HexColorEditor::new();
//! editor.on_text_changed("00FF00");
//! assert_eq!(editor.label(), "#00FF00");
//!
//! // Malformed input keeps the last valid color.
//! editor.on_text_changed("#00FF0");
//! assert_eq!(editor.label(), "#00FF00");
//! ```

use std::{
    borrow::Cow,
    fmt,
    ops::Range,
    rc::{Rc, Weak},
};

use crate::{
    color::{Color, Component, Space},
    hex::{format_hex, parse_hex},
    layout::{constraints, Constraint, LayoutMetrics, LayoutMode},
    math::normalize_hue,
    models::{Hsb, Model},
};

/// Accessibility identifier of the editor itself.
pub const HEX_VIEW_ID: &str = "hex_view";
/// Accessibility identifier of the color swatch.
pub const COLOR_SAMPLE_ID: &str = "color_sample";
/// Accessibility identifier of the hex label.
pub const LABEL_FIELD_ID: &str = "label_field";
/// Accessibility identifier of the text field.
pub const TEXT_FIELD_ID: &str = "text_field";

/// Placeholder shown by an empty text field.
pub const PLACEHOLDER: &str = "HEX Value";

/// Longest accepted text when it starts with `#`.
const MAX_LEN_WITH_PREFIX: usize = 9;
/// Longest accepted text without a leading `#`.
const MAX_LEN_WITHOUT_PREFIX: usize = 8;

/// Hue, saturation, brightness and alpha of a color. Each component is a
/// fraction in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorComponents {
    /// The hue as a fraction of a full turn.
    pub hue: Component,
    /// The saturation.
    pub saturation: Component,
    /// The brightness.
    pub brightness: Component,
    /// The alpha.
    pub alpha: Component,
}

impl Default for ColorComponents {
    fn default() -> Self {
        Self {
            hue: 1.0,
            saturation: 1.0,
            brightness: 1.0,
            alpha: 1.0,
        }
    }
}

impl ColorComponents {
    /// Convert a color of any space to HSB components. A powerless hue is read
    /// as zero and a missing alpha as opaque.
    pub fn from_color(color: &Color) -> Self {
        let hsb = Hsb::from_color(&color.to_space(Space::Hsb));

        Self {
            hue: normalize_hue(hsb.hue) / 360.0,
            saturation: hsb.saturation,
            brightness: hsb.brightness,
            alpha: color.alpha().unwrap_or(1.0),
        }
    }

    /// Build an sRGB color from the components.
    pub fn to_color(&self) -> Color {
        Hsb::new(self.hue * 360.0, self.saturation, self.brightness)
            .to_srgb()
            .to_color(Some(self.alpha))
    }
}

/// Receives notifications when the user types a new color.
///
/// The editor only keeps a weak handle to its listener, so the host has to
/// keep the listener alive for as long as it wants notifications.
pub trait ColorChangeListener {
    /// Called after the editor's color changed because of user input.
    fn color_changed(&self, editor: &HexColorEditor, color: &Color);
}

impl<F> ColorChangeListener for F
where
    F: Fn(&HexColorEditor, &Color),
{
    fn color_changed(&self, editor: &HexColorEditor, color: &Color) {
        self(editor, color)
    }
}

/// A filled rectangle showing the current color.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    /// The fill color.
    pub fill: Color,
    /// The value reported to accessibility clients, the hex string of
    /// `fill`.
    pub accessibility_value: String,
    /// Width of the border drawn around the swatch.
    pub border_width: Component,
    /// Color of the border drawn around the swatch.
    pub border_color: Color,
}

impl Swatch {
    fn new(fill: Color, hex: String) -> Self {
        Self {
            fill,
            accessibility_value: hex,
            border_width: 0.5,
            border_color: Color::new(Space::Srgb, 0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Contents and focus of the editable text field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    focused: bool,
}

impl TextField {
    /// The text currently in the field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the field has input focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The placeholder shown when the field is empty.
    pub fn placeholder(&self) -> &'static str {
        PLACEHOLDER
    }
}

/// Whether the user is currently typing into the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    /// Showing the last valid color.
    #[default]
    Idle,
    /// The text field has focus.
    Editing,
}

/// Edits a color through its hexadecimal representation.
pub struct HexColorEditor {
    components: ColorComponents,
    swatch: Swatch,
    label: String,
    text_field: TextField,
    state: EditState,
    metrics: LayoutMetrics,
    listener: Option<Weak<dyn ColorChangeListener>>,
}

impl Default for HexColorEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HexColorEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HexColorEditor")
            .field("components", &self.components)
            .field("label", &self.label)
            .field("text_field", &self.text_field)
            .field("state", &self.state)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl HexColorEditor {
    /// Create an editor with the default components (1, 1, 1, 1).
    pub fn new() -> Self {
        let components = ColorComponents::default();
        let fill = components.to_color();
        let hex = format_hex(&fill);

        Self {
            components,
            swatch: Swatch::new(fill, hex.clone()),
            label: hex,
            text_field: TextField::default(),
            state: EditState::Idle,
            metrics: LayoutMetrics::default(),
            listener: None,
        }
    }

    /// Create an editor showing the given color.
    pub fn with_color(color: &Color) -> Self {
        let mut editor = Self::new();
        editor.set_color(color);
        editor
    }

    /// Use the given metrics when producing layout constraints.
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Return the current color in the sRGB color space.
    pub fn color(&self) -> Color {
        self.components.to_color()
    }

    /// Show a color of any space. The listener is not notified.
    pub fn set_color(&mut self, color: &Color) {
        self.components = ColorComponents::from_color(color);
        log::trace!("color set to {:?}", self.components);
        self.reload();
    }

    /// The current HSB components.
    pub fn components(&self) -> ColorComponents {
        self.components
    }

    /// The swatch showing the current color.
    pub fn swatch(&self) -> &Swatch {
        &self.swatch
    }

    /// The hex label of the current color.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The editable text field.
    pub fn text_field(&self) -> &TextField {
        &self.text_field
    }

    /// The current hex string of the color.
    pub fn hex_string(&self) -> String {
        format_hex(&self.color())
    }

    /// The current state of the edit state machine.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// True while the text field has input focus.
    pub fn is_interaction_active(&self) -> bool {
        self.state == EditState::Editing
    }

    /// The text field gained focus.
    pub fn focus(&mut self) {
        self.text_field.focused = true;
        self.state = EditState::Editing;
    }

    /// The text field lost focus.
    pub fn blur(&mut self) {
        self.text_field.focused = false;
        self.state = EditState::Idle;
    }

    /// Notify `listener` of user edits. Only a weak handle is kept.
    pub fn set_listener<L>(&mut self, listener: &Rc<L>)
    where
        L: ColorChangeListener + 'static,
    {
        let listener: Weak<L> = Rc::downgrade(listener);
        self.listener = Some(listener);
    }

    /// Stop notifying the current listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Handle the text field's contents changing to `text`.
    ///
    /// A leading `#` is added when missing before parsing. When the text
    /// parses, the color is updated and the listener notified. Otherwise the
    /// current color is kept. The swatch and label are always redrawn from the
    /// current color.
    pub fn on_text_changed(&mut self, text: &str) {
        self.text_field.text = text.to_string();

        let changed = match parse_hex(&normalize_input(text)) {
            Ok(color) => {
                self.components = ColorComponents::from_color(&color);
                log::trace!("color typed as {text:?}: {:?}", self.components);
                true
            }
            Err(err) => {
                log::debug!("keeping current color, {text:?} is not a hex color: {err}");
                false
            }
        };

        // Redraw first so the listener sees the new swatch and label.
        self.reload();

        if changed {
            self.notify();
        }
    }

    /// Decide whether replacing the characters in `edit_range` of
    /// `current_text` with `replacement` keeps the text short enough: at most
    /// 9 characters when `current_text` starts with `#`, at most 8 otherwise.
    ///
    /// Ranges are in characters and clamped to the text.
    pub fn should_accept_edit(current_text: &str, edit_range: Range<usize>, replacement: &str) -> bool {
        let max_len = if current_text.starts_with('#') {
            MAX_LEN_WITH_PREFIX
        } else {
            MAX_LEN_WITHOUT_PREFIX
        };

        let len = current_text.chars().count();
        let range = clamp_range(edit_range, len);
        let new_len = len - range.len() + replacement.chars().count();

        new_len <= max_len
    }

    /// Replace the characters in `edit_range` of the text field with
    /// `replacement`, as a text field does on a keystroke or paste.
    ///
    /// Returns false and leaves everything untouched when the edit is
    /// rejected by [`Self::should_accept_edit`].
    pub fn edit_text(&mut self, edit_range: Range<usize>, replacement: &str) -> bool {
        let current = self.text_field.text.as_str();
        if !Self::should_accept_edit(current, edit_range.clone(), replacement) {
            log::trace!("rejected edit {edit_range:?} with {replacement:?} on {current:?}");
            return false;
        }

        let range = clamp_range(edit_range, current.chars().count());
        let start = byte_offset(current, range.start);
        let end = byte_offset(current, range.end);

        let mut text = String::with_capacity(current.len() + replacement.len());
        text.push_str(&current[..start]);
        text.push_str(replacement);
        text.push_str(&current[end..]);

        self.on_text_changed(&text);
        true
    }

    /// Layout constraints for the swatch, label and text field.
    pub fn layout(&self, mode: LayoutMode) -> Vec<Constraint> {
        constraints(mode, &self.metrics)
    }

    fn notify(&mut self) {
        let Some(weak) = self.listener.as_ref() else {
            return;
        };

        match weak.upgrade() {
            Some(listener) => {
                let color = self.color();
                listener.color_changed(self, &color);
            }
            None => {
                log::debug!("color listener was dropped");
                self.listener = None;
            }
        }
    }

    fn reload(&mut self) {
        let fill = self.color();
        let hex = format_hex(&fill);

        self.swatch.fill = fill;
        self.swatch.accessibility_value.clone_from(&hex);
        self.label = hex;
    }
}

/// Prefix the text with `#` unless it already starts with one.
fn normalize_input(text: &str) -> Cow<'_, str> {
    if text.starts_with('#') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("#{text}"))
    }
}

fn clamp_range(range: Range<usize>, len: usize) -> Range<usize> {
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);
    start..end
}

/// Byte offset of the character at `index`, or the end of the text.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}
