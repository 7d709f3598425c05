//! hexswatch provides a headless hexadecimal color editor together with the
//! color primitives and conversions it needs.
//!
//! The [`editor::HexColorEditor`] keeps a color as HSB components, accepts
//! typed hex codes and reports changes to a [`editor::ColorChangeListener`].
//! Colors are exchanged as a generic [`Color`] tagged with its [`Space`].

#![deny(missing_docs)]

mod color;
mod convert;
pub mod editor;
pub mod hex;
pub mod layout;
mod math;
pub mod models;

pub use color::{Color, Component, ComponentDetails, Components, Flags, HasSpace, Space};
pub use editor::{ColorChangeListener, ColorComponents, HexColorEditor};
pub use hex::{format_hex, parse_hex, HexParseError};
