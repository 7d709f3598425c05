//! Render hex color codes as swatch images by typing them into a
//! [`HexColorEditor`] and drawing the resulting layout.

use std::{fs, path::PathBuf, rc::Rc};

use anyhow::{Context, Result};
use clap::Parser;
use hexswatch::{
    layout::{resolve, Frame, IntrinsicHeights, LayoutMetrics, LayoutMode, Size},
    models::{Model, Srgb},
    parse_hex, Color, Component, HexColorEditor, Space,
};
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_hollow_rect_mut},
    rect::Rect,
};

const LABEL_HEIGHT: Component = 18.0;
const TEXT_FIELD_HEIGHT: Component = 34.0;

#[derive(Debug, Parser)]
#[command(name = "swatch")]
#[command(about = "Render hex color codes as swatch images")]
struct Cli {
    /// Hex codes to render, with or without a leading '#'
    #[arg(required = true)]
    codes: Vec<String>,

    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Vertical size class to lay the editor out in
    #[arg(long, default_value = "regular")]
    mode: LayoutMode,

    /// TOML file with layout metrics
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Width of each image in pixels
    #[arg(long, default_value_t = 240)]
    width: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let metrics = match &cli.metrics {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            LayoutMetrics::from_toml(&source)?
        }
        None => LayoutMetrics::default(),
    };

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("could not create {}", cli.out_dir.display()))?;

    let listener = Rc::new(|editor: &HexColorEditor, _: &Color| {
        log::info!("color changed to {}", editor.label());
    });

    let mut editor = HexColorEditor::new().with_metrics(metrics);
    editor.set_listener(&listener);

    for code in &cli.codes {
        let normalized = normalize(code);
        if let Err(err) = parse_hex(&normalized) {
            log::warn!("skipping {code:?}: {err}");
            continue;
        }

        // Clear the field down to '#' first so the 9 character limit applies.
        editor.focus();
        let typed = editor.text_field().text().chars().count();
        let accepted =
            editor.edit_text(0..typed, "#") && editor.edit_text(1..1, &normalized[1..]);
        editor.blur();

        if !accepted {
            log::warn!("skipping {code:?}, it is too long for a hex color");
            continue;
        }

        let image = render(&editor, cli.mode, &metrics, cli.width)?;
        let path = cli
            .out_dir
            .join(format!("{}.png", editor.label().trim_start_matches('#')));
        image
            .save(&path)
            .with_context(|| format!("could not write {}", path.display()))?;

        println!("{} -> {}", editor.label(), path.display());
    }

    Ok(())
}

fn normalize(code: &str) -> String {
    if code.starts_with('#') {
        code.to_string()
    } else {
        format!("#{code}")
    }
}

fn render(
    editor: &HexColorEditor,
    mode: LayoutMode,
    metrics: &LayoutMetrics,
    width: u32,
) -> Result<RgbaImage> {
    let intrinsic = IntrinsicHeights {
        label: LABEL_HEIGHT,
        text_field: TEXT_FIELD_HEIGHT,
    };
    let constraints = editor.layout(mode);

    // Lay out once to find how tall the image has to be.
    let probe = resolve(&constraints, Size::new(width as Component, 0.0), &intrinsic)?;
    let height = (probe.text_field.max_y() + metrics.margin).ceil().max(1.0);
    let frames = resolve(&constraints, Size::new(width as Component, height), &intrinsic)?;

    let mut image = RgbaImage::new(width, height as u32);
    image.fill(255);

    let swatch = editor.swatch();
    draw_filled_rect_mut(&mut image, to_rect(&frames.swatch), over_white(&swatch.fill));
    draw_hollow_rect_mut(
        &mut image,
        to_rect(&frames.swatch),
        over_white(&swatch.border_color),
    );
    draw_hollow_rect_mut(&mut image, to_rect(&frames.text_field), Rgba([160, 160, 160, 255]));

    Ok(image)
}

fn to_rect(frame: &Frame) -> Rect {
    Rect::at(frame.origin.x.round() as i32, frame.origin.y.round() as i32).of_size(
        (frame.size.width.round() as u32).max(1),
        (frame.size.height.round() as u32).max(1),
    )
}

/// Composite a color over a white background.
fn over_white(color: &Color) -> Rgba<u8> {
    let alpha = color.alpha().unwrap_or(1.0);
    let srgb = Srgb::from_color(&color.to_space(Space::Srgb));
    let blended = Srgb::new(
        srgb.red * alpha + (1.0 - alpha),
        srgb.green * alpha + (1.0 - alpha),
        srgb.blue * alpha + (1.0 - alpha),
    );
    let [red, green, blue] = blended.to_u8();
    Rgba([red, green, blue, 255])
}
