//! A4 rendering of a [`Report`] using printpdf's built-in Helvetica.

use anyhow::{anyhow, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
    Polygon, Rgb,
};

use super::{paginate, Report, ReportBody};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 20.0;

const TITLE_SIZE: f32 = 20.0;
const SUBTITLE_SIZE: f32 = 9.0;
const BODY_SIZE: f32 = 11.0;
const TABLE_SIZE: f32 = 10.0;

const HEADER_ROW_H: f32 = 10.0;
const ROW_H: f32 = 7.0;
const COL_WIDTHS: [f32; 2] = [110.0, 50.0];

const PT_TO_MM: f32 = 0.352_778;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn black() -> Color {
    rgb(0, 0, 0)
}

pub(crate) fn render(report: &Report) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        pdf_text(&report.title),
        Mm(PAGE_W),
        Mm(PAGE_H),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("Failed to load PDF font: {e:?}"))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("Failed to load PDF font: {e:?}"))?,
    };

    let first = doc.get_page(page).get_layer(layer);
    let top = draw_heading(&first, report, &fonts);

    match &report.body {
        ReportBody::Placeholder(text) => {
            first.use_text(pdf_text(text), BODY_SIZE, Mm(MARGIN), Mm(top - 6.0), &fonts.regular);
        }
        ReportBody::Table { header, rows } => {
            let mut pages = paginate(rows.len(), rows_fitting(top), rows_fitting(PAGE_H - MARGIN))
                .into_iter();
            if let Some(range) = pages.next() {
                draw_table(&first, header, &rows[range], top, &fonts);
            }
            for (n, range) in pages.enumerate() {
                let (page, layer) =
                    doc.add_page(Mm(PAGE_W), Mm(PAGE_H), format!("Page {}", n + 2));
                let layer = doc.get_page(page).get_layer(layer);
                draw_table(&layer, header, &rows[range], PAGE_H - MARGIN, &fonts);
            }
        }
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("Failed to render PDF: {e:?}"))
}

/// Title, date and summary. Returns the y coordinate where content may start.
fn draw_heading(layer: &PdfLayerReference, report: &Report, fonts: &Fonts) -> f32 {
    let mut y = PAGE_H - MARGIN - 5.0;
    let title = pdf_text(&report.title);
    let x = (PAGE_W - text_width(&title, TITLE_SIZE)) / 2.0;
    layer.use_text(title, TITLE_SIZE, Mm(x), Mm(y), &fonts.bold);

    y -= 7.0;
    let subtitle = pdf_text(&report.subtitle);
    let x = (PAGE_W - text_width(&subtitle, SUBTITLE_SIZE)) / 2.0;
    layer.use_text(subtitle, SUBTITLE_SIZE, Mm(x), Mm(y), &fonts.regular);

    y -= 6.0;
    for (label, value) in &report.summary {
        y -= 6.0;
        let label = format!("{label}:");
        layer.use_text(pdf_text(&label), BODY_SIZE, Mm(MARGIN), Mm(y), &fonts.bold);
        let offset = text_width(&label, BODY_SIZE) + 2.0;
        layer.use_text(pdf_text(value), BODY_SIZE, Mm(MARGIN + offset), Mm(y), &fonts.regular);
    }

    y - 10.0
}

fn rows_fitting(top: f32) -> usize {
    let room = top - HEADER_ROW_H - MARGIN;
    if room <= 0.0 {
        0
    } else {
        (room / ROW_H) as usize
    }
}

/// Header row plus `rows`, hanging down from `top`.
fn draw_table(
    layer: &PdfLayerReference,
    header: &[String; 2],
    rows: &[[String; 2]],
    top: f32,
    fonts: &Fonts,
) {
    let width: f32 = COL_WIDTHS.iter().sum();
    let header_bottom = top - HEADER_ROW_H;
    let bottom = header_bottom - ROW_H * rows.len() as f32;

    fill_rect(layer, MARGIN, header_bottom, width, HEADER_ROW_H, rgb(173, 216, 230));
    if !rows.is_empty() {
        fill_rect(layer, MARGIN, bottom, width, header_bottom - bottom, rgb(245, 245, 245));
    }

    layer.set_fill_color(rgb(255, 255, 255));
    draw_row(layer, header, header_bottom + 3.5, &fonts.bold);

    layer.set_fill_color(black());
    for (i, row) in rows.iter().enumerate() {
        let row_bottom = header_bottom - ROW_H * (i + 1) as f32;
        draw_row(layer, row, row_bottom + 2.3, &fonts.regular);
    }

    // Grid
    layer.set_outline_color(rgb(128, 128, 128));
    layer.set_outline_thickness(0.5);
    let mut ys = vec![top, header_bottom];
    ys.extend((1..=rows.len()).map(|i| header_bottom - ROW_H * i as f32));
    for y in ys {
        stroke(layer, (MARGIN, y), (MARGIN + width, y));
    }
    let mut x = MARGIN;
    stroke(layer, (x, top), (x, bottom));
    for w in COL_WIDTHS {
        x += w;
        stroke(layer, (x, top), (x, bottom));
    }
}

/// Cells are centered in their columns.
fn draw_row(layer: &PdfLayerReference, cells: &[String; 2], baseline: f32, font: &IndirectFontRef) {
    let mut x = MARGIN;
    for (cell, w) in cells.iter().zip(COL_WIDTHS) {
        let text = pdf_text(cell);
        let offset = ((w - text_width(&text, TABLE_SIZE)) / 2.0).max(1.5);
        layer.use_text(text, TABLE_SIZE, Mm(x + offset), Mm(baseline), font);
        x += w;
    }
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: Color) {
    layer.set_fill_color(color);
    let ring = vec![
        (Point::new(Mm(x), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y + h)), false),
        (Point::new(Mm(x), Mm(y + h)), false),
    ];
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

fn stroke(layer: &PdfLayerReference, from: (f32, f32), to: (f32, f32)) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(from.0), Mm(from.1)), false),
            (Point::new(Mm(to.0), Mm(to.1)), false),
        ],
        is_closed: false,
    });
}

/// Approximate Helvetica advance width in mm.
fn text_width(text: &str, size: f32) -> f32 {
    let em: f32 = text
        .chars()
        .map(|c| match c {
            '0'..='9' => 0.556,
            '.' | ',' | ' ' | ':' | 'i' | 'l' | 'j' | 't' | 'f' => 0.278,
            'm' | 'w' => 0.833,
            'A'..='Z' => 0.667,
            _ => 0.5,
        })
        .sum();
    em * size * PT_TO_MM
}

/// Built-in PDF fonts only cover ASCII reliably.
pub(crate) fn pdf_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '₹' => "Rs.".to_string(),
            c if c.is_ascii() => c.to_string(),
            _ => "?".to_string(),
        })
        .collect()
}
