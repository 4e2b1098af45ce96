// src/export/pdf.rs
//
// Two stages: `layout` turns a record into a flat list of blocks (pure, no
// I/O), `render` flows those blocks onto US-Letter pages with the PDF base-14
// Helvetica fonts. The file is only created once the whole document is built.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::image_crate as pdf_image;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use tracing::{debug, info};

use super::ABOUT_HEADING;
use crate::config::options::ExportOptions;
use crate::error::PipelineError;
use crate::file::output_path;
use crate::record::ProductRecord;

// US-Letter
pub const PAGE_W_MM: f32 = 215.9;
pub const PAGE_H_MM: f32 = 279.4;
const MARGIN_MM: f32 = 25.4;

const MM_PER_PT: f32 = 25.4 / 72.0;
const BODY_PT: f32 = 10.0;
const BODY_LEADING_PT: f32 = 12.0;
const TITLE_PT: f32 = 18.0;
const TITLE_LEADING_PT: f32 = 22.0;
// Helvetica averages about half an em per glyph
const AVG_GLYPH_EM: f32 = 0.5;

pub const IMAGE_SIDE_INCHES: f32 = 3.0;
const IMAGE_DPI: f32 = 300.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Block<'a> {
    Title(&'a str),
    /// Vertical gap in points
    Spacer(f32),
    /// `**{label}:** {value}`
    Labeled { label: &'a str, value: &'a str },
    Bold(&'a str),
    /// `• {text}`
    Bullet(&'a str),
    /// Encoded image, drawn in a square of `IMAGE_SIDE_INCHES`
    Image(&'a [u8]),
}

pub fn layout(record: &ProductRecord) -> Vec<Block<'_>> {
    let mut blocks = vec![
        Block::Title(&record.name),
        Block::Spacer(12.0),
        Block::Labeled { label: "Price", value: &record.price },
        Block::Spacer(6.0),
    ];

    if let Some(img) = &record.image {
        blocks.push(Block::Image(img.as_slice()));
        blocks.push(Block::Spacer(12.0));
    }

    for (label, value) in record.details.iter() {
        blocks.push(Block::Labeled { label, value });
        blocks.push(Block::Spacer(6.0));
    }

    if !record.about_items.is_empty() {
        blocks.push(Block::Spacer(12.0));
        blocks.push(Block::Bold(ABOUT_HEADING));
        blocks.push(Block::Spacer(6.0));
        for item in &record.about_items {
            blocks.push(Block::Bullet(item));
            blocks.push(Block::Spacer(6.0));
        }
    }
    blocks
}

/// `<stem>.pdf` in the output directory.
pub fn export_pdf(record: &ProductRecord, export: &ExportOptions) -> Result<PathBuf, PipelineError> {
    let path = output_path(&record.name, "pdf", export)?;
    let blocks = layout(record);
    debug!("Export: PDF layout has {} blocks", blocks.len());
    render(&blocks, &record.name, &path)?;
    info!("Export: PDF → {}", path.display());
    Ok(path)
}

pub fn render(blocks: &[Block<'_>], title: &str, path: &Path) -> Result<(), PipelineError> {
    let mut w = PageWriter::new(title)?;
    for block in blocks {
        match *block {
            Block::Title(text) => w.title(text),
            Block::Spacer(pt) => w.spacer(pt),
            Block::Labeled { label, value } => w.labeled(label, value),
            Block::Bold(text) => w.body(text, true),
            Block::Bullet(text) => w.body(&format!("\u{2022} {text}"), false),
            Block::Image(bytes) => w.image(bytes)?,
        }
    }
    w.save(path)
}

/// Greedy word wrap by character count. Words longer than `max` are split.
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    let mut cur = s!();
    let mut cur_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > max {
            if cur_len > 0 {
                lines.push(std::mem::take(&mut cur));
                cur_len = 0;
            }
            lines.push(chars.drain(..max).collect());
        }
        if chars.is_empty() {
            continue;
        }

        let need = if cur_len == 0 { chars.len() } else { cur_len + 1 + chars.len() };
        if need > max {
            lines.push(std::mem::take(&mut cur));
            cur_len = 0;
        }
        if cur_len > 0 {
            cur.push(' ');
            cur_len += 1;
        }
        cur_len += chars.len();
        cur.extend(chars);
    }
    if cur_len > 0 || lines.is_empty() {
        lines.push(cur);
    }
    lines
}

fn chars_per_line(size_pt: f32) -> usize {
    let usable_pt = (PAGE_W_MM - 2.0 * MARGIN_MM) / MM_PER_PT;
    (usable_pt / (size_pt * AVG_GLYPH_EM)) as usize
}

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Top of the next line, mm from the page bottom
    y: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, PipelineError> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W_MM), Mm(PAGE_H_MM), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self { doc, layer, regular, bold, y: PAGE_H_MM - MARGIN_MM })
    }

    fn ensure_room(&mut self, h_mm: f32) {
        if self.y - h_mm < MARGIN_MM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_W_MM), Mm(PAGE_H_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_H_MM - MARGIN_MM;
            debug!("Export: PDF page break");
        }
    }

    fn spacer(&mut self, pt: f32) {
        self.y -= pt * MM_PER_PT;
    }

    /// One line of runs (text, bold?) starting at `x_mm`.
    fn line(&mut self, runs: &[(&str, bool)], size_pt: f32, leading_pt: f32, x_mm: f32) {
        let h = leading_pt * MM_PER_PT;
        self.ensure_room(h);
        let baseline = self.y - size_pt * MM_PER_PT;

        self.layer.begin_text_section();
        self.layer.set_text_cursor(Mm(x_mm), Mm(baseline));
        for &(text, bold) in runs {
            let font = if bold { &self.bold } else { &self.regular };
            self.layer.set_font(font, size_pt);
            self.layer.write_text(text, font);
        }
        self.layer.end_text_section();

        self.y -= h;
    }

    fn title(&mut self, text: &str) {
        for line in wrap(text, chars_per_line(TITLE_PT)) {
            let est_w = line.chars().count() as f32 * TITLE_PT * AVG_GLYPH_EM * MM_PER_PT;
            let x = ((PAGE_W_MM - est_w) / 2.0).max(MARGIN_MM);
            self.line(&[(line.as_str(), true)], TITLE_PT, TITLE_LEADING_PT, x);
        }
    }

    fn body(&mut self, text: &str, bold: bool) {
        for line in wrap(text, chars_per_line(BODY_PT)) {
            self.line(&[(line.as_str(), bold)], BODY_PT, BODY_LEADING_PT, MARGIN_MM);
        }
    }

    fn labeled(&mut self, label: &str, value: &str) {
        let head = format!("{label}:");
        let lines = wrap(&format!("{head} {value}"), chars_per_line(BODY_PT));
        for (i, line) in lines.iter().enumerate() {
            if i == 0 && line.starts_with(&head) {
                let rest = &line[head.len()..];
                self.line(&[(head.as_str(), true), (rest, false)], BODY_PT, BODY_LEADING_PT, MARGIN_MM);
            } else {
                self.line(&[(line.as_str(), false)], BODY_PT, BODY_LEADING_PT, MARGIN_MM);
            }
        }
    }

    fn image(&mut self, bytes: &[u8]) -> Result<(), PipelineError> {
        let decoded = image::load_from_memory(bytes)?.to_rgb8();
        let (w, h) = decoded.dimensions();
        if w == 0 || h == 0 {
            return Err(PipelineError::Pdf(s!("image has zero size")));
        }

        // Hand the pixels across as raw RGB; printpdf links its own `image` version.
        let rgb = pdf_image::RgbImage::from_raw(w, h, decoded.into_raw())
            .ok_or_else(|| PipelineError::Pdf(s!("image buffer does not match its dimensions")))?;
        let img = Image::from_dynamic_image(&pdf_image::DynamicImage::ImageRgb8(rgb));

        let side_mm = IMAGE_SIDE_INCHES * 25.4;
        self.ensure_room(side_mm);
        let bottom = self.y - side_mm;
        let side_px = IMAGE_SIDE_INCHES * IMAGE_DPI;

        img.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm((PAGE_W_MM - side_mm) / 2.0)),
                translate_y: Some(Mm(bottom)),
                scale_x: Some(side_px / w as f32),
                scale_y: Some(side_px / h as f32),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
        self.y = bottom;
        Ok(())
    }

    fn save(self, path: &Path) -> Result<(), PipelineError> {
        let file = File::create(path)?;
        self.doc.save(&mut BufWriter::new(file))?;
        Ok(())
    }
}
