//! PDF emission. Draws a `LaidOutDocument` with printpdf's built-in Helvetica.
//!
//! printpdf measures from the bottom-left corner, so every `y` from the
//! layout is flipped against the page height here.

use std::io::Write;
use std::path::{Path, PathBuf};

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};
use thiserror::Error;
use tracing::{error, info};

use crate::models::resume::Resume;
use crate::pdf::font_metrics::FontStyle;
use crate::pdf::layout::{layout_resume, pdf_file_name, DrawOp, LaidOutDocument};
use crate::pdf::options::{PdfOptions, RgbColor};

const LAYER_NAME: &str = "Layer 1";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("I/O error writing PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to persist PDF: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// A rendered resume ready to download.
#[derive(Debug)]
pub struct RenderedPdf {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Normal => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

/// Lays out and renders a resume in one step.
pub fn render_resume(resume: &Resume, options: &PdfOptions) -> Result<RenderedPdf, PdfError> {
    let layout = layout_resume(resume, options);
    let title = resume.display_name().unwrap_or("Resume");
    let bytes = render_pdf(&layout, title)?;
    Ok(RenderedPdf {
        file_name: pdf_file_name(resume, options.template),
        bytes,
        page_count: layout.page_count(),
    })
}

/// Draws every page of the layout and serializes the document.
pub fn render_pdf(layout: &LaidOutDocument, title: &str) -> Result<Vec<u8>, PdfError> {
    let (width, height) = (Mm(layout.width_mm), Mm(layout.height_mm));
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);

    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for op in &page.ops {
            draw_op(&layer, op, &fonts, layout.height_mm);
        }
    }

    Ok(doc.save_to_bytes()?)
}

fn to_color(color: RgbColor) -> Color {
    Color::Rgb(Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

fn draw_op(layer: &PdfLayerReference, op: &DrawOp, fonts: &Fonts, page_height: f32) {
    match op {
        DrawOp::Text {
            text,
            x,
            y,
            size,
            style,
            color,
        } => {
            layer.set_fill_color(to_color(*color));
            layer.use_text(
                text.as_str(),
                *size,
                Mm(*x),
                Mm(page_height - *y),
                fonts.get(*style),
            );
        }
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            layer.set_fill_color(to_color(*color));
            let rect = Rect::new(
                Mm(*x),
                Mm(page_height - (*y + *height)),
                Mm(*x + *width),
                Mm(page_height - *y),
            )
            .with_mode(PaintMode::Fill);
            layer.add_rect(rect);
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            thickness,
            color,
        } => {
            layer.set_outline_color(to_color(*color));
            layer.set_outline_thickness(*thickness);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1), Mm(page_height - *y1)), false),
                    (Point::new(Mm(*x2), Mm(page_height - *y2)), false),
                ],
                is_closed: false,
            });
        }
    }
}

/// Renders the resume and writes it into `dir` under its export file name.
///
/// Returns `false` on any failure. The file only appears once rendering
/// and writing have both succeeded.
#[allow(dead_code)]
pub fn export_to_pdf(resume: &Resume, options: &PdfOptions, dir: &Path) -> bool {
    match write_pdf(resume, options, dir) {
        Ok(path) => {
            info!("PDF exported to {}", path.display());
            true
        }
        Err(e) => {
            error!("Error generating PDF: {e}");
            false
        }
    }
}

fn write_pdf(resume: &Resume, options: &PdfOptions, dir: &Path) -> Result<PathBuf, PdfError> {
    let rendered = render_resume(resume, options)?;
    let target = dir.join(&rendered.file_name);

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(&rendered.bytes)?;
    staged.persist(&target)?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo};
    use crate::pdf::options::Template;

    fn resume() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            summary: "Analytical engine programmer.".to_string(),
            experience: (0..15)
                .map(|n| ExperienceEntry {
                    id: n.to_string(),
                    company: "Analytical Engines Ltd".to_string(),
                    position: "Programmer".to_string(),
                    description: "Wrote the first algorithm\nAnnotated translations".to_string(),
                    ..Default::default()
                })
                .collect(),
            skills: vec!["Mathematics".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let rendered = render_resume(&resume(), &PdfOptions::default()).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
        assert!(rendered.page_count > 1);
        assert_eq!(rendered.file_name, "Ada_Lovelace_modern_resume.pdf");
    }

    #[test]
    fn test_every_template_renders() {
        for template in [
            Template::Modern,
            Template::Classic,
            Template::Minimal,
            Template::Creative,
        ] {
            let options = PdfOptions {
                template,
                ..Default::default()
            };
            assert!(render_resume(&resume(), &options).is_ok(), "{template:?}");
        }
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = PdfOptions {
            template: Template::Classic,
            ..Default::default()
        };

        assert!(export_to_pdf(&resume(), &options, dir.path()));

        let path = dir.path().join("Ada_Lovelace_classic_resume.pdf");
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_export_failure_returns_false_and_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        assert!(!export_to_pdf(&resume(), &PdfOptions::default(), &missing));
        assert!(!missing.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
