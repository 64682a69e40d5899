//! Resume page layout. Turns a `Resume` into pages of draw operations.
//!
//! Coordinates are millimetres from the top-left corner; text `y` is the
//! baseline. A single vertical cursor walks down the page. Before each block
//! the cursor is checked against `page_height - reserve`; past that point a
//! new page starts at the top margin. Templates only change decoration, never
//! block order or pagination.
//!
//! The output is pure data so pagination can be inspected without a PDF
//! backend. `render.rs` turns it into bytes.

use serde::Serialize;

use crate::models::resume::{EducationEntry, ExperienceEntry, Resume};
use crate::pdf::font_metrics::{get_metrics, FontStyle};
use crate::pdf::options::{
    FontScale, Palette, PdfOptions, RgbColor, Template, BLACK, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
    WHITE,
};

/// Line height per point of font size, in mm.
pub const LINE_HEIGHT_FACTOR: f32 = 0.4;

const SECTION_RESERVE_MM: f32 = 50.0;
const EXPERIENCE_RESERVE_MM: f32 = 80.0;
const EDUCATION_RESERVE_MM: f32 = 60.0;
const SKILLS_RESERVE_MM: f32 = 40.0;

const MODERN_BAND_HEIGHT_MM: f32 = 50.0;
const CREATIVE_BAR_WIDTH_MM: f32 = 8.0;
const BULLET_INDENT_MM: f32 = 5.0;
const FOOTER_SIZE_PT: f32 = 8.0;
const FOOTER_OFFSET_X_MM: f32 = 50.0;
const FOOTER_OFFSET_Y_MM: f32 = 10.0;

const MUTED: RgbColor = RgbColor::grey(100);
const FOOTER_GREY: RgbColor = RgbColor::grey(150);

const BULLET: &str = "\u{2022}";

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        style: FontStyle,
        color: RgbColor,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: RgbColor,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
        color: RgbColor,
    },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LaidOutPage {
    pub ops: Vec<DrawOp>,
}

impl LaidOutPage {
    /// All text drawn on this page, in drawing order.
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LaidOutDocument {
    pub width_mm: f32,
    pub height_mm: f32,
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays out the resume under the given options, stamping page footers last.
pub fn layout_resume(resume: &Resume, options: &PdfOptions) -> LaidOutDocument {
    let mut layout = Layout::new(*options);

    layout.header(resume);

    if !resume.summary.is_empty() {
        layout.section("Professional Summary", Some(resume.summary.as_str()));
    }

    if !resume.experience.is_empty() {
        layout.section("Professional Experience", None);
        for entry in &resume.experience {
            layout.experience(entry);
        }
    }

    if !resume.education.is_empty() {
        layout.section("Education", None);
        for entry in &resume.education {
            layout.education(entry);
        }
    }

    if !resume.skills.is_empty() {
        layout.ensure_room(SKILLS_RESERVE_MM);
        layout.section("Technical Skills", None);
        let skills = resume.skills.join(&format!(" {BULLET} "));
        let body = layout.fonts.body;
        layout.wrapped_text(&skills, body, FontStyle::Normal, BLACK);
    }

    layout.stamp_footers(resume.display_name().unwrap_or("Resume"));
    layout.finish()
}

/// `<Name_With_Underscores>_<template>_resume.pdf`; "resume" when unnamed.
pub fn pdf_file_name(resume: &Resume, template: Template) -> String {
    let name = &resume.personal_info.name;
    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(c);
            in_space = false;
        }
    }
    if stem.is_empty() {
        stem.push_str("resume");
    }
    format!("{stem}_{}_resume.pdf", template.as_str())
}

// ────────────────────────────────────────────────────────────────────────────
// Layout state
// ────────────────────────────────────────────────────────────────────────────

struct Layout {
    options: PdfOptions,
    margin: f32,
    fonts: FontScale,
    palette: Palette,
    pages: Vec<LaidOutPage>,
    y: f32,
}

impl Layout {
    fn new(options: PdfOptions) -> Self {
        let margin = options.margins.mm();
        Self {
            options,
            margin,
            fonts: options.font_size.scale(),
            palette: options.color_scheme.palette(),
            pages: vec![LaidOutPage::default()],
            y: margin,
        }
    }

    fn content_width(&self) -> f32 {
        PAGE_WIDTH_MM - 2.0 * self.margin
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, style: FontStyle, color: RgbColor) {
        self.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            size,
            style,
            color,
        });
    }

    fn new_page(&mut self) {
        self.pages.push(LaidOutPage::default());
        self.y = self.margin;
    }

    fn ensure_room(&mut self, reserve: f32) {
        if self.y > PAGE_HEIGHT_MM - reserve {
            self.new_page();
        }
    }

    /// Lowest baseline allowed for body text: the bottom margin, which
    /// always sits above the footer.
    fn bottom(&self) -> f32 {
        PAGE_HEIGHT_MM - self.margin
    }

    /// Draws `lines` from the cursor down, breaking onto a new page whenever
    /// the next baseline would pass the bottom margin.
    fn lines_at(
        &mut self,
        lines: &[String],
        x: f32,
        size: f32,
        style: FontStyle,
        color: RgbColor,
    ) {
        let line_height = size * LINE_HEIGHT_FACTOR;
        for line in lines {
            if self.y > self.bottom() {
                self.new_page();
            }
            let y = self.y;
            self.text(line, x, y, size, style, color);
            self.y += line_height;
        }
    }

    /// Wrapped paragraph at the left margin, cursor advanced past it.
    fn wrapped_text(&mut self, text: &str, size: f32, style: FontStyle, color: RgbColor) {
        let lines = get_metrics(style).wrap(text, size, self.content_width());
        let margin = self.margin;
        self.lines_at(&lines, margin, size, style, color);
        self.y += 3.0;
    }

    fn contact_line(resume: &Resume) -> String {
        let info = &resume.personal_info;
        [&info.email, &info.phone, &info.address]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn header(&mut self, resume: &Resume) {
        let name = resume.display_name().unwrap_or("Your Name");
        let contact = Self::contact_line(resume);
        let (name_size, body) = (self.fonts.name, self.fonts.body);
        let margin = self.margin;

        match self.options.template {
            Template::Modern => {
                self.push(DrawOp::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: PAGE_WIDTH_MM,
                    height: MODERN_BAND_HEIGHT_MM,
                    color: self.palette.primary,
                });
                self.text(name, margin, 30.0, name_size, FontStyle::Bold, WHITE);
                if !contact.is_empty() {
                    self.text(&contact, margin, 42.0, body, FontStyle::Normal, WHITE);
                }
                self.y = 65.0;
                return;
            }
            Template::Creative => {
                self.push(DrawOp::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: CREATIVE_BAR_WIDTH_MM,
                    height: PAGE_HEIGHT_MM,
                    color: self.palette.secondary,
                });
                let primary = self.palette.primary;
                self.text(name, margin, 35.0, name_size, FontStyle::Bold, primary);
                self.y = 50.0;
            }
            Template::Classic | Template::Minimal => {
                self.text(name, margin, 30.0, name_size, FontStyle::Bold, BLACK);
                self.y = 45.0;
            }
        }

        if !contact.is_empty() {
            let y = self.y;
            self.text(&contact, margin, y, body, FontStyle::Normal, MUTED);
            self.y += body + 10.0;
        }
    }

    fn section(&mut self, title: &str, content: Option<&str>) {
        self.ensure_room(SECTION_RESERVE_MM);
        self.y += 8.0;

        let size = self.fonts.section;
        let margin = self.margin;
        let modern = self.options.template == Template::Modern;

        let color = if modern {
            self.push(DrawOp::FillRect {
                x: margin,
                y: self.y - 5.0,
                width: self.content_width(),
                height: size + 6.0,
                color: self.palette.primary,
            });
            WHITE
        } else {
            self.palette.primary
        };

        let x = if modern { margin + 5.0 } else { margin };
        let baseline = self.y + size - 2.0;
        self.text(&title.to_uppercase(), x, baseline, size, FontStyle::Bold, color);
        self.y += size + 5.0;

        if self.options.template == Template::Classic {
            self.push(DrawOp::Line {
                x1: margin,
                y1: self.y,
                x2: PAGE_WIDTH_MM - margin,
                y2: self.y,
                thickness: 0.5,
                color: self.palette.primary,
            });
            self.y += 5.0;
        }

        if let Some(content) = content.filter(|c| !c.trim().is_empty()) {
            let body = self.fonts.body;
            self.wrapped_text(content, body, FontStyle::Normal, BLACK);
        }

        self.y += 3.0;
    }

    /// Bold title followed by a suffix in the accent color on the same baseline.
    fn title_line(&mut self, title: &str, suffix: &str) {
        let size = self.fonts.body + 1.0;
        let (margin, y) = (self.margin, self.y);
        self.text(title, margin, y, size, FontStyle::Bold, BLACK);
        let offset = get_metrics(FontStyle::Bold).measure_mm(title, size);
        let accent = self.palette.accent;
        self.text(suffix, margin + offset, y, size, FontStyle::Bold, accent);
        self.y += self.fonts.body + 5.0;
    }

    fn date_line(&mut self, range: &str) {
        let (margin, y, body) = (self.margin, self.y, self.fonts.body);
        self.text(range, margin, y, body - 1.0, FontStyle::Italic, MUTED);
        self.y += body + 3.0;
    }

    fn experience(&mut self, entry: &ExperienceEntry) {
        self.ensure_room(EXPERIENCE_RESERVE_MM);

        self.title_line(&entry.position, &format!(" at {}", entry.company));

        if !entry.start_date.is_empty() || !entry.end_date.is_empty() {
            let range = format!(
                "{} - {}",
                or_present(&entry.start_date),
                or_present(&entry.end_date)
            );
            self.date_line(&range);
        }

        let body = self.fonts.body;
        let width = self.content_width() - 2.0 * BULLET_INDENT_MM;
        let x = self.margin + BULLET_INDENT_MM;
        for line in entry.description.split('\n').filter(|l| !l.trim().is_empty()) {
            let bullet = format!("{BULLET} {}", line.trim());
            let lines = get_metrics(FontStyle::Normal).wrap(&bullet, body, width);
            self.lines_at(&lines, x, body, FontStyle::Normal, BLACK);
            self.y += 2.0;
        }

        self.y += 8.0;
    }

    fn education(&mut self, entry: &EducationEntry) {
        self.ensure_room(EDUCATION_RESERVE_MM);

        self.title_line(&entry.degree, &format!(" - {}", entry.institution));

        if !entry.start_date.is_empty() || !entry.end_date.is_empty() {
            let range = format!("{} - {}", entry.start_date, entry.end_date);
            self.date_line(&range);
        }

        if !entry.description.is_empty() {
            let body = self.fonts.body;
            self.wrapped_text(&entry.description, body, FontStyle::Normal, BLACK);
        }

        self.y += 8.0;
    }

    fn stamp_footers(&mut self, label: &str) {
        let total = self.pages.len();
        let x = PAGE_WIDTH_MM - self.margin - FOOTER_OFFSET_X_MM;
        let y = PAGE_HEIGHT_MM - FOOTER_OFFSET_Y_MM;
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.ops.push(DrawOp::Text {
                text: format!("{label} - Page {} of {total}", index + 1),
                x,
                y,
                size: FOOTER_SIZE_PT,
                style: FontStyle::Normal,
                color: FOOTER_GREY,
            });
        }
    }

    fn finish(self) -> LaidOutDocument {
        LaidOutDocument {
            width_mm: PAGE_WIDTH_MM,
            height_mm: PAGE_HEIGHT_MM,
            pages: self.pages,
        }
    }
}

fn or_present(date: &str) -> &str {
    if date.is_empty() {
        "Present"
    } else {
        date
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
