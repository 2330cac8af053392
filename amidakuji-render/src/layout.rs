//! Sheet geometry.
//!
//! Turns a ladder and its permutation into positioned segments and text, in
//! millimetres with the origin at the bottom-left corner of the page. Nothing
//! here touches the PDF backend, so the geometry is testable on its own.
//!
//! Vertical layout, top to bottom: margin, label band, rows, label band,
//! margin. The label bands and the spacing between rows all share one pitch.

use amidakuji_core::labels::{bottom_labels, top_labels};
use amidakuji_core::{Ladder, LadderId, Permutation};

use crate::config::LayoutConfig;
use crate::pdf::RenderError;

/// Points to millimetres.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Rail,
    Rung,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Text anchored at its left baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size_pt: f32,
}

/// Everything the PDF writer needs for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub stroke_pt: f32,
    pub title: String,
    pub segments: Vec<Segment>,
    pub texts: Vec<TextItem>,
}

impl Drawing {
    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.kind == kind)
    }
}

/// Provenance printed in the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetMeta {
    pub seed: Option<u64>,
    pub ladder_id: LadderId,
}

impl SheetMeta {
    pub fn for_ladder(ladder: &Ladder, seed: Option<u64>) -> Self {
        Self {
            seed,
            ladder_id: LadderId::of(ladder),
        }
    }

    pub fn footer_text(&self, ladder: &Ladder) -> String {
        let mut text = format!(
            "Generated with n={}, rows={}, rungs={}",
            ladder.line_count(),
            ladder.row_count(),
            ladder.rung_count()
        );
        if let Some(seed) = self.seed {
            text.push_str(&format!(" | seed {seed}"));
        }
        text.push_str(&format!(" | id {}", self.ladder_id.short()));
        text
    }
}

/// Lay out a ladder sheet.
pub fn compute_layout(
    ladder: &Ladder,
    perm: &Permutation,
    meta: &SheetMeta,
    config: &LayoutConfig,
) -> Result<Drawing, RenderError> {
    ladder.validate()?;
    if perm.len() != ladder.line_count() {
        return Err(RenderError::Mismatch {
            lines: ladder.line_count(),
            permutation: perm.len(),
        });
    }

    let n = ladder.line_count();
    let rows = ladder.row_count();
    let margin = config.margin_mm;
    let page_h = config.page_height_mm;

    let line_spacing = config.draw_width_mm() / (n - 1) as f32;
    let pitch = config.draw_height_mm() / (rows.max(1) + 3) as f32;
    let y_top = page_h - margin - pitch;
    let y_bottom = margin + pitch;
    let x_at = |line: usize| margin + line as f32 * line_spacing;

    let mut segments = Vec::with_capacity(n + ladder.rung_count());
    for line in 0..n {
        let x = x_at(line);
        segments.push(Segment {
            kind: SegmentKind::Rail,
            x1: x,
            y1: y_top,
            x2: x,
            y2: y_bottom,
        });
    }
    for rung in ladder.rungs() {
        let y = y_top - (rung.row + 1) as f32 * pitch;
        segments.push(Segment {
            kind: SegmentKind::Rung,
            x1: x_at(rung.left),
            y1: y,
            x2: x_at(rung.right()),
            y2: y,
        });
    }

    let label_pt = config.label_font_pt;
    // Drop the baseline by roughly half a cap height so labels sit centred in their band.
    let baseline_drop = 0.35 * label_pt * PT_TO_MM;
    let mut texts = Vec::with_capacity(2 * n + 2);
    let top_y = page_h - margin - pitch / 2.0 - baseline_drop;
    let bottom_y = margin + pitch / 2.0 - baseline_drop;
    for (line, label) in top_labels(n).into_iter().enumerate() {
        texts.push(centered(label, x_at(line), top_y, label_pt));
    }
    for (line, label) in bottom_labels(perm).into_iter().enumerate() {
        texts.push(centered(label, x_at(line), bottom_y, label_pt));
    }

    if let Some(title) = &config.title {
        let title_pt = label_pt + 4.0;
        texts.push(centered(
            title.clone(),
            config.page_width_mm / 2.0,
            page_h - margin / 2.0,
            title_pt,
        ));
    }
    if config.show_footer {
        texts.push(TextItem {
            text: meta.footer_text(ladder),
            x: margin,
            y: margin / 2.0,
            size_pt: config.footer_font_pt,
        });
    }

    Ok(Drawing {
        page_width_mm: config.page_width_mm,
        page_height_mm: config.page_height_mm,
        stroke_pt: config.stroke_pt,
        title: config.title.clone().unwrap_or_else(|| "Amidakuji".to_string()),
        segments,
        texts,
    })
}

fn centered(text: String, x: f32, y: f32, size_pt: f32) -> TextItem {
    let width = text_width_mm(&text, size_pt);
    TextItem {
        text,
        x: x - width / 2.0,
        y,
        size_pt,
    }
}

/// Advance width of `text` set in Helvetica at `size_pt`, in millimetres.
pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(helvetica_advance).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

/// Helvetica advance widths (1/1000 em) for the glyphs labels use.
fn helvetica_advance(ch: char) -> u32 {
    match ch {
        '0'..='9' => 556,
        'I' => 278,
        'J' => 500,
        'F' | 'T' | 'Z' => 611,
        'L' => 556,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'G' | 'O' | 'Q' => 778,
        'M' => 833,
        'W' => 944,
        'A'..='Z' => 667,
        ' ' => 278,
        _ => 556,
    }
}
