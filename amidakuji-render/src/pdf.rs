//! PDF writer.
//!
//! Draws a [`Drawing`] onto a single page with the builtin Helvetica face, so
//! no font files are needed at runtime.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Line, Mm, PdfDocument, PdfDocumentReference, Point};
use thiserror::Error;
use tracing::info;

use crate::layout::Drawing;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF backend error: {0}")]
    Pdf(String),

    #[error(transparent)]
    Ladder(#[from] amidakuji_core::LadderError),

    #[error("permutation covers {permutation} lines but the ladder has {lines}")]
    Mismatch { lines: usize, permutation: usize },
}

fn build_document(drawing: &Drawing) -> Result<PdfDocumentReference, RenderError> {
    let (doc, page, layer) = PdfDocument::new(
        drawing.title.as_str(),
        Mm(drawing.page_width_mm),
        Mm(drawing.page_height_mm),
        "ladder",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    layer.set_outline_thickness(drawing.stroke_pt);
    for seg in &drawing.segments {
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(seg.x1), Mm(seg.y1)), false),
                (Point::new(Mm(seg.x2), Mm(seg.y2)), false),
            ],
            is_closed: false,
        });
    }
    for text in &drawing.texts {
        layer.use_text(text.text.as_str(), text.size_pt, Mm(text.x), Mm(text.y), &font);
    }
    Ok(doc)
}

/// Render to an in-memory PDF.
pub fn render_pdf_bytes(drawing: &Drawing) -> Result<Vec<u8>, RenderError> {
    build_document(drawing)?
        .save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

/// Render to `path`, creating missing parent directories.
pub fn render_pdf(drawing: &Drawing, path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let doc = build_document(drawing)?;
    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    info!(path = %path.display(), "wrote PDF");
    Ok(())
}
