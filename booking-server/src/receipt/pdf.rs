//! PDF rendering (printpdf, A4, built-in Helvetica)

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use super::ReceiptError;
use super::layout::{Line, ReceiptDocument};

/// Turns a laid-out receipt into a downloadable document
pub trait DocumentRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn render(&self, document: &ReceiptDocument) -> Result<Vec<u8>, ReceiptError>;
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;
const VALUE_COLUMN: f32 = 75.0;
const LAYER: &str = "receipt";

/// A4 PDF renderer
#[derive(Debug, Default, Clone)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Cursor over the current page; starts a new page when the bottom margin
/// is reached
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageCursor<'_> {
    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN_BOTTOM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN_TOP;
        }
        self.y -= height;
    }

    fn write(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }
}

impl DocumentRenderer for PdfRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn render(&self, document: &ReceiptDocument) -> Result<Vec<u8>, ReceiptError> {
        let (doc, page, layer) =
            PdfDocument::new(&document.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ReceiptError::Render(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| ReceiptError::Render(e.to_string()))?,
        };

        let mut cursor = PageCursor {
            layer: doc.get_page(page).get_layer(layer),
            doc: &doc,
            y: PAGE_HEIGHT - MARGIN_TOP,
        };

        for line in &document.lines {
            match line {
                Line::Title(text) => {
                    cursor.advance(10.0);
                    cursor.write(text, 18.0, MARGIN_LEFT, &fonts.bold);
                    cursor.advance(4.0);
                }
                Line::Heading(text) => {
                    cursor.advance(8.0);
                    cursor.write(text, 13.0, MARGIN_LEFT, &fonts.bold);
                }
                Line::Field { label, value } => {
                    cursor.advance(6.5);
                    cursor.write(label, 11.0, MARGIN_LEFT, &fonts.bold);
                    cursor.write(value, 11.0, VALUE_COLUMN, &fonts.regular);
                }
                Line::Text(text) => {
                    cursor.advance(6.5);
                    cursor.write(text, 10.0, MARGIN_LEFT, &fonts.regular);
                }
                Line::Separator => {
                    cursor.advance(6.0);
                    cursor.write(&"-".repeat(90), 10.0, MARGIN_LEFT, &fonts.regular);
                }
                Line::Blank => cursor.advance(4.0),
            }
        }

        drop(cursor);
        doc.save_to_bytes()
            .map_err(|e| ReceiptError::Render(e.to_string()))
    }
}
