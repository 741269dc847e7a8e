mod block;
mod config;
mod error;
mod formatter;
mod html;
mod render;
mod typst;

pub mod generator;
pub mod prompts;
pub mod session;

pub use block::{Block, Span};
pub use config::{Config, ModelConfig, OutputConfig};
pub use error::Error;
pub use formatter::{format, parse_spans};
pub use html::Html;
pub use render::{OutputFormat, PlainText, Render};
pub use typst::Typst;

use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Convert a generated guide to Typst markup.
pub fn guide_to_typst(guide: &str) -> String {
    Typst.render(&format(guide))
}

/// Convert a generated guide to an HTML fragment.
pub fn guide_to_html(guide: &str) -> String {
    Html.render(&format(guide))
}

/// Render blocks in the requested output format.
pub fn render_blocks(blocks: &[Block], output: OutputFormat, config: &OutputConfig) -> Result<String, Error> {
    let rendered = match output {
        OutputFormat::Text => PlainText {
            bullet: config.bullet.clone(),
        }
        .render(blocks),
        OutputFormat::Html => Html.render(blocks),
        OutputFormat::Typst => Typst.render(blocks),
        OutputFormat::Json => serde_json::to_string_pretty(blocks)?,
    };
    Ok(rendered)
}

/// Convert formatted blocks to PDF bytes.
pub fn blocks_to_pdf(blocks: &[Block]) -> Result<Vec<u8>, Error> {
    use typst_library::layout::PagedDocument;

    let typst_content = Typst.render(blocks);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Typst(format!("{:?}", e)))?;

    tracing::debug!(pages = doc.pages.len(), "compiled guide");

    typst_pdf::pdf(&doc, &PdfOptions::default()).map_err(|e| Error::Pdf(format!("{:?}", e)))
}

/// Convert a generated guide to PDF bytes.
pub fn guide_to_pdf(guide: &str) -> Result<Vec<u8>, Error> {
    blocks_to_pdf(&format(guide))
}
