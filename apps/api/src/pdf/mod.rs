// Resume PDF export: page options, Helvetica metrics, cursor layout, printpdf rendering.
// Rendering is CPU-bound; handlers run it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod options;
pub mod render;

pub use options::PdfOptions;
pub use render::render_resume;
