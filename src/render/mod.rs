pub mod labels;
pub mod page;
pub mod panel;
pub mod plot;

pub use page::{index_page, render_error_page, render_page, visualization_title};
pub use panel::{results_panel_html, results_panel_text, slider_labels};
pub use plot::{build_figure, Figure};
