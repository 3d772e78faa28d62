use comrak::{markdown_to_html, Options};

fn preview_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

/// Render a draft to HTML for the preview pane.
///
/// Raw HTML inside the draft is omitted rather than passed through.
pub(crate) fn render_preview(markdown: &str) -> String {
    markdown_to_html(markdown, &preview_options())
}
