use super::{TextSelection, ToolbarAction};

/// Apply `action` to the textarea's current selection in place.
///
/// Refocuses the textarea and moves the caret past the insertion. Returns the
/// new content so the caller can store it.
pub(crate) fn apply_to_textarea(
    textarea: &web_sys::HtmlTextAreaElement,
    action: &ToolbarAction,
) -> String {
    let value = textarea.value();
    let len = value.encode_utf16().count() as u32;

    let start = textarea.selection_start().ok().flatten().unwrap_or(len);
    let end = textarea.selection_end().ok().flatten().unwrap_or(start);

    let edit = action.apply(&value, TextSelection::new(start, end));

    textarea.set_value(&edit.content);
    let _ = textarea.focus();
    if let Some(caret) = edit.caret {
        let _ = textarea.set_selection_range(caret, caret);
    }

    edit.content
}
