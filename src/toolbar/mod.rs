mod textarea;

pub(crate) use textarea::apply_to_textarea;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Placeholder words a template may carry. The leftmost match wins, so
/// `대체 텍스트` is replaced whole when it appears before a bare `텍스트`.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new("텍스트|대체 텍스트").unwrap_or_else(|e| panic!("invalid placeholder regex: {e}"))
});

/// Substituted for the placeholder when nothing is selected.
pub(crate) const PLACEHOLDER_FALLBACK: &str = "텍스트";

const QUOTE_PREFIX: &str = "> ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Prefix inserted before the selection, e.g. `"## "`.
    Heading(String),
    /// Prefix inserted before every selected line, e.g. `"- "`.
    List(String),
    /// Rule marker placed on its own line; the selection is dropped.
    Hr(String),
    Quote,
    Code,
    /// Template such as `"**텍스트**"`; `None` inserts nothing.
    Template(Option<String>),
}

/// Selection bounds in UTF-16 code units, as reported by a textarea.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextSelection {
    pub start: u32,
    pub end: u32,
}

impl TextSelection {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn caret(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub content: String,
    /// Caret position (UTF-16) after the insertion; `None` when nothing was inserted.
    pub caret: Option<u32>,
}

pub(crate) fn utf16_to_byte_idx(s: &str, pos_utf16: u32) -> usize {
    if pos_utf16 == 0 {
        return 0;
    }
    let mut acc: u32 = 0;
    for (i, ch) in s.char_indices() {
        let w = ch.len_utf16() as u32;
        if acc + w > pos_utf16 {
            return i;
        }
        acc += w;
        if acc == pos_utf16 {
            return i + ch.len_utf8();
        }
    }
    s.len()
}

fn utf16_len(s: &str) -> u32 {
    s.encode_utf16().count() as u32
}

fn prefix_lines(selected: &str, prefix: &str) -> String {
    selected
        .split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fill_template(template: &str, selected: &str) -> String {
    let replacement = if selected.is_empty() {
        PLACEHOLDER_FALLBACK
    } else {
        selected
    };
    PLACEHOLDER
        .replace(template, NoExpand(replacement))
        .into_owned()
}

impl ToolbarAction {
    /// Text that replaces `selected`.
    pub fn insertion(&self, selected: &str) -> String {
        match self {
            ToolbarAction::Heading(prefix) => format!("{prefix}{selected}"),
            ToolbarAction::List(prefix) => prefix_lines(selected, prefix),
            ToolbarAction::Hr(marker) => format!("\n{marker}\n"),
            ToolbarAction::Quote => prefix_lines(selected, QUOTE_PREFIX),
            ToolbarAction::Code => format!("```\n{selected}\n```"),
            ToolbarAction::Template(Some(template)) => fill_template(template, selected),
            ToolbarAction::Template(None) => String::new(),
        }
    }

    /// Replace `selection` in `content` with this action's insertion.
    ///
    /// Inverted selections are normalized and offsets past the end are
    /// clamped, so the result is always well-formed.
    pub fn apply(&self, content: &str, selection: TextSelection) -> TextEdit {
        let (lo, hi) = if selection.start <= selection.end {
            (selection.start, selection.end)
        } else {
            (selection.end, selection.start)
        };

        let start = utf16_to_byte_idx(content, lo);
        let end = utf16_to_byte_idx(content, hi).max(start);

        let inserted = self.insertion(&content[start..end]);

        let mut next = String::with_capacity(content.len() + inserted.len());
        next.push_str(&content[..start]);
        next.push_str(&inserted);
        next.push_str(&content[end..]);

        let caret = if inserted.is_empty() {
            None
        } else {
            Some(utf16_len(&content[..start]) + utf16_len(&inserted))
        };

        TextEdit {
            content: next,
            caret,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToolbarKind {
    Heading,
    List,
    Hr,
    Quote,
    Code,
    Template,
}

/// A toolbar button definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ToolbarButton {
    pub label: &'static str,
    pub hint: &'static str,
    pub kind: ToolbarKind,
    pub value: Option<&'static str>,
}

impl ToolbarButton {
    pub fn action(&self) -> ToolbarAction {
        let value = || self.value.unwrap_or_default().to_string();
        match self.kind {
            ToolbarKind::Heading => ToolbarAction::Heading(value()),
            ToolbarKind::List => ToolbarAction::List(value()),
            ToolbarKind::Hr => ToolbarAction::Hr(value()),
            ToolbarKind::Quote => ToolbarAction::Quote,
            ToolbarKind::Code => ToolbarAction::Code,
            ToolbarKind::Template => ToolbarAction::Template(self.value.map(str::to_string)),
        }
    }
}

const fn button(
    label: &'static str,
    hint: &'static str,
    kind: ToolbarKind,
    value: Option<&'static str>,
) -> ToolbarButton {
    ToolbarButton {
        label,
        hint,
        kind,
        value,
    }
}

pub(crate) static TOOLBAR_BUTTONS: [ToolbarButton; 14] = [
    button("H1", "제목 1", ToolbarKind::Heading, Some("# ")),
    button("H2", "제목 2", ToolbarKind::Heading, Some("## ")),
    button("H3", "제목 3", ToolbarKind::Heading, Some("### ")),
    button("B", "굵게", ToolbarKind::Template, Some("**텍스트**")),
    button("I", "기울임", ToolbarKind::Template, Some("*텍스트*")),
    button("S", "취소선", ToolbarKind::Template, Some("~~텍스트~~")),
    button("Link", "링크", ToolbarKind::Template, Some("[텍스트](url)")),
    button("Img", "이미지", ToolbarKind::Template, Some("![대체 텍스트](url)")),
    button("`", "인라인 코드", ToolbarKind::Template, Some("`텍스트`")),
    button("•", "글머리 기호", ToolbarKind::List, Some("- ")),
    button("1.", "번호 목록", ToolbarKind::List, Some("1. ")),
    button("❝", "인용", ToolbarKind::Quote, None),
    button("</>", "코드 블록", ToolbarKind::Code, None),
    button("―", "구분선", ToolbarKind::Hr, Some("---")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sel(start: u32, end: u32) -> TextSelection {
        TextSelection::new(start, end)
    }

    #[test]
    fn test_heading_prefixes_selection() {
        let edit = ToolbarAction::Heading("## ".to_string()).apply("hello world", sel(6, 11));
        assert_eq!(edit.content, "hello ## world");
        assert_eq!(edit.caret, Some(14));
    }

    #[test]
    fn test_heading_on_empty_selection_inserts_prefix_at_caret() {
        let edit = ToolbarAction::Heading("# ".to_string()).apply("abc", TextSelection::caret(3));
        assert_eq!(edit.content, "abc# ");
        assert_eq!(edit.caret, Some(5));
    }

    #[test]
    fn test_list_prefixes_every_line() {
        let edit = ToolbarAction::List("- ".to_string()).apply("a\nb\nc", sel(0, 5));
        assert_eq!(edit.content, "- a\n- b\n- c");
        assert_eq!(edit.caret, Some(11));
    }

    #[test]
    fn test_hr_drops_selected_text() {
        let edit = ToolbarAction::Hr("---".to_string()).apply("abcXYZdef", sel(3, 6));
        assert_eq!(edit.content, "abc\n---\ndef");
        assert_eq!(edit.caret, Some(8));
    }

    #[test]
    fn test_quote_prefixes_every_line() {
        let edit = ToolbarAction::Quote.apply("x\none\ntwo", sel(2, 9));
        assert_eq!(edit.content, "x\n> one\n> two");
    }

    #[test]
    fn test_code_wraps_selection_in_fence() {
        let edit = ToolbarAction::Code.apply("let x = 1;", sel(0, 10));
        assert_eq!(edit.content, "```\nlet x = 1;\n```");
        assert_eq!(edit.caret, Some(18));
    }

    #[test]
    fn test_code_twice_nests_fences() {
        let once = ToolbarAction::Code.apply("x", sel(0, 1));
        let len = once.content.encode_utf16().count() as u32;
        let twice = ToolbarAction::Code.apply(&once.content, sel(0, len));
        assert_eq!(twice.content, "```\n```\nx\n```\n```");
    }

    #[rstest]
    #[case("**텍스트**", "bold", "**bold**")]
    #[case("**텍스트**", "", "**텍스트**")]
    #[case("[텍스트](url)", "site", "[site](url)")]
    #[case("![대체 텍스트](url)", "cat", "![cat](url)")]
    #[case("![대체 텍스트](url)", "", "![텍스트](url)")]
    #[case("텍스트 텍스트", "a", "a 텍스트")]
    #[case("<kbd></kbd>", "ctrl", "<kbd></kbd>")]
    fn test_template_substitution(
        #[case] template: &str,
        #[case] selected: &str,
        #[case] expected: &str,
    ) {
        let action = ToolbarAction::Template(Some(template.to_string()));
        assert_eq!(action.insertion(selected), expected);
    }

    #[test]
    fn test_template_replacement_is_literal() {
        let action = ToolbarAction::Template(Some("**텍스트**".to_string()));
        assert_eq!(action.insertion("$0 cost"), "**$0 cost**");
    }

    #[test]
    fn test_template_without_value_inserts_nothing_and_keeps_caret() {
        let edit = ToolbarAction::Template(None).apply("abcdef", sel(2, 4));
        assert_eq!(edit.content, "abef");
        assert_eq!(edit.caret, None);
    }

    #[test]
    fn test_offsets_are_utf16_code_units() {
        // "한글" is two UTF-16 units but six UTF-8 bytes; "😀" is two UTF-16 units.
        let content = "한글 😀 끝";
        let edit = ToolbarAction::Template(Some("**텍스트**".to_string())).apply(content, sel(3, 5));
        assert_eq!(edit.content, "한글 **😀** 끝");
        assert_eq!(edit.caret, Some(3 + 6));
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let edit = ToolbarAction::Code.apply("ab", sel(1, 99));
        assert_eq!(edit.content, "a```\nb\n```");
    }

    #[test]
    fn test_inverted_selection_is_normalized() {
        let edit = ToolbarAction::Heading("# ".to_string()).apply("hello", sel(5, 0));
        assert_eq!(edit.content, "# hello");
    }

    #[test]
    fn test_utf16_to_byte_idx_never_splits_a_char() {
        let s = "a😀b";
        assert_eq!(utf16_to_byte_idx(s, 0), 0);
        assert_eq!(utf16_to_byte_idx(s, 1), 1);
        // Pointing into the middle of the surrogate pair snaps back to the char start.
        assert_eq!(utf16_to_byte_idx(s, 2), 1);
        assert_eq!(utf16_to_byte_idx(s, 3), 5);
        assert_eq!(utf16_to_byte_idx(s, 4), 6);
        assert_eq!(utf16_to_byte_idx(s, 10), 6);
    }

    #[test]
    fn test_toolbar_buttons_map_to_their_actions() {
        let h2 = TOOLBAR_BUTTONS.iter().find(|b| b.label == "H2").map(|b| b.action());
        assert_eq!(h2, Some(ToolbarAction::Heading("## ".to_string())));

        let quote = TOOLBAR_BUTTONS.iter().find(|b| b.kind == ToolbarKind::Quote).map(|b| b.action());
        assert_eq!(quote, Some(ToolbarAction::Quote));

        let image = TOOLBAR_BUTTONS.iter().find(|b| b.label == "Img").map(|b| b.action());
        assert_eq!(
            image,
            Some(ToolbarAction::Template(Some("![대체 텍스트](url)".to_string())))
        );
    }
}
