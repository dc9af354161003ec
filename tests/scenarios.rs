//! End-to-end editing scenarios driven through `Host::dispatch`.
//!
//! Buffers are written with selection markers: `|` is a caret and `[...]`
//! a non-empty selection.

use smartclip::core::{
    Command, Picker, PickerCallback, PickerChoice, PickerStyle, SystemClipboard, TextView,
};
use smartclip::{Dispatch, Host, MemoryClipboard, Region, TextBuffer};
use smartclip_config::Config;

fn parse(marked: &str) -> (String, Vec<Region>) {
    let mut text = String::new();
    let mut regions = Vec::new();
    let mut open = None;
    let mut pos = 0;
    for ch in marked.chars() {
        match ch {
            '|' => regions.push(Region::caret(pos)),
            '[' => open = Some(pos),
            ']' => regions.push(Region::new(open.take().expect("unbalanced ]"), pos)),
            _ => {
                text.push(ch);
                pos += 1;
            }
        }
    }
    (text, regions)
}

fn view(marked: &str) -> TextBuffer {
    let (text, regions) = parse(marked);
    let mut buffer = TextBuffer::from_text(&text);
    buffer.set_selections(regions);
    buffer
}

/// Move the selections of `buffer`; the unmarked text must match the buffer
fn select(buffer: &mut TextBuffer, marked: &str) {
    let (text, regions) = parse(marked);
    assert_eq!(buffer.text(), text, "selection markers placed on stale text");
    buffer.set_selections(regions);
}

fn render(buffer: &TextBuffer) -> String {
    let text: Vec<char> = buffer.text().chars().collect();
    let regions = buffer.selections();
    let mut out = String::new();
    for pos in 0..=text.len() {
        for region in &regions {
            if !region.is_empty() && region.end == pos {
                out.push(']');
            }
        }
        for region in &regions {
            if region.is_empty() && region.start == pos {
                out.push('|');
            } else if !region.is_empty() && region.start == pos {
                out.push('[');
            }
        }
        if let Some(ch) = text.get(pos) {
            out.push(*ch);
        }
    }
    out
}

#[derive(Default)]
struct ScriptedPicker {
    labels: Vec<String>,
    style: Option<PickerStyle>,
    pending: Option<PickerCallback>,
}

impl Picker for ScriptedPicker {
    fn show(&mut self, labels: Vec<String>, style: PickerStyle, on_choose: PickerCallback) {
        self.labels = labels;
        self.style = Some(style);
        self.pending = Some(on_choose);
    }
}

struct Editor {
    host: Host<MemoryClipboard>,
    clipboard: MemoryClipboard,
    picker: ScriptedPicker,
}

impl Editor {
    fn new() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> Self {
        let clipboard = MemoryClipboard::new();
        Self {
            host: Host::new(config, clipboard.clone()),
            clipboard,
            picker: ScriptedPicker::default(),
        }
    }

    fn run(&mut self, name: &str, buffer: &mut TextBuffer) -> Dispatch {
        self.host
            .dispatch(name, None, buffer, &mut self.picker)
            .expect("command failed")
    }

    fn choose(&mut self, choice: PickerChoice, buffer: &mut TextBuffer) -> bool {
        let callback = self.picker.pending.take().expect("picker not shown");
        self.host
            .on_picker_choice(callback, choice, buffer, &mut self.picker)
            .expect("history paste failed")
    }
}

#[test]
fn test_copy_paste_pairs_regions() {
    let mut editor = Editor::new();
    let mut buffer = view("Select [THIS] and [THIS2]\n-><-\n-><-\n");

    assert_eq!(editor.run("copy", &mut buffer), Dispatch::Ran);
    select(&mut buffer, "Select THIS and THIS2\n->|<-\n->|<-\n");
    assert_eq!(editor.run("paste", &mut buffer), Dispatch::Ran);

    assert_eq!(
        render(&buffer),
        "Select THIS and THIS2\n->THIS|<-\n->THIS2|<-\n"
    );
    assert_eq!(
        editor.host.last_status(),
        Some("Pasted 9 characters over 2 selection regions")
    );
}

#[test]
fn test_cut_then_paste_twice() {
    let mut editor = Editor::new();
    let mut buffer = view("1. [THIS]\n2. [THIS2]\n");

    editor.run("cut", &mut buffer);
    assert_eq!(render(&buffer), "1. |\n2. |\n");

    editor.run("paste", &mut buffer);
    assert_eq!(render(&buffer), "1. THIS|\n2. THIS2|\n");

    editor.run("paste", &mut buffer);
    assert_eq!(render(&buffer), "1. THISTHIS|\n2. THIS2THIS2|\n");
}

#[test]
fn test_multiline_selection_broadcasts() {
    let mut editor = Editor::new();
    let mut buffer = view("[T-H-\n. . -I-S]\n-><-, -><-.\n");

    editor.run("copy", &mut buffer);
    select(&mut buffer, "T-H-\n. . -I-S\n->|<-, ->|<-.\n");
    editor.run("paste", &mut buffer);

    assert_eq!(
        buffer.text(),
        "T-H-\n. . -I-S\n->T-H-\n. . -I-S<-, ->T-H-\n. . -I-S<-.\n"
    );
    assert_eq!(editor.clipboard.contents(), "T-H-\n. . -I-S");
}

#[test]
fn test_identical_copies_collapse_to_one() {
    let mut editor = Editor::new();
    let mut buffer = view("[THIS] and [THIS]\n-><-\n");

    editor.run("copy", &mut buffer);
    assert_eq!(editor.clipboard.contents(), "THIS");
    assert_eq!(
        editor.host.last_status(),
        Some("Copied 4 characters")
    );

    select(&mut buffer, "THIS and THIS\n->|<-\n");
    editor.run("paste", &mut buffer);
    assert_eq!(render(&buffer), "THIS and THIS\n->THIS|<-\n");
}

#[test]
fn test_identical_cut_then_single_paste() {
    let mut editor = Editor::new();
    let mut buffer = view("1. [THIS]\n2. [THIS]\n");

    editor.run("cut", &mut buffer);
    assert_eq!(buffer.text(), "1. \n2. \n");

    select(&mut buffer, "1. |\n2. \n");
    editor.run("paste", &mut buffer);
    assert_eq!(render(&buffer), "1. THIS|\n2. \n");
}

#[test]
fn test_single_fragment_broadcasts_to_every_caret() {
    let mut editor = Editor::new();
    let mut buffer = view("[THIS] and [THIS]\n-><-\n-><-\n");

    editor.run("copy", &mut buffer);
    select(&mut buffer, "THIS and THIS\n->|<-\n->|<-\n");
    editor.run("paste", &mut buffer);
    assert_eq!(render(&buffer), "THIS and THIS\n->THIS|<-\n->THIS|<-\n");
}

#[test]
fn test_whole_line_copy_pastes_above_caret_line() {
    let mut editor = Editor::new();
    let mut buffer = view("  one ->|<-\n    two -><-\n");

    editor.run("copy", &mut buffer);
    assert_eq!(editor.clipboard.contents(), "  one -><-\n");

    select(&mut buffer, "  one -><-\n    two ->|<-\n");
    editor.run("paste", &mut buffer);
    assert_eq!(render(&buffer), "  one -><-\n  one -><-\n    two ->|<-\n");
}

#[test]
fn test_whole_lines_pair_with_carets() {
    let mut editor = Editor::new();
    let mut buffer = view("  one ->|<-,\n  and ->|<-.\n    two -><-,\n    and -><-.\n");

    editor.run("copy", &mut buffer);
    select(
        &mut buffer,
        "  one -><-,\n  and -><-.\n    two ->|<-,\n    and ->|<-.\n",
    );
    editor.run("paste", &mut buffer);

    assert_eq!(
        render(&buffer),
        "  one -><-,\n  and -><-.\n  one -><-,\n    two ->|<-,\n  and -><-.\n    and ->|<-.\n"
    );
}

#[test]
fn test_whole_line_cut_and_paste() {
    let mut editor = Editor::new();
    let mut buffer = view("  one ->|<-\n    two -><-\n");

    editor.run("cut", &mut buffer);
    assert_eq!(render(&buffer), "|    two -><-\n");

    select(&mut buffer, "    two ->|<-\n");
    editor.run("paste", &mut buffer);
    assert_eq!(render(&buffer), "  one -><-\n    two ->|<-\n");
}

#[test]
fn test_two_whole_lines_cut_into_one_caret() {
    let mut editor = Editor::new();
    let mut buffer = view("  one ->|<-,\n  and ->|<-.\n    two -><-.\n");

    editor.run("cut", &mut buffer);
    assert_eq!(buffer.text(), "    two -><-.\n");

    select(&mut buffer, "    two ->|<-.\n");
    editor.run("paste", &mut buffer);
    assert_eq!(render(&buffer), "  one -><-,\n  and -><-.\n    two ->|<-.\n");
}

#[test]
fn test_fragment_replaces_each_character() {
    let mut editor = Editor::new();
    let mut buffer = view("Select [THIS].\nby char: THIS.\n");

    editor.run("copy", &mut buffer);
    select(&mut buffer, "Select THIS.\nby char: [T][H][I][S].\n");
    editor.run("paste", &mut buffer);

    assert_eq!(
        render(&buffer),
        "Select THIS.\nby char: THIS|THIS|THIS|THIS|.\n"
    );
}

#[test]
fn test_external_clipboard_wins_over_store() {
    let mut editor = Editor::new();
    let mut buffer = view("[a] [b]\n");

    editor.run("copy", &mut buffer);
    editor.clipboard.set_text("outside").unwrap();

    select(&mut buffer, "a b\n|");
    editor.run("paste", &mut buffer);
    assert_eq!(buffer.text(), "a b\noutside");
    assert_eq!(editor.host.session().store().len(), 1);
}

#[test]
fn test_cut_leaves_skipped_carets_in_place() {
    let mut config = Config::default();
    config.editor.copy_with_empty_selection = false;
    let mut editor = Editor::with_config(config);
    let mut buffer = view("o|ne [two]\n");

    assert_eq!(editor.run("cut", &mut buffer), Dispatch::Ran);
    assert_eq!(render(&buffer), "o|ne |\n");
}

#[test]
fn test_empty_caret_without_line_copy_is_noop() {
    let mut config = Config::default();
    config.editor.copy_with_empty_selection = false;
    let mut editor = Editor::with_config(config);
    let mut buffer = view("some |line\n");

    assert_eq!(editor.run("copy", &mut buffer), Dispatch::NoOp);
    assert_eq!(editor.run("cut", &mut buffer), Dispatch::NoOp);
    assert_eq!(buffer.text(), "some line\n");
    assert!(editor.host.status_messages().is_empty());
}

#[test]
fn test_reloaded_settings_apply_to_next_command() {
    let mut editor = Editor::new();
    let mut buffer = view("some |line\n");
    assert_eq!(editor.run("copy", &mut buffer), Dispatch::Ran);

    let mut config = editor.host.config().clone();
    config.editor.copy_with_empty_selection = false;
    config.editor.paste_from_history_quick_panel = false;
    editor.host.set_config(config);

    assert_eq!(editor.run("copy", &mut buffer), Dispatch::NoOp);
    editor.run("paste_from_history", &mut buffer);
    assert_eq!(editor.picker.style, Some(PickerStyle::PopupMenu));
}

#[test]
fn test_paste_from_history_picker() {
    let mut editor = Editor::new();
    let mut buffer = view("[first]\n");
    editor.run("copy", &mut buffer);
    let mut second = view("[second\tline]");
    editor.run("copy", &mut second);

    assert_eq!(editor.run("paste_from_history", &mut buffer), Dispatch::Ran);
    assert_eq!(editor.picker.labels, vec!["second line", "first"]);
    assert_eq!(editor.picker.style, Some(PickerStyle::QuickPanel));

    select(&mut buffer, "first\n|");
    assert!(editor.choose(PickerChoice::Chosen(1), &mut buffer));
    assert_eq!(buffer.text(), "first\nfirst");
    assert_eq!(editor.clipboard.contents(), "first");
}

#[test]
fn test_cancelled_picker_changes_nothing() {
    let mut editor = Editor::new();
    let mut buffer = view("[word] ");
    editor.run("copy", &mut buffer);
    editor.run("paste_from_history", &mut buffer);

    assert!(!editor.choose(PickerChoice::from_host_index(-1), &mut buffer));
    assert_eq!(buffer.text(), "word ");
}

#[test]
fn test_indexed_history_command() {
    let mut editor = Editor::new();
    let mut buffer = view("[alpha] [beta] ");
    editor.run("copy", &mut buffer);
    select(&mut buffer, "alpha beta |");

    let result = editor
        .host
        .dispatch("paste_from_history_at", Some(0), &mut buffer, &mut editor.picker)
        .unwrap();
    assert_eq!(result, Dispatch::Ran);
    assert_eq!(buffer.text(), "alpha beta alphabeta");

    let missing = editor
        .host
        .dispatch("paste_from_history_at", None, &mut buffer, &mut editor.picker);
    assert!(missing.is_err());
}

#[test]
fn test_unknown_command_passes_through() {
    let mut editor = Editor::new();
    let mut buffer = view("abc|");
    assert_eq!(editor.run("select_all", &mut buffer), Dispatch::NotHandled);
    assert!(!editor
        .host
        .run(Command::PasteFromHistory, &mut buffer, &mut editor.picker)
        .unwrap());
}
