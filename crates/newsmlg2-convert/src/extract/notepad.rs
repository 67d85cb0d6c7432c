//! Editorial note and notepad extractors

use newsmlg2_domain::{EdNote, EdNoteAttr};

use crate::record::{non_null, value_to_string, Record};

const ROLE_EMBARGO: &str = "dpaednoterole:embargo";
const ROLE_CLOSING_LINE: &str = "dpaednoterole:closingline";
const ROLE_CORRECTION: &str = "dpaednoterole:correctionshort";
const ROLE_PICTURE: &str = "dpaednoterole:picture";
const ROLE_GENRE_NOTE: &str = "dpaednoterole:genrenote";

/// All editorial notes
pub fn ednotes(record: &Record) -> Vec<EdNote> {
    record.notepad_items(
        None,
        &[EdNoteAttr::Role, EdNoteAttr::Text, EdNoteAttr::IsPublishable],
    )
}

fn note_texts(record: &Record, role: &str) -> Vec<Option<String>> {
    record
        .notepad_items(Some(role), &[EdNoteAttr::Text])
        .into_iter()
        .map(|note| note.ednote)
        .collect()
}

/// First embargo note, if any
pub fn embargo_notice(record: &Record) -> Option<String> {
    note_texts(record, ROLE_EMBARGO).into_iter().next().flatten()
}

/// First embargo note, `""` when there is none
pub fn embargo_note(record: &Record) -> String {
    embargo_notice(record).unwrap_or_default()
}

/// First picture note, `""` when there is none
pub fn picture_note(record: &Record) -> String {
    note_texts(record, ROLE_PICTURE).into_iter().next().flatten().unwrap_or_default()
}

/// First genre note, `""` when there is none
pub fn genre_note(record: &Record) -> String {
    note_texts(record, ROLE_GENRE_NOTE).into_iter().next().flatten().unwrap_or_default()
}

/// All closing lines, concatenated
pub fn closing_line(record: &Record) -> String {
    note_texts(record, ROLE_CLOSING_LINE).into_iter().flatten().collect()
}

/// All short corrections, joined by a space
pub fn correction(record: &Record) -> String {
    note_texts(record, ROLE_CORRECTION)
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Public notepad markup
pub fn public_notepad(record: &Record) -> Option<String> {
    notepad_field(record, "public_html")
}

/// Non-public notepad markup
pub fn non_public_notepad(record: &Record) -> Option<String> {
    notepad_field(record, "nonpublic_html")
}

/// Notepad header markup
///
/// An absent header reads as `""`; only an explicit `null` yields `None`.
pub fn notepad_header(record: &Record) -> Option<String> {
    match record.get_object("notepad").and_then(|n| n.get("header_html")) {
        None => Some(String::new()),
        Some(value) => value_to_string(value),
    }
}

fn notepad_field(record: &Record, key: &str) -> Option<String> {
    record
        .get_object("notepad")
        .and_then(|n| non_null(n.get(key)))
        .and_then(value_to_string)
}
