//! Integration tests for chordstage
//!
//! Runs whole songs through classification, transposition and rendering.

use chordstage::notes::{normalize, transpose, AMERICAN_NAMES, LATIN_NAMES};
use chordstage::{
    analyze, classify_line, render_line, render_text, to_plain_text, transpose_text, Alignment,
    LineKind, Song, Style, TokenKind,
};
use std::fs;

const PESCADOR: &str = r#"---
title: Pescador de Hombres
author: Cesáreo Gabaráin
category: Entrada
---
Do          Sol
Tú has venido a la orilla
Rem               Sol
no has buscado ni a sabios ni a ricos
            Do
tan solo quieres que yo te siga

[Coro]
Do                 Fa      Do
Señor, me has mirado a los ojos"#;

fn plain_style() -> Style {
    Style {
        color: "c".to_string(),
        bold: false,
    }
}

#[test]
fn test_round_trip_for_every_root_and_offset() {
    for root in AMERICAN_NAMES.iter().chain(LATIN_NAMES.iter()) {
        for s in -24..=24 {
            let there = transpose(root, s).unwrap();
            assert_eq!(transpose(there, -s), Some(*root), "{} by {}", root, s);
        }
        assert_eq!(transpose(root, 12), Some(*root));
        assert_eq!(transpose(root, 0), Some(*root));
    }
}

#[test]
fn test_flat_aliases_normalize() {
    let aliases = [
        ("Db", "C#"),
        ("Eb", "D#"),
        ("Gb", "F#"),
        ("Ab", "G#"),
        ("Bb", "A#"),
        ("Sib", "La#"),
    ];
    for (flat, sharp) in aliases {
        assert_eq!(normalize(flat), Some(sharp));
        assert_eq!(normalize(sharp), Some(sharp));
    }
}

#[test]
fn test_line_classification() {
    assert_eq!(classify_line("G       C        D"), LineKind::Chord);
    assert_eq!(classify_line("Tú has venido a la orilla"), LineKind::Lyric);
    assert_eq!(classify_line(""), LineKind::Blank);
}

#[test]
fn test_bare_a_depends_on_line() {
    let lyric = analyze("A la orilla del mar sereno", 0);
    assert_eq!(lyric[0].tokens[0].kind, TokenKind::Plain);

    let chords = analyze("A      Am", 0);
    assert_eq!(chords[0].tokens[0].kind, TokenKind::Chord);

    let mixed = analyze("Am la orilla del mar sereno", 0);
    assert_eq!(mixed[0].kind, LineKind::Lyric);
    assert_eq!(mixed[0].tokens[0].kind, TokenKind::Chord);
}

#[test]
fn test_latin_song_stays_latin() {
    let song = Song::parse(PESCADOR).unwrap();
    let text = song.transposed_text(2);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Re          La");
    assert_eq!(lines[1], "Tú has venido a la orilla");
    assert_eq!(lines[2], "Mim               La");
    assert_eq!(lines[4], "            Re");
    assert_eq!(lines[7], "[Coro]");
    assert_eq!(lines[8], "Re                 Sol      Re");

    for line in song.analyze(2) {
        for chord in line.chords() {
            assert!(
                LATIN_NAMES.iter().any(|name| chord.transposed.starts_with(name)),
                "{} is not Latin",
                chord.transposed
            );
        }
    }
}

#[test]
fn test_zero_offset_preserves_body() {
    let song = Song::parse(PESCADOR).unwrap();
    assert_eq!(song.transposed_text(0), song.body);
    let lines = song.analyze(0);
    assert_eq!(to_plain_text(&lines, Alignment::Compensate), song.body);
}

#[test]
fn test_octave_offset_renders_same_roots() {
    let style = plain_style();
    assert_eq!(
        render_line("C Dm G7", -12, &style),
        render_line("C Dm G7", 0, &style)
    );
}

#[test]
fn test_blank_lines_keep_their_place() {
    let html = render_text("Do\n\nSol", 0, &plain_style());
    let parts: Vec<&str> = html.split("<br>").collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[1], "&nbsp;");
}

#[test]
fn test_whitespace_runs_survive_rendering() {
    let html = render_line("G       C        D", 0, &plain_style());
    assert!(html.contains(&format!("</span>{}<span", "&nbsp;".repeat(7))));
    assert!(html.contains(&format!("</span>{}<span", "&nbsp;".repeat(8))));
}

#[test]
fn test_inline_bracket_chords() {
    let text = "[Am]Tú has ve[G]nido a la ori[C]lla";
    assert_eq!(
        transpose_text(text, 2),
        "[Bm]Tú has ve[A]nido a la ori[D]lla"
    );
}

#[test]
fn test_song_file_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pescador.txt");
    fs::write(&path, PESCADOR).unwrap();

    let song = Song::load(&path).unwrap();
    let html = song.render(-2, &Style::new("teal"));
    assert!(html.starts_with("<h1>Pescador de Hombres</h1>\n"));
    assert!(html.contains("<span style=\"color:teal; font-weight:bold;\">La#</span>"));
    assert!(html.contains("[Coro]"));
    assert!(html.contains("Tú&nbsp;has&nbsp;venido"));
}

#[test]
fn test_json_model() {
    let lines = analyze("Do  Sol\nTú has venido a la orilla", 5);
    let json = serde_json::to_value(&lines).unwrap();
    assert_eq!(json[0]["kind"], "chord");
    assert_eq!(json[0]["tokens"][2]["transposed"], "Do");
    assert_eq!(json[1]["kind"], "lyric");
}

#[test]
fn test_letter_f_chords_with_word_suffixes() {
    let lines = analyze("Faug     Fadd9     C", 2);
    assert_eq!(lines[0].transposed(), "Gaug     Gadd9     D");
    assert_eq!(lines[0].chords().count(), 3);

    let lyric = analyze("Fadd9 tan solo quieres que yo te siga", 2);
    assert_eq!(lyric[0].kind, LineKind::Lyric);
    assert_eq!(lyric[0].tokens[0].kind, TokenKind::Chord);
    assert_eq!(lyric[0].tokens[0].transposed, "Gadd9");
}

#[test]
fn test_extreme_offsets_do_not_panic() {
    assert_eq!(transpose_text("B    Do", i32::MAX), "F#    Sol");
    assert_eq!(transpose_text("B    Do", i32::MIN), "D#    Mi");
    for s in [-1000, -37, 37, 1000] {
        let there = transpose_text("C  Am  G7", s);
        assert_eq!(transpose_text(&there, -s), "C  Am  G7", "offset {}", s);
    }

    let song = Song::parse("---\ntranspose: 2147483647\n---\nDo   Sol").unwrap();
    assert_eq!(song.offset(10), i32::MAX);
    assert_eq!(song.transposed_text(10), "Sol   Re");
}

#[test]
fn test_trailing_newline_and_empty_text() {
    assert_eq!(render_text("", 0, &plain_style()), "&nbsp;");
    let html = render_text("Do\n\n", 0, &plain_style());
    assert_eq!(html.split("<br>").count(), 3);
    assert_eq!(transpose_text("Do  Sol\n", 2), "Re  La\n");
}
