use esp32decode::commands::{decode_with, DecodeOutcome};
use esp32decode::extractor::extract_addresses;
use esp32decode::resolver::Symbolizer;
use esp32decode::utils::error::ResolveError;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

struct MapSymbolizer(HashMap<String, String>);

impl MapSymbolizer {
    fn new(entries: &[(&str, String)]) -> Self {
        Self(entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect())
    }
}

impl Symbolizer for MapSymbolizer {
    fn symbolize(&self, ip: &str) -> Result<String, ResolveError> {
        self.0
            .get(ip)
            .cloned()
            .ok_or_else(|| ResolveError::Other(format!("no symbol for {}", ip)))
    }
}

fn cwd() -> String {
    std::env::current_dir().unwrap().to_string_lossy().into_owned()
}

#[test]
fn test_strips_working_directory() {
    let cwd = cwd();
    let sym = MapSymbolizer::new(&[
        ("0x400123", format!("main at {}/src/main.c:42", cwd)),
        ("0x400456", format!("loop at {}/lib/loop.c:77", cwd)),
    ]);
    let mut out = Vec::new();

    let outcome = decode_with(&sym, " 0x400123:0x3ffb1230 0x400456:0x3ffb1200", &mut out).unwrap();

    assert_eq!(outcome, DecodeOutcome::Printed { frames: 2 });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "main at src/main.c:42\nloop at lib/loop.c:77\n"
    );
}

#[test]
fn test_strips_deeper_common_directory() {
    let cwd = cwd();
    let sym = MapSymbolizer::new(&[
        ("0x400123", format!("main at {}/build/src/main.c:42", cwd)),
        ("0x400456", format!("loop at {}/build/src/loop.c:77", cwd)),
    ]);
    let mut out = Vec::new();

    decode_with(&sym, " 0x400123:0x3ffb1230 0x400456:0x3ffb1200", &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "main at main.c:42\nloop at loop.c:77\n"
    );
}

#[test]
fn test_partial_failure_keeps_going() {
    let cwd = cwd();
    let sym = MapSymbolizer::new(&[
        ("0x400456", format!("loop at {}/main/loop.c:77", cwd)),
        ("0x400789", format!("task at {}/components/task.c:9", cwd)),
    ]);
    let mut out = Vec::new();

    let outcome = decode_with(
        &sym,
        " 0x400123:0x3ffb1230 0x400456:0x3ffb1200 0x400789:0x3ffb11e0",
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome, DecodeOutcome::Printed { frames: 2 });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error decoding address 0x400123: no symbol for 0x400123\n\
         loop at main/loop.c:77\n\
         task at components/task.c:9\n"
    );
}

#[test]
fn test_single_resolved_path_is_left_unchanged() {
    // The common path of one file is the file itself, longer than the cwd,
    // so the chosen prefix ends in `main.c:77/` and matches nothing.
    let cwd = cwd();
    let sym = MapSymbolizer::new(&[("0x400456", format!("loop at {}/main.c:77", cwd))]);
    let mut out = Vec::new();

    let outcome = decode_with(&sym, " 0x400123:0x3ffb1230 0x400456:0x3ffb1200", &mut out).unwrap();

    assert_eq!(outcome, DecodeOutcome::Printed { frames: 1 });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "Error decoding address 0x400123: no symbol for 0x400123\nloop at {}/main.c:77\n",
            cwd
        )
    );
}

#[test]
fn test_output_is_deterministic() {
    let cwd = cwd();
    let sym = MapSymbolizer::new(&[("0x1", format!("f at {}/a/f.c:1", cwd))]);
    let input = "Backtrace: 0x1:0x2 0x1:0x2 0x9:0x2";

    let mut first = Vec::new();
    let mut second = Vec::new();
    decode_with(&sym, input, &mut first).unwrap();
    decode_with(&sym, input, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_extract_counts_pairs() {
    let input = (0..16)
        .map(|i| format!(" 0x4008{:04x}:0x3ffb{:04X}", i, i))
        .collect::<String>();

    let pairs = extract_addresses(&input);

    assert_eq!(pairs.len(), 16);
    assert_eq!(pairs[0].ip, "0x40080000");
    assert_eq!(pairs[15].ip, "0x4008000f");
}
