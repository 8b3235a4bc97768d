//! Shell-style `KEY="VALUE"` records for scripted editing.
//!
//! One configuration per paragraph; paragraphs are separated by a blank
//! line outside of quotes:
//!
//! ```text
//! NAME="HDMI1"
//! EDID=00ffffffffffff00
//! WIDTH=1920
//! HEIGHT=1080
//! SPLITS="V 960
//!  N
//!  N"
//! ```
//!
//! A record whose `SPLITS` is exactly `N` asks for the stored entry to be
//! removed.

use std::collections::HashMap;
use std::fmt::Write;

use tracing::warn;
use vsplit_common::CodecError;
use vsplit_tree::codec::{format_tree, parse_tree};

use crate::model::{Configuration, Edid};

const KNOWN_KEYS: [&str; 5] = ["NAME", "EDID", "WIDTH", "HEIGHT", "SPLITS"];

/// One parsed paragraph.
#[derive(Debug, Clone)]
pub struct ShellRecord {
    pub configuration: Configuration,
    /// `SPLITS="N"`: delete rather than store.
    pub remove: bool,
}

/// Parse every paragraph of `text`.
pub fn parse_records(text: &str) -> Result<Vec<ShellRecord>, CodecError> {
    lex_paragraphs(text)?
        .into_iter()
        .map(|words| record_from_words(&words))
        .collect()
}

/// Render a configuration as one paragraph, blank line included.
pub fn format_record(config: &Configuration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "NAME={}", quote(&config.name));
    let _ = writeln!(out, "EDID={}", config.edid.to_hex());
    let _ = writeln!(out, "WIDTH={}", config.width as u32);
    let _ = writeln!(out, "HEIGHT={}", config.height as u32);
    let _ = writeln!(out, "SPLITS={}", quote(&format_tree(&config.tree)));
    out.push('\n');
    out
}

pub fn format_records<'a>(configs: impl IntoIterator<Item = &'a Configuration>) -> String {
    configs.into_iter().map(format_record).collect()
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn record_from_words(words: &[String]) -> Result<ShellRecord, CodecError> {
    let mut vars: HashMap<&str, &str> = HashMap::new();
    for word in words {
        let (key, value) = word
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| CodecError::InvalidRecord(format!("expected KEY=VALUE, found '{word}'")))?;
        if !KNOWN_KEYS.contains(&key) {
            warn!(key, "ignoring unknown record key");
            continue;
        }
        vars.insert(key, value);
    }

    let get = |key: &str| {
        vars.get(key)
            .copied()
            .ok_or_else(|| CodecError::InvalidRecord(format!("record is missing {key}")))
    };
    let size = |key: &str| -> Result<f64, CodecError> {
        let raw = get(key)?;
        raw.trim()
            .parse::<u32>()
            .map(f64::from)
            .map_err(|_| CodecError::InvalidRecord(format!("{key} '{raw}' is not a pixel count")))
    };

    let name = get("NAME")?;
    let edid = Edid::from_hex(get("EDID")?)?;
    let width = size("WIDTH")?;
    let height = size("HEIGHT")?;
    let splits = get("SPLITS")?;

    let remove = splits == "N";
    let tree = parse_tree(splits)?;
    let configuration = Configuration::new(name, edid, width, height).with_tree(tree);
    if !remove {
        configuration.validate()?;
    }
    Ok(ShellRecord {
        configuration,
        remove,
    })
}

/// Split `text` into paragraphs of unquoted words.
fn lex_paragraphs(text: &str) -> Result<Vec<Vec<String>>, CodecError> {
    let mut paragraphs = Vec::new();
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut newlines = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                end_word(&mut word, &mut in_word, &mut words);
                newlines += 1;
                if newlines == 2 && !words.is_empty() {
                    paragraphs.push(std::mem::take(&mut words));
                }
                continue;
            }
            c if c.is_whitespace() => {
                end_word(&mut word, &mut in_word, &mut words);
                continue;
            }
            '#' if !in_word => {
                while chars.next_if(|&n| n != '\n').is_some() {}
                continue;
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(n @ ('"' | '\\' | '$' | '`')) => word.push(n),
                            Some('\n') => {}
                            Some(n) => {
                                word.push('\\');
                                word.push(n);
                            }
                            None => return Err(unterminated()),
                        },
                        Some(n) => word.push(n),
                        None => return Err(unterminated()),
                    }
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(n) => word.push(n),
                        None => return Err(unterminated()),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some('\n') | None => {}
                    Some(n) => word.push(n),
                }
            }
            c => {
                in_word = true;
                word.push(c);
            }
        }
        newlines = 0;
    }
    end_word(&mut word, &mut in_word, &mut words);
    if !words.is_empty() {
        paragraphs.push(words);
    }
    Ok(paragraphs)
}

fn end_word(word: &mut String, in_word: &mut bool, words: &mut Vec<String>) {
    if *in_word {
        words.push(std::mem::take(word));
        *in_word = false;
    }
}

fn unterminated() -> CodecError {
    CodecError::InvalidRecord("unterminated quote".into())
}
