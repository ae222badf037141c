// src/csv.rs
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Line-oriented CSV parser.
///
/// Lines split on `\n` (an optional `\r` before it is dropped) and blank
/// lines are skipped *before* quotes are looked at, so a quoted field with a
/// raw newline in it is split across two rows. Published sheets do not emit
/// those for the columns we read.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Split one line into trimmed fields.
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next(); // double-quote escape
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(take(&mut field).trim().to_string()),
            c => field.push(c),
        }
    }

    // Flush the last field even if quotes were unterminated.
    fields.push(field.trim().to_string());
    fields
}

/* ---------------- Row mapping ---------------- */

/// One data row keyed by lower-cased header name.
///
/// Keys keep header order. A header repeated later keeps its first position
/// and takes the later value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Map parsed rows to records using row 0 as the header.
///
/// Missing trailing cells become empty strings; surplus cells are ignored.
/// Fewer than two rows means there is no data and the result is empty.
pub fn rows_to_records(rows: &[Vec<String>]) -> Vec<Record> {
    if rows.len() < 2 {
        return Vec::new();
    }

    let header: Vec<String> = rows[0].iter().map(|h| h.to_lowercase()).collect();

    rows[1..]
        .iter()
        .map(|row| {
            let mut rec = Record::new();
            for (i, key) in header.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                rec.insert(key.as_str(), value);
            }
            rec
        })
        .collect()
}
