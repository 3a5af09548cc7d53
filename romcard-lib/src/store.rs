//! Line-oriented key-prefixed record store.
//!
//! Both metadata formats on the card are "key, then opaque remainder"
//! lines: `filelist.csv` splits on the first comma, the `.lst` files on
//! the first pipe. The remainder is never parsed — hand-edited extra
//! fields must round-trip byte-for-byte, which is also why this is not a
//! real CSV parser.

use std::collections::HashMap;
use std::path::Path;

/// One output record: `key<sep>rest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub rest: String,
}

/// Load a record file into a key → remainder map.
///
/// Missing file yields an empty map. Lines are trimmed; empty lines,
/// lines without the separator, and lines with an empty key are skipped
/// silently (they self-heal on the next persist). The key is trimmed;
/// the remainder is kept verbatim.
pub fn load(path: &Path, sep: char) -> HashMap<String, String> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return HashMap::new(),
    };
    let mut records = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((key, rest)) = line.split_once(sep) {
            let key = key.trim();
            if !key.is_empty() {
                records.insert(key.to_string(), rest.to_string());
            }
        }
    }
    records
}

/// Merge current keys against previously stored records.
///
/// Keys present in `existing` keep their stored remainder verbatim;
/// unseen keys get defaults from `default_rest`. Output order follows
/// `keys`.
pub fn merge<F>(existing: &HashMap<String, String>, keys: &[String], default_rest: F) -> Vec<Record>
where
    F: Fn(&str) -> String,
{
    keys.iter()
        .map(|key| Record {
            key: key.clone(),
            rest: existing
                .get(key)
                .cloned()
                .unwrap_or_else(|| default_rest(key)),
        })
        .collect()
}

/// Render records to file contents: one `key<sep>rest` line per record
/// with a trailing newline, or the empty string for zero records (the
/// caller truncates rather than deleting the file).
pub fn render(records: &[Record], sep: char) -> String {
    if records.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for record in records {
        out.push_str(&record.key);
        out.push(sep);
        out.push_str(&record.rest);
        out.push('\n');
    }
    out
}

/// Default remainder for an unseen catalog key: the stem as display name,
/// its uppercase form, then the stem twice more (firmware duplicate
/// display fields).
pub fn default_catalog_rest(stem: &str) -> String {
    format!("{}|{}|{}|{}", stem, stem.to_uppercase(), stem, stem)
}

/// Default remainder for an unseen filelist entry: the stem as both
/// display fields.
pub fn default_filelist_rest(stem: &str) -> String {
    format!("{},{}", stem, stem)
}

#[path = "tests/store_tests.rs"]
#[cfg(test)]
mod tests;
