use crate::splitter::EntrySplitter;
use serde::Serialize;
use std::ops::Deref;

/// Jump classification carried in the fourth field of an entry.
///
/// `i` marks a jump into a function, `o` a jump out of one, `-` an ordinary
/// instruction. It is retained for consumers that care about call structure
/// but plays no part in range resolution.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Jump {
    In,
    Out,
    Regular,
}

impl Jump {
    fn parse(field: &str) -> Option<Self> {
        match field {
            "i" => Some(Self::In),
            "o" => Some(Self::Out),
            "-" => Some(Self::Regular),
            _ => None,
        }
    }
}

/// One `;`-separated segment of a source map after delta resolution.
///
/// A field stays `None` only when neither this entry nor any predecessor
/// supplied it, which can happen at the head of the map. Such entries
/// produce no source range. `file_index == -1` is the compiler's sentinel
/// for bytecode with no traceable source origin.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ResolvedEntry {
    pub offset: Option<i64>,
    pub length: Option<i64>,
    pub file_index: Option<i64>,
    pub jump: Option<Jump>,
}

/// `Entries` is the delta-resolved form of a compact source map string.
///
/// The position of an entry within the collection is semantically significant:
/// it equals the instruction index of the instruction the entry describes.
#[derive(Debug, Clone, Default)]
pub struct Entries(pub(crate) Vec<ResolvedEntry>);

impl Deref for Entries {
    type Target = [ResolvedEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Entries {
    /// Parses a source map string, resolving field inheritance.
    ///
    /// One entry is produced per `;`-separated segment, in order. An empty or
    /// unparsable field takes the previous resolved entry's value; the two
    /// cases are deliberately not distinguished, matching the leniency of the
    /// format's existing consumers. This is a strict left-to-right fold with
    /// no lookahead.
    pub fn parse(source_map: &str) -> Self {
        let mut entries =
            Vec::with_capacity(memchr::memchr_iter(b';', source_map.as_bytes()).count() + 1);

        let mut prev = ResolvedEntry::default();
        for raw in EntrySplitter::new(source_map) {
            // entries of solc >= 0.6 carry a fifth field (modifier depth);
            // it is ignored
            let mut fields = raw.split(':');
            let entry = ResolvedEntry {
                offset: parse_num(fields.next()).or(prev.offset),
                length: parse_num(fields.next()).or(prev.length),
                file_index: parse_num(fields.next()).or(prev.file_index),
                jump: fields.next().and_then(Jump::parse).or(prev.jump),
            };
            entries.push(entry);
            prev = entry;
        }

        Self(entries)
    }
}

fn parse_num(field: Option<&str>) -> Option<i64> {
    field.and_then(|f| f.parse().ok())
}
