use crate::entries::{Entries, ResolvedEntry};
use crate::error::{DecodeError, DecodeResult};
use crate::location::SourceRange;
use crate::offsets::OffsetTable;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Deref;

/// Computes the instruction layout of raw bytecode.
///
/// Implementations know the opcode table well enough to skip push data and
/// map every program counter (byte offset into the bytecode) to the
/// sequential index of the instruction starting there. This crate only
/// consumes the resulting mapping; closures with the matching signature
/// implement the trait directly.
pub trait InstructionIndexer {
    fn instruction_indices(&self, bytecode: &[u8]) -> BTreeMap<u32, u32>;
}

impl<F> InstructionIndexer for F
where
    F: Fn(&[u8]) -> BTreeMap<u32, u32>,
{
    fn instruction_indices(&self, bytecode: &[u8]) -> BTreeMap<u32, u32> {
        self(bytecode)
    }
}

/// The final decode output: every program counter the instruction mapping
/// reported, in ascending order, carrying either its source range or an
/// explicit unmapped marker.
///
/// Three states are distinguishable: a pc absent from the map was never
/// examined, a pc mapped to `None` is known but has no source (sentinel file
/// index, or no text supplied for its file), and a pc mapped to
/// `Some(range)` resolved fully.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PcSourceMap(pub(crate) BTreeMap<u32, Option<SourceRange>>);

impl Deref for PcSourceMap {
    type Target = BTreeMap<u32, Option<SourceRange>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PcSourceMap {
    /// Returns the source range for `pc`, if the pc is known and mapped.
    #[inline]
    pub fn range_at(&self, pc: u32) -> Option<&SourceRange> {
        self.0.get(&pc).and_then(Option::as_ref)
    }

    /// Like [range_at](Self::range_at) but keeps "pc never examined" (outer
    /// `None`) apart from "pc known, no source" (inner `None`).
    #[inline]
    pub fn entry_at(&self, pc: u32) -> Option<Option<&SourceRange>> {
        self.0.get(&pc).map(Option::as_ref)
    }
}

/// `SourceMapDecoder` decodes a compiler source map against the source texts
/// and file names it was produced from.
///
/// All context lives in the decoder value itself; nothing is cached across
/// decoders, so concurrent decodes of independent contracts need no
/// synchronization.
///
/// # Example
/// ```
/// # use solmap::SourceMapDecoder;
/// # use std::collections::BTreeMap;
/// let decoder = SourceMapDecoder::new()
///     .with_source_text(0, "contract C { function f() public {} }")
///     .with_file_name(0, "C.sol");
/// let indices = BTreeMap::from([(0, 0)]);
/// let decoded = decoder.decode("0:10:0:-", &indices).unwrap();
/// assert!(decoded.range_at(0).is_some());
/// ```
#[derive(Debug, Default)]
pub struct SourceMapDecoder<'a> {
    tables: BTreeMap<u32, OffsetTable>,
    file_names: BTreeMap<u32, &'a str>,
}

impl<'a> SourceMapDecoder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the full text of the source file at `file_index` and indexes
    /// it immediately. File indices with no registered text are treated as
    /// having no source available, which is not the same as an empty text.
    pub fn with_source_text(mut self, file_index: u32, text: &str) -> Self {
        self.tables.insert(file_index, OffsetTable::index(text));
        self
    }

    /// Registers a human-readable name for `file_index`, used only for output
    /// labeling and error messages.
    pub fn with_file_name(mut self, file_index: u32, name: &'a str) -> Self {
        self.file_names.insert(file_index, name);
        self
    }

    /// Decodes `source_map` and re-keys the result by program counter using
    /// the supplied instruction mapping.
    ///
    /// Every pc present in `instruction_indices` appears in the output;
    /// unmapped entries never abort the decode, an out-of-bounds range always
    /// does.
    pub fn decode(
        &self,
        source_map: &str,
        instruction_indices: &BTreeMap<u32, u32>,
    ) -> DecodeResult<PcSourceMap> {
        let ranges = self.resolve_ranges(&Entries::parse(source_map))?;

        let mut by_pc = BTreeMap::new();
        for (&pc, &index) in instruction_indices {
            by_pc.insert(pc, ranges.get(&index).cloned());
        }
        Ok(PcSourceMap(by_pc))
    }

    /// Convenience over [decode](Self::decode) that obtains the instruction
    /// mapping from an [InstructionIndexer] first.
    pub fn decode_bytecode<I>(
        &self,
        source_map: &str,
        bytecode: &[u8],
        indexer: &I,
    ) -> DecodeResult<PcSourceMap>
    where
        I: InstructionIndexer + ?Sized,
    {
        self.decode(source_map, &indexer.instruction_indices(bytecode))
    }

    /// Resolves each entry to a range, keyed by its instruction index.
    ///
    /// Unmapped entries are absent from the result rather than present as
    /// nulls, so the table stays sparse.
    fn resolve_ranges(&self, entries: &Entries) -> DecodeResult<BTreeMap<u32, SourceRange>> {
        let mut ranges = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            if let Some(range) = self.resolve_range(entry)? {
                ranges.insert(index as u32, range);
            }
        }
        Ok(ranges)
    }

    fn resolve_range(&self, entry: &ResolvedEntry) -> DecodeResult<Option<SourceRange>> {
        let (Some(offset), Some(length), Some(file_index)) =
            (entry.offset, entry.length, entry.file_index)
        else {
            // head-of-map entries whose fields were never supplied
            return Ok(None);
        };

        // -1 marks compiler-generated bytecode with no source origin; an
        // index we hold no text for is equally unmapped
        let Some(table) = u32::try_from(file_index)
            .ok()
            .and_then(|index| self.tables.get(&index))
        else {
            return Ok(None);
        };

        let positions = offset.checked_add(length).and_then(|end| {
            let start = table.get(u32::try_from(offset).ok()?)?;
            let end = table.get(u32::try_from(end).ok()?)?;
            Some((start, end))
        });
        match positions {
            Some((start, end)) => Ok(Some(SourceRange::new(
                self.file_name(file_index),
                start,
                end,
            ))),
            // the supplied source text cannot be the one the map was
            // produced from; never truncate silently
            None => Err(DecodeError::RangeOutOfBounds {
                file: self.file_name(file_index),
                offset,
                length,
            }),
        }
    }

    fn file_name(&self, file_index: i64) -> String {
        u32::try_from(file_index)
            .ok()
            .and_then(|index| self.file_names.get(&index))
            .map(|name| (*name).to_owned())
            .unwrap_or_else(|| format!("<source #{file_index}>"))
    }
}
