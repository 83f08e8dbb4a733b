use crate::location::Position;

/// `OffsetTable` translates a byte offset within one source text into a
/// [Position].
///
/// The table holds one position per byte offset plus one for the end-of-file
/// boundary, so `0..=text.len()` are all valid keys; ranges emitted by the
/// compiler may end exactly at the last character boundary.
///
/// # Note
///
/// Offsets are counted in bytes, which matches what solc emits for UTF-8
/// encoded sources. The table cannot detect a source recoded in another unit;
/// the caller must ensure the text is the one the map was produced from.
#[derive(Debug, Clone)]
pub struct OffsetTable(Vec<Position>);

impl OffsetTable {
    /// Indexes `text`. Total over any input, including the empty string
    /// (a single entry for offset 0).
    pub fn index(text: &str) -> Self {
        let mut positions = Vec::with_capacity(text.len() + 1);
        let mut line = 1;
        let mut column = 0;
        positions.push(Position::start());
        for byte in text.bytes() {
            if byte == b'\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
            positions.push(Position::new(line, column));
        }
        Self(positions)
    }

    /// Returns the position recorded at `offset`, or `None` if the offset
    /// lies beyond the indexed text.
    #[inline]
    pub fn get(&self, offset: u32) -> Option<Position> {
        self.0.get(offset as usize).copied()
    }
}
