//! # solmap
//!
//! This crate decodes the compact, delta-encoded source mappings emitted by the
//! Solidity compiler into per-program-counter source ranges, the form debuggers,
//! coverage and tracing tools need to show which source line produced which
//! executed instruction.
//!
//! ## Getting Started
//!
//! ```ignore
//! use solmap::SourceMapDecoder;
//!
//! let decoder = SourceMapDecoder::new()
//!     .with_source_text(0, source)
//!     .with_file_name(0, "C.sol");
//!
//! // `indices` maps program counters to instruction indices; computing it
//! // from bytecode is the job of a disassembler, not this crate.
//! let decoded = decoder.decode(srcmap, &indices)?;
//!
//! if let Some(range) = decoded.range_at(pc) {
//!     println!("pc {pc} executes {range:?}");
//! }
//! ```
//!
//! ## Overview
//!
//! ### `SourceMapDecoder`
//!
//! [SourceMapDecoder] holds the per-decode context (indexed source texts and
//! file names) and runs the full pipeline: entry parsing, delta resolution,
//! range resolution and re-keying by program counter.
//!
//! ### `OffsetTable`
//!
//! [OffsetTable] translates a byte offset within one source text into a
//! [Position] (1-based line, 0-based column).
//!
//! ### `Entries`
//!
//! [Entries] is the delta-resolved form of a source map string, one
//! [ResolvedEntry] per `;`-separated segment.
//!
//! ### `Artifact`
//!
//! [Artifact] reads the fields relevant to decoding out of a compiler JSON
//! artifact (truffle/hardhat layout).

mod artifact;
mod decoder;
mod entries;
mod error;
mod location;
mod offsets;
mod splitter;

pub use artifact::*;
pub use decoder::*;
pub use entries::*;
pub use error::*;
pub use location::*;
pub use offsets::*;
