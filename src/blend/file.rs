use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::blend::compression::decode_bytes;
use crate::blend::{AddressIndex, BlendError, Block, BlockIter, BlockTree, Compression, Dna, FileHeader, Result};

/// One parsed container: owns the byte buffer every chunk view borrows.
///
/// Built once, read-only afterwards. The buffer outlives all payload
/// views by construction; nothing is reference counted.
pub struct BlendFile {
	/// Parsed signature record.
	pub header: FileHeader,
	/// Compression detected on the source stream.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl BlendFile {
	/// Read and parse a container from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_bytes(fs::read(path)?)
	}

	/// Parse a container from an in-memory stream.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let header = FileHeader::parse(&bytes)?;

		Ok(Self {
			header,
			compression,
			bytes,
		})
	}

	/// Whole decoded buffer.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Stream the flat chunk sequence, generic data chunks included.
	pub fn blocks(&self) -> BlockIter<'_> {
		BlockIter::new(&self.bytes, FileHeader::SIZE)
	}

	/// Build the owner/children grouping over the chunk sequence.
	pub fn tree(&self) -> Result<BlockTree<'_>> {
		BlockTree::build(self)
	}

	/// Build the original-address index over all chunks.
	pub fn address_index(&self) -> Result<AddressIndex<'_>> {
		AddressIndex::build(self)
	}

	/// Locate and parse the schema catalog chunk.
	pub fn dna(&self) -> Result<Dna> {
		let block = self.find_first_block_by_code(*b"DNA1")?.ok_or(BlendError::DnaNotFound)?;
		Dna::parse(block.payload)
	}

	/// First chunk in the flat sequence matching `code`.
	pub fn find_first_block_by_code(&self, code: [u8; 4]) -> Result<Option<Block<'_>>> {
		for block in self.blocks() {
			let block = block?;
			if block.head.code == code {
				return Ok(Some(block));
			}
		}
		Ok(None)
	}

	/// Scan the chunk sequence once and count per-code statistics.
	pub fn scan_block_stats(&self) -> Result<BlockStats> {
		let mut stats = BlockStats {
			block_count: 0,
			data_block_count: 0,
			has_dna: false,
			has_endb: false,
			codes: HashMap::new(),
		};

		for block in self.blocks() {
			let block = block?;
			stats.block_count += 1;
			*stats.codes.entry(block.head.code).or_insert(0) += 1;
			if block.head.is_data() {
				stats.data_block_count += 1;
			}
			if block.head.is_dna() {
				stats.has_dna = true;
			}
			if block.head.is_endb() {
				stats.has_endb = true;
			}
		}

		Ok(stats)
	}
}

/// Per-container chunk statistics.
pub struct BlockStats {
	/// Total chunks in the flat sequence.
	pub block_count: u32,
	/// Chunks carrying generic owned data.
	pub data_block_count: u32,
	/// Whether a schema catalog chunk is present.
	pub has_dna: bool,
	/// Whether the end-of-stream marker is present.
	pub has_endb: bool,
	/// Chunk counts per 4-byte code.
	pub codes: HashMap<[u8; 4], u32>,
}
