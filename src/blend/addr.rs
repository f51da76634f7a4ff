use std::collections::HashMap;

use crate::blend::{BlendFile, Block, Result};

/// Index mapping producer-recorded original addresses to chunks.
///
/// Addresses are opaque 64-bit keys; they are never dereferenced. Address
/// `0` is reserved as "absent" and is never indexed.
#[derive(Debug)]
pub struct AddressIndex<'a> {
	map: HashMap<u64, Block<'a>>,
	collisions: Vec<u64>,
}

impl<'a> AddressIndex<'a> {
	/// Index every parsed chunk, top-level and generic data alike.
	///
	/// When two chunks record the same address the first one in file
	/// order wins and the address is remembered as a collision.
	pub fn build(file: &'a BlendFile) -> Result<Self> {
		let mut index = Self {
			map: HashMap::new(),
			collisions: Vec::new(),
		};

		for block in file.blocks() {
			index.insert(block?);
		}

		Ok(index)
	}

	/// Build from caller-provided blocks, preserving first-wins order.
	///
	/// This is primarily useful for deterministic unit tests.
	pub fn from_blocks(blocks: Vec<Block<'a>>) -> Self {
		let mut index = Self {
			map: HashMap::new(),
			collisions: Vec::new(),
		};
		for block in blocks {
			index.insert(block);
		}
		index
	}

	fn insert(&mut self, block: Block<'a>) {
		let addr = block.head.old;
		if addr == 0 {
			return;
		}

		if self.map.contains_key(&addr) {
			self.collisions.push(addr);
			return;
		}
		self.map.insert(addr, block);
	}

	/// Chunk recorded at `addr`, or `None` for `0` and unknown addresses.
	pub fn resolve(&self, addr: u64) -> Option<Block<'a>> {
		if addr == 0 {
			return None;
		}
		self.map.get(&addr).copied()
	}

	/// Addresses recorded by more than one chunk, in file order of the
	/// losing chunks.
	pub fn collisions(&self) -> &[u64] {
		&self.collisions
	}

	/// Number of indexed addresses.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Whether no addresses are indexed.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::AddressIndex;
	use crate::blend::{BHead, Block};

	fn block(old: u64, payload: &[u8]) -> Block<'_> {
		Block {
			head: BHead {
				code: *b"DATA",
				len: payload.len() as u32,
				old,
				sdna_nr: 0,
				nr: 1,
			},
			payload,
			file_offset: 0,
		}
	}

	#[test]
	fn zero_address_is_never_indexed() {
		let payload = [0_u8; 4];
		let index = AddressIndex::from_blocks(vec![block(0, &payload)]);
		assert!(index.is_empty());
		assert!(index.resolve(0).is_none());
	}

	#[test]
	fn nonzero_addresses_round_trip() {
		let payload = [0_u8; 4];
		let index = AddressIndex::from_blocks(vec![block(0x1000, &payload), block(0x2000, &payload)]);
		assert_eq!(index.len(), 2);
		assert_eq!(index.resolve(0x1000).expect("resolves").head.old, 0x1000);
		assert_eq!(index.resolve(0x2000).expect("resolves").head.old, 0x2000);
		assert!(index.resolve(0x3000).is_none());
	}

	#[test]
	fn duplicate_address_first_wins_and_is_recorded() {
		let first = [1_u8; 4];
		let second = [2_u8; 4];
		let index = AddressIndex::from_blocks(vec![block(0x1000, &first), block(0x1000, &second)]);

		assert_eq!(index.len(), 1);
		assert_eq!(index.resolve(0x1000).expect("resolves").payload, &first);
		assert_eq!(index.collisions(), &[0x1000]);
	}
}
