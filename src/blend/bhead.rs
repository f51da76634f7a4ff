#![allow(missing_docs)]

use crate::blend::Result;
use crate::blend::bytes::Cursor;

#[derive(Debug, Clone, Copy)]
pub struct BHead {
	pub code: [u8; 4],
	pub len: u32,
	pub old: u64,
	pub sdna_nr: u32,
	pub nr: u32,
}

impl BHead {
	pub const SIZE: usize = 24;

	pub(crate) fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let code = cursor.read_tag4()?;
		let len = cursor.read_u32_le()?;
		let old = cursor.read_u64_le()?;
		let sdna_nr = cursor.read_u32_le()?;
		let nr = cursor.read_u32_le()?;

		Ok(Self { code, len, old, sdna_nr, nr })
	}

	pub fn is_data(&self) -> bool {
		self.code == *b"DATA"
	}

	pub fn is_dna(&self) -> bool {
		self.code == *b"DNA1"
	}

	pub fn is_endb(&self) -> bool {
		self.code == *b"ENDB"
	}
}
