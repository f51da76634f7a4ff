use crate::blend::{BlendError, Result};

const MAGIC: &[u8; 7] = b"BLENDER";
const POINTER_TAG_8: u8 = b'-';
const POINTER_TAG_4: u8 = b'_';
const ORDER_TAG_LITTLE: u8 = b'v';
const ORDER_TAG_BIG: u8 = b'V';

/// Parsed signature record fields.
///
/// Only the 8-byte little-endian variant is accepted, so after a successful
/// parse the producer version digits are the only variable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
	/// Producer version encoded as decimal digits (for example `300`).
	pub version: u16,
}

impl FileHeader {
	/// Signature record size in bytes.
	pub const SIZE: usize = 12;

	/// Parse the signature record from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let header = bytes.get(0..Self::SIZE).ok_or(BlendError::InvalidHeader)?;
		if &header[0..7] != MAGIC {
			return Err(BlendError::InvalidHeader);
		}

		match header[7] {
			POINTER_TAG_8 => {}
			POINTER_TAG_4 => return Err(BlendError::UnsupportedPointerSize { tag: header[7] }),
			_ => return Err(BlendError::InvalidHeader),
		}

		match header[8] {
			ORDER_TAG_LITTLE => {}
			ORDER_TAG_BIG => return Err(BlendError::BigEndianUnsupported),
			_ => return Err(BlendError::InvalidHeader),
		}

		let version = parse_digits(&header[9..12]).ok_or(BlendError::InvalidHeader)?;
		Ok(Self { version })
	}
}

fn parse_digits(bytes: &[u8]) -> Option<u16> {
	if bytes.is_empty() {
		return None;
	}

	let mut value = 0_u16;
	for byte in bytes {
		if !byte.is_ascii_digit() {
			return None;
		}
		value = value * 10 + u16::from(*byte - b'0');
	}
	Some(value)
}
