use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlendError>;

/// Errors produced while reading, resolving, and traversing container data.
#[derive(Debug, Error)]
pub enum BlendError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Unknown leading file magic.
	#[error("unsupported compression or not a blend container (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompressed stream did not start with the container magic.
	#[error("decompressed data does not start with BLENDER magic")]
	NotBlendAfterDecompress,
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Invalid or malformed signature record.
	#[error("invalid file header")]
	InvalidHeader,
	/// Pointer-width tag names a recognized but unsupported variant.
	#[error("unsupported pointer width tag {tag:?} (only 8-byte '-' is supported)")]
	UnsupportedPointerSize {
		/// Raw pointer-width tag byte.
		tag: u8,
	},
	/// Byte-order tag names the big-endian variant.
	#[error("unsupported byte order (expected little-endian 'v')")]
	BigEndianUnsupported,
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Chunk payload would exceed remaining file data.
	#[error("chunk length {len} at offset {at} exceeds remaining {rem}")]
	BlockLenOutOfRange {
		/// Chunk header file offset.
		at: usize,
		/// Declared payload length.
		len: u32,
		/// Remaining bytes after the header.
		rem: usize,
	},
	/// Generic data chunk appeared before any owning chunk.
	#[error("DATA chunk at offset {at} has no preceding owner chunk")]
	OrphanDataBlock {
		/// Chunk header file offset.
		at: usize,
	},
	/// No DNA1 chunk was found.
	#[error("DNA1 chunk not found")]
	DnaNotFound,
	/// Unexpected schema section tag.
	#[error("DNA tag mismatch at {at}: expected {expected:?}, got {got:?}")]
	DnaBadTag {
		/// Expected section tag.
		expected: [u8; 4],
		/// Actual section tag.
		got: [u8; 4],
		/// Payload offset of the tag read.
		at: usize,
	},
	/// Out-of-range index inside schema tables.
	#[error("DNA index out of range for {kind}: idx={idx}, max={max}")]
	DnaIndexOutOfRange {
		/// Logical index kind being validated.
		kind: &'static str,
		/// Offending index value.
		idx: u32,
		/// Maximum valid index.
		max: u32,
	},
	/// Requested struct name was not found in the catalog.
	#[error("struct not found: {name}")]
	StructNotFound {
		/// Requested struct name.
		name: String,
	},
	/// Requested field was not declared on the struct.
	#[error("field {field} not found on {struct_name}")]
	FieldNotFound {
		/// Struct type name.
		struct_name: String,
		/// Requested raw field declarator.
		field: String,
	},
	/// Typed read would overrun the payload.
	#[error("read out of bounds: offset={offset}, size={size}, payload={payload}")]
	ReadOutOfBounds {
		/// Requested start byte within payload.
		offset: usize,
		/// Requested read size.
		size: usize,
		/// Available payload length.
		payload: usize,
	},
	/// Cycle detected while walking a pointer chain.
	#[error("cycle detected at address 0x{addr:016x}")]
	CycleDetected {
		/// Address revisited by the chain.
		addr: u64,
	},
	/// Requested chunk code was not found.
	#[error("chunk not found: {code:?}")]
	BlockNotFound {
		/// Requested 4-byte chunk code.
		code: [u8; 4],
	},
	/// CLI chunk code argument was invalid.
	#[error("invalid chunk code: {code}")]
	InvalidBlockCode {
		/// User-provided code string.
		code: String,
	},
	/// CLI address argument was invalid.
	#[error("invalid address literal: {value}")]
	InvalidAddressLiteral {
		/// User-provided address string.
		value: String,
	},
}
