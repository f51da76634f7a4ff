mod addr;
mod bhead;
mod block;
mod bytes;
mod compression;
mod decl;
mod dna;
mod error;
mod file;
mod header;
mod read;
mod tree;
mod walk;

/// Original-address index and resolution.
pub use addr::AddressIndex;
/// Parsed chunk header record.
pub use bhead::BHead;
/// Chunk container and streaming iterator types.
pub use block::{Block, BlockIter};
/// Compression detection result.
pub use compression::Compression;
/// Field declarator size decoding.
pub use decl::{POINTER_SIZE, field_storage_size};
/// Schema catalog representation.
pub use dna::{Dna, DnaField, DnaName, DnaStruct};
/// Error and result aliases.
pub use error::{BlendError, Result};
/// File abstraction and chunk statistics.
pub use file::{BlendFile, BlockStats};
/// Signature record representation.
pub use header::FileHeader;
/// Typed field read primitives.
pub use read::{Scalar, array_at, block_instances, cstr_at, field_array, field_ptr, field_scalar, field_string, scalar_at};
/// Owner/children chunk grouping.
pub use tree::{BlockGroup, BlockTree};
/// Linked-chain walk types and entry point.
pub use walk::{StopMode, WalkItem, WalkOptions, WalkResult, WalkStop, WalkStopReason, walk_chain};
