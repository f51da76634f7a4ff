use crate::blend::{BlendError, Block, Dna, Result};

/// Fixed-width primitive that can be read from little-endian payload bytes.
///
/// This is the one place raw payload bytes become typed values. No runtime
/// type check is performed: every call site chooses `T` against the
/// schema's declared field type.
pub trait Scalar: Sized + Copy {
	/// Stored width in bytes.
	const SIZE: usize;

	/// Decode from exactly `SIZE` little-endian bytes.
	fn from_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar {
	($($ty:ty),+) => {
		$(impl Scalar for $ty {
			const SIZE: usize = size_of::<$ty>();

			fn from_le(bytes: &[u8]) -> Self {
				let mut buf = [0_u8; size_of::<$ty>()];
				buf.copy_from_slice(bytes);
				<$ty>::from_le_bytes(buf)
			}
		})+
	};
}

impl_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Read one `T` at a byte offset into a payload, bounds-checked.
pub fn scalar_at<T: Scalar>(payload: &[u8], offset: usize) -> Result<T> {
	let bytes = payload
		.get(offset..offset.saturating_add(T::SIZE))
		.ok_or(BlendError::ReadOutOfBounds {
			offset,
			size: T::SIZE,
			payload: payload.len(),
		})?;
	Ok(T::from_le(bytes))
}

/// Read `count` consecutive `T` values starting at a byte offset.
pub fn array_at<T: Scalar>(payload: &[u8], offset: usize, count: usize) -> Result<Vec<T>> {
	let size = T::SIZE.saturating_mul(count);
	let bytes = payload.get(offset..offset.saturating_add(size)).ok_or(BlendError::ReadOutOfBounds {
		offset,
		size,
		payload: payload.len(),
	})?;

	Ok(bytes.chunks_exact(T::SIZE).map(T::from_le).collect())
}

/// Read a zero-terminated string from at most `max_len` payload bytes.
pub fn cstr_at(payload: &[u8], offset: usize, max_len: usize) -> Result<String> {
	let bytes = payload
		.get(offset..offset.saturating_add(max_len))
		.ok_or(BlendError::ReadOutOfBounds {
			offset,
			size: max_len,
			payload: payload.len(),
		})?;

	let end = bytes.iter().position(|byte| *byte == 0).unwrap_or(bytes.len());
	Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
}

/// Read one `T` from a named field of the chunk's first instance.
///
/// The offset comes from the catalog; a missing struct or field resolves
/// to offset `0`, so absence must be detected through the catalog, not
/// through this read.
pub fn field_scalar<T: Scalar>(dna: &Dna, block: &Block<'_>, struct_name: &str, field_name: &str) -> Result<T> {
	scalar_at(block.payload, dna.offset_of(struct_name, field_name))
}

/// Read `count` consecutive `T` values from a named field.
pub fn field_array<T: Scalar>(dna: &Dna, block: &Block<'_>, struct_name: &str, field_name: &str, count: usize) -> Result<Vec<T>> {
	array_at(block.payload, dna.offset_of(struct_name, field_name), count)
}

/// Read a pointer-valued field as an opaque 64-bit address.
pub fn field_ptr(dna: &Dna, block: &Block<'_>, struct_name: &str, field_name: &str) -> Result<u64> {
	field_scalar::<u64>(dna, block, struct_name, field_name)
}

/// Read a zero-terminated string field bounded by its declared storage.
///
/// Needs the field's storage size, so unlike the scalar reads a missing
/// struct or field is an error here rather than a silent zero offset.
pub fn field_string(dna: &Dna, block: &Block<'_>, struct_name: &str, field_name: &str) -> Result<String> {
	let (offset, size) = dna.field_span(struct_name, field_name).ok_or_else(|| BlendError::FieldNotFound {
		struct_name: struct_name.to_owned(),
		field: field_name.to_owned(),
	})?;
	cstr_at(block.payload, offset, size)
}

/// Split a chunk payload into its packed per-instance slices.
///
/// Uses the chunk's schema index for the instance stride and the header
/// count for the instance total.
pub fn block_instances<'a>(dna: &Dna, block: &Block<'a>) -> Result<Vec<&'a [u8]>> {
	let item = dna.struct_by_index(block.head.sdna_nr).ok_or(BlendError::DnaIndexOutOfRange {
		kind: "block.sdna_nr",
		idx: block.head.sdna_nr,
		max: dna.structs().len().saturating_sub(1) as u32,
	})?;

	let stride = dna.struct_len(item);
	let count = block.head.nr as usize;
	let need = stride.saturating_mul(count);
	if need > block.payload.len() {
		return Err(BlendError::ReadOutOfBounds {
			offset: 0,
			size: need,
			payload: block.payload.len(),
		});
	}

	Ok((0..count).map(|index| &block.payload[index * stride..(index + 1) * stride]).collect())
}

#[cfg(test)]
mod tests {
	use super::{array_at, cstr_at, scalar_at};
	use crate::blend::BlendError;

	#[test]
	fn scalars_decode_little_endian() {
		let payload = [5_u8, 0, 0, 0, 0xFF, 0xFF];
		assert_eq!(scalar_at::<i32>(&payload, 0).expect("in bounds"), 5);
		assert_eq!(scalar_at::<i16>(&payload, 4).expect("in bounds"), -1);
	}

	#[test]
	fn out_of_bounds_read_is_an_error() {
		let payload = [0_u8; 4];
		assert!(matches!(
			scalar_at::<u64>(&payload, 0),
			Err(BlendError::ReadOutOfBounds { offset: 0, size: 8, payload: 4 })
		));
	}

	#[test]
	fn arrays_decode_elementwise() {
		let mut payload = Vec::new();
		for value in [1.0_f32, 2.0, 3.0] {
			payload.extend_from_slice(&value.to_le_bytes());
		}
		assert_eq!(array_at::<f32>(&payload, 0, 3).expect("in bounds"), vec![1.0, 2.0, 3.0]);
	}

	#[test]
	fn cstr_is_bounded_by_field_storage() {
		let payload = b"OBCube\0garbage";
		assert_eq!(cstr_at(payload, 0, 7).expect("in bounds"), "OBCube");
		assert_eq!(cstr_at(payload, 2, 4).expect("in bounds"), "Cube");
	}
}
