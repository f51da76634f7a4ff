use crate::blend::bytes::Cursor;
use crate::blend::decl::{POINTER_SIZE, parse_name_decl};
use crate::blend::{BlendError, Result};

/// One field-name entry with its decoded semantic modifiers.
#[derive(Debug)]
pub struct DnaName {
	/// Raw declarator text as stored in the catalog (for example `*next`
	/// or `mat[4][4]`). Lookups match against this text verbatim.
	pub raw: Box<str>,
	/// Whether the declarator carries a leading pointer marker.
	pub is_pointer: bool,
	/// Flattened array element count; `1` when no brackets are present.
	pub elem_count: usize,
}

/// One struct declaration from the catalog.
#[derive(Debug)]
pub struct DnaStruct {
	/// Type index naming this struct.
	pub type_idx: u16,
	/// Field declarations in source order; offsets follow this order.
	pub fields: Vec<DnaField>,
}

/// One field declaration inside a struct record.
#[derive(Debug, Clone, Copy)]
pub struct DnaField {
	/// Type table index for the field type.
	pub type_idx: u16,
	/// Name table index for the field declarator.
	pub name_idx: u16,
}

/// Decoded schema catalog: name, type, length, and struct tables.
///
/// Built once from the `DNA1` chunk payload and immutable afterwards.
#[derive(Debug)]
pub struct Dna {
	names: Vec<DnaName>,
	types: Vec<Box<str>>,
	tlen: Vec<u16>,
	structs: Vec<DnaStruct>,
}

impl Dna {
	/// Parse a `DNA1` chunk payload into catalog tables.
	pub fn parse(payload: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(payload);

		expect_tag(&mut cursor, *b"SDNA")?;

		expect_tag(&mut cursor, *b"NAME")?;
		let name_count = cursor.read_u32_le()? as usize;
		let mut names = Vec::with_capacity(name_count);
		for _ in 0..name_count {
			let raw = read_catalog_string(&mut cursor)?;
			let decl = parse_name_decl(&raw);
			names.push(DnaName {
				raw,
				is_pointer: decl.is_pointer,
				elem_count: decl.elem_count,
			});
		}
		cursor.align4();

		expect_tag(&mut cursor, *b"TYPE")?;
		let type_count = cursor.read_u32_le()? as usize;
		let mut types = Vec::with_capacity(type_count);
		for _ in 0..type_count {
			types.push(read_catalog_string(&mut cursor)?);
		}
		cursor.align4();

		expect_tag(&mut cursor, *b"TLEN")?;
		let mut tlen = Vec::with_capacity(type_count);
		for _ in 0..type_count {
			tlen.push(cursor.read_u16_le()?);
		}
		cursor.align4();

		expect_tag(&mut cursor, *b"STRC")?;
		let struct_count = cursor.read_u32_le()? as usize;
		let mut structs = Vec::with_capacity(struct_count);
		for _ in 0..struct_count {
			let type_idx = cursor.read_u16_le()?;
			check_index("struct.type_idx", u32::from(type_idx), types.len())?;

			let field_count = cursor.read_u16_le()? as usize;
			let mut fields = Vec::with_capacity(field_count);
			for _ in 0..field_count {
				let field_type_idx = cursor.read_u16_le()?;
				let field_name_idx = cursor.read_u16_le()?;
				check_index("field.type_idx", u32::from(field_type_idx), types.len())?;
				check_index("field.name_idx", u32::from(field_name_idx), names.len())?;
				fields.push(DnaField {
					type_idx: field_type_idx,
					name_idx: field_name_idx,
				});
			}

			structs.push(DnaStruct { type_idx, fields });
		}

		Ok(Self { names, types, tlen, structs })
	}

	/// Number of field-name entries.
	pub fn name_count(&self) -> usize {
		self.names.len()
	}

	/// Number of type entries.
	pub fn type_count(&self) -> usize {
		self.types.len()
	}

	/// All struct declarations in catalog order.
	pub fn structs(&self) -> &[DnaStruct] {
		&self.structs
	}

	/// Type name by type index.
	pub fn type_name(&self, type_idx: u16) -> &str {
		&self.types[type_idx as usize]
	}

	/// Declared byte length of one instance of a type.
	pub fn type_len(&self, type_idx: u16) -> usize {
		usize::from(self.tlen[type_idx as usize])
	}

	/// Raw field declarator text by name index.
	pub fn field_name(&self, name_idx: u16) -> &str {
		&self.names[name_idx as usize].raw
	}

	/// Effective storage size of one field declaration.
	pub fn field_size(&self, field: &DnaField) -> usize {
		let name = &self.names[field.name_idx as usize];
		if name.is_pointer {
			return POINTER_SIZE;
		}
		self.type_len(field.type_idx).saturating_mul(name.elem_count)
	}

	/// Struct declaration by schema index.
	pub fn struct_by_index(&self, sdna_nr: u32) -> Option<&DnaStruct> {
		self.structs.get(sdna_nr as usize)
	}

	/// Type name of the struct at a schema index.
	pub fn struct_name_by_index(&self, sdna_nr: u32) -> Option<&str> {
		self.struct_by_index(sdna_nr).map(|item| self.type_name(item.type_idx))
	}

	/// First struct whose type name matches, in catalog order.
	pub fn find_struct(&self, name: &str) -> Option<(usize, &DnaStruct)> {
		self.structs
			.iter()
			.enumerate()
			.find(|(_, item)| self.type_name(item.type_idx) == name)
	}

	/// Declared byte length of one instance of a struct.
	pub fn struct_len(&self, item: &DnaStruct) -> usize {
		self.type_len(item.type_idx)
	}

	/// Declared byte length of a struct looked up by name.
	pub fn struct_len_by_name(&self, name: &str) -> Option<usize> {
		self.find_struct(name).map(|(_, item)| self.struct_len(item))
	}

	/// Whether the struct at `sdna_nr` has the given type name.
	pub fn is_struct(&self, sdna_nr: u32, name: &str) -> bool {
		self.struct_name_by_index(sdna_nr) == Some(name)
	}

	/// Byte offset and storage size of a field within a struct instance.
	///
	/// The field declarator must match the catalog text verbatim,
	/// including pointer markers and array suffixes (`"*data"`,
	/// `"name[64]"`). Returns `None` when the struct or field is absent.
	pub fn field_span(&self, struct_name: &str, field_name: &str) -> Option<(usize, usize)> {
		let (_, item) = self.find_struct(struct_name)?;

		let mut offset = 0_usize;
		for field in &item.fields {
			let size = self.field_size(field);
			if self.field_name(field.name_idx) == field_name {
				return Some((offset, size));
			}
			offset += size;
		}
		None
	}

	/// Byte offset of a field within a struct instance.
	///
	/// A missing struct or field resolves to offset `0` rather than an
	/// error; callers must not use the return value to detect absence.
	pub fn offset_of(&self, struct_name: &str, field_name: &str) -> usize {
		self.field_span(struct_name, field_name).map(|(offset, _)| offset).unwrap_or(0)
	}
}

fn expect_tag(cursor: &mut Cursor<'_>, expected: [u8; 4]) -> Result<()> {
	let at = cursor.pos();
	let got = cursor.read_tag4()?;
	if got != expected {
		return Err(BlendError::DnaBadTag { expected, got, at });
	}
	Ok(())
}

fn read_catalog_string(cursor: &mut Cursor<'_>) -> Result<Box<str>> {
	let bytes = cursor.read_cstr()?;
	Ok(String::from_utf8_lossy(bytes).into_owned().into_boxed_str())
}

fn check_index(kind: &'static str, idx: u32, len: usize) -> Result<()> {
	if (idx as usize) >= len {
		return Err(BlendError::DnaIndexOutOfRange {
			kind,
			idx,
			max: len.saturating_sub(1) as u32,
		});
	}
	Ok(())
}
