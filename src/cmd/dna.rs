use std::path::PathBuf;

use blendexpl::blend::{BlendError, BlendFile, Result};

/// Print catalog table counts, or one struct's layout with offsets.
pub fn run(path: PathBuf, struct_name: Option<String>) -> Result<()> {
	let blend = BlendFile::open(&path)?;
	let dna = blend.dna()?;

	println!("path: {}", path.display());
	println!("dna_names: {}", dna.name_count());
	println!("dna_types: {}", dna.type_count());
	println!("dna_structs: {}", dna.structs().len());

	if let Some(name) = struct_name {
		let (sdna_idx, item) = dna.find_struct(&name).ok_or(BlendError::StructNotFound { name: name.clone() })?;
		println!("struct {} (length: {})", dna.type_name(item.type_idx), dna.struct_len(item));
		println!("sdna_index: {}", sdna_idx);
		println!("field_count: {}", item.fields.len());

		let mut offset = 0_usize;
		for field in &item.fields {
			println!("  {} {}  // {}", dna.type_name(field.type_idx), dna.field_name(field.name_idx), offset);
			offset += dna.field_size(field);
		}
		println!("  // total: {offset}");
	}

	Ok(())
}
