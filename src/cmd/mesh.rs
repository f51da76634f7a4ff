use std::path::PathBuf;

use blendexpl::blend::{AddressIndex, BlendError, BlendFile, Block, Dna, Result, array_at, block_instances, field_array, field_ptr, field_scalar, scalar_at};

use crate::cmd::util::{find_owner_object, id_name};

/// Explore the first mesh: counts, owning object transform, attributes.
pub fn run(path: PathBuf) -> Result<()> {
	let blend = BlendFile::open(&path)?;
	let dna = blend.dna()?;
	let tree = blend.tree()?;
	let index = blend.address_index()?;

	let code = [b'M', b'E', 0, 0];
	let idx = tree.find_by_code(code, 0).ok_or(BlendError::BlockNotFound { code })?;
	let Some(group) = tree.get(idx) else {
		return Err(BlendError::BlockNotFound { code });
	};
	let mesh = &group.block;

	println!("path: {}", path.display());
	println!("mesh: {}", id_name(&dna, mesh)?);

	let totvert: i32 = field_scalar(&dna, mesh, "Mesh", "totvert")?;
	let totpoly: i32 = field_scalar(&dna, mesh, "Mesh", "totpoly")?;
	let totloop: i32 = field_scalar(&dna, mesh, "Mesh", "totloop")?;
	println!("verts: {totvert} polys: {totpoly} loops: {totloop}");

	if let Some(ob_idx) = find_owner_object(&dna, &tree, mesh.head.old)
		&& let Some(ob_group) = tree.get(ob_idx)
	{
		let object = &ob_group.block;
		println!("object: {}", id_name(&dna, object)?);

		let loc = field_array::<f32>(&dna, object, "Object", "loc[3]", 3)?;
		let size = field_array::<f32>(&dna, object, "Object", "size[3]", 3)?;
		let quat = field_array::<f32>(&dna, object, "Object", "quat[4]", 4)?;
		println!("translation: ({}, {}, {})", loc[0], loc[1], loc[2]);
		println!("scale: ({}, {}, {})", size[0], size[1], size[2]);
		println!("rotation quat: ({}, {}, {}, {})", quat[0], quat[1], quat[2], quat[3]);

		print_armature_link(&dna, &index, ob_group.children.as_slice())?;
	}

	for child in &group.children {
		let Some(struct_name) = dna.struct_name_by_index(child.head.sdna_nr) else {
			continue;
		};
		match struct_name {
			"MVert" => print_verts(&dna, child)?,
			"MEdge" => print_edges(&dna, child)?,
			"MLoop" => print_loops(&dna, child)?,
			"MLoopUV" => print_loop_uvs(&dna, child)?,
			"MLoopCol" => println!("loop colors: {}", child.head.nr),
			"MPoly" => print_polys(&dna, child)?,
			"MDeformVert" => print_deform_verts(&dna, child)?,
			"MDeformWeight" => print_deform_weights(&dna, child)?,
			_ => {}
		}
	}

	Ok(())
}

fn print_armature_link(dna: &Dna, index: &AddressIndex<'_>, children: &[Block<'_>]) -> Result<()> {
	for child in children {
		if !dna.is_struct(child.head.sdna_nr, "ArmatureModifierData") {
			continue;
		}

		let target = field_ptr(dna, child, "ArmatureModifierData", "*object")?;
		if let Some(armature_object) = index.resolve(target) {
			println!("armature object: {}", id_name(dna, &armature_object)?);
		}
	}
	Ok(())
}

fn print_verts(dna: &Dna, block: &Block<'_>) -> Result<()> {
	let co = dna.offset_of("MVert", "co[3]");
	let no = dna.offset_of("MVert", "no[3]");

	for (idx, inst) in block_instances(dna, block)?.into_iter().enumerate() {
		let coord = array_at::<f32>(inst, co, 3)?;
		let raw_normal = array_at::<i16>(inst, no, 3)?;
		let normal: Vec<f32> = raw_normal.iter().map(|value| f32::from(*value) * (1.0 / 32767.0)).collect();
		println!(
			"vertex#{idx} co ({}, {}, {}) normal ({}, {}, {})",
			coord[0], coord[1], coord[2], normal[0], normal[1], normal[2]
		);
	}
	Ok(())
}

fn print_edges(dna: &Dna, block: &Block<'_>) -> Result<()> {
	let v1 = dna.offset_of("MEdge", "v1");
	let v2 = dna.offset_of("MEdge", "v2");

	for (idx, inst) in block_instances(dna, block)?.into_iter().enumerate() {
		println!("edge#{idx} ({}, {})", scalar_at::<i32>(inst, v1)?, scalar_at::<i32>(inst, v2)?);
	}
	Ok(())
}

fn print_loops(dna: &Dna, block: &Block<'_>) -> Result<()> {
	let v = dna.offset_of("MLoop", "v");
	let e = dna.offset_of("MLoop", "e");

	for (idx, inst) in block_instances(dna, block)?.into_iter().enumerate() {
		println!("loop#{idx} v: {} e: {}", scalar_at::<i32>(inst, v)?, scalar_at::<i32>(inst, e)?);
	}
	Ok(())
}

fn print_loop_uvs(dna: &Dna, block: &Block<'_>) -> Result<()> {
	let uv = dna.offset_of("MLoopUV", "uv[2]");

	for (idx, inst) in block_instances(dna, block)?.into_iter().enumerate() {
		let coords = array_at::<f32>(inst, uv, 2)?;
		println!("loop_uv#{idx} ({}, {})", coords[0], coords[1]);
	}
	Ok(())
}

fn print_polys(dna: &Dna, block: &Block<'_>) -> Result<()> {
	let loopstart = dna.offset_of("MPoly", "loopstart");
	let totloop = dna.offset_of("MPoly", "totloop");

	for (idx, inst) in block_instances(dna, block)?.into_iter().enumerate() {
		println!("poly#{idx} loopstart: {} totloop: {}", scalar_at::<i32>(inst, loopstart)?, scalar_at::<i32>(inst, totloop)?);
	}
	Ok(())
}

fn print_deform_verts(dna: &Dna, block: &Block<'_>) -> Result<()> {
	let totweight = dna.offset_of("MDeformVert", "totweight");

	for (idx, inst) in block_instances(dna, block)?.into_iter().enumerate() {
		println!("vertex_group#{idx} num_weights: {}", scalar_at::<i32>(inst, totweight)?);
	}
	Ok(())
}

fn print_deform_weights(dna: &Dna, block: &Block<'_>) -> Result<()> {
	let def_nr = dna.offset_of("MDeformWeight", "def_nr");
	let weight = dna.offset_of("MDeformWeight", "weight");

	for (idx, inst) in block_instances(dna, block)?.into_iter().enumerate() {
		println!("weight#{idx} def_nr: {} w: {}", scalar_at::<i32>(inst, def_nr)?, scalar_at::<f32>(inst, weight)?);
	}
	Ok(())
}
