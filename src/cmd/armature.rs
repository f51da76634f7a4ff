use std::path::PathBuf;

use blendexpl::blend::{AddressIndex, BlendError, BlendFile, Block, Dna, Result, WalkOptions, WalkStopReason, field_array, field_ptr, field_string, scalar_at, walk_chain};

use crate::cmd::util::{addr_hex, find_owner_object, id_name};

/// Explore the first armature: bones, owning object, pose channels.
pub fn run(path: PathBuf) -> Result<()> {
	let blend = BlendFile::open(&path)?;
	let dna = blend.dna()?;
	let tree = blend.tree()?;
	let index = blend.address_index()?;

	let code = [b'A', b'R', 0, 0];
	let idx = tree.find_by_code(code, 0).ok_or(BlendError::BlockNotFound { code })?;
	let Some(group) = tree.get(idx) else {
		return Err(BlendError::BlockNotFound { code });
	};

	println!("path: {}", path.display());
	println!("armature: {}", id_name(&dna, &group.block)?);

	let owner = find_owner_object(&dna, &tree, group.block.head.old);
	if let Some(ob_idx) = owner
		&& let Some(ob_group) = tree.get(ob_idx)
	{
		let object = &ob_group.block;
		println!("object: {}", id_name(&dna, object)?);

		let adt = field_ptr(&dna, object, "Object", "*adt")?;
		if let Some(adt_block) = index.resolve(adt) {
			let action = field_ptr(&dna, &adt_block, "AnimData", "*action")?;
			match index.resolve(action) {
				Some(action_block) => println!("action: {}", id_name(&dna, &action_block)?),
				None => println!("action: -"),
			}
		}
	}

	let mut bone_count = 0_usize;
	for child in &group.children {
		if !dna.is_struct(child.head.sdna_nr, "Bone") {
			continue;
		}

		let name = field_string(&dna, child, "Bone", "name[64]")?;
		let parent = field_ptr(&dna, child, "Bone", "*parent")?;
		let parent_name = match index.resolve(parent) {
			Some(parent_block) => field_string(&dna, &parent_block, "Bone", "name[64]")?,
			None => "-".to_owned(),
		};
		println!("bone: {name} parent: {parent_name}");
		bone_count += 1;
	}
	println!("bones: {bone_count}");

	if let Some(ob_idx) = owner
		&& let Some(ob_group) = tree.get(ob_idx)
	{
		let pose = field_ptr(&dna, &ob_group.block, "Object", "*pose")?;
		if let Some(pose_block) = index.resolve(pose) {
			print_pose_channels(&dna, &index, &pose_block)?;
		}
	}

	Ok(())
}

fn print_pose_channels(dna: &Dna, index: &AddressIndex<'_>, pose: &Block<'_>) -> Result<()> {
	let first = scalar_at::<u64>(pose.payload, dna.offset_of("bPose", "chanbase") + dna.offset_of("ListBase", "*first"))?;

	let result = walk_chain(dna, index, "bPoseChannel", first, &WalkOptions::default())?;
	for item in &result.items {
		let name = field_string(dna, &item.block, "bPoseChannel", "name[64]")?;
		let bone = field_ptr(dna, &item.block, "bPoseChannel", "*bone")?;
		let bone_name = match index.resolve(bone) {
			Some(bone_block) => field_string(dna, &bone_block, "Bone", "name[64]")?,
			None => "-".to_owned(),
		};
		println!("channel: {name} bone: {bone_name}");

		let mat = field_array::<f32>(dna, &item.block, "bPoseChannel", "chan_mat[4][4]", 16)?;
		for row in mat.chunks_exact(4) {
			println!("  [{}, {}, {}, {}]", row[0], row[1], row[2], row[3]);
		}
	}

	if let WalkStopReason::Cycle(addr) = result.stop.reason {
		println!("channel chain cycle at {}", addr_hex(addr));
	}

	Ok(())
}
