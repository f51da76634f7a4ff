use std::collections::HashSet;
use std::path::PathBuf;

use blendexpl::blend::{AddressIndex, BlendFile, Block, Dna, Result, WalkOptions, WalkStopReason, field_ptr, field_scalar, field_string, scalar_at, walk_chain};

use crate::cmd::util::{addr_hex, id_name};

/// Walk every scene: frame range, collection hierarchy, time markers.
pub fn run(path: PathBuf) -> Result<()> {
	let blend = BlendFile::open(&path)?;
	let dna = blend.dna()?;
	let tree = blend.tree()?;
	let index = blend.address_index()?;

	println!("path: {}", path.display());

	let mut from = 0;
	while let Some(idx) = tree.find_by_code([b'S', b'C', 0, 0], from) {
		let Some(group) = tree.get(idx) else {
			break;
		};
		let scene = &group.block;

		println!("scene: {}", id_name(&dna, scene)?);

		// Frame range lives in the embedded RenderData struct.
		let render = dna.offset_of("Scene", "r");
		let sfra: i32 = scalar_at(scene.payload, render + dna.offset_of("RenderData", "sfra"))?;
		let efra: i32 = scalar_at(scene.payload, render + dna.offset_of("RenderData", "efra"))?;
		println!("  frame range: {sfra}-{efra}");

		let master = field_ptr(&dna, scene, "Scene", "*master_collection")?;
		if let Some(collection) = index.resolve(master) {
			let mut seen = HashSet::new();
			print_collection(&dna, &index, &collection, &mut seen, 1)?;
		}

		for child in &group.children {
			if dna.is_struct(child.head.sdna_nr, "TimeMarker") {
				let frame: i32 = field_scalar(&dna, child, "TimeMarker", "frame")?;
				let name = field_string(&dna, child, "TimeMarker", "name[64]")?;
				println!("  marker: {name} frame: {frame}");
			}
		}

		from = idx + 1;
	}

	Ok(())
}

fn print_collection(dna: &Dna, index: &AddressIndex<'_>, collection: &Block<'_>, seen: &mut HashSet<u64>, depth: usize) -> Result<()> {
	let pad = "  ".repeat(depth);
	if !seen.insert(collection.head.old) {
		println!("{pad}collection cycle at {}", addr_hex(collection.head.old));
		return Ok(());
	}

	println!("{pad}collection: {}", id_name(dna, collection)?);

	let first_link = dna.offset_of("ListBase", "*first");

	let gobject = scalar_at::<u64>(collection.payload, dna.offset_of("Collection", "gobject") + first_link)?;
	let objects = walk_chain(dna, index, "CollectionObject", gobject, &WalkOptions::default())?;
	for item in &objects.items {
		let ob = field_ptr(dna, &item.block, "CollectionObject", "*ob")?;
		if let Some(ob_block) = index.resolve(ob) {
			println!("{pad}  object: {}", id_name(dna, &ob_block)?);
		}
	}
	if let WalkStopReason::Cycle(addr) = objects.stop.reason {
		println!("{pad}  object chain cycle at {}", addr_hex(addr));
	}

	let children = scalar_at::<u64>(collection.payload, dna.offset_of("Collection", "children") + first_link)?;
	let links = walk_chain(dna, index, "CollectionChild", children, &WalkOptions::default())?;
	for link in &links.items {
		let sub = field_ptr(dna, &link.block, "CollectionChild", "*collection")?;
		if let Some(sub_block) = index.resolve(sub) {
			print_collection(dna, index, &sub_block, seen, depth + 1)?;
		}
	}
	if let WalkStopReason::Cycle(addr) = links.stop.reason {
		println!("{pad}  child chain cycle at {}", addr_hex(addr));
	}

	Ok(())
}
