use std::path::PathBuf;

use blendexpl::blend::{BlendFile, Result};

use crate::cmd::util::{addr_hex, render_code};

/// List top-level chunks with schema identity and child counts.
pub fn run(path: PathBuf) -> Result<()> {
	let blend = BlendFile::open(&path)?;
	let dna = blend.dna()?;
	let tree = blend.tree()?;

	println!("path: {}", path.display());
	println!("top_level: {}", tree.len());
	println!("idx\tcode\tstruct\tnr\tlen\told\tchildren");
	for (idx, group) in tree.groups().iter().enumerate() {
		let head = group.block.head;
		println!(
			"{}\t{}\t{}\t{}\t{}\t{}\t{}",
			idx,
			render_code(head.code),
			dna.struct_name_by_index(head.sdna_nr).unwrap_or("<none>"),
			head.nr,
			head.len,
			addr_hex(head.old),
			group.children.len()
		);
	}

	Ok(())
}
