use std::path::PathBuf;

use blendexpl::blend::{BlendFile, Result};

use crate::cmd::util::{emit_json, render_code};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print high-level file and chunk statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let blend = BlendFile::open(&path)?;
	let stats = blend.scan_block_stats()?;
	let index = blend.address_index()?;

	let mut entries: Vec<_> = stats.codes.into_iter().collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	if json {
		let report = InfoJson {
			path: path.display().to_string(),
			compression: blend.compression.as_str().to_owned(),
			version: blend.header.version,
			pointer_size: 8,
			endianness: "little",
			block_count: stats.block_count,
			data_block_count: stats.data_block_count,
			has_dna: stats.has_dna,
			has_endb: stats.has_endb,
			indexed_addresses: index.len(),
			address_collisions: index.collisions().len(),
			top_codes: entries
				.iter()
				.take(12)
				.map(|(code, count)| CodeCountJson {
					code: render_code(*code),
					count: *count,
				})
				.collect(),
		};
		emit_json(&report);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", blend.compression.as_str());
	println!("version: {}", blend.header.version);
	println!("pointer_size: 8");
	println!("endianness: little");
	println!("block_count: {}", stats.block_count);
	println!("data_block_count: {}", stats.data_block_count);
	println!("has_dna: {}", stats.has_dna);
	println!("has_endb: {}", stats.has_endb);
	println!("indexed_addresses: {}", index.len());
	println!("address_collisions: {}", index.collisions().len());

	println!("top_codes:");
	for (code, count) in entries.into_iter().take(12) {
		println!("  {}: {}", render_code(code), count);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct CodeCountJson {
	code: String,
	count: u32,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	version: u16,
	pointer_size: u8,
	endianness: &'static str,
	block_count: u32,
	data_block_count: u32,
	has_dna: bool,
	has_endb: bool,
	indexed_addresses: usize,
	address_collisions: usize,
	top_codes: Vec<CodeCountJson>,
}
