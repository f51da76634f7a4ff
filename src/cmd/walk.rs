use std::path::PathBuf;

use blendexpl::blend::{BlendError, BlendFile, Result, WalkOptions, WalkStopReason, walk_chain};

use crate::cmd::util::{addr_hex, parse_addr, parse_block_code, render_code};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Struct name whose link field drives the chain.
	#[arg(long = "struct")]
	pub struct_name: String,
	/// Start address (decimal or 0x-prefixed hex).
	#[arg(long)]
	pub addr: Option<String>,
	/// Start at the first top-level chunk with this code instead.
	#[arg(long)]
	pub code: Option<String>,
	/// Raw declarator of the link field.
	#[arg(long, default_value = "*next")]
	pub next: String,
	/// Maximum chunks to visit.
	#[arg(long)]
	pub limit: Option<usize>,
}

/// Walk a pointer chain from an address or chunk-code root.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		struct_name,
		addr,
		code,
		next,
		limit,
	} = args;

	let blend = BlendFile::open(&path)?;
	let dna = blend.dna()?;
	let index = blend.address_index()?;

	let start = if let Some(addr) = addr {
		parse_addr(&addr)?
	} else if let Some(code) = code {
		let code = parse_block_code(&code)?;
		blend
			.find_first_block_by_code(code)?
			.ok_or(BlendError::BlockNotFound { code })?
			.head
			.old
	} else {
		return Err(BlendError::InvalidAddressLiteral {
			value: "(one of --addr or --code is required)".to_owned(),
		});
	};

	let mut options = WalkOptions {
		next_field: next.clone().into_boxed_str(),
		..WalkOptions::default()
	};
	if let Some(limit) = limit {
		options.max_steps = limit;
	}

	let result = walk_chain(&dna, &index, &struct_name, start, &options)?;

	println!("path: {}", path.display());
	println!("struct: {struct_name}");
	println!("next_field: {next}");
	println!("start: {}", addr_hex(start));
	println!("items: {}", result.items.len());
	println!("idx\taddr\tcode\tstruct");
	for item in &result.items {
		println!(
			"{}\t{}\t{}\t{}",
			item.index,
			addr_hex(item.addr),
			render_code(item.block.head.code),
			dna.struct_name_by_index(item.block.head.sdna_nr).unwrap_or("<unknown>")
		);
	}
	println!("stop_step: {}", result.stop.step);
	println!("stop_reason: {}", stop_reason_label(&result.stop.reason));

	Ok(())
}

fn stop_reason_label(reason: &WalkStopReason) -> String {
	match reason {
		WalkStopReason::NullNext => "NullNext".to_owned(),
		WalkStopReason::UnresolvedNext(addr) => format!("UnresolvedNext({})", addr_hex(*addr)),
		WalkStopReason::Cycle(addr) => format!("Cycle({})", addr_hex(*addr)),
		WalkStopReason::StepLimit => "StepLimit".to_owned(),
	}
}
