use blendexpl::blend::{BlendError, Block, BlockTree, Dna, Result, field_ptr, field_string};

/// Parse up-to-4 ASCII chunk code into padded `[u8; 4]`.
pub(crate) fn parse_block_code(code: &str) -> Result<[u8; 4]> {
	if code.is_empty() || code.len() > 4 || !code.is_ascii() {
		return Err(BlendError::InvalidBlockCode { code: code.to_owned() });
	}

	let mut out = [0_u8; 4];
	out[..code.len()].copy_from_slice(code.as_bytes());
	Ok(out)
}

/// Parse decimal or `0x`-prefixed hex address literal.
pub(crate) fn parse_addr(value: &str) -> Result<u64> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u64::from_str_radix(stripped, 16)
	} else {
		value.parse::<u64>()
	};

	parsed.map_err(|_| BlendError::InvalidAddressLiteral { value: value.to_owned() })
}

/// Render chunk code bytes as a printable label.
pub(crate) fn render_code(code: [u8; 4]) -> String {
	let mut out = String::new();
	for byte in code {
		if byte == 0 {
			continue;
		}
		if byte.is_ascii_graphic() || byte == b' ' {
			out.push(char::from(byte));
		} else {
			out.push('.');
		}
	}
	if out.is_empty() { "....".to_owned() } else { out }
}

/// Render an address as a fixed-width hex literal.
pub(crate) fn addr_hex(value: u64) -> String {
	format!("0x{value:016x}")
}

/// User-facing name of an ID-led chunk, without the 2-char code prefix.
pub(crate) fn id_name(dna: &Dna, block: &Block<'_>) -> Result<String> {
	let full = field_string(dna, block, "ID", "name[66]")?;
	Ok(full.chars().skip(2).collect())
}

/// Top-level index of the object whose data pointer records `data_addr`.
pub(crate) fn find_owner_object(dna: &Dna, tree: &BlockTree<'_>, data_addr: u64) -> Option<usize> {
	if data_addr == 0 {
		return None;
	}

	let mut from = 0;
	while let Some(idx) = tree.find_by_code([b'O', b'B', 0, 0], from) {
		let group = tree.get(idx)?;
		if field_ptr(dna, &group.block, "Object", "*data").ok() == Some(data_addr) {
			return Some(idx);
		}
		from = idx + 1;
	}
	None
}

/// Serialize a report to pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(out) => println!("{out}"),
		Err(err) => eprintln!("error: json serialization failed: {err}"),
	}
}
