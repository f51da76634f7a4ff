#![allow(missing_docs, dead_code)]

/// Builds `DNA1` payloads for synthetic containers.
///
/// Indices returned by `name`/`ty` feed straight into `strukt` records,
/// mirroring how the catalog cross-references its tables.
pub struct CatalogBuilder {
	names: Vec<String>,
	types: Vec<(String, u16)>,
	structs: Vec<(u16, Vec<(u16, u16)>)>,
}

impl CatalogBuilder {
	pub fn new() -> Self {
		Self {
			names: Vec::new(),
			types: Vec::new(),
			structs: Vec::new(),
		}
	}

	pub fn name(&mut self, raw: &str) -> u16 {
		self.names.push(raw.to_owned());
		(self.names.len() - 1) as u16
	}

	pub fn ty(&mut self, name: &str, len: u16) -> u16 {
		self.types.push((name.to_owned(), len));
		(self.types.len() - 1) as u16
	}

	/// Append a struct record; returns its schema index.
	pub fn strukt(&mut self, type_idx: u16, fields: &[(u16, u16)]) -> u32 {
		self.structs.push((type_idx, fields.to_vec()));
		(self.structs.len() - 1) as u32
	}

	pub fn build(&self) -> Vec<u8> {
		let mut out = Vec::new();
		out.extend_from_slice(b"SDNA");

		out.extend_from_slice(b"NAME");
		out.extend_from_slice(&(self.names.len() as u32).to_le_bytes());
		for name in &self.names {
			out.extend_from_slice(name.as_bytes());
			out.push(0);
		}
		pad4(&mut out);

		out.extend_from_slice(b"TYPE");
		out.extend_from_slice(&(self.types.len() as u32).to_le_bytes());
		for (name, _) in &self.types {
			out.extend_from_slice(name.as_bytes());
			out.push(0);
		}
		pad4(&mut out);

		out.extend_from_slice(b"TLEN");
		for (_, len) in &self.types {
			out.extend_from_slice(&len.to_le_bytes());
		}
		pad4(&mut out);

		out.extend_from_slice(b"STRC");
		out.extend_from_slice(&(self.structs.len() as u32).to_le_bytes());
		for (type_idx, fields) in &self.structs {
			out.extend_from_slice(&type_idx.to_le_bytes());
			out.extend_from_slice(&(fields.len() as u16).to_le_bytes());
			for (field_type, field_name) in fields {
				out.extend_from_slice(&field_type.to_le_bytes());
				out.extend_from_slice(&field_name.to_le_bytes());
			}
		}

		out
	}
}

/// Byte-level writer for whole synthetic containers.
pub struct ContainerBuilder {
	bytes: Vec<u8>,
}

impl ContainerBuilder {
	/// Start a canonical `BLENDER-v300` container.
	pub fn new() -> Self {
		Self::with_signature(b"BLENDER", b'-', b'v', b"300")
	}

	pub fn with_signature(magic: &[u8; 7], pointer_tag: u8, order_tag: u8, version: &[u8; 3]) -> Self {
		let mut bytes = Vec::new();
		bytes.extend_from_slice(magic);
		bytes.push(pointer_tag);
		bytes.push(order_tag);
		bytes.extend_from_slice(version);
		Self { bytes }
	}

	pub fn block(mut self, code: [u8; 4], old: u64, sdna_nr: u32, nr: u32, payload: &[u8]) -> Self {
		self.bytes.extend_from_slice(&code);
		self.bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
		self.bytes.extend_from_slice(&old.to_le_bytes());
		self.bytes.extend_from_slice(&sdna_nr.to_le_bytes());
		self.bytes.extend_from_slice(&nr.to_le_bytes());
		self.bytes.extend_from_slice(payload);
		pad4(&mut self.bytes);
		self
	}

	pub fn dna(self, payload: &[u8]) -> Self {
		self.block(*b"DNA1", 0, 0, 1, payload)
	}

	pub fn endb(self) -> Self {
		self.block(*b"ENDB", 0, 0, 0, &[])
	}

	/// Append raw bytes after the last written block.
	pub fn trailing_garbage(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}

fn pad4(out: &mut Vec<u8>) {
	while out.len() % 4 != 0 {
		out.push(0);
	}
}

/// Catalog with `Foo { int a; int b[2]; }`, `int` = 4, `Foo` = 12.
pub fn foo_catalog() -> Vec<u8> {
	let mut catalog = CatalogBuilder::new();
	let name_a = catalog.name("a");
	let name_b = catalog.name("b[2]");
	let ty_int = catalog.ty("int", 4);
	let ty_foo = catalog.ty("Foo", 12);
	catalog.strukt(ty_foo, &[(ty_int, name_a), (ty_int, name_b)]);
	catalog.build()
}

/// Catalog with `Node { Node *next; int value; }`, `Node` = 12.
pub fn node_catalog() -> Vec<u8> {
	let mut catalog = CatalogBuilder::new();
	let name_next = catalog.name("*next");
	let name_value = catalog.name("value");
	let ty_int = catalog.ty("int", 4);
	let ty_node = catalog.ty("Node", 12);
	catalog.strukt(ty_node, &[(ty_node, name_next), (ty_int, name_value)]);
	catalog.build()
}

/// `Node` instance payload: link address then value.
pub fn node_payload(next: u64, value: i32) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(&next.to_le_bytes());
	out.extend_from_slice(&value.to_le_bytes());
	out
}
