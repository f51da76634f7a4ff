#![allow(missing_docs)]

mod common;

use std::path::PathBuf;
use std::process::{Command, Output};

use common::{ContainerBuilder, foo_catalog, node_catalog, node_payload};

fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
	let mut path = std::env::temp_dir();
	path.push(format!("blendexpl-{}-{name}", std::process::id()));
	std::fs::write(&path, bytes).expect("fixture writes");
	path
}

fn run_blendexpl(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_blendexpl")).args(args).output().expect("command executes")
}

fn stdout_of(output: &Output) -> String {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn info_json_reports_container_shape() {
	let raw = ContainerBuilder::new()
		.block(*b"FO\0\0", 0xBEEF, 0, 1, &[0_u8; 12])
		.dna(&foo_catalog())
		.endb()
		.build();
	let path = write_fixture("info.blend", &raw);

	let output = run_blendexpl(&["info", path.to_str().expect("utf8 path"), "--json"]);
	let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).expect("stdout is valid json");

	assert_eq!(json["version"], 300);
	assert_eq!(json["pointer_size"], 8);
	assert_eq!(json["endianness"], "little");
	assert_eq!(json["block_count"], 3);
	assert_eq!(json["data_block_count"], 0);
	assert_eq!(json["has_dna"], true);
	assert_eq!(json["has_endb"], true);
	assert_eq!(json["address_collisions"], 0);

	let _ = std::fs::remove_file(path);
}

#[test]
fn dna_struct_listing_shows_layout_with_offsets() {
	let raw = ContainerBuilder::new().dna(&foo_catalog()).endb().build();
	let path = write_fixture("dna.blend", &raw);

	let output = run_blendexpl(&["dna", path.to_str().expect("utf8 path"), "--struct", "Foo"]);
	let stdout = stdout_of(&output);

	assert!(stdout.contains("struct Foo (length: 12)"), "unexpected output: {stdout}");
	assert!(stdout.contains("field_count: 2"), "unexpected output: {stdout}");
	assert!(stdout.contains("int b[2]  // 4"), "unexpected output: {stdout}");

	let _ = std::fs::remove_file(path);
}

#[test]
fn walk_command_traverses_a_chain() {
	let raw = ContainerBuilder::new()
		.block(*b"ND\0\0", 0x1000, 0, 1, &node_payload(0x2000, 0))
		.block(*b"ND\0\0", 0x2000, 0, 1, &node_payload(0, 1))
		.dna(&node_catalog())
		.endb()
		.build();
	let path = write_fixture("walk.blend", &raw);

	let output = run_blendexpl(&["walk", path.to_str().expect("utf8 path"), "--struct", "Node", "--addr", "0x1000"]);
	let stdout = stdout_of(&output);

	assert!(stdout.contains("items: 2"), "unexpected output: {stdout}");
	assert!(stdout.contains("stop_reason: NullNext"), "unexpected output: {stdout}");

	let _ = std::fs::remove_file(path);
}
