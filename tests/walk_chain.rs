#![allow(missing_docs)]

mod common;

use blendexpl::blend::{BlendError, BlendFile, StopMode, WalkOptions, WalkStopReason, walk_chain};
use common::{ContainerBuilder, node_catalog, node_payload};

fn chain_file(links: &[(u64, u64)]) -> Vec<u8> {
	let mut builder = ContainerBuilder::new();
	for (index, (old, next)) in links.iter().enumerate() {
		builder = builder.block(*b"ND\0\0", *old, 0, 1, &node_payload(*next, index as i32));
	}
	builder.dna(&node_catalog()).endb().build()
}

#[test]
fn acyclic_chain_visits_every_node_and_terminates() {
	let raw = chain_file(&[(0x1000, 0x2000), (0x2000, 0x3000), (0x3000, 0)]);
	let blend = BlendFile::from_bytes(raw).expect("container parses");
	let dna = blend.dna().expect("catalog parses");
	let index = blend.address_index().expect("index builds");

	let result = walk_chain(&dna, &index, "Node", 0x1000, &WalkOptions::default()).expect("walk succeeds");

	let addrs: Vec<u64> = result.items.iter().map(|item| item.addr).collect();
	assert_eq!(addrs, vec![0x1000, 0x2000, 0x3000]);
	assert_eq!(result.stop.step, 2);
	assert_eq!(result.stop.reason, WalkStopReason::NullNext);
}

#[test]
fn null_start_visits_nothing() {
	let raw = chain_file(&[(0x1000, 0)]);
	let blend = BlendFile::from_bytes(raw).expect("container parses");
	let dna = blend.dna().expect("catalog parses");
	let index = blend.address_index().expect("index builds");

	let result = walk_chain(&dna, &index, "Node", 0, &WalkOptions::default()).expect("walk succeeds");
	assert!(result.items.is_empty());
	assert_eq!(result.stop.reason, WalkStopReason::NullNext);
}

#[test]
fn cycle_is_reported_instead_of_hanging() {
	let raw = chain_file(&[(0x1000, 0x2000), (0x2000, 0x1000)]);
	let blend = BlendFile::from_bytes(raw).expect("container parses");
	let dna = blend.dna().expect("catalog parses");
	let index = blend.address_index().expect("index builds");

	let result = walk_chain(&dna, &index, "Node", 0x1000, &WalkOptions::default()).expect("walk succeeds");
	assert_eq!(result.items.len(), 2);
	assert_eq!(result.stop.reason, WalkStopReason::Cycle(0x1000));
}

#[test]
fn cycle_can_be_surfaced_as_an_error() {
	let raw = chain_file(&[(0x1000, 0x1000)]);
	let blend = BlendFile::from_bytes(raw).expect("container parses");
	let dna = blend.dna().expect("catalog parses");
	let index = blend.address_index().expect("index builds");

	let options = WalkOptions {
		on_cycle: StopMode::Error,
		..WalkOptions::default()
	};
	let result = walk_chain(&dna, &index, "Node", 0x1000, &options);
	assert!(matches!(result, Err(BlendError::CycleDetected { addr: 0x1000 })));
}

#[test]
fn unresolved_link_stops_the_walk() {
	let raw = chain_file(&[(0x1000, 0xDEAD)]);
	let blend = BlendFile::from_bytes(raw).expect("container parses");
	let dna = blend.dna().expect("catalog parses");
	let index = blend.address_index().expect("index builds");

	let result = walk_chain(&dna, &index, "Node", 0x1000, &WalkOptions::default()).expect("walk succeeds");
	assert_eq!(result.items.len(), 1);
	assert_eq!(result.stop.reason, WalkStopReason::UnresolvedNext(0xDEAD));
}

#[test]
fn step_budget_bounds_an_unfinished_chain() {
	let raw = chain_file(&[(0x1000, 0x2000), (0x2000, 0x3000), (0x3000, 0)]);
	let blend = BlendFile::from_bytes(raw).expect("container parses");
	let dna = blend.dna().expect("catalog parses");
	let index = blend.address_index().expect("index builds");

	let options = WalkOptions {
		max_steps: 2,
		..WalkOptions::default()
	};
	let result = walk_chain(&dna, &index, "Node", 0x1000, &options).expect("walk succeeds");
	assert_eq!(result.items.len(), 2);
	assert_eq!(result.stop.reason, WalkStopReason::StepLimit);
}
