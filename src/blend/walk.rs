use std::collections::HashSet;

use crate::blend::read::scalar_at;
use crate::blend::{AddressIndex, BlendError, Block, Dna, Result};

/// Behavior when a walk detects a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
	/// Report the condition in the result and stop.
	Stop,
	/// Surface the condition as an error.
	Error,
}

/// Linked-chain traversal options.
#[derive(Debug, Clone)]
pub struct WalkOptions {
	/// Raw declarator of the link field, matched verbatim.
	pub next_field: Box<str>,
	/// Maximum number of chunks to visit.
	pub max_steps: usize,
	/// Action when the next address was already visited.
	pub on_cycle: StopMode,
}

impl Default for WalkOptions {
	fn default() -> Self {
		Self {
			next_field: Box::from("*next"),
			max_steps: 1024,
			on_cycle: StopMode::Stop,
		}
	}
}

/// Why a walk ended before exhausting its step budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStopReason {
	/// Link field held the null address.
	NullNext,
	/// Link field held a non-zero address with no matching chunk.
	UnresolvedNext(u64),
	/// Link field pointed back to a visited address.
	Cycle(u64),
	/// The step budget ran out with the chain unfinished.
	StepLimit,
}

/// Stop metadata with the step index where the walk ended.
#[derive(Debug, Clone, Copy)]
pub struct WalkStop {
	/// Visit index where the stop occurred.
	pub step: usize,
	/// Structured stop reason.
	pub reason: WalkStopReason,
}

/// One visited chunk in a chain walk.
#[derive(Debug, Clone, Copy)]
pub struct WalkItem<'a> {
	/// Zero-based visit index.
	pub index: usize,
	/// Address the chunk was reached through.
	pub addr: u64,
	/// The resolved chunk.
	pub block: Block<'a>,
}

/// Result of walking a pointer chain.
///
/// Every walk ends for a reason; an acyclic chain of length N yields N
/// items and stops with [`WalkStopReason::NullNext`].
#[derive(Debug, Clone)]
pub struct WalkResult<'a> {
	/// Visited chunks in chain order.
	pub items: Vec<WalkItem<'a>>,
	/// Stop metadata.
	pub stop: WalkStop,
}

/// Follow a `(struct, link-field)` chain from `start` until it ends.
///
/// Every visited address goes into an explicit visited set, so a cyclic
/// chain stops with [`WalkStopReason::Cycle`] or
/// [`BlendError::CycleDetected`] instead of looping forever.
pub fn walk_chain<'a>(dna: &Dna, index: &AddressIndex<'a>, struct_name: &str, start: u64, options: &WalkOptions) -> Result<WalkResult<'a>> {
	let next_offset = dna.offset_of(struct_name, &options.next_field);

	let mut items = Vec::new();
	let mut visited = HashSet::new();
	let mut current = start;

	loop {
		if current == 0 {
			return Ok(stopped(items, WalkStopReason::NullNext));
		}

		if items.len() >= options.max_steps {
			return Ok(stopped(items, WalkStopReason::StepLimit));
		}

		let Some(block) = index.resolve(current) else {
			return Ok(stopped(items, WalkStopReason::UnresolvedNext(current)));
		};

		visited.insert(current);
		items.push(WalkItem {
			index: items.len(),
			addr: current,
			block,
		});

		let next = scalar_at::<u64>(block.payload, next_offset)?;
		if next != 0 && visited.contains(&next) {
			return match options.on_cycle {
				StopMode::Stop => Ok(stopped(items, WalkStopReason::Cycle(next))),
				StopMode::Error => Err(BlendError::CycleDetected { addr: next }),
			};
		}

		current = next;
	}
}

fn stopped(items: Vec<WalkItem<'_>>, reason: WalkStopReason) -> WalkResult<'_> {
	let step = items.len().saturating_sub(1);
	WalkResult {
		items,
		stop: WalkStop { step, reason },
	}
}
