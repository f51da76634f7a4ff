use crate::blend::{BlendError, BlendFile, Block, Result};

/// One top-level chunk with the generic data chunks it owns.
#[derive(Debug)]
pub struct BlockGroup<'a> {
	/// The owning chunk.
	pub block: Block<'a>,
	/// Generic data chunks that immediately followed the owner, in file
	/// order.
	pub children: Vec<Block<'a>>,
}

/// Top-level chunk sequence with owner/children grouping applied.
///
/// The top-level order matches the file and never contains generic data
/// chunks; each of those lives in exactly one owner's `children` list.
#[derive(Debug)]
pub struct BlockTree<'a> {
	groups: Vec<BlockGroup<'a>>,
}

impl<'a> BlockTree<'a> {
	/// Group the file's chunk sequence by ownership.
	///
	/// A generic data chunk before any owner is an internal-consistency
	/// failure of the producer and aborts the build.
	pub fn build(file: &'a BlendFile) -> Result<Self> {
		let mut groups: Vec<BlockGroup<'a>> = Vec::new();

		for block in file.blocks() {
			let block = block?;
			if block.head.is_data() {
				let Some(owner) = groups.last_mut() else {
					return Err(BlendError::OrphanDataBlock { at: block.file_offset });
				};
				owner.children.push(block);
			} else {
				groups.push(BlockGroup {
					block,
					children: Vec::new(),
				});
			}
		}

		Ok(Self { groups })
	}

	/// All groups in top-level file order.
	pub fn groups(&self) -> &[BlockGroup<'a>] {
		&self.groups
	}

	/// Group at a top-level index.
	pub fn get(&self, index: usize) -> Option<&BlockGroup<'a>> {
		self.groups.get(index)
	}

	/// Index of the next top-level chunk matching `code`, at or after
	/// `from`. Linear scan; container sizes in this domain stay small and
	/// callers rely on first-encountered ordering.
	pub fn find_by_code(&self, code: [u8; 4], from: usize) -> Option<usize> {
		self.groups
			.iter()
			.enumerate()
			.skip(from)
			.find(|(_, group)| group.block.head.code == code)
			.map(|(index, _)| index)
	}

	/// Number of top-level groups.
	pub fn len(&self) -> usize {
		self.groups.len()
	}

	/// Whether the tree holds no groups.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}
}
