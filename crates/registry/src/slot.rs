//! Slot indexes and the reserved custom attribute window.

use std::num::NonZeroU16;

use serde::{Deserialize, Serialize};

/// Index into a per-element attribute array.
///
/// Valid slots start at 1; slot 0 is never assigned and is unrepresentable
/// here by construction. A slot is only meaningful together with the element
/// category and registry version it was resolved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotIndex(NonZeroU16);

impl SlotIndex {
	/// Creates a slot index, rejecting zero.
	pub const fn new(slot: u16) -> Option<SlotIndex> {
		match NonZeroU16::new(slot) {
			Some(nz) => Some(SlotIndex(nz)),
			None => None,
		}
	}

	/// Returns the raw slot number.
	pub const fn get(self) -> u16 {
		self.0.get()
	}
}

impl core::fmt::Display for SlotIndex {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}", self.get())
	}
}

/// Inclusive range of slots reserved for extension-defined attributes.
///
/// The window sits strictly above every builtin slot of its version, so a
/// caller can allocate its own attributes without colliding with the builtin
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
	pub start: SlotIndex,
	pub end: SlotIndex,
}

impl SlotRange {
	/// Creates an inclusive range. `start` must not exceed `end`.
	pub const fn new(start: SlotIndex, end: SlotIndex) -> SlotRange {
		SlotRange { start, end }
	}

	/// Returns true if the slot falls inside the window.
	pub fn contains(&self, slot: SlotIndex) -> bool {
		self.start <= slot && slot <= self.end
	}

	/// Number of slots in the window.
	pub fn len(&self) -> u16 {
		self.end.get() - self.start.get() + 1
	}

	/// An inclusive range is never empty.
	pub fn is_empty(&self) -> bool {
		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slot_zero_is_unrepresentable() {
		assert!(SlotIndex::new(0).is_none());
		assert_eq!(SlotIndex::new(1).map(SlotIndex::get), Some(1));
	}

	#[test]
	fn range_is_inclusive_on_both_ends() {
		let start = SlotIndex::new(234).unwrap();
		let end = SlotIndex::new(273).unwrap();
		let range = SlotRange::new(start, end);

		assert!(range.contains(start));
		assert!(range.contains(end));
		assert!(!range.contains(SlotIndex::new(233).unwrap()));
		assert!(!range.contains(SlotIndex::new(274).unwrap()));
		assert_eq!(range.len(), 40);
	}
}
