//! Published slot tables: immutable name/slot mappings for one version.

mod build;

pub use build::SlotTableBuilder;

use rustc_hash::FxHashMap;

use crate::category::ElementCategory;
use crate::defs::AttrKind;
use crate::error::{RegistryError, Result};
use crate::slot::{SlotIndex, SlotRange};
use crate::version::RegistryVersion;

/// One published attribute definition, as held by a [`SlotTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEntry {
	pub name: &'static str,
	pub slot: SlotIndex,
	pub kind: AttrKind,
}

/// The complete name/slot mapping of one registry generation.
///
/// Built once by [`SlotTableBuilder`] and never mutated afterwards; shared
/// references can be handed across threads freely. Forward lookup accepts
/// both primary names and aliases; reverse lookup always reports the primary
/// name for a slot.
#[derive(Debug)]
pub struct SlotTable {
	version: RegistryVersion,
	by_name: FxHashMap<ElementCategory, FxHashMap<&'static str, (SlotIndex, AttrKind)>>,
	by_slot: FxHashMap<(ElementCategory, u16), &'static str>,
	by_category: FxHashMap<ElementCategory, Vec<SlotEntry>>,
	code_of: FxHashMap<ElementCategory, u16>,
	category_of: FxHashMap<u16, ElementCategory>,
	/// Categories in wire-code order.
	categories: Vec<ElementCategory>,
	custom: SlotRange,
	builtin_max: u16,
}

impl SlotTable {
	/// The generation this table implements.
	pub fn version(&self) -> RegistryVersion {
		self.version
	}

	/// Resolves an attribute name to its slot within a category.
	///
	/// Aliases resolve to the same slot as their primary. Names defined for
	/// other categories of the same version do not leak in: `gradient` on a
	/// marker is an error even though cavities define it.
	pub fn slot_for(&self, category: ElementCategory, name: &str) -> Result<SlotIndex> {
		if !self.code_of.contains_key(&category) {
			return Err(RegistryError::UnknownCategory {
				version: self.version,
				category,
			});
		}
		match self.by_name.get(&category).and_then(|names| names.get(name)) {
			Some(&(slot, _)) => Ok(slot),
			None => Err(RegistryError::NotFound {
				category,
				name: name.to_owned(),
			}),
		}
	}

	/// Reverse lookup: the primary name defined for a slot within a category.
	///
	/// Slots inside the valid range but without a definition for this
	/// category report [`RegistryError::Unassigned`]; custom-window slots are
	/// always unassigned here since their meaning is caller-defined.
	pub fn name_for(&self, category: ElementCategory, slot: u16) -> Result<&'static str> {
		if !self.code_of.contains_key(&category) {
			return Err(RegistryError::UnknownCategory {
				version: self.version,
				category,
			});
		}
		if slot == 0 || slot > self.max_slot() {
			return Err(RegistryError::OutOfRange {
				slot,
				max: self.max_slot(),
			});
		}
		match self.by_slot.get(&(category, slot)) {
			Some(&name) => Ok(name),
			None => Err(RegistryError::Unassigned { category, slot }),
		}
	}

	/// The window reserved for caller-defined attributes, strictly above
	/// every builtin slot.
	pub fn custom_slot_range(&self) -> SlotRange {
		self.custom
	}

	/// Highest builtin slot number.
	pub fn builtin_max(&self) -> u16 {
		self.builtin_max
	}

	/// Highest valid slot number, custom window included.
	pub fn max_slot(&self) -> u16 {
		self.custom.end.get()
	}

	/// Categories defined by this generation, in wire-code order.
	pub fn categories(&self) -> &[ElementCategory] {
		&self.categories
	}

	/// The stable wire code of a category within this generation.
	pub fn category_code(&self, category: ElementCategory) -> Result<u16> {
		self.code_of
			.get(&category)
			.copied()
			.ok_or(RegistryError::UnknownCategory {
				version: self.version,
				category,
			})
	}

	/// The category carrying a wire code within this generation.
	pub fn category_from_code(&self, code: u16) -> Result<ElementCategory> {
		self.category_of
			.get(&code)
			.copied()
			.ok_or(RegistryError::UnknownCategoryCode {
				version: self.version,
				code,
			})
	}

	/// All definitions of one category, sorted by slot then name.
	pub fn attributes(&self, category: ElementCategory) -> &[SlotEntry] {
		self.by_category.get(&category).map_or(&[], Vec::as_slice)
	}

	/// Every definition in the table, category by category.
	pub fn iter(&self) -> impl Iterator<Item = (ElementCategory, SlotEntry)> + '_ {
		self.categories
			.iter()
			.flat_map(|&cat| self.attributes(cat).iter().map(move |&e| (cat, e)))
	}

	/// Total number of definitions, aliases included.
	pub fn len(&self) -> usize {
		self.by_category.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
