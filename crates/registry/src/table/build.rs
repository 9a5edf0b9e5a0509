//! Construction and validation of slot tables.

use rustc_hash::FxHashMap;

use crate::category::ElementCategory;
use crate::defs::{AttrDef, AttrKind, Group, VersionDefs};
use crate::error::{RegistryError, Result};
use crate::slot::{SlotIndex, SlotRange};
use crate::version::RegistryVersion;

use super::{SlotEntry, SlotTable};

/// Accumulates definitions for one generation and validates the whole set at
/// [`build`](SlotTableBuilder::build).
///
/// Validation is total: a definition set with any accidental collision,
/// out-of-window slot, or dangling alias never becomes a [`SlotTable`].
/// Intentional slot sharing must be spelled as an [`AttrDef::alias`].
#[derive(Debug)]
pub struct SlotTableBuilder {
	version: RegistryVersion,
	category_codes: Vec<(ElementCategory, u16)>,
	entries: Vec<(ElementCategory, AttrDef)>,
	builtin_max: u16,
	custom_count: u16,
}

impl SlotTableBuilder {
	pub fn new(version: RegistryVersion, builtin_max: u16, custom_count: u16) -> Self {
		SlotTableBuilder {
			version,
			category_codes: Vec::new(),
			entries: Vec::new(),
			builtin_max,
			custom_count,
		}
	}

	/// Registers a category under its stable wire code.
	pub fn category(mut self, category: ElementCategory, code: u16) -> Self {
		self.category_codes.push((category, code));
		self
	}

	/// Adds one definition to a category.
	pub fn attr(mut self, category: ElementCategory, def: AttrDef) -> Self {
		self.entries.push((category, def));
		self
	}

	/// Adds a definition block shared by several categories.
	pub fn group(mut self, group: &Group) -> Self {
		for &category in group.categories {
			for &def in group.attrs {
				self.entries.push((category, def));
			}
		}
		self
	}

	/// Seeds the builder with a complete static definition set.
	pub fn from_defs(defs: &VersionDefs) -> Self {
		let mut builder = SlotTableBuilder::new(defs.version, defs.builtin_max, defs.custom_count);
		for &(category, code) in defs.category_codes {
			builder = builder.category(category, code);
		}
		for group in defs.groups {
			builder = builder.group(group);
		}
		builder
	}

	/// Validates every definition and publishes the table.
	pub fn build(self) -> Result<SlotTable> {
		// The custom window must hold at least one slot and end within u16;
		// an inclusive SlotRange cannot express an empty window.
		let window_start =
			self.builtin_max
				.checked_add(1)
				.ok_or(RegistryError::OutOfRange {
					slot: self.builtin_max,
					max: u16::MAX - 1,
				})?;
		if self.custom_count == 0 {
			return Err(RegistryError::OutOfRange {
				slot: window_start,
				max: self.builtin_max,
			});
		}
		let max_slot = self.builtin_max.checked_add(self.custom_count).ok_or(
			RegistryError::OutOfRange {
				slot: self.builtin_max,
				max: u16::MAX - self.custom_count,
			},
		)?;
		let custom_start = SlotIndex::new(window_start).ok_or(RegistryError::OutOfRange {
			slot: window_start,
			max: max_slot,
		})?;
		let custom_end = SlotIndex::new(max_slot).ok_or(RegistryError::OutOfRange {
			slot: max_slot,
			max: max_slot,
		})?;

		let mut code_of = FxHashMap::default();
		let mut category_of = FxHashMap::default();
		let mut categories = Vec::with_capacity(self.category_codes.len());
		for (category, code) in self.category_codes {
			if code_of.insert(category, code).is_some() || category_of.insert(code, category).is_some()
			{
				return Err(RegistryError::DuplicateCategory {
					version: self.version,
					category,
					code,
				});
			}
			categories.push(category);
		}

		let mut by_name: FxHashMap<ElementCategory, FxHashMap<&'static str, (SlotIndex, AttrKind)>> =
			FxHashMap::default();
		let mut by_slot: FxHashMap<(ElementCategory, u16), &'static str> = FxHashMap::default();
		let mut by_category: FxHashMap<ElementCategory, Vec<SlotEntry>> = FxHashMap::default();
		let mut alias_slots: Vec<(ElementCategory, u16, &'static str)> = Vec::new();

		for (category, def) in self.entries {
			if !code_of.contains_key(&category) {
				return Err(RegistryError::UnknownCategory {
					version: self.version,
					category,
				});
			}
			if def.slot == 0 || def.slot > self.builtin_max {
				return Err(RegistryError::OutOfRange {
					slot: def.slot,
					max: self.builtin_max,
				});
			}
			let slot = SlotIndex::new(def.slot).ok_or(RegistryError::OutOfRange {
				slot: def.slot,
				max: self.builtin_max,
			})?;

			if by_name
				.entry(category)
				.or_default()
				.insert(def.name, (slot, def.kind))
				.is_some()
			{
				return Err(RegistryError::DuplicateDefinition {
					category,
					name: def.name,
					slot: def.slot,
				});
			}
			match def.kind {
				AttrKind::Primary => {
					// Two primary names on one slot is always an accident;
					// intentional sharing is declared as an alias.
					if by_slot.insert((category, def.slot), def.name).is_some() {
						return Err(RegistryError::DuplicateDefinition {
							category,
							name: def.name,
							slot: def.slot,
						});
					}
				}
				AttrKind::Alias => alias_slots.push((category, def.slot, def.name)),
			}
			by_category.entry(category).or_default().push(SlotEntry {
				name: def.name,
				slot,
				kind: def.kind,
			});
		}

		// An alias must shadow a primary; a synonym for nothing is a defect
		// in the definition data.
		for (category, slot, name) in alias_slots {
			if !by_slot.contains_key(&(category, slot)) {
				return Err(RegistryError::DuplicateDefinition {
					category,
					name,
					slot,
				});
			}
		}

		for entries in by_category.values_mut() {
			entries.sort_by_key(|e| (e.slot, e.name));
		}

		let definitions: usize = by_category.values().map(Vec::len).sum();
		tracing::debug!(
			version = %self.version,
			categories = categories.len(),
			definitions,
			"slot table published"
		);

		Ok(SlotTable {
			version: self.version,
			by_name,
			by_slot,
			by_category,
			code_of,
			category_of,
			categories,
			custom: SlotRange::new(custom_start, custom_end),
			builtin_max: self.builtin_max,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::category::ElementCategory::{Marker, Quadrupole};

	fn builder() -> SlotTableBuilder {
		SlotTableBuilder::new(RegistryVersion(1), 50, 10)
			.category(Quadrupole, 3)
			.category(Marker, 14)
	}

	#[test]
	fn accepts_a_declared_alias() {
		let table = builder()
			.attr(Quadrupole, AttrDef::primary("b_field", 34))
			.attr(Quadrupole, AttrDef::alias("b_gradient", 34))
			.build()
			.unwrap();

		assert_eq!(
			table.slot_for(Quadrupole, "b_gradient").unwrap(),
			table.slot_for(Quadrupole, "b_field").unwrap(),
		);
		// Reverse lookup reports the primary, never the alias.
		assert_eq!(table.name_for(Quadrupole, 34).unwrap(), "b_field");
	}

	#[test]
	fn rejects_redefined_name() {
		let err = builder()
			.attr(Quadrupole, AttrDef::primary("k1", 4))
			.attr(Quadrupole, AttrDef::primary("k1", 5))
			.build()
			.unwrap_err();
		assert_eq!(
			err,
			RegistryError::DuplicateDefinition {
				category: Quadrupole,
				name: "k1",
				slot: 5,
			}
		);
	}

	#[test]
	fn rejects_two_primaries_on_one_slot() {
		let err = builder()
			.attr(Quadrupole, AttrDef::primary("k1", 4))
			.attr(Quadrupole, AttrDef::primary("gradient", 4))
			.build()
			.unwrap_err();
		assert!(matches!(err, RegistryError::DuplicateDefinition { slot: 4, .. }));
	}

	#[test]
	fn rejects_alias_without_primary() {
		let err = builder()
			.attr(Quadrupole, AttrDef::alias("b_gradient", 34))
			.build()
			.unwrap_err();
		assert!(matches!(err, RegistryError::DuplicateDefinition { slot: 34, .. }));
	}

	#[test]
	fn same_slot_in_different_categories_is_fine() {
		let table = builder()
			.attr(Quadrupole, AttrDef::primary("k1", 4))
			.attr(Marker, AttrDef::primary("x_gain_err", 4))
			.build()
			.unwrap();
		assert_eq!(table.name_for(Quadrupole, 4).unwrap(), "k1");
		assert_eq!(table.name_for(Marker, 4).unwrap(), "x_gain_err");
	}

	#[test]
	fn rejects_slot_outside_builtin_window() {
		let err = builder()
			.attr(Quadrupole, AttrDef::primary("k1", 51))
			.build()
			.unwrap_err();
		assert_eq!(err, RegistryError::OutOfRange { slot: 51, max: 50 });

		let err = builder()
			.attr(Quadrupole, AttrDef::primary("k1", 0))
			.build()
			.unwrap_err();
		assert_eq!(err, RegistryError::OutOfRange { slot: 0, max: 50 });
	}

	#[test]
	fn rejects_unregistered_category() {
		let err = SlotTableBuilder::new(RegistryVersion(1), 50, 10)
			.attr(Quadrupole, AttrDef::primary("k1", 4))
			.build()
			.unwrap_err();
		assert_eq!(
			err,
			RegistryError::UnknownCategory {
				version: RegistryVersion(1),
				category: Quadrupole,
			}
		);
	}

	#[test]
	fn rejects_reused_wire_code() {
		let err = builder().category(Marker, 14).build().unwrap_err();
		assert_eq!(
			err,
			RegistryError::DuplicateCategory {
				version: RegistryVersion(1),
				category: Marker,
				code: 14,
			}
		);
	}

	#[test]
	fn rejects_zero_width_custom_window() {
		// An inclusive range cannot hold zero slots; a window of width 0
		// must fail at build time, not panic in SlotRange::len.
		let err = SlotTableBuilder::new(RegistryVersion(1), 50, 0)
			.category(Quadrupole, 3)
			.build()
			.unwrap_err();
		assert_eq!(err, RegistryError::OutOfRange { slot: 51, max: 50 });
	}

	#[test]
	fn rejects_custom_window_overflowing_u16() {
		let err = SlotTableBuilder::new(RegistryVersion(1), u16::MAX, 1)
			.build()
			.unwrap_err();
		assert!(matches!(err, RegistryError::OutOfRange { .. }));

		let err = SlotTableBuilder::new(RegistryVersion(1), u16::MAX - 10, 40)
			.build()
			.unwrap_err();
		assert!(matches!(err, RegistryError::OutOfRange { .. }));
	}

	#[test]
	fn custom_window_sits_above_builtins() {
		let table = builder().build().unwrap();
		let range = table.custom_slot_range();
		assert_eq!(range.start.get(), 51);
		assert_eq!(range.end.get(), 60);
		assert_eq!(table.max_slot(), 60);

		// Custom slots are in range but carry no builtin name.
		assert_eq!(
			table.name_for(Quadrupole, 55),
			Err(RegistryError::Unassigned {
				category: Quadrupole,
				slot: 55,
			})
		);
		assert_eq!(
			table.name_for(Quadrupole, 61),
			Err(RegistryError::OutOfRange { slot: 61, max: 60 })
		);
	}
}
