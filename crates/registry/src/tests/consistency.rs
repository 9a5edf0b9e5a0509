//! Whole-table scans that every builtin generation must pass.

use crate::defs::AttrKind;
use crate::version::SUPPORTED;
use crate::{CUSTOM_ATTRIBUTE_NUM, ElementCategory, RegistryVersion, table_for};

#[test]
fn every_supported_version_publishes_a_table() {
	for &version in SUPPORTED {
		let table = table_for(version).unwrap();
		assert_eq!(table.version(), version);
		assert!(!table.is_empty());
	}
}

#[test]
fn lookups_round_trip_in_both_directions() {
	for &version in SUPPORTED {
		let table = table_for(version).unwrap();
		for (category, entry) in table.iter() {
			let resolved = table.slot_for(category, entry.name).unwrap();
			assert_eq!(resolved, entry.slot, "{version}: {category} {}", entry.name);

			let primary = table.name_for(category, entry.slot.get()).unwrap();
			match entry.kind {
				AttrKind::Primary => assert_eq!(primary, entry.name),
				// An alias resolves forward but reverse lookup names the
				// primary it shadows.
				AttrKind::Alias => {
					assert_ne!(primary, entry.name);
					assert_eq!(table.slot_for(category, primary).unwrap(), entry.slot);
				}
			}
		}
	}
}

#[test]
fn custom_window_sits_strictly_above_builtins() {
	for &version in SUPPORTED {
		let table = table_for(version).unwrap();
		let range = table.custom_slot_range();

		assert_eq!(range.start.get(), table.builtin_max() + 1);
		assert_eq!(range.len(), CUSTOM_ATTRIBUTE_NUM);
		assert_eq!(table.max_slot(), range.end.get());

		for (_, entry) in table.iter() {
			assert!(entry.slot.get() <= table.builtin_max());
		}
	}
}

#[test]
fn custom_window_bounds_are_the_published_ones() {
	let v74 = table_for(RegistryVersion::V74).unwrap().custom_slot_range();
	assert_eq!((v74.start.get(), v74.end.get()), (111, 150));

	let v214 = table_for(RegistryVersion::V214).unwrap().custom_slot_range();
	assert_eq!((v214.start.get(), v214.end.get()), (234, 273));
}

#[test]
fn category_codes_are_bijective() {
	for &version in SUPPORTED {
		let table = table_for(version).unwrap();
		for &category in table.categories() {
			let code = table.category_code(category).unwrap();
			assert_eq!(table.category_from_code(code).unwrap(), category);
		}
	}

	assert_eq!(table_for(RegistryVersion::V74).unwrap().categories().len(), 38);
	assert_eq!(
		table_for(RegistryVersion::V214).unwrap().categories().len(),
		58
	);
}

#[test]
fn length_is_slot_one_in_every_generation() {
	for &version in SUPPORTED {
		let table = table_for(version).unwrap();
		let slot = table.slot_for(ElementCategory::Sbend, "l").unwrap();
		assert_eq!(slot.get(), 1);
	}
}

#[test]
fn generations_really_diverge() {
	let v74 = table_for(RegistryVersion::V74).unwrap();
	let v214 = table_for(RegistryVersion::V214).unwrap();

	// The misalignment block was renumbered wholesale in generation two.
	let q = ElementCategory::Quadrupole;
	assert_eq!(v74.slot_for(q, "x_offset").unwrap().get(), 23);
	assert_eq!(v214.slot_for(q, "x_offset").unwrap().get(), 36);
	assert_eq!(v74.slot_for(q, "tilt_tot").unwrap().get(), 35);
	assert_eq!(v214.slot_for(q, "tilt_tot").unwrap().get(), 60);

	// Code 28 was reassigned between generations.
	assert_eq!(
		v74.category_from_code(28).unwrap(),
		ElementCategory::InitEle
	);
	assert_eq!(
		v214.category_from_code(28).unwrap(),
		ElementCategory::BeginningEle
	);
}

#[test]
fn attributes_are_sorted_by_slot() {
	for &version in SUPPORTED {
		let table = table_for(version).unwrap();
		for &category in table.categories() {
			let attrs = table.attributes(category);
			for pair in attrs.windows(2) {
				assert!(pair[0].slot <= pair[1].slot);
			}
		}
	}
}
