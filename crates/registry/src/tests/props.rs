//! Property checks over the generation-two table.

use proptest::prelude::*;

use crate::{ElementCategory, RegistryError, RegistryVersion, table_for};

fn any_category() -> impl Strategy<Value = ElementCategory> {
	let categories = table_for(RegistryVersion::V214)
		.unwrap()
		.categories()
		.to_vec();
	proptest::sample::select(categories)
}

proptest! {
	#[test]
	fn describe_then_resolve_round_trips(category in any_category(), slot in 1u16..=273) {
		let table = table_for(RegistryVersion::V214).unwrap();
		match table.name_for(category, slot) {
			Ok(name) => prop_assert_eq!(table.slot_for(category, name).unwrap().get(), slot),
			Err(RegistryError::Unassigned { .. }) => {}
			Err(err) => prop_assert!(false, "unexpected error: {err}"),
		}
	}

	#[test]
	fn slots_above_the_window_are_rejected(category in any_category(), slot in 274u16..) {
		let table = table_for(RegistryVersion::V214).unwrap();
		prop_assert_eq!(
			table.name_for(category, slot),
			Err(RegistryError::OutOfRange { slot, max: 273 })
		);
	}

	// Builtin names are all lowercase and lookup is case-sensitive, so an
	// uppercase spelling never resolves.
	#[test]
	fn uppercase_names_never_resolve(category in any_category(), name in "[A-Z][A-Z0-9_]{0,11}") {
		let table = table_for(RegistryVersion::V214).unwrap();
		prop_assert_eq!(
			table.slot_for(category, &name),
			Err(RegistryError::NotFound { category, name: name.clone() })
		);
	}
}
