//! End-to-end lookup scenarios against the builtin tables.

use crate::ElementCategory::{
	AccelSol, BeamBeam, Crystal, DefBeam, DefBeamStart, Hom, Lcavity, Marker, Quadrupole,
};
use crate::{RegistryError, RegistryVersion, Resolver};

#[test]
fn names_do_not_leak_across_categories() {
	let resolver = Resolver::for_version(RegistryVersion::V214).unwrap();

	// Cavities define `gradient`; a marker does not, even in the same table.
	assert_eq!(resolver.resolve(Lcavity, "gradient").unwrap().get(), 6);
	assert_eq!(
		resolver.resolve(Marker, "gradient"),
		Err(RegistryError::NotFound {
			category: Marker,
			name: "gradient".to_owned(),
		})
	);
}

#[test]
fn overloaded_slots_depend_on_the_category() {
	let resolver = Resolver::for_version(RegistryVersion::V74).unwrap();

	// Slot 4 is k1 on a quadrupole and a beam size on a beam-beam element.
	assert_eq!(resolver.resolve(Quadrupole, "k1").unwrap().get(), 4);
	assert_eq!(resolver.resolve(BeamBeam, "sig_x").unwrap().get(), 4);
	assert_eq!(resolver.describe(Quadrupole, 4).unwrap(), "k1");
	assert_eq!(resolver.describe(BeamBeam, 4).unwrap(), "sig_x");
}

#[test]
fn custom_slots_are_in_range_but_never_named() {
	let resolver = Resolver::for_version(RegistryVersion::V214).unwrap();

	assert_eq!(
		resolver.describe(Quadrupole, 250),
		Err(RegistryError::Unassigned {
			category: Quadrupole,
			slot: 250,
		})
	);
	assert_eq!(
		resolver.describe(Quadrupole, 300),
		Err(RegistryError::OutOfRange { slot: 300, max: 273 })
	);
}

#[test]
fn retired_categories_exist_only_in_their_generation() {
	let old = Resolver::for_version(RegistryVersion::V74).unwrap();
	let new = Resolver::for_version(RegistryVersion::V214).unwrap();

	assert_eq!(old.resolve(AccelSol, "b_z").unwrap().get(), 10);
	assert_eq!(
		new.resolve(AccelSol, "b_z"),
		Err(RegistryError::UnknownCategory {
			version: RegistryVersion::V214,
			category: AccelSol,
		})
	);

	// Photon-line categories only arrived in generation two.
	assert_eq!(new.resolve(Crystal, "d_spacing").unwrap().get(), 39);
	assert_eq!(
		old.resolve(Crystal, "d_spacing"),
		Err(RegistryError::UnknownCategory {
			version: RegistryVersion::V74,
			category: Crystal,
		})
	);
}

#[test]
fn bookkeeping_categories_resolve_like_any_other() {
	let old = Resolver::for_version(RegistryVersion::V74).unwrap();
	let new = Resolver::for_version(RegistryVersion::V214).unwrap();

	assert_eq!(old.resolve(DefBeam, "particle").unwrap().get(), 1);
	assert_eq!(new.resolve(DefBeamStart, "x").unwrap().get(), 1);
	assert_eq!(new.resolve(DefBeamStart, "pz").unwrap().get(), 6);
}

#[test]
fn a_category_with_no_attributes_still_has_a_code() {
	let resolver = Resolver::for_version(RegistryVersion::V74).unwrap();
	let table = resolver.table().unwrap();

	assert_eq!(table.category_code(Hom).unwrap(), 29);
	assert!(table.attributes(Hom).is_empty());
	assert_eq!(
		resolver.resolve(Hom, "l"),
		Err(RegistryError::NotFound {
			category: Hom,
			name: "l".to_owned(),
		})
	);
}
