//! Element categories: the kinds of device an attribute can belong to.

use serde::{Deserialize, Serialize};

/// Kind of physical device (or lattice bookkeeping construct) an attribute
/// belongs to.
///
/// This is the closed union of every category across all supported registry
/// versions. Which categories a given version actually defines, and which
/// stable wire code each carries, is data held by that version's
/// [`SlotTable`](crate::SlotTable) — the same code can name different
/// categories in different versions (code 28 is `init_ele` in version 74 and
/// `beginning_ele` in version 214), so codes are deliberately not enum
/// discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
	Drift,
	Sbend,
	Rbend,
	Quadrupole,
	Sextupole,
	Octupole,
	Solenoid,
	SolQuad,
	BendSolQuad,
	RfCavity,
	Lcavity,
	ElSeparator,
	BeamBeam,
	Wiggler,
	Undulator,
	Marker,
	Kicker,
	Hkicker,
	Vkicker,
	AcKicker,
	Hybrid,
	Multipole,
	AbMultipole,
	SadMult,
	Patch,
	NullEle,
	Match,
	Monitor,
	Instrument,
	Detector,
	Rcollimator,
	Ecollimator,
	Pipe,
	Custom,
	Taylor,
	Group,
	Overlay,
	Girder,
	Fork,
	PhotonFork,
	Mirror,
	MultilayerMirror,
	Crystal,
	Capillary,
	EGun,
	EmField,
	FloorShift,
	Fiducial,
	DiffractionPlate,
	PhotonInit,
	Sample,
	Mask,
	BeginningEle,
	LineEle,
	DefParameter,
	DefBmadCom,
	DefMadBeam,
	DefBeamStart,
	// Version-74-only constructs, retired in generation two.
	AccelSol,
	DefBeam,
	InitEle,
	Hom,
	IBeam,
}

/// Every category, across all versions.
pub const ALL_CATEGORIES: &[ElementCategory] = &[
	ElementCategory::Drift,
	ElementCategory::Sbend,
	ElementCategory::Rbend,
	ElementCategory::Quadrupole,
	ElementCategory::Sextupole,
	ElementCategory::Octupole,
	ElementCategory::Solenoid,
	ElementCategory::SolQuad,
	ElementCategory::BendSolQuad,
	ElementCategory::RfCavity,
	ElementCategory::Lcavity,
	ElementCategory::ElSeparator,
	ElementCategory::BeamBeam,
	ElementCategory::Wiggler,
	ElementCategory::Undulator,
	ElementCategory::Marker,
	ElementCategory::Kicker,
	ElementCategory::Hkicker,
	ElementCategory::Vkicker,
	ElementCategory::AcKicker,
	ElementCategory::Hybrid,
	ElementCategory::Multipole,
	ElementCategory::AbMultipole,
	ElementCategory::SadMult,
	ElementCategory::Patch,
	ElementCategory::NullEle,
	ElementCategory::Match,
	ElementCategory::Monitor,
	ElementCategory::Instrument,
	ElementCategory::Detector,
	ElementCategory::Rcollimator,
	ElementCategory::Ecollimator,
	ElementCategory::Pipe,
	ElementCategory::Custom,
	ElementCategory::Taylor,
	ElementCategory::Group,
	ElementCategory::Overlay,
	ElementCategory::Girder,
	ElementCategory::Fork,
	ElementCategory::PhotonFork,
	ElementCategory::Mirror,
	ElementCategory::MultilayerMirror,
	ElementCategory::Crystal,
	ElementCategory::Capillary,
	ElementCategory::EGun,
	ElementCategory::EmField,
	ElementCategory::FloorShift,
	ElementCategory::Fiducial,
	ElementCategory::DiffractionPlate,
	ElementCategory::PhotonInit,
	ElementCategory::Sample,
	ElementCategory::Mask,
	ElementCategory::BeginningEle,
	ElementCategory::LineEle,
	ElementCategory::DefParameter,
	ElementCategory::DefBmadCom,
	ElementCategory::DefMadBeam,
	ElementCategory::DefBeamStart,
	ElementCategory::AccelSol,
	ElementCategory::DefBeam,
	ElementCategory::InitEle,
	ElementCategory::Hom,
	ElementCategory::IBeam,
];

impl ElementCategory {
	/// Canonical lowercase name, as written in lattice descriptions.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Drift => "drift",
			Self::Sbend => "sbend",
			Self::Rbend => "rbend",
			Self::Quadrupole => "quadrupole",
			Self::Sextupole => "sextupole",
			Self::Octupole => "octupole",
			Self::Solenoid => "solenoid",
			Self::SolQuad => "sol_quad",
			Self::BendSolQuad => "bend_sol_quad",
			Self::RfCavity => "rfcavity",
			Self::Lcavity => "lcavity",
			Self::ElSeparator => "elseparator",
			Self::BeamBeam => "beambeam",
			Self::Wiggler => "wiggler",
			Self::Undulator => "undulator",
			Self::Marker => "marker",
			Self::Kicker => "kicker",
			Self::Hkicker => "hkicker",
			Self::Vkicker => "vkicker",
			Self::AcKicker => "ac_kicker",
			Self::Hybrid => "hybrid",
			Self::Multipole => "multipole",
			Self::AbMultipole => "ab_multipole",
			Self::SadMult => "sad_mult",
			Self::Patch => "patch",
			Self::NullEle => "null_ele",
			Self::Match => "match",
			Self::Monitor => "monitor",
			Self::Instrument => "instrument",
			Self::Detector => "detector",
			Self::Rcollimator => "rcollimator",
			Self::Ecollimator => "ecollimator",
			Self::Pipe => "pipe",
			Self::Custom => "custom",
			Self::Taylor => "taylor",
			Self::Group => "group",
			Self::Overlay => "overlay",
			Self::Girder => "girder",
			Self::Fork => "fork",
			Self::PhotonFork => "photon_fork",
			Self::Mirror => "mirror",
			Self::MultilayerMirror => "multilayer_mirror",
			Self::Crystal => "crystal",
			Self::Capillary => "capillary",
			Self::EGun => "e_gun",
			Self::EmField => "em_field",
			Self::FloorShift => "floor_shift",
			Self::Fiducial => "fiducial",
			Self::DiffractionPlate => "diffraction_plate",
			Self::PhotonInit => "photon_init",
			Self::Sample => "sample",
			Self::Mask => "mask",
			Self::BeginningEle => "beginning_ele",
			Self::LineEle => "line_ele",
			Self::DefParameter => "def_parameter",
			Self::DefBmadCom => "def_bmad_com",
			Self::DefMadBeam => "def_mad_beam",
			Self::DefBeamStart => "def_beam_start",
			Self::AccelSol => "accel_sol",
			Self::DefBeam => "def_beam",
			Self::InitEle => "init_ele",
			Self::Hom => "hom",
			Self::IBeam => "i_beam",
		}
	}

	/// Looks up a category by its canonical name.
	pub fn from_name(name: &str) -> Option<ElementCategory> {
		ALL_CATEGORIES.iter().copied().find(|c| c.name() == name)
	}
}

impl core::fmt::Display for ElementCategory {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_round_trip() {
		for &cat in ALL_CATEGORIES {
			assert_eq!(ElementCategory::from_name(cat.name()), Some(cat));
		}
	}

	#[test]
	fn names_are_unique() {
		for (i, a) in ALL_CATEGORIES.iter().enumerate() {
			for b in &ALL_CATEGORIES[i + 1..] {
				assert_ne!(a.name(), b.name());
			}
		}
	}

	#[test]
	fn unknown_name_is_rejected() {
		assert_eq!(ElementCategory::from_name("bending magnet"), None);
		assert_eq!(ElementCategory::from_name("SBEND"), None);
	}
}
