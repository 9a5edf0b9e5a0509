//! Generation one (version 74) builtin tables.
//!
//! Thirty-eight element categories and builtin slots up to `t20 = 110`. The
//! custom window at 111..=150 was carved out retroactively for this
//! generation; the original numbering predates reserved custom slots.

use crate::category::ElementCategory::{self, *};
use crate::version::RegistryVersion;

use super::{AttrDef, CUSTOM_ATTRIBUTE_NUM, Group, VersionDefs};

const fn p(name: &'static str, slot: u16) -> AttrDef {
	AttrDef::primary(name, slot)
}

const fn a(name: &'static str, slot: u16) -> AttrDef {
	AttrDef::alias(name, slot)
}

/// Wire codes, `drift = 1` through `bend_sol_quad = 38`.
///
/// Codes 20, 21, 28, 29, and 37 name categories that generation two retired
/// and reassigned.
pub const CATEGORY_CODES: &[(ElementCategory, u16)] = &[
	(Drift, 1),
	(Sbend, 2),
	(Quadrupole, 3),
	(ElementCategory::Group, 4),
	(Sextupole, 5),
	(Overlay, 6),
	(Custom, 7),
	(Taylor, 8),
	(RfCavity, 9),
	(ElSeparator, 10),
	(BeamBeam, 11),
	(Wiggler, 12),
	(SolQuad, 13),
	(Marker, 14),
	(Kicker, 15),
	(Hybrid, 16),
	(Octupole, 17),
	(Rbend, 18),
	(Multipole, 19),
	(AccelSol, 20),
	(DefBeam, 21),
	(AbMultipole, 22),
	(Solenoid, 23),
	(Patch, 24),
	(Lcavity, 25),
	(DefParameter, 26),
	(NullEle, 27),
	(InitEle, 28),
	(Hom, 29),
	(Match, 30),
	(Monitor, 31),
	(Instrument, 32),
	(Hkicker, 33),
	(Vkicker, 34),
	(Rcollimator, 35),
	(Ecollimator, 36),
	(IBeam, 37),
	(BendSolQuad, 38),
];

const LENGTH_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	AccelSol, RfCavity, Lcavity, ElSeparator, Wiggler, Kicker, Hkicker, Vkicker, Monitor,
	Instrument, Rcollimator, Ecollimator, Custom, Hybrid, Match, Taylor,
];

const TILT_ELEMENTS: &[ElementCategory] = &[
	Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad, ElSeparator,
	Wiggler, Kicker, Hkicker, Vkicker, Monitor, Instrument, Rcollimator, Ecollimator, Custom,
	Multipole, AbMultipole,
];

const GEOMETRY_ELEMENTS: &[ElementCategory] = &[
	Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad, AccelSol,
	RfCavity, Lcavity, ElSeparator, Wiggler, Kicker, Hkicker, Vkicker, Monitor, Instrument,
	Rcollimator, Ecollimator, Custom, Multipole, AbMultipole, BeamBeam, Patch,
];

const MAGNET_KICK_ELEMENTS: &[ElementCategory] = &[
	Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad, ElSeparator,
	Wiggler, Monitor, Instrument,
];

const LIMIT_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	AccelSol, RfCavity, Lcavity, ElSeparator, Wiggler, Marker, Kicker, Hkicker, Vkicker, Monitor,
	Instrument, Rcollimator, Ecollimator, Custom, BeamBeam, Multipole, AbMultipole, Patch,
];

const ENERGY_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	AccelSol, RfCavity, Lcavity, ElSeparator, Wiggler, Marker, Kicker, Hkicker, Vkicker, Monitor,
	Instrument, Rcollimator, Ecollimator, Custom, BeamBeam, Multipole, AbMultipole, Patch,
	Hybrid, Taylor,
];

const SWITCH_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	AccelSol, RfCavity, Lcavity, ElSeparator, Wiggler, Marker, Kicker, Hkicker, Vkicker, Monitor,
	Instrument, Rcollimator, Ecollimator, Custom, BeamBeam, Multipole, AbMultipole, Patch,
	Hybrid, Taylor, NullEle,
];

const GROUPS: &[Group] = &[
	Group {
		categories: LENGTH_ELEMENTS,
		attrs: &[p("l", 1)],
	},
	Group {
		categories: TILT_ELEMENTS,
		attrs: &[p("tilt", 2)],
	},
	// In this generation `s_offset` and its `z_offset` synonym share a slot;
	// generation two promoted `z_offset` to the primary name.
	Group {
		categories: GEOMETRY_ELEMENTS,
		attrs: &[
			p("x_pitch", 19),
			p("y_pitch", 20),
			p("x_offset", 23),
			p("y_offset", 24),
			p("s_offset", 25),
			a("z_offset", 25),
		],
	},
	Group {
		categories: MAGNET_KICK_ELEMENTS,
		attrs: &[p("hkick", 21), p("vkick", 22)],
	},
	Group {
		categories: LIMIT_ELEMENTS,
		attrs: &[
			p("x_limit", 27),
			p("y_limit", 28),
			p("aperture", 29),
			p("radius", 30),
		],
	},
	Group {
		categories: ENERGY_ELEMENTS,
		attrs: &[p("beam_energy", 31), p("p0c", 41)],
	},
	Group {
		categories: GEOMETRY_ELEMENTS,
		attrs: &[
			p("tilt_tot", 35),
			p("x_pitch_tot", 36),
			p("y_pitch_tot", 37),
			p("x_offset_tot", 38),
			p("y_offset_tot", 39),
			p("s_offset_tot", 40),
		],
	},
	Group {
		categories: SWITCH_ELEMENTS,
		attrs: &[
			p("alias", 42),
			p("mat6_calc_method", 47),
			p("tracking_method", 48),
			p("num_steps", 49),
			p("integration_ord", 50),
			p("ptc_kind", 52),
			p("symplectify", 53),
			p("descrip", 54),
			p("is_on", 55),
			p("field_calc", 56),
			p("type", 57),
			p("aperture_at", 58),
			p("ran_seed", 59),
		],
	},
	Group {
		categories: &[Sbend, Rbend],
		attrs: &[
			p("angle", 3),
			p("k1", 4),
			p("g", 5),
			p("delta_g", 6),
			p("e1", 8),
			p("e2", 9),
			p("fint", 10),
			p("fintx", 11),
			p("rho", 12),
			p("hgap", 13),
			p("hgapx", 14),
			p("roll", 15),
			p("l_chord", 16),
			p("h1", 17),
			p("h2", 18),
			p("b_field", 34),
		],
	},
	Group {
		categories: &[Quadrupole],
		attrs: &[p("k1", 4), p("b_field", 34), a("b_gradient", 34)],
	},
	Group {
		categories: &[Sextupole],
		attrs: &[p("k2", 5), p("b_field", 34), a("b_gradient", 34)],
	},
	Group {
		categories: &[Octupole],
		attrs: &[p("k3", 6), p("b_field", 34), a("b_gradient", 34)],
	},
	Group {
		categories: &[Solenoid],
		attrs: &[p("ks", 7), p("b_field", 34)],
	},
	Group {
		categories: &[SolQuad],
		attrs: &[p("k1", 4), p("ks", 7), p("b_field", 34)],
	},
	Group {
		categories: &[BendSolQuad],
		attrs: &[
			p("angle", 3),
			p("k1", 4),
			p("g", 5),
			p("dks_ds", 6),
			p("ks", 7),
		],
	},
	Group {
		categories: &[AccelSol],
		attrs: &[
			p("x_beg_limit", 2),
			p("y_beg_limit", 3),
			p("b_x2", 4),
			p("b_y2", 5),
			p("l_st2", 9),
			p("b_z", 10),
			p("l_st1", 11),
			p("s_st2", 12),
			p("s_st1", 13),
			p("b_x1", 14),
			p("b_y1", 15),
		],
	},
	Group {
		categories: &[RfCavity],
		attrs: &[
			p("harmon", 4),
			p("rf_wavelength", 6),
			p("voltage", 7),
			p("rf_frequency", 9),
			p("phi0", 11),
		],
	},
	Group {
		categories: &[Lcavity],
		attrs: &[
			p("e_loss", 4),
			p("gradient", 10),
			p("phi0", 11),
			p("energy_start", 13),
			p("delta_e", 14),
		],
	},
	Group {
		categories: &[RfCavity, Lcavity],
		attrs: &[p("sr_wake_file", 45), p("lr_wake_file", 46)],
	},
	Group {
		categories: &[ElSeparator],
		attrs: &[
			p("voltage", 7),
			p("gap", 8),
			p("e_field", 34),
			a("e_gradient", 34),
		],
	},
	Group {
		categories: &[Wiggler],
		attrs: &[
			p("b_max", 5),
			p("n_pole", 7),
			p("l_pole", 9),
			p("polarity", 10),
			p("term", 51),
		],
	},
	Group {
		categories: &[BeamBeam],
		attrs: &[
			p("sig_x", 4),
			p("sig_y", 5),
			p("sig_z", 6),
			p("bbi_const", 7),
			p("charge", 8),
			p("n_slice", 9),
		],
	},
	Group {
		categories: &[Kicker, Hkicker, Vkicker],
		attrs: &[p("kick", 3)],
	},
	Group {
		categories: &[Match, InitEle],
		attrs: &[
			p("beta_x0", 2),
			p("alpha_x0", 3),
			p("beta_y0", 4),
			p("alpha_y0", 5),
			p("eta_x0", 12),
			p("etap_x0", 13),
			p("eta_y0", 14),
			p("etap_y0", 15),
		],
	},
	Group {
		categories: &[Match],
		attrs: &[
			p("beta_x1", 6),
			p("alpha_x1", 7),
			p("beta_y1", 8),
			p("alpha_y1", 9),
			p("dphi_x", 10),
			p("dphi_y", 11),
			p("eta_x1", 16),
			p("etap_x1", 17),
			p("eta_y1", 18),
			p("etap_y1", 19),
		],
	},
	Group {
		categories: &[Multipole],
		attrs: &[
			p("k0l", 60),
			p("k1l", 61),
			p("k2l", 62),
			p("k3l", 63),
			p("k20l", 80),
			p("t0", 90),
			p("t1", 91),
			p("t2", 92),
			p("t3", 93),
			p("t20", 110),
		],
	},
	Group {
		categories: &[AbMultipole],
		attrs: &[
			p("a0", 60),
			p("a1", 61),
			p("a2", 62),
			p("a3", 63),
			p("a20", 80),
			p("b0", 90),
			p("b1", 91),
			p("b2", 92),
			p("b3", 93),
			p("b20", 110),
		],
	},
	Group {
		categories: &[Custom],
		attrs: &[
			p("val1", 3),
			p("val2", 4),
			p("val3", 5),
			p("val4", 6),
			p("val5", 7),
			p("val6", 8),
			p("val7", 9),
			p("val8", 10),
			p("val9", 11),
			p("val10", 12),
			p("val11", 13),
			p("val12", 15),
			p("rel_tol", 32),
			p("abs_tol", 33),
		],
	},
	Group {
		categories: &[ElementCategory::Group, Overlay],
		attrs: &[
			p("command", 2),
			p("old_command", 3),
			p("start_edge", 43),
			p("end_edge", 44),
			p("accordion_edge", 45),
			p("symmetric_edge", 46),
		],
	},
	Group {
		categories: &[Patch],
		attrs: &[p("z_patch", 11)],
	},
	Group {
		categories: &[DefBeam],
		attrs: &[p("particle", 1), p("n_part", 3)],
	},
	Group {
		categories: &[DefParameter],
		attrs: &[
			p("lattice_type", 1),
			p("symmetry", 2),
			p("taylor_order", 3),
			p("energy_gev", 4),
		],
	},
	Group {
		categories: &[IBeam],
		attrs: &[p("s_center", 12)],
	},
	// Hom carries a wire code in this generation but defines no named
	// attributes; every lookup against it reports the name as undefined.
];

/// The complete generation-one definition set.
pub static DEFS: VersionDefs = VersionDefs {
	version: RegistryVersion::V74,
	category_codes: CATEGORY_CODES,
	groups: GROUPS,
	builtin_max: 110,
	custom_count: CUSTOM_ATTRIBUTE_NUM,
};
