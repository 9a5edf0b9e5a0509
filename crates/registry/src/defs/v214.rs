//! Generation two (version 214) builtin tables.
//!
//! Fifty-eight element categories, builtin slots up to `b21_elec = 233`,
//! and a 40-slot custom window at 234..=273.

use crate::category::ElementCategory::{self, *};
use crate::version::RegistryVersion;

use super::{AttrDef, CUSTOM_ATTRIBUTE_NUM, Group, VersionDefs};

const fn p(name: &'static str, slot: u16) -> AttrDef {
	AttrDef::primary(name, slot)
}

const fn a(name: &'static str, slot: u16) -> AttrDef {
	AttrDef::alias(name, slot)
}

/// Wire codes, `drift = 1` through `ac_kicker = 58`.
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
	(DefBmadCom, 20),
	(DefMadBeam, 21),
	(AbMultipole, 22),
	(Solenoid, 23),
	(Patch, 24),
	(Lcavity, 25),
	(DefParameter, 26),
	(NullEle, 27),
	(BeginningEle, 28),
	(LineEle, 29),
	(Match, 30),
	(Monitor, 31),
	(Instrument, 32),
	(Hkicker, 33),
	(Vkicker, 34),
	(Rcollimator, 35),
	(Ecollimator, 36),
	(Girder, 37),
	(BendSolQuad, 38),
	(DefBeamStart, 39),
	(PhotonFork, 40),
	(Fork, 41),
	(Mirror, 42),
	(Crystal, 43),
	(Pipe, 44),
	(Capillary, 45),
	(MultilayerMirror, 46),
	(EGun, 47),
	(EmField, 48),
	(FloorShift, 49),
	(Fiducial, 50),
	(Undulator, 51),
	(DiffractionPlate, 52),
	(PhotonInit, 53),
	(Sample, 54),
	(Detector, 55),
	(SadMult, 56),
	(Mask, 57),
	(AcKicker, 58),
];

const LENGTH_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	RfCavity, Lcavity, ElSeparator, Wiggler, Undulator, Kicker, Hkicker, Vkicker, AcKicker,
	Monitor, Instrument, Rcollimator, Ecollimator, Pipe, Custom, Patch, EGun, EmField, SadMult,
	Multipole, Hybrid, Match, Taylor,
];

const OFFSET_ELEMENTS: &[ElementCategory] = &[
	Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad, RfCavity,
	Lcavity, ElSeparator, Wiggler, Undulator, Kicker, Hkicker, Vkicker, AcKicker, Monitor,
	Instrument, Detector, Rcollimator, Ecollimator, Pipe, Custom, Patch, EGun, EmField, SadMult,
	Multipole, AbMultipole, BeamBeam, Girder, Mirror, MultilayerMirror, Crystal, Capillary,
	DiffractionPlate, Mask, Sample, PhotonInit,
];

const TILT_ELEMENTS: &[ElementCategory] = &[
	Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad, RfCavity, Lcavity,
	ElSeparator, Wiggler, Undulator, Kicker, Hkicker, Vkicker, AcKicker, Monitor, Instrument,
	Detector, Rcollimator, Ecollimator, Pipe, Custom, EGun, EmField, SadMult, Multipole,
	AbMultipole, Girder, Mirror, MultilayerMirror, Crystal, Capillary, DiffractionPlate, Mask,
	Sample,
];

const REF_TILT_ELEMENTS: &[ElementCategory] = &[Sbend, Rbend, Crystal, Mirror, MultilayerMirror];

const APERTURE_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	RfCavity, Lcavity, ElSeparator, Wiggler, Undulator, Marker, Kicker, Hkicker, Vkicker,
	AcKicker, Monitor, Instrument, Detector, Rcollimator, Ecollimator, Pipe, Custom, Patch, EGun,
	EmField, SadMult, Multipole, AbMultipole, BeamBeam, Capillary, Crystal, Mirror,
	MultilayerMirror, DiffractionPlate, Mask, Sample,
];

const MAGNET_KICK_ELEMENTS: &[ElementCategory] = &[
	Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad, ElSeparator,
	Wiggler, Undulator, Monitor, Instrument,
];

const STRAIGHT_KICKERS: &[ElementCategory] = &[Kicker, Hkicker, Vkicker, AcKicker];

const FRINGE_ELEMENTS: &[ElementCategory] = &[
	Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad, RfCavity,
	Lcavity, Wiggler, Undulator, SadMult,
];

const METHOD_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	RfCavity, Lcavity, ElSeparator, Wiggler, Undulator, Kicker, Hkicker, Vkicker, AcKicker,
	Monitor, Instrument, Rcollimator, Ecollimator, Pipe, Custom, Patch, EGun, EmField, SadMult,
	Multipole, AbMultipole, BeamBeam, Taylor, Hybrid,
];

// Photon-line elements track with a reduced method set.
const PHOTON_ELEMENTS: &[ElementCategory] = &[
	Capillary, Crystal, Mirror, MultilayerMirror, DiffractionPlate, Mask, Sample, Detector,
];

const STEPPING_ELEMENTS: &[ElementCategory] = &[
	Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad, RfCavity,
	Lcavity, ElSeparator, Wiggler, Undulator, Kicker, Hkicker, Vkicker, AcKicker, Custom, EGun,
	EmField, SadMult,
];

const ENERGY_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	RfCavity, Lcavity, ElSeparator, Wiggler, Undulator, Marker, Kicker, Hkicker, Vkicker,
	AcKicker, Monitor, Instrument, Detector, Rcollimator, Ecollimator, Pipe, Custom, Patch, EGun,
	EmField, SadMult, Multipole, AbMultipole, BeamBeam, Taylor, Hybrid, Capillary, Crystal,
	Mirror, MultilayerMirror, DiffractionPlate, Mask, Sample,
];

const SWITCH_ELEMENTS: &[ElementCategory] = &[
	Drift, Sbend, Rbend, Quadrupole, Sextupole, Octupole, Solenoid, SolQuad, BendSolQuad,
	RfCavity, Lcavity, ElSeparator, Wiggler, Undulator, Marker, Kicker, Hkicker, Vkicker,
	AcKicker, Hybrid, Multipole, AbMultipole, SadMult, Patch, NullEle, Monitor, Instrument,
	Detector, Rcollimator, Ecollimator, Pipe, Custom, Taylor, ElementCategory::Group, Overlay,
	Girder, Fork,
	PhotonFork, Mirror, MultilayerMirror, Crystal, Capillary, EGun, EmField, FloorShift,
	Fiducial, DiffractionPlate, PhotonInit, Sample, Mask, LineEle,
];

const GROUPS: &[Group] = &[
	Group {
		categories: LENGTH_ELEMENTS,
		attrs: &[p("l", 1)],
	},
	Group {
		categories: OFFSET_ELEMENTS,
		attrs: &[
			p("x_pitch", 34),
			p("y_pitch", 35),
			p("x_offset", 36),
			p("y_offset", 37),
			p("z_offset", 38),
			p("x_pitch_tot", 55),
			p("y_pitch_tot", 56),
			p("x_offset_tot", 57),
			p("y_offset_tot", 58),
			p("z_offset_tot", 59),
		],
	},
	Group {
		categories: TILT_ELEMENTS,
		attrs: &[p("tilt", 2), p("tilt_tot", 60)],
	},
	Group {
		categories: REF_TILT_ELEMENTS,
		attrs: &[p("ref_tilt", 3), p("ref_tilt_tot", 61)],
	},
	Group {
		categories: APERTURE_ELEMENTS,
		attrs: &[
			p("x1_limit", 76),
			p("x2_limit", 77),
			p("y1_limit", 78),
			p("y2_limit", 79),
			p("aperture_type", 87),
			p("x_limit", 96),
			p("y_limit", 97),
			p("offset_moves_aperture", 98),
			p("aperture_at", 108),
		],
	},
	Group {
		categories: MAGNET_KICK_ELEMENTS,
		attrs: &[
			p("hkick", 39),
			p("vkick", 40),
			p("bl_hkick", 41),
			p("bl_vkick", 42),
		],
	},
	Group {
		categories: STRAIGHT_KICKERS,
		attrs: &[p("kick", 3), p("bl_kick", 43)],
	},
	Group {
		categories: FRINGE_ELEMENTS,
		attrs: &[
			p("fringe_type", 10),
			p("fringe_at", 11),
			p("spin_fringe_on", 13),
		],
	},
	Group {
		categories: METHOD_ELEMENTS,
		attrs: &[
			p("mat6_calc_method", 91),
			p("tracking_method", 92),
			p("spin_tracking_method", 94),
			p("is_on", 105),
			p("field_calc", 106),
			p("field_master", 111),
			p("create_jumbo_slave", 127),
		],
	},
	Group {
		categories: PHOTON_ELEMENTS,
		attrs: &[p("mat6_calc_method", 91), p("tracking_method", 92)],
	},
	Group {
		categories: STEPPING_ELEMENTS,
		attrs: &[
			p("integrator_order", 65),
			p("num_steps", 66),
			p("ds_step", 67),
		],
	},
	Group {
		categories: ENERGY_ELEMENTS,
		attrs: &[
			p("delta_ref_time", 50),
			p("p0c_start", 51),
			p("e_tot_start", 52),
			p("p0c", 53),
			p("e_tot", 54),
			p("ref_time_start", 64),
		],
	},
	Group {
		categories: SWITCH_ELEMENTS,
		attrs: &[
			p("alias", 82),
			p("descrip", 112),
			p("type", 117),
			p("superimpose", 120),
			p("offset", 121),
			p("reference", 122),
		],
	},
	// Bends. `roll` is the documented synonym for `tilt` on bends: a bend
	// rotates about the chord, not the local beam axis.
	Group {
		categories: &[Sbend, Rbend],
		attrs: &[
			p("tilt", 2),
			a("roll", 2),
			p("g", 6),
			p("g_err", 7),
			p("rho", 8),
			p("higher_order_fringe_type", 12),
			p("fb1", 14),
			p("fb2", 15),
			p("e1", 19),
			p("e2", 20),
			p("fint", 21),
			p("fintx", 22),
			p("hgap", 23),
			p("hgapx", 24),
			p("h1", 25),
			p("h2", 26),
			p("l_sagitta", 29),
			p("l_chord", 30),
			p("angle", 33),
			p("b_field", 43),
			p("b_field_err", 44),
			p("b1_gradient", 45),
			p("b2_gradient", 46),
		],
	},
	Group {
		categories: &[Quadrupole],
		attrs: &[
			p("k1", 4),
			p("fq1", 16),
			p("fq2", 17),
			p("b1_gradient", 45),
		],
	},
	Group {
		categories: &[Sextupole],
		attrs: &[p("k2", 5), p("b2_gradient", 46)],
	},
	Group {
		categories: &[Octupole],
		attrs: &[p("k3", 6), p("b3_gradient", 48)],
	},
	Group {
		categories: &[Solenoid],
		attrs: &[p("ks", 5), p("bs_field", 49)],
	},
	Group {
		categories: &[SolQuad],
		attrs: &[
			p("k1", 4),
			p("ks", 5),
			p("b1_gradient", 45),
			p("bs_field", 49),
		],
	},
	Group {
		categories: &[BendSolQuad],
		attrs: &[
			p("k1", 4),
			p("ks", 5),
			p("g", 6),
			p("dks_ds", 21),
			p("angle", 33),
		],
	},
	Group {
		categories: &[RfCavity, Lcavity],
		attrs: &[
			p("rf_frequency", 3),
			p("gradient", 6),
			p("voltage", 8),
			p("autoscale_amplitude", 18),
			p("autoscale_phase", 19),
			p("cavity_type", 23),
			p("phi0", 24),
			p("phi0_multipass", 26),
			p("phi0_autoscale", 27),
			p("n_cell", 33),
			p("coupler_phase", 44),
			p("coupler_angle", 45),
			p("coupler_strength", 46),
			p("coupler_at", 47),
		],
	},
	Group {
		categories: &[RfCavity],
		attrs: &[p("harmon", 4)],
	},
	Group {
		categories: &[Lcavity],
		attrs: &[
			p("gradient_err", 7),
			p("voltage_err", 9),
			p("e_loss", 21),
			p("phi0_err", 25),
		],
	},
	Group {
		categories: &[Wiggler, Undulator],
		attrs: &[
			p("b_max", 5),
			p("n_pole", 7),
			p("polarity", 21),
			p("l_pole", 25),
		],
	},
	Group {
		categories: &[BeamBeam],
		attrs: &[
			p("bbi_const", 7),
			p("charge", 8),
			p("sig_x", 14),
			p("sig_y", 15),
			p("sig_z", 16),
			p("n_slice", 20),
			p("beta_a", 23),
			p("beta_b", 24),
			p("alpha_a", 25),
			p("alpha_b", 26),
		],
	},
	Group {
		categories: &[ElSeparator],
		attrs: &[p("voltage", 8), p("gap", 21), p("e_field", 43)],
	},
	Group {
		categories: &[AcKicker],
		attrs: &[p("t_offset", 32)],
	},
	Group {
		categories: &[Monitor, Instrument, Detector],
		attrs: &[
			p("x_gain_err", 3),
			p("y_gain_err", 4),
			p("crunch", 5),
			p("noise", 6),
			p("osc_amplitude", 7),
			p("x_gain_calib", 8),
			p("y_gain_calib", 20),
			p("crunch_calib", 21),
			p("x_offset_calib", 22),
			p("y_offset_calib", 23),
			p("tilt_calib", 24),
			p("de_eta_meas", 25),
			p("n_sample", 26),
		],
	},
	Group {
		categories: &[Match],
		attrs: &[
			p("beta_a0", 2),
			p("alpha_a0", 3),
			p("beta_b0", 4),
			p("alpha_b0", 5),
			p("beta_a1", 6),
			p("alpha_a1", 7),
			p("beta_b1", 8),
			p("alpha_b1", 9),
			p("dphi_a", 10),
			p("dphi_b", 11),
			p("eta_x0", 12),
			p("etap_x0", 13),
			p("eta_y0", 14),
			p("etap_y0", 15),
			p("eta_x1", 16),
			p("etap_x1", 17),
			p("eta_y1", 18),
			p("etap_y1", 19),
			p("match_end_input", 20),
			p("match_end", 21),
			p("delta_time", 22),
			p("x0", 24),
			p("px0", 25),
			p("y0", 26),
			p("py0", 27),
			p("z0", 28),
			p("pz0", 29),
			p("x1", 30),
			p("px1", 31),
			p("y1", 32),
			p("py1", 33),
			p("z1", 34),
			p("pz1", 35),
			p("match_end_orbit_input", 36),
			p("match_end_orbit", 37),
			p("c11_mat0", 40),
			p("c12_mat0", 41),
			p("c21_mat0", 42),
			p("c22_mat0", 43),
			p("c11_mat1", 44),
			p("c12_mat1", 45),
			p("c21_mat1", 46),
			p("c22_mat1", 47),
		],
	},
	Group {
		categories: &[Custom],
		attrs: &[
			p("val1", 11),
			p("val2", 12),
			p("val3", 13),
			p("val4", 14),
			p("val5", 15),
			p("val6", 16),
			p("val7", 17),
			p("val8", 18),
			p("val9", 19),
			p("val10", 20),
			p("val11", 21),
			p("val12", 22),
		],
	},
	Group {
		categories: &[Multipole],
		attrs: &[
			p("k0l", 140),
			p("k1l", 141),
			p("k2l", 142),
			p("k3l", 143),
			p("k21l", 161),
			p("t0", 162),
			p("t1", 163),
			p("t2", 164),
			p("t3", 165),
			p("t21", 183),
		],
	},
	Group {
		categories: &[AbMultipole],
		attrs: &[
			p("a0", 140),
			p("a1", 141),
			p("a2", 142),
			p("a3", 143),
			p("a21", 161),
			p("b0", 162),
			p("b1", 163),
			p("b2", 164),
			p("b3", 165),
			p("b21", 183),
			p("a0_elec", 190),
			p("a1_elec", 191),
			p("a21_elec", 211),
			p("b0_elec", 212),
			p("b1_elec", 213),
			p("b21_elec", 233),
		],
	},
	Group {
		categories: &[SadMult],
		attrs: &[p("eps_step_scale", 9)],
	},
	Group {
		categories: &[Crystal],
		attrs: &[
			p("bragg_angle_in", 6),
			p("bragg_angle_out", 7),
			p("graze_angle_in", 15),
			p("graze_angle_out", 16),
			p("bragg_angle", 20),
			p("alpha_angle", 21),
			p("psi_angle", 22),
			p("b_param", 30),
			p("d_spacing", 39),
			p("darwin_width_sigma", 42),
			p("pendellosung_period_sigma", 43),
			p("darwin_width_pi", 44),
			p("pendellosung_period_pi", 45),
			p("dbragg_angle_de", 46),
			p("thickness", 65),
			p("ref_wavelength", 69),
			p("crystal_type", 116),
		],
	},
	Group {
		categories: &[Mirror, MultilayerMirror],
		attrs: &[p("critical_angle_factor", 4), p("graze_angle", 5)],
	},
	Group {
		categories: &[MultilayerMirror],
		attrs: &[
			p("d1_thickness", 20),
			p("d2_thickness", 21),
			p("v1_unitcell", 22),
			p("v2_unitcell", 23),
			a("v_unitcell", 23),
			p("n_cell", 33),
			p("ref_wavelength", 69),
		],
	},
	Group {
		categories: &[Patch],
		attrs: &[
			p("ref_coordinates", 4),
			p("flexible", 5),
			p("upstream_ele_dir", 29),
			p("downstream_ele_dir", 30),
			p("t_offset", 32),
			p("e_tot_set", 47),
			p("p0c_set", 48),
			p("e_tot_offset", 49),
		],
	},
	Group {
		categories: &[EGun],
		attrs: &[
			p("gradient", 6),
			p("gradient_err", 7),
			p("voltage", 8),
			p("voltage_err", 9),
		],
	},
	Group {
		categories: &[EmField],
		attrs: &[p("constant_ref_energy", 20), p("field_autoscale", 32)],
	},
	Group {
		categories: &[Capillary],
		attrs: &[
			p("critical_angle", 7),
			p("s_spline", 102),
			p("n_slice_spline", 103),
		],
	},
	Group {
		categories: &[DiffractionPlate],
		attrs: &[
			p("field_scale_factor", 6),
			p("mode", 26),
			p("ref_wavelength", 69),
		],
	},
	Group {
		categories: &[Mask],
		attrs: &[p("mode", 26)],
	},
	Group {
		categories: &[Sample],
		attrs: &[p("mode", 26), p("material_type", 116)],
	},
	Group {
		categories: &[PhotonInit],
		attrs: &[
			p("sig_x", 14),
			p("sig_y", 15),
			p("sig_z", 16),
			p("e_center", 20),
			p("e_center_relative_to_ref", 21),
			p("spatial_distribution", 22),
			p("velocity_distribution", 23),
			p("energy_distribution", 24),
			p("e_field_x", 25),
			p("e_field_y", 26),
			p("transverse_sigma_cut", 30),
			p("ds_slice", 31),
			p("physical_source", 100),
		],
	},
	Group {
		categories: &[Fork, PhotonFork],
		attrs: &[
			p("direction", 3),
			p("new_branch", 6),
			p("ix_to_branch", 7),
			p("ix_to_element", 8),
			p("to_line", 110),
			p("to_element", 111),
		],
	},
	Group {
		categories: &[Girder, FloorShift],
		attrs: &[
			p("dx_origin", 27),
			p("dy_origin", 28),
			p("dz_origin", 29),
			p("dtheta_origin", 30),
			p("dphi_origin", 31),
			p("dpsi_origin", 32),
		],
	},
	Group {
		categories: &[Girder, FloorShift, Fiducial],
		attrs: &[p("origin_ele_ref_pt", 26), p("origin_ele", 109)],
	},
	Group {
		categories: &[ElementCategory::Group, Overlay],
		attrs: &[p("gang", 11), p("var", 89)],
	},
	Group {
		categories: &[Taylor],
		attrs: &[
			p("x_ref", 83),
			p("px_ref", 84),
			p("y_ref", 85),
			p("py_ref", 86),
			p("z_ref", 89),
			p("pz_ref", 90),
		],
	},
	Group {
		categories: &[Hybrid],
		attrs: &[p("delta_e_ref", 8)],
	},
	Group {
		categories: &[BeginningEle],
		attrs: &[
			p("alpha_b_begin", 81),
			p("eta_x", 82),
			p("eta_y", 83),
			p("etap_x", 84),
			p("etap_y", 85),
			p("cmat_11_begin", 88),
			p("cmat_12_begin", 89),
			p("cmat_21_begin", 90),
			p("cmat_22_begin", 91),
			p("s_long", 92),
			p("ref_time", 93),
			p("alpha_a_begin", 100),
			p("beta_a_begin", 108),
			p("beta_b_begin", 109),
		],
	},
	Group {
		categories: &[DefParameter],
		attrs: &[
			p("n_part", 2),
			p("taylor_order", 3),
			p("default_tracking_species", 20),
			p("live_branch", 24),
			p("particle", 25),
			p("geometry", 26),
			p("lattice_type", 27),
			p("p0c", 53),
			p("e_tot", 54),
			p("lattice", 86),
		],
	},
	Group {
		categories: &[DefBmadCom],
		attrs: &[
			p("max_aperture_limit", 81),
			p("default_ds_step", 82),
			p("significant_length", 83),
			p("rel_tol_tracking", 84),
			p("abs_tol_tracking", 85),
			p("aperture_limit_on", 99),
		],
	},
	Group {
		categories: &[DefMadBeam],
		attrs: &[p("n_part", 2), p("charge", 8), p("particle", 25)],
	},
	Group {
		categories: &[DefBeamStart],
		attrs: &[
			p("x", 1),
			p("px", 2),
			p("y", 3),
			p("py", 4),
			p("z", 5),
			p("pz", 6),
			p("t", 8),
			p("e_photon", 9),
			p("field_x", 10),
			p("field_y", 11),
			p("phase_x", 12),
			p("phase_y", 13),
			p("direction", 20),
			p("spin_x", 21),
			p("spin_y", 22),
			p("spin_z", 23),
			p("emittance_a", 39),
			p("emittance_b", 40),
			p("emittance_z", 41),
		],
	},
];

/// The complete generation-two definition set.
pub static DEFS: VersionDefs = VersionDefs {
	version: RegistryVersion::V214,
	category_codes: CATEGORY_CODES,
	groups: GROUPS,
	builtin_max: 233,
	custom_count: CUSTOM_ATTRIBUTE_NUM,
};
