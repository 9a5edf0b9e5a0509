//! Static builtin definition data, one module per registry generation.
//!
//! Slot numbers are the binary contract between this library and every
//! independently compiled caller. A published generation is immutable:
//! corrections require a new [`RegistryVersion`], never in-place edits.

pub mod v74;
pub mod v214;

use crate::category::ElementCategory;
use crate::version::RegistryVersion;

/// Width of the custom attribute window reserved in every generation.
pub const CUSTOM_ATTRIBUTE_NUM: u16 = 40;

/// How a definition relates to other names on the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
	/// Sole or canonical name for its slot within a category.
	Primary,
	/// Declared synonym: intentionally shares its slot with a primary name
	/// in the same category. Resolves forward only; reverse lookup yields
	/// the primary.
	Alias,
}

/// One builtin attribute definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrDef {
	pub name: &'static str,
	pub slot: u16,
	pub kind: AttrKind,
}

impl AttrDef {
	/// A canonical definition.
	pub const fn primary(name: &'static str, slot: u16) -> AttrDef {
		AttrDef {
			name,
			slot,
			kind: AttrKind::Primary,
		}
	}

	/// A declared synonym for a primary name on the same slot.
	pub const fn alias(name: &'static str, slot: u16) -> AttrDef {
		AttrDef {
			name,
			slot,
			kind: AttrKind::Alias,
		}
	}
}

/// A block of attribute definitions shared by a set of categories.
///
/// The original vocabulary assigns many attributes (lengths, misalignments,
/// aperture limits, tracking switches) identically across whole families of
/// element kinds; groups express that sharing once instead of per category.
#[derive(Debug, Clone, Copy)]
pub struct Group {
	pub categories: &'static [ElementCategory],
	pub attrs: &'static [AttrDef],
}

/// Complete static definition of one registry generation.
#[derive(Debug, Clone, Copy)]
pub struct VersionDefs {
	pub version: RegistryVersion,
	/// Categories with their stable wire codes, in code order.
	pub category_codes: &'static [(ElementCategory, u16)],
	pub groups: &'static [Group],
	/// Highest builtin slot; the custom window starts directly above.
	pub builtin_max: u16,
	/// Width of the reserved custom attribute window.
	pub custom_count: u16,
}
