//! Versioned name-to-slot registry for lattice element attributes.
//!
//! Accelerator lattice descriptions address element attributes by name
//! (`"k1"`, `"voltage"`, `"x_offset"`), while the tracking structures that
//! consume them store values in flat per-element arrays addressed by slot
//! number. The numbering is overloaded: the same slot means `k1` on a
//! quadrupole and `sig_x` on a beam-beam element, so a slot is only
//! meaningful together with its element category and the registry generation
//! it was resolved under.
//!
//! This crate holds the published numbering for every supported generation
//! and exposes it behind a version guard. A [`Resolver`] refuses every
//! lookup until the generation a caller was compiled against has been
//! checked, by exact equality, against the table it is bound to.
//!
//! # Quick start
//!
//! ```
//! use beamline_registry::{ElementCategory, RegistryVersion, Resolver};
//!
//! # fn run() -> beamline_registry::Result<()> {
//! let resolver = Resolver::for_version(RegistryVersion::CURRENT)?;
//!
//! let slot = resolver.resolve(ElementCategory::Sbend, "l")?;
//! assert_eq!(slot.get(), 1);
//! assert_eq!(resolver.describe(ElementCategory::Sbend, slot.get())?, "l");
//!
//! // Slots above every builtin are reserved for caller-defined attributes.
//! let custom = resolver.custom_slot_range()?;
//! assert_eq!(custom.len(), 40);
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod category;
pub mod defs;
pub mod error;
pub mod resolver;
pub mod slot;
pub mod table;
pub mod version;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

pub use category::{ALL_CATEGORIES, ElementCategory};
pub use defs::{AttrDef, AttrKind, CUSTOM_ATTRIBUTE_NUM, Group, VersionDefs};
pub use error::{RegistryError, Result};
pub use resolver::Resolver;
pub use slot::{SlotIndex, SlotRange};
pub use table::{SlotEntry, SlotTable, SlotTableBuilder};
pub use version::{RegistryVersion, SUPPORTED, check as check_version};

/// Returns the builtin table for a supported version.
///
/// Tables are built and validated on first use, then cached for the life of
/// the process. A validation failure is likewise cached: the static
/// definition data is wrong in the same way on every attempt.
pub fn table_for(version: RegistryVersion) -> Result<&'static SlotTable> {
	static TABLE_V74: OnceLock<Result<SlotTable>> = OnceLock::new();
	static TABLE_V214: OnceLock<Result<SlotTable>> = OnceLock::new();

	let (cell, defs) = match version {
		RegistryVersion::V74 => (&TABLE_V74, &defs::v74::DEFS),
		RegistryVersion::V214 => (&TABLE_V214, &defs::v214::DEFS),
		other => return Err(RegistryError::UnsupportedVersion(other)),
	};
	match cell.get_or_init(|| SlotTableBuilder::from_defs(defs).build()) {
		Ok(table) => Ok(table),
		Err(err) => Err(err.clone()),
	}
}
