//! Category-scoped lookups behind the version guard.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::category::ElementCategory;
use crate::error::{RegistryError, Result};
use crate::slot::{SlotIndex, SlotRange};
use crate::table::SlotTable;
use crate::version::{self, RegistryVersion};

const STATE_UNCHECKED: u8 = 0;
const STATE_READY: u8 = 1;
const STATE_FAILED: u8 = 2;

/// Lookup handle over one slot table, gated by the version guard.
///
/// A resolver answers nothing until [`check`](Resolver::check) has succeeded
/// once: every lookup before that reports
/// [`RegistryError::NotInitialized`], and a failed check pins the resolver in
/// that state permanently. [`Resolver::for_version`] runs the check as part
/// of construction, which is the ordinary way to obtain a ready resolver.
///
/// The guard state is a single atomic; a ready resolver is freely shared
/// across threads.
#[derive(Debug)]
pub struct Resolver {
	table: &'static SlotTable,
	expected: RegistryVersion,
	state: AtomicU8,
}

impl Resolver {
	/// Binds a caller's expected version to a table without checking it.
	///
	/// The resolver starts unchecked; call [`check`](Resolver::check) before
	/// the first lookup.
	pub fn bind(expected: RegistryVersion, table: &'static SlotTable) -> Resolver {
		Resolver {
			table,
			expected,
			state: AtomicU8::new(STATE_UNCHECKED),
		}
	}

	/// Builds a checked resolver over the builtin table for `version`.
	pub fn for_version(version: RegistryVersion) -> Result<Resolver> {
		let resolver = Resolver::bind(version, crate::table_for(version)?);
		resolver.check()?;
		Ok(resolver)
	}

	/// Runs the version guard, once.
	///
	/// Idempotent: repeated calls return the recorded outcome without
	/// re-comparing. Concurrent first calls are benign since every caller
	/// computes the same answer from the same immutable inputs.
	pub fn check(&self) -> Result<()> {
		match self.state.load(Ordering::Acquire) {
			STATE_READY => return Ok(()),
			STATE_FAILED => {
				return Err(RegistryError::VersionMismatch {
					expected: self.expected,
					actual: self.table.version(),
				});
			}
			_ => {}
		}
		match version::check(self.expected, self.table.version()) {
			Ok(()) => {
				self.state.store(STATE_READY, Ordering::Release);
				tracing::debug!(version = %self.expected, "registry resolver ready");
				Ok(())
			}
			Err(err) => {
				self.state.store(STATE_FAILED, Ordering::Release);
				Err(err)
			}
		}
	}

	fn ready(&self) -> Result<()> {
		if self.state.load(Ordering::Acquire) == STATE_READY {
			Ok(())
		} else {
			Err(RegistryError::NotInitialized)
		}
	}

	/// Resolves an attribute name to its slot within a category.
	pub fn resolve(&self, category: ElementCategory, name: &str) -> Result<SlotIndex> {
		self.ready()?;
		self.table.slot_for(category, name)
	}

	/// Reverse lookup: the primary name for a slot within a category.
	pub fn describe(&self, category: ElementCategory, slot: u16) -> Result<&'static str> {
		self.ready()?;
		self.table.name_for(category, slot)
	}

	/// The window reserved for caller-defined attributes.
	pub fn custom_slot_range(&self) -> Result<SlotRange> {
		self.ready()?;
		Ok(self.table.custom_slot_range())
	}

	/// Direct access to the underlying table, once checked.
	pub fn table(&self) -> Result<&'static SlotTable> {
		self.ready()?;
		Ok(self.table)
	}

	/// The version this resolver was built to expect.
	pub fn version(&self) -> RegistryVersion {
		self.expected
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::category::ElementCategory::Sbend;

	#[test]
	fn lookups_require_a_successful_check() {
		let table = crate::table_for(RegistryVersion::V214).unwrap();
		let resolver = Resolver::bind(RegistryVersion::V214, table);

		assert_eq!(
			resolver.resolve(Sbend, "l"),
			Err(RegistryError::NotInitialized)
		);
		assert_eq!(
			resolver.describe(Sbend, 1),
			Err(RegistryError::NotInitialized)
		);
		assert!(resolver.custom_slot_range().is_err());

		resolver.check().unwrap();
		assert_eq!(resolver.resolve(Sbend, "l").unwrap().get(), 1);
	}

	#[test]
	fn failed_check_pins_the_resolver() {
		let table = crate::table_for(RegistryVersion::V74).unwrap();
		let resolver = Resolver::bind(RegistryVersion::V214, table);

		let err = resolver.check().unwrap_err();
		assert_eq!(
			err,
			RegistryError::VersionMismatch {
				expected: RegistryVersion::V214,
				actual: RegistryVersion::V74,
			}
		);

		// The outcome is recorded; lookups stay refused.
		assert_eq!(resolver.check().unwrap_err(), err);
		assert_eq!(
			resolver.resolve(Sbend, "l"),
			Err(RegistryError::NotInitialized)
		);
	}

	#[test]
	fn check_is_idempotent_once_ready() {
		let resolver = Resolver::for_version(RegistryVersion::V74).unwrap();
		resolver.check().unwrap();
		resolver.check().unwrap();
		assert_eq!(resolver.resolve(Sbend, "l").unwrap().get(), 1);
	}

	#[test]
	fn unsupported_version_has_no_builtin_table() {
		assert_eq!(
			Resolver::for_version(RegistryVersion(75)).unwrap_err(),
			RegistryError::UnsupportedVersion(RegistryVersion(75))
		);
	}
}
