//! Registry generations and the version guard.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// One generation of the slot numbering scheme.
///
/// Callers and the library bake this constant in at their respective build
/// times and compare it at initialization; it is never inferred. The same
/// slot number may mean unrelated quantities in different generations, so a
/// mismatch is always fatal to the resolver that detected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryVersion(pub u16);

impl RegistryVersion {
	/// Generation one of the numbering scheme.
	pub const V74: RegistryVersion = RegistryVersion(74);

	/// Generation two: renumbered overload groups, the photonic element
	/// categories, and the reserved custom attribute window.
	pub const V214: RegistryVersion = RegistryVersion(214);

	/// The generation this library itself was built against.
	pub const CURRENT: RegistryVersion = RegistryVersion::V214;
}

/// All generations with a builtin table, oldest first.
pub const SUPPORTED: &[RegistryVersion] = &[RegistryVersion::V74, RegistryVersion::V214];

impl core::fmt::Display for RegistryVersion {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Rejects any disagreement between the version a caller was compiled
/// against and the version a slot table actually implements.
///
/// Exact equality is required. A "compatible-looking" difference is still an
/// error: the overload scheme itself is versioned, and a wrong guess reads
/// the right array cell with the wrong physical meaning.
pub fn check(expected: RegistryVersion, actual: RegistryVersion) -> Result<()> {
	if expected == actual {
		Ok(())
	} else {
		tracing::warn!(%expected, %actual, "registry version mismatch");
		Err(RegistryError::VersionMismatch { expected, actual })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn check_accepts_equal_versions() {
		for &v in SUPPORTED {
			assert_eq!(check(v, v), Ok(()));
		}
	}

	#[test]
	fn check_rejects_any_difference() {
		let err = check(RegistryVersion::V214, RegistryVersion(270)).unwrap_err();
		assert_eq!(
			err,
			RegistryError::VersionMismatch {
				expected: RegistryVersion::V214,
				actual: RegistryVersion(270),
			}
		);

		// Adjacent generations are just as incompatible as distant ones.
		assert!(check(RegistryVersion::V74, RegistryVersion::V214).is_err());
		assert!(check(RegistryVersion(214), RegistryVersion(215)).is_err());
	}

	#[test]
	fn current_is_supported() {
		assert!(SUPPORTED.contains(&RegistryVersion::CURRENT));
	}
}
