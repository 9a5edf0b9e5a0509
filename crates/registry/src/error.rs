//! Error types shared across the registry.

use crate::category::ElementCategory;
use crate::version::RegistryVersion;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors produced by table construction, the version guard, and lookups.
///
/// Build-time failures (`DuplicateDefinition`, `DuplicateCategory`) and guard
/// failures (`VersionMismatch`) are fatal to the component that produced
/// them. `NotFound` and `Unassigned` are ordinary recoverable answers:
/// probing whether a category defines an attribute is an expected, frequent
/// query and must not be treated as exceptional.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The category does not define an attribute with this name.
	#[error("{category} has no attribute named `{name}`")]
	NotFound {
		category: ElementCategory,
		name: String,
	},

	/// The slot is inside the valid range but carries no builtin name for
	/// this category. Slot tables are sparse; this is not a caller bug.
	#[error("slot {slot} is unassigned for {category}")]
	Unassigned {
		category: ElementCategory,
		slot: u16,
	},

	/// The slot lies outside the valid range for this table's version.
	/// Usually indicates version skew or a hard-coded slot number.
	#[error("slot {slot} is outside the valid range 1..={max}")]
	OutOfRange { slot: u16, max: u16 },

	/// Caller and table disagree on the registry generation. Never coerced:
	/// slot semantics are overload-sensitive and a wrong guess corrupts
	/// physical meaning without any memory-safety signal.
	#[error("registry version mismatch: caller expects {expected}, table is {actual}")]
	VersionMismatch {
		expected: RegistryVersion,
		actual: RegistryVersion,
	},

	/// A lookup was issued before a successful version check.
	#[error("resolver used before a successful version check")]
	NotInitialized,

	/// Static definition data assigned one `(category, name)` twice, or put
	/// two non-alias names on one slot.
	#[error("duplicate definition of `{name}` (slot {slot}) for {category}")]
	DuplicateDefinition {
		category: ElementCategory,
		name: &'static str,
		slot: u16,
	},

	/// Static definition data declared a category or wire code twice.
	#[error("category {category} / code {code} declared twice in version {version}")]
	DuplicateCategory {
		version: RegistryVersion,
		category: ElementCategory,
		code: u16,
	},

	/// The category is not part of this table's version.
	#[error("{category} is not defined in registry version {version}")]
	UnknownCategory {
		version: RegistryVersion,
		category: ElementCategory,
	},

	/// No category carries this wire code in this table's version.
	#[error("no category with code {code} in registry version {version}")]
	UnknownCategoryCode { version: RegistryVersion, code: u16 },

	/// No builtin table exists for this version.
	#[error("unsupported registry version {0}")]
	UnsupportedVersion(RegistryVersion),
}
