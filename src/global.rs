/*!
# Argtable: Process-Wide Table.

This module holds a single [`ArgTable`] shared by the whole process, for call
sites that would rather not thread a table through everything.

The table is swapped in whole: [`parse`] builds a new one _before_ taking the
write lock, so readers only ever see the old table or the new one. Lookups
made before the first [`parse`] (or after [`clear`]) return their defaults.
*/

use crate::{
	ArgTable,
	ArgTableError,
};
use lazy_static::lazy_static;
use std::sync::{
	Arc,
	PoisonError,
	RwLock,
};



lazy_static! {
	/// # The Table.
	static ref TABLE: RwLock<Arc<ArgTable>> = RwLock::new(Arc::new(ArgTable::default()));
}



/// # Parse.
///
/// Parse a raw argument vector — executable path first — and make it the
/// process-wide table, replacing whatever was there before.
///
/// ## Examples
///
/// ```
/// argtable::parse(["app", "-P33=11", "-noverbose"]);
///
/// assert_eq!(argtable::get_int("-P33", 0), 11);
/// assert!(! argtable::get_bool("-verbose", true));
/// ```
pub fn parse<I, S>(argv: I)
where I: IntoIterator<Item=S>, S: AsRef<str> {
	install(ArgTable::parse(argv));
}

/// # Parse (Env).
///
/// Parse [`std::env::args_os`] and make it the process-wide table. See
/// [`ArgTable::from_env`] for details.
pub fn parse_env() { install(ArgTable::from_env()); }

/// # Parse (Env, Strict).
///
/// Same as [`parse_env`], but leaves the current table alone if any argument
/// is not valid UTF-8.
///
/// ## Errors
///
/// Returns [`ArgTableError::InvalidUtf8`] for the first bad argument.
pub fn try_parse_env() -> Result<(), ArgTableError> {
	ArgTable::try_from_env().map(install)
}

/// # Install.
///
/// Make an already-built table the process-wide one. This is handy if you
/// want to [`ArgTable::soft_set`] a few things first.
pub fn install(table: ArgTable) {
	let table = Arc::new(table);
	tracing::debug!(keys = table.len(), "replaced process-wide argument table");
	*TABLE.write().unwrap_or_else(PoisonError::into_inner) = table;
}

/// # Clear.
///
/// Reset the process-wide table to empty.
pub fn clear() {
	tracing::debug!("cleared process-wide argument table");
	*TABLE.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(ArgTable::default());
}

#[must_use]
/// # Table.
///
/// Return a snapshot of the current table. It won't reflect later calls to
/// [`parse`], but is cheaper to query repeatedly than the free functions.
pub fn table() -> Arc<ArgTable> {
	Arc::clone(&TABLE.read().unwrap_or_else(PoisonError::into_inner))
}

#[must_use]
/// # Get Bool.
///
/// See [`ArgTable::get_bool`].
pub fn get_bool(name: &str, default: bool) -> bool {
	table().get_bool(name, default)
}

#[must_use]
/// # Get String.
///
/// See [`ArgTable::get_string`].
pub fn get_string(name: &str, default: &str) -> String {
	table().get_string(name, default).to_owned()
}

#[must_use]
/// # Get Integer.
///
/// See [`ArgTable::get_int`].
pub fn get_int(name: &str, default: i64) -> i64 {
	table().get_int(name, default)
}
