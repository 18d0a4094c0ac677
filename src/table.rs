/*!
# Argtable: Table.
*/

use crate::{
	ArgTableError,
	is_truthy,
	negated_key,
	Token,
};
use std::{
	collections::BTreeMap,
	ffi::OsString,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Table.
///
/// `ArgTable` maps each canonical key — the flag name with a single leading
/// dash — to every value supplied for it, in the order they appeared.
///
/// It is built in one go from a raw argument vector and then queried via the
/// typed getters: [`ArgTable::get_bool`], [`ArgTable::get_string`], and
/// [`ArgTable::get_int`]. None of these can fail; missing or malformed input
/// simply resolves to a default.
///
/// ## Grammar
///
/// * `-name` and `--name` record `name` with an empty value;
/// * `-name=value` and `--name=value` record `name` with `value`;
/// * Anything not beginning with a dash is ignored;
///
/// Negations like `-noX` are stored as-is and only interpreted by
/// [`ArgTable::get_bool`], where a positive `-X` anywhere in the input always
/// wins.
///
/// ## Examples
///
/// ```
/// use argtable::ArgTable;
///
/// let args = ArgTable::parse([
///     "/usr/bin/app",
///     "--threads=4",
///     "-noverbose",
///     "-name=Björk",
///     "/foo/bar",
/// ]);
///
/// assert_eq!(args.get_int("-threads", 1), 4);
/// assert!(! args.get_bool("-verbose", true));
/// assert_eq!(args.get_string("-name", ""), "Björk");
/// assert_eq!(args.get_string("-missing", "default"), "default");
/// ```
pub struct ArgTable {
	/// # Values by Key.
	map: BTreeMap<String, Vec<String>>,
}

impl ArgTable {
	#[must_use]
	/// # Parse.
	///
	/// Build a new table from a raw argument vector. The first entry — the
	/// executable path — is skipped.
	pub fn parse<I, S>(argv: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut out = Self::default();
		let mut tokens = 0_usize;
		for raw in argv.into_iter().skip(1) {
			let raw = raw.as_ref();
			if let Some(token) = Token::parse(raw) {
				tracing::trace!(key = %token.key(), value = token.value(), "recorded flag");
				out.push(token);
				tokens += 1;
			}
			else {
				tracing::trace!(arg = raw, "ignored positional argument");
			}
		}

		tracing::debug!(keys = out.map.len(), tokens, "parsed argument table");
		out
	}

	#[must_use]
	/// # Parse (Env).
	///
	/// Build a new table from [`std::env::args_os`]. Arguments containing
	/// invalid UTF-8 are converted lossily rather than rejected.
	///
	/// Use [`ArgTable::try_from_env`] if you'd rather bail.
	pub fn from_env() -> Self {
		Self::parse(
			std::env::args_os().map(|a| match a.into_string() {
				Ok(a) => a,
				Err(a) => a.to_string_lossy().into_owned(),
			})
		)
	}

	/// # Parse (Env, Strict).
	///
	/// Same as [`ArgTable::from_env`], but fails if any argument is not valid
	/// UTF-8.
	///
	/// ## Errors
	///
	/// Returns [`ArgTableError::InvalidUtf8`] for the first bad argument.
	pub fn try_from_env() -> Result<Self, ArgTableError> {
		Self::try_parse_os(std::env::args_os())
	}

	/// # Parse (OS Strings, Strict).
	///
	/// Same as [`ArgTable::parse`], but for [`OsString`] arguments.
	///
	/// ## Errors
	///
	/// Returns [`ArgTableError::InvalidUtf8`] for the first argument that is
	/// not valid UTF-8. The executable path is exempt since it is never
	/// parsed anyway.
	pub fn try_parse_os<I>(argv: I) -> Result<Self, ArgTableError>
	where I: IntoIterator<Item=OsString> {
		let mut argv = argv.into_iter();
		let first = argv.next().unwrap_or_default();
		let rest = argv
			.map(|a| a.into_string().map_err(ArgTableError::InvalidUtf8))
			.collect::<Result<Vec<String>, ArgTableError>>()?;

		Ok(Self::parse(
			std::iter::once(first.to_string_lossy().into_owned()).chain(rest)
		))
	}

	/// # Push Token.
	fn push(&mut self, token: Token<'_>) {
		self.map.entry(token.key()).or_default().push(token.value().to_owned());
	}
}

impl ArgTable {
	#[must_use]
	/// # Get Bool.
	///
	/// Resolve `name` — the positive form, e.g. `-P33` — as a boolean:
	///
	/// 1. If `name` itself was given, its last value decides: anything but `"0"` is true.
	/// 2. Otherwise, if the negated `-noP33` was given, its last value decides, inverted.
	/// 3. Otherwise `default` is returned.
	///
	/// When both forms are present, the positive one always wins, regardless
	/// of which came first.
	///
	/// ## Examples
	///
	/// ```
	/// use argtable::ArgTable;
	///
	/// let args = ArgTable::parse(["app", "-noP33", "-P33"]);
	/// assert!(args.get_bool("-P33", false));
	///
	/// let args = ArgTable::parse(["app", "-noP33=0"]);
	/// assert!(args.get_bool("-P33", false));
	/// ```
	pub fn get_bool(&self, name: &str, default: bool) -> bool {
		if let Some(v) = self.last(name) { return is_truthy(v); }

		if let Some(v) = negated_key(name).as_deref().and_then(|k| self.last(k)) {
			tracing::trace!(key = name, negated = v, "negated boolean lookup");
			return ! is_truthy(v);
		}

		default
	}

	#[must_use]
	/// # Get String.
	///
	/// Return the last value recorded for `name` verbatim, or `default` if it
	/// was never given. Bare flags have empty values.
	///
	/// Negations play no part here.
	pub fn get_string<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
		self.last(name).unwrap_or(default)
	}

	#[must_use]
	/// # Get Integer.
	///
	/// Parse the last value recorded for `name` as a base-10 signed integer.
	///
	/// If `name` was never given, `default` is returned. If it _was_ given but
	/// the value doesn't parse — `-X=NaN`, or a bare `-X` — the result is
	/// `0`, not `default`.
	///
	/// See [`ArgTable::try_int`] to tell these cases apart.
	pub fn get_int(&self, name: &str, default: i64) -> i64 {
		match self.try_int(name) {
			Ok(Some(v)) => v,
			Ok(None) => default,
			Err(_) => 0,
		}
	}

	/// # Try Integer.
	///
	/// Strict version of [`ArgTable::get_int`]. Returns `None` if `name` was
	/// never given.
	///
	/// ## Errors
	///
	/// Returns [`ArgTableError::InvalidInt`] if the last value is not a valid
	/// `i64`.
	pub fn try_int(&self, name: &str) -> Result<Option<i64>, ArgTableError> {
		let Some(value) = self.last(name) else { return Ok(None); };
		value.parse::<i64>()
			.map(Some)
			.map_err(|source| ArgTableError::InvalidInt {
				key: name.to_owned(),
				value: value.to_owned(),
				source,
			})
	}
}

impl ArgTable {
	#[must_use]
	/// # Contains Key?
	pub fn contains(&self, name: &str) -> bool { self.map.contains_key(name) }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.map.is_empty() }

	#[must_use]
	/// # Length.
	///
	/// Return the number of distinct keys.
	pub fn len(&self) -> usize { self.map.len() }

	#[must_use]
	/// # Last Value.
	///
	/// Return the last value recorded for `name`, if any.
	pub fn last(&self, name: &str) -> Option<&str> {
		self.map.get(name).and_then(|v| v.last()).map(String::as_str)
	}

	#[must_use]
	/// # All Values.
	///
	/// Return every value recorded for `name` in the order given. This is
	/// empty if the key never appeared.
	pub fn values(&self, name: &str) -> &[String] {
		self.map.get(name).map_or(&[][..], Vec::as_slice)
	}

	/// # Iterate.
	///
	/// Loop through each key and its values, sorted by key.
	pub fn iter(&self) -> impl Iterator<Item=(&str, &[String])> {
		self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}
}

impl ArgTable {
	/// # Soft Set.
	///
	/// Record `value` for `name`, but only if `name` is not already present.
	/// Returns `true` if the value was recorded.
	///
	/// This is meant for filling in implied settings before a table is
	/// published; the process-wide table itself is never modified.
	///
	/// ## Examples
	///
	/// ```
	/// use argtable::ArgTable;
	///
	/// let mut args = ArgTable::parse(["app", "-port=8080"]);
	/// assert!(! args.soft_set("-port", "9000"));
	/// assert!(args.soft_set("-bind", "127.0.0.1"));
	///
	/// assert_eq!(args.get_int("-port", 0), 8080);
	/// assert_eq!(args.get_string("-bind", ""), "127.0.0.1");
	/// ```
	pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
		if self.map.contains_key(name) { false }
		else {
			self.map.insert(name.to_owned(), vec![value.to_owned()]);
			true
		}
	}

	/// # Soft Set Bool.
	///
	/// Same as [`ArgTable::soft_set`], storing `"1"` or `"0"`.
	///
	/// Note this only checks the positive key. If a negation was given, the
	/// soft value takes precedence over it, same as a positive flag would.
	pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
		self.soft_set(name, if value { "1" } else { "0" })
	}
}



#[cfg(test)]
mod test {
	use super::*;

	/// # Reset Args.
	///
	/// Split a space-separated string and parse it behind a dummy executable
	/// name.
	fn reset(raw: &str) -> ArgTable {
		ArgTable::parse(std::iter::once("testapp").chain(raw.split_whitespace()))
	}

	#[test]
	fn t_bool() {
		let args = reset("-P33");
		assert!(args.get_bool("-P33", false));
		assert!(args.get_bool("-P33", true));

		assert!(! args.get_bool("-fo", false));
		assert!(args.get_bool("-fo", true));

		assert!(! args.get_bool("-P33o", false));
		assert!(args.get_bool("-P33o", true));

		let args = reset("-P33=0");
		assert!(! args.get_bool("-P33", false));
		assert!(! args.get_bool("-P33", true));

		let args = reset("-P33=1");
		assert!(args.get_bool("-P33", false));
		assert!(args.get_bool("-P33", true));

		// Double dashes.
		let args = reset("--P33");
		assert!(args.get_bool("-P33", false));

		let args = reset("--P33=1");
		assert!(args.get_bool("-P33", false));
		assert!(args.get_bool("-P33", true));
	}

	#[test]
	fn t_bool_negated() {
		for raw in ["-noP33", "-noP33=1", "--noP33=1", "--noP33"] {
			let args = reset(raw);
			assert!(! args.get_bool("-P33", false), "{raw} should be false.");
			assert!(! args.get_bool("-P33", true), "{raw} should be false.");
		}

		let args = reset("-noP33=0");
		assert!(args.get_bool("-P33", false));
		assert!(args.get_bool("-P33", true));

		// Negations are kept under their own key.
		let args = reset("-noP33");
		assert!(args.contains("-noP33"));
		assert!(! args.contains("-P33"));
		assert_eq!(args.get_string("-P33", "x"), "x");
	}

	#[test]
	fn t_bool_positive_wins() {
		for (raw, expected) in [
			("-P33 -noP33", true),
			("-noP33 -P33", true),
			("-P33 --noP33", true),
			("-P33=1 -noP33=1", true),
			("-noP33=1 -P33=1", true),
			("-P33=0 -noP33=0", false),
			("-noP33=0 -P33=0", false),
			("-P33=0 -noP33", false),
		] {
			let args = reset(raw);
			assert_eq!(args.get_bool("-P33", false), expected, "{raw}");
			assert_eq!(args.get_bool("-P33", true), expected, "{raw}");
		}
	}

	#[test]
	fn t_bool_last_wins() {
		let args = reset("-P33=0 -P33");
		assert!(args.get_bool("-P33", false));

		let args = reset("-P33 -P33=0");
		assert!(! args.get_bool("-P33", true));

		let args = reset("-noP33=0 -noP33");
		assert!(! args.get_bool("-P33", true));
	}

	#[test]
	fn t_string() {
		let args = reset("");
		assert_eq!(args.get_string("-P33", ""), "");
		assert_eq!(args.get_string("-P33", "eleven"), "eleven");

		for raw in ["-P33 -bar", "-P33="] {
			let args = reset(raw);
			assert_eq!(args.get_string("-P33", ""), "");
			assert_eq!(args.get_string("-P33", "eleven"), "");
		}

		let args = reset("-P33=11");
		assert_eq!(args.get_string("-P33", ""), "11");
		assert_eq!(args.get_string("-P33", "eleven"), "11");

		let args = reset("-P33=eleven");
		assert_eq!(args.get_string("-P33", ""), "eleven");

		// Only the first = splits.
		let args = reset("--P33=a=b");
		assert_eq!(args.get_string("-P33", ""), "a=b");

		// Last one wins, but they're all there.
		let args = reset("-P33=1 -bar -P33=2 --P33=3");
		assert_eq!(args.get_string("-P33", ""), "3");
		assert_eq!(args.values("-P33"), ["1", "2", "3"]);
		assert_eq!(args.values("-bar"), [""]);
		assert!(args.values("-baz").is_empty());
	}

	#[test]
	fn t_int() {
		let args = reset("");
		assert_eq!(args.get_int("-P33", 11), 11);
		assert_eq!(args.get_int("-P33", 0), 0);

		let args = reset("-P33 -bar");
		assert_eq!(args.get_int("-P33", 11), 0);
		assert_eq!(args.get_int("-bar", 11), 0);

		let args = reset("-P33=11 -bar=12");
		assert_eq!(args.get_int("-P33", 0), 11);
		assert_eq!(args.get_int("-bar", 11), 12);

		let args = reset("-P33=NaN -bar=NotANumber");
		assert_eq!(args.get_int("-P33", 1), 0);
		assert_eq!(args.get_int("-bar", 11), 0);

		let args = reset("-P33=-5 -bar=+7 -baz=99999999999999999999");
		assert_eq!(args.get_int("-P33", 0), -5);
		assert_eq!(args.get_int("-bar", 0), 7);
		assert_eq!(args.get_int("-baz", 1), 0);
	}

	#[test]
	fn t_try_int() {
		let args = reset("-P33=11 -bar=NaN -baz");
		assert_eq!(args.try_int("-P33"), Ok(Some(11)));
		assert_eq!(args.try_int("-nope"), Ok(None));

		match args.try_int("-bar") {
			Err(ArgTableError::InvalidInt { key, value, .. }) => {
				assert_eq!(key, "-bar");
				assert_eq!(value, "NaN");
			},
			e => panic!("Expected an invalid integer error, got {e:?}."),
		}
		assert!(args.try_int("-baz").is_err());
	}

	#[test]
	fn t_double_dash() {
		let args = reset("--P33");
		assert!(args.get_bool("-P33", false));

		let args = reset("--P33=verbose --bar=1");
		assert_eq!(args.get_string("-P33", ""), "verbose");
		assert_eq!(args.get_int("-bar", 0), 1);

		// Mixing the two lands in the same bucket.
		let args = reset("-P33=1 --P33=2");
		assert_eq!(args.values("-P33"), ["1", "2"]);
		assert_eq!(args.len(), 1);
	}

	#[test]
	fn t_parse() {
		// The first entry is always skipped, even if it looks like a flag.
		let args = ArgTable::parse(["-P33", "-bar"]);
		assert!(! args.contains("-P33"));
		assert!(args.contains("-bar"));

		// Positionals are ignored.
		let args = reset("/foo/bar -P33 baz=1 -bar");
		assert_eq!(
			args.iter().map(|(k, _)| k).collect::<Vec<_>>(),
			["-P33", "-bar"],
		);

		// Odd stuff is recorded like anything else.
		let args = reset("- --- ---x");
		assert!(args.contains("-"));
		assert!(args.contains("--"));
		assert!(args.contains("--x"));

		// Nothing at all.
		assert!(ArgTable::parse(Vec::<String>::new()).is_empty());
		assert!(reset("").is_empty());
		assert_eq!(reset(""), ArgTable::default());
	}

	#[test]
	fn t_idempotent() {
		let args = reset("-P33=11 -noX -Y=hi");
		for _ in 0..2 {
			assert_eq!(args.get_int("-P33", 0), 11);
			assert!(! args.get_bool("-X", true));
			assert_eq!(args.get_string("-Y", ""), "hi");
		}
	}

	#[test]
	fn t_absent_defaults() {
		let args = reset("-P33=11 -noP33");
		for d in [true, false] {
			assert_eq!(args.get_bool("-nope", d), d);
		}
		for d in ["", "x"] {
			assert_eq!(args.get_string("-nope", d), d);
		}
		for d in [-1, 0, 42] {
			assert_eq!(args.get_int("-nope", d), d);
		}

		// Names without a dash never match anything.
		assert!(args.get_bool("P33", true));
		assert!(! args.get_bool("P33", false));
	}

	#[test]
	fn t_try_parse_os() {
		let args = ArgTable::try_parse_os([
			OsString::from("app"),
			OsString::from("-P33=1"),
		]).expect("Parse failed.");
		assert!(args.get_bool("-P33", false));

		#[cfg(unix)]
		{
			use std::os::unix::ffi::OsStringExt;

			let bad = OsString::from_vec(vec![b'-', b'x', b'=', 0xff]);
			assert_eq!(
				ArgTable::try_parse_os([OsString::from("app"), bad.clone()]),
				Err(ArgTableError::InvalidUtf8(bad.clone())),
			);

			// The executable path gets a pass.
			let args = ArgTable::try_parse_os([bad, OsString::from("-y")])
				.expect("Parse failed.");
			assert!(args.contains("-y"));
		}
	}

	#[test]
	fn t_soft_set() {
		let mut args = reset("-P33=11 -noX");
		assert!(! args.soft_set("-P33", "12"));
		assert!(args.soft_set("-bar", "12"));
		assert!(! args.soft_set("-bar", "13"));
		assert_eq!(args.get_int("-P33", 0), 11);
		assert_eq!(args.get_int("-bar", 0), 12);

		assert!(args.soft_set_bool("-Y", false));
		assert!(! args.get_bool("-Y", true));
		assert!(! args.soft_set_bool("-Y", true));

		// The positive key is missing, so the soft value goes in and wins.
		assert!(! args.get_bool("-X", true));
		assert!(args.soft_set_bool("-X", true));
		assert!(args.get_bool("-X", false));
	}
}
