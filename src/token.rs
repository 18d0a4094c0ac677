/*!
# Argtable: Tokens.

This module holds the token grammar — how a single raw argument is split into
a key and value — along with the key transform used for `-noX` negation.
*/



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Flag Token.
///
/// A raw argument that looked like a flag, split into its name and value
/// parts. Both halves borrow from the original argument.
///
/// The following are all recognized:
/// * `-name` and `--name` (empty value);
/// * `-name=value` and `--name=value`;
///
/// ## Examples
///
/// ```
/// use argtable::Token;
///
/// let token = Token::parse("--threads=4").unwrap();
/// assert_eq!(token.name(), "threads");
/// assert_eq!(token.value(), "4");
/// assert_eq!(token.key(), "-threads");
///
/// // Positional arguments are not tokens.
/// assert!(Token::parse("/foo/bar").is_none());
/// ```
pub struct Token<'a> {
	/// # Name (Without Dashes).
	name: &'a str,

	/// # Value.
	value: &'a str,
}

impl<'a> Token<'a> {
	#[must_use]
	/// # Parse.
	///
	/// Classify a raw argument, returning `None` if it does not begin with a
	/// dash.
	///
	/// Exactly one leading dash is stripped, then a second if present, so
	/// `-X` and `--X` are the same thing. A third dash is left alone and
	/// becomes part of the name.
	///
	/// Everything after the first `=`, if any, is the value; everything
	/// before it is the name. Malformed input is never an error: a lone `-`
	/// simply has an empty name.
	pub fn parse(raw: &'a str) -> Option<Self> {
		let rest = raw.strip_prefix('-')?;
		let rest = rest.strip_prefix('-').unwrap_or(rest);

		let (name, value) = rest.split_once('=').unwrap_or((rest, ""));
		Some(Self { name, value })
	}

	#[must_use]
	/// # Name.
	///
	/// The name with its leading dash(es) removed.
	pub const fn name(&self) -> &'a str { self.name }

	#[must_use]
	/// # Value.
	///
	/// The substring following the first `=`, or an empty string.
	pub const fn value(&self) -> &'a str { self.value }

	#[must_use]
	/// # Canonical Key.
	///
	/// The name with a single leading dash, i.e. the form used for storage
	/// and lookup.
	pub fn key(&self) -> String {
		let mut out = String::with_capacity(self.name.len() + 1);
		out.push('-');
		out.push_str(self.name);
		out
	}
}



#[must_use]
/// # Negated Key.
///
/// Derive the negated form of a canonical key by inserting `no` after the
/// leading dash, e.g. `-P33` becomes `-noP33`.
///
/// Returns `None` if `name` has no leading dash.
///
/// ## Examples
///
/// ```
/// assert_eq!(argtable::negated_key("-P33").as_deref(), Some("-noP33"));
/// assert_eq!(argtable::negated_key("P33"), None);
/// ```
pub fn negated_key(name: &str) -> Option<String> {
	let rest = name.strip_prefix('-')?;
	let mut out = String::with_capacity(rest.len() + 3);
	out.push_str("-no");
	out.push_str(rest);
	Some(out)
}

#[must_use]
/// # Truthy?
///
/// Every value is true except the literal `"0"`. Empty values (bare flags)
/// are true.
pub fn is_truthy(value: &str) -> bool { value != "0" }
