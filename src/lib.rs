/*!
# Argtable

This crate parses a process's CLI arguments into a simple lookup table — an
[`ArgTable`] — once at startup, then answers typed questions about it: is
`-X` set? What string or integer was given for `-Y`, or what's the default?

There are no schemas, subcommands, or help screens here. Every `-name` or
`-name=value` is recorded, positional arguments are ignored, and lookups fall
back to defaults rather than erroring out. Argument parsing shouldn't crash
your program because somebody typoed a flag.

If that sounds too loose, use [clap](https://crates.io/crates/clap) instead.



## Rules

* `-X` and `--X` are the same key;
* `-X=val` assigns a value; bare `-X` has an empty value;
* Repeated keys are all kept, but lookups use the last one;
* For booleans, every value except `"0"` is true;
* `-noX` is the negation of `-X`, but only counts if `-X` itself is absent;
* Integers that don't parse are `0`, not the default;



## Crate Features

| Feature | Description | Default |
| ------- | ----------- | ------- |
| `global` | Enable the process-wide table (`argtable::parse`, `argtable::get_bool`, etc.). | Y |



## Example

```
use argtable::ArgTable;

#[derive(Debug, Clone, Default)]
/// # Configuration.
struct Settings {
    threads: i64,
    verbose: bool,
    name: String,
}

// Usually this would be `ArgTable::from_env()`.
let args = ArgTable::parse(["app", "--threads=4", "-noverbose", "-name=Björk"]);

let settings = Settings {
    threads: args.get_int("-threads", 1),
    verbose: args.get_bool("-verbose", true),
    name: args.get_string("-name", "anonymous").to_owned(),
};

assert_eq!(settings.threads, 4);
assert!(! settings.verbose);
assert_eq!(settings.name, "Björk");
```

Or, with the `global` feature, parse once and query from anywhere:

```
argtable::parse(["app", "-P33", "-bar=12"]);

assert!(argtable::get_bool("-P33", false));
assert_eq!(argtable::get_int("-bar", 11), 12);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
#[cfg(feature = "global")]
mod global;
mod table;
mod token;

pub use error::ArgTableError;
#[cfg(feature = "global")]
#[cfg_attr(docsrs, doc(cfg(feature = "global")))]
pub use global::{
	clear,
	get_bool,
	get_int,
	get_string,
	install,
	parse,
	parse_env,
	table,
	try_parse_env,
};
pub use table::ArgTable;
pub use token::{
	is_truthy,
	negated_key,
	Token,
};
