/*!
# Argtable: Debug

This example parses any arbitrary arguments fed to it and displays the results.

Set `RUST_LOG=trace` to watch each token get classified.
*/

use tracing_subscriber::EnvFilter;



fn main() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.init();

	argtable::parse_env();
	let table = argtable::table();

	println!("\x1b[2mRAW:\x1b[0m");
	println!("{table:?}");

	println!();
	println!("\x1b[2mPRETTY:\x1b[0m");
	for (key, values) in table.iter() {
		println!(
			"{key:<16} bool={:<5} int={:<6} string={:?} (all: {values:?})",
			table.get_bool(key, false),
			table.get_int(key, 0),
			table.get_string(key, ""),
		);
	}

	println!();
}
