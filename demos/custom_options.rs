//! Parser and encoder options.
//!
//! Run with: cargo run --example custom_options

use armaconfig::{
    from_str, from_str_with_options, to_string, to_string_with_options, DirectivePolicy,
    EncodeOptions, ParseOptions,
};
use std::error::Error;

const CONFIG: &str =
    "#include \"defines.hpp\"\nclass A { x = 1; };\nclass B : A { y[] = {1, 2}; class C { z = 3; }; };\n";

fn main() -> Result<(), Box<dyn Error>> {
    // Directives are skipped by default
    let doc = from_str(CONFIG)?;
    println!("Compact:\n{}\n", to_string(&doc)?);

    println!("Pretty, 2 spaces:");
    let options = EncodeOptions::pretty().with_indent(2);
    println!("{}", to_string_with_options(&doc, options)?);

    // Rejecting directives
    let strict = ParseOptions::new().with_directives(DirectivePolicy::Reject);
    match from_str_with_options(CONFIG, strict) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("Strict parse failed: {}", err),
    }

    // A low limit on nesting and inheritance depth
    let shallow = ParseOptions::new().with_max_depth(1);
    if let Err(err) = from_str_with_options(CONFIG, shallow) {
        println!("Shallow parse failed: {}", err);
    }

    Ok(())
}
