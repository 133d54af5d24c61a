//! Handing the structural encoding of a config to serde_json.
//!
//! Run with: cargo run --example json_output

use armaconfig::{from_str, to_value};
use std::error::Error;

const DESCRIPTION_EXT: &str = r#"
author = Bohemia Interactive;
onLoadName = "Escape";

class Params {
    class Base { default = 1; values[] = {0, 1}; };
    class Difficulty : Base {
        title = "Difficulty";
        values[] = {0, 1, 2};
    };
};
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str(DESCRIPTION_EXT)?;

    // Every class becomes an object holding its inherited and own entries
    let json = serde_json::to_string_pretty(&doc)?;
    println!("{}", json);

    // The same mapping as a Value, printed back as flattened config text
    println!("\nFlattened:\n{}", to_value(&doc));
    Ok(())
}
