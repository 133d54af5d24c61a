//! Parsing a config and looking up members through inheritance.
//!
//! Run with: cargo run --example simple

use armaconfig::{from_str, to_string_pretty};
use std::error::Error;

const CONFIG: &str = r#"
class CfgVehicles {
    class Car { maxSpeed = 120; seats = 4; };
    class Truck : Car {
        displayName = "Heavy ""Zamak"" truck";
        maxSpeed = 90;
        wheels[] = {{0, 1.5}, {0, -1.5}};
    };
};
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str(CONFIG)?;

    let truck = doc.lookup_path(&["CfgVehicles", "Truck"])?;
    for name in ["displayName", "maxSpeed", "seats", "wheels"] {
        let value = truck.lookup(name)?;
        println!("Truck.{} = {}", name, value.value().map_or(String::new(), ToString::to_string));
    }

    // Inherited from Car
    assert_eq!(truck.lookup("seats")?.value().and_then(|v| v.as_i64()), Some(4));

    println!("\nRe-encoded:\n{}", to_string_pretty(&doc)?);
    Ok(())
}
