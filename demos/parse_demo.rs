//! Demonstrates parsing type specifications with the library API

use typespec::{format_types, parse_type};

fn main() {
    let examples = vec![
        ("Simple name", "Number"),
        ("Maybe shorthand", "Maybe String"),
        ("Array", "[Number | String]"),
        ("Tuple", "(String, Number)"),
        ("Open record", "User :: { name: String, age: Maybe Number, ... }"),
        ("Function type", "Number -> String"),
        ("Empty array", "[]"),
    ];

    for (name, spec) in examples {
        println!("\n=== {} ===", name);
        println!("Spec: {}\n", spec);

        match parse_type(spec) {
            Ok(types) => {
                println!("✓ Successfully parsed!");
                println!("  Alternatives: {}", types.len());
                println!("  Canonical: {}", format_types(&types));
                match serde_json::to_string(&types) {
                    Ok(json) => println!("  JSON: {}", json),
                    Err(e) => println!("  JSON error: {}", e),
                }
            }
            Err(e) => {
                println!("✗ Parse error: {}", e);
            }
        }
    }
}
