//! Generate a Letter of Intent from a JSON file of form values
//! Run with: cargo run -p template --example generate_loi -- demos/sample_loi.json [output.pdf]
//!
//! Writes to the conventional download filename when no output path is given.

use anyhow::{bail, Context, Result};
use std::fs;
use template::{loi_filename, missing_required, FieldValues, LoiGenerator};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: generate_loi <input.json> [output.pdf]");
    };

    let json = fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let fields = FieldValues::from_json_str(&json)?;

    let missing = missing_required(&fields);
    if !missing.is_empty() {
        let names: Vec<_> = missing.iter().map(|f| f.as_str()).collect();
        eprintln!("warning: missing required fields: {}", names.join(", "));
    }

    let generator = LoiGenerator::new();
    let pages = generator.layout(&fields);
    let bytes = generator.generate(&fields)?;

    let output = args.next().unwrap_or_else(|| loi_filename(&fields));
    fs::write(&output, &bytes).with_context(|| format!("writing {output}"))?;
    println!("{} pages, {} bytes -> {}", pages.len(), bytes.len(), output);

    Ok(())
}
