// SPDX-License-Identifier: Apache-2.0

//! Load a JSON file, time the read and parse phases, and print the tree.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;
use minijson::{get_context, parse, JsonValue};

#[derive(Parser)]
#[command(about = "Parse a JSON file and print the resulting tree")]
struct Args {
    /// Path to the JSON file to load.
    file: PathBuf,

    /// Indentation unit used when re-dumping the document.
    #[arg(long, default_value = "  ")]
    indent: String,
}

/// Walk the tree and print one line per value: its kind, its payload for
/// scalars, its entry count for containers.
fn print_value(value: &JsonValue, depth: usize) {
    print!("{}", " ".repeat(4 * depth));
    match value {
        JsonValue::Invalid => println!("invalid"),
        JsonValue::Null => println!("null"),
        JsonValue::Bool(b) => println!("bool: {b}"),
        JsonValue::Number(n) => println!("number: {n}"),
        JsonValue::String(s) => println!("string: {s}"),
        JsonValue::Array(values) => {
            println!("array ({})", value.size());
            for element in values {
                print_value(element, depth + 1);
            }
        }
        JsonValue::Object(members) => {
            println!("object ({})", value.size());
            for (key, member) in members {
                println!("{}key: {key}", " ".repeat(4 * (depth + 1)));
                print_value(member, depth + 1);
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let read_start = Instant::now();
    let json = match fs::read_to_string(&args.file) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("Could not read {}: {err}", args.file.display());
            return ExitCode::FAILURE;
        }
    };
    info!("read {} bytes in {:?}", json.len(), read_start.elapsed());

    let parse_start = Instant::now();
    let doc = match parse(&json) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("Could not parse json: {} at {}", err.kind, err.cursor);
            println!("{}", get_context(&json, err.cursor));
            return ExitCode::FAILURE;
        }
    };
    info!("parsed in {:?}", parse_start.elapsed());

    print_value(&doc, 0);
    println!("{}", doc.dump(&args.indent, 0));

    ExitCode::SUCCESS
}
