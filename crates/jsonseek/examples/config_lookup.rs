//! Looks up settings in a JSON configuration file without deserializing it.
//!
//! The document is parsed once into an element tree and each setting is read
//! with a path selector. Missing settings fall back to defaults instead of
//! failing the whole load, the way `select` treats unresolved paths.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonseek --example config_lookup [path/to/config.json]
//! ```
//!
//! Without an argument a built-in sample configuration is used.

use std::{env, fs, process::ExitCode};

use jsonseek::{Document, FindError};

const SAMPLE: &str = r#"{
  "server": {"host": "0.0.0.0", "port": 8080, "workers": 4},
  "database": {"url": "postgres://localhost/app", "pool": {"max": 16}},
  "log": {"level": "info"},
  "admins": ["ada", "grace"]
}"#;

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

fn main() -> ExitCode {
    let source = match env::args().nth(1) {
        Some(path) => match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("cannot read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.as_bytes().to_vec(),
    };

    let doc = match Document::parse_owned(source) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let values = doc.select([".server.host", ".log.level"]);
    println!("host       = {}", or_default(&values[0], "127.0.0.1"));
    println!("log level  = {}", or_default(&values[1], "warn"));

    for path in [".server.port", ".server.workers", ".database.pool.max"] {
        match doc.find(path).map(|e| e.as_i64()) {
            Ok(Ok(value)) => println!("{path:<18} = {value}"),
            Ok(Err(err)) => println!("{path:<18} : not an integer ({err})"),
            Err(FindError::Lookup { key }) => println!("{path:<18} : unset ({key} missing)"),
            Err(err) => println!("{path:<18} : {err}"),
        }
    }

    if let Ok(admins) = doc.find(".admins") {
        let names: Vec<_> = admins.children().map(|admin| admin.as_str()).collect();
        println!("admins     = {}", names.join(", "));
    }

    ExitCode::SUCCESS
}
