//! CLI entry point for library-catalog
//!
//! Runs the demo scenario or checks a JSON batch of item and user records.

use library_catalog::application::{CatalogConfig, CirculationService, RecordBatch};
use library_catalog::{BorrowerStatus, Genre, LibraryItem, LibraryUser};
use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let command = args.get(1).map(String::as_str).unwrap_or("demo");

    match command {
        "demo" => run_demo(),
        "check" => match parse_check_args(&args[2..]) {
            Ok((records, config)) => run_check(records, config),
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!();
                print_usage();
                process::exit(1);
            }
        },
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

/// Splits `check` arguments into the records path and an optional config path
fn parse_check_args(args: &[String]) -> Result<(PathBuf, Option<PathBuf>), String> {
    let Some((records, options)) = args.split_first() else {
        return Err("Missing records file path".to_string());
    };

    let config = match options {
        [] => None,
        [flag] if flag == "--config" => {
            return Err("--config requires a file path".to_string());
        }
        [flag, path] if flag == "--config" => Some(PathBuf::from(path)),
        [flag, _, extra, ..] if flag == "--config" => {
            return Err(format!("Unexpected argument '{}'", extra));
        }
        [other, ..] => return Err(format!("Unknown option '{}'", other)),
    };

    Ok((PathBuf::from(records), config))
}

fn print_usage() {
    println!("library-catalog - Library items and borrowers");
    println!();
    println!("USAGE:");
    println!("    library-catalog [demo]");
    println!("    library-catalog check <records.json> [--config <config.json>]");
    println!();
    println!("COMMANDS:");
    println!("    demo                     Build a sample item and user, borrow and return");
    println!("    check <file>             Validate every item and user record in a file");
    println!("    --help, -h               Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    JSON catalog configuration (email_policy, enforce_item_id_minimum)");
}

fn run_demo() {
    match LibraryItem::new("The Pragmatic Programmer", "Andy Hunt", Genre::NonFiction, 101, false) {
        Ok(item) => {
            println!("Title: {}", item.title());
            println!("Author: {}", item.author());
            println!("Genre: {}", item.genre());
            println!("Item ID: {}", item.item_id());
            println!("Is Borrowed: {}", item.is_borrowed());
        }
        Err(err) => println!("{}", err),
    }

    match LibraryUser::new(101, "Enzo Kneipp", "kneippenzo@gmail.com", BorrowerStatus::Active) {
        Ok(mut user) => {
            println!("User ID: {}", user.user_id());
            println!("Name: {}", user.name());
            println!("Email: {}", user.email());
            println!("Borrower Status: {}", user.borrower_status());
            match user.borrow_item() {
                Ok(message) => println!("{}", message),
                Err(err) => println!("{}", err),
            }
            println!("{}", user.return_item());
        }
        Err(err) => println!("{}", err),
    }

    if let Err(err) = LibraryUser::new(99, "", "invalidemail", BorrowerStatus::Active) {
        println!("{}", err);
    }
}

fn run_check(records: PathBuf, config: Option<PathBuf>) {
    let config = match config.map(CatalogConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    };

    let batch = match RecordBatch::load(&records) {
        Ok(batch) => batch,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    };

    let report = CirculationService::new(config).check_batch(&batch);

    for outcome in &report.items {
        match &outcome.result {
            Ok(item) => println!("item[{}] ok: {} ({})", outcome.index, item.title(), item.genre()),
            Err(err) => println!("item[{}] rejected: {}", outcome.index, err),
        }
    }
    for outcome in &report.users {
        match &outcome.result {
            Ok(user) => println!(
                "user[{}] ok: {} ({})",
                outcome.index,
                user.name(),
                user.borrower_status()
            ),
            Err(err) => println!("user[{}] rejected: {}", outcome.index, err),
        }
    }

    if !report.is_clean() {
        process::exit(1);
    }
}
