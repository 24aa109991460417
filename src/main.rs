use blockdoc_reader::{open_documents_with, OrphanPolicy, ParseOptions};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-file> [--orphans <empty-key|skip|reject>] [--count]", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let count_only = args.iter().any(|arg| arg == "--count");
    let mut options = ParseOptions::default();
    // Parse --orphans argument
    if let Some(idx) = args.iter().position(|arg| arg == "--orphans") {
        match args.get(idx + 1).map(|value| value.parse::<OrphanPolicy>()) {
            Some(Ok(policy)) => options = options.with_orphan_policy(policy),
            Some(Err(e)) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
            None => {
                eprintln!("ERROR: --orphans flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    let documents = match open_documents_with(path, options) {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let mut count = 0usize;
    for result in documents {
        match result {
            Ok(doc) => {
                if !count_only {
                    if count > 0 {
                        println!();
                    }
                    print!("{}", doc);
                }
                count += 1;
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        }
    }

    if count_only {
        println!("{}", count);
    }
}
