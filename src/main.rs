//! Permission Review CLI

#![forbid(unsafe_code, unused_results)]

use std::process;

use permission_review_core::{
    cli, initialize_config, initialize_logger, print_error, run_review,
};

fn main() {
    let cli = cli::generate_cli().get_matches();

    let config = match initialize_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(format!("{}", e));
            for cause in e.iter_causes() {
                print_error(format!("caused by: {}", cause));
            }
            process::exit(1);
        }
    };
    initialize_logger(config.is_verbose(), config.is_quiet());

    let session = match run_review(&config) {
        Ok(session) => session,
        Err(e) => {
            print_error(format!("{}", e));
            for cause in e.iter_causes() {
                print_error(format!("caused by: {}", cause));
            }
            if !config.is_verbose() {
                println!(
                    "If you need more information, try to run the program again with the -v flag."
                );
            }
            process::exit(1);
        }
    };

    let report = session.report();
    if config.is_json() {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                print_error(format!("could not serialize the report: {}", e));
                process::exit(1);
            }
        }
        return;
    }

    report.print();
    if !report.revoked().is_empty() && !config.is_quiet() {
        println!();
        println!("{}", session.revoked_summary(config.summary_header()));
    }
}
