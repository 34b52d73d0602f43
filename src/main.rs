use clap::Parser;
use colored::Colorize;
use std::error::Error;
use subnet_planner::cli::{parse_request, Cli, OutputFormat};
use subnet_planner::output::{print_csv, print_json, print_table};
use subnet_planner::processing::subnet_rows;
use subnet_planner::{check_partition, split_network};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = Cli::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<(), Box<dyn Error>> {
    let request = parse_request(args.mode, &args.count)?;
    let result = split_network(&args.network, request)?;
    check_partition(&result)?;

    let rows = subnet_rows(&result)?;
    match args.format {
        OutputFormat::Table => print_table(&result, &rows),
        OutputFormat::Csv => print_csv(&result, &rows),
        OutputFormat::Json => print_json(&result, &rows)?,
    }

    log::info!("Calculation complete, generated {} subnets", rows.len());
    Ok(())
}
