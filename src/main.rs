use anyhow::Context;
use clap::Parser;
use record_store::cli::{Args, record_input, report, setup_logging};
use record_store::config::StoreConfig;
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Layered configuration: defaults -> environment -> CLI
    let config = StoreConfig::from_env().context("Failed to read store configuration")?;
    let config = args
        .apply_overrides(config)
        .context("Invalid command-line configuration")?;

    let records = record_input::load_records(args.records_file.as_deref())?;
    let run_report = report::execute(&config, &records, &args.process_ids, &args.complex)
        .context("Failed to build record store")?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&run_report).context("Failed to serialize run report")?;
        println!("{}", json);
    } else {
        report::print_text(&run_report);
    }

    Ok(())
}
