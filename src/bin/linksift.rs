use linksift::core::constants::exit_codes;
use linksift::extraction::{ExtractLinks, Extractor};
use linksift::reporting::logging;
use linksift::ui::{cli, output};

fn main() {
    let cli = cli::parse_or_usage();
    logging::init_logger();

    match run(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            logging::log_error("Extraction failed", Some(&e));
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

fn run(cli: &cli::Cli) -> linksift::Result<i32> {
    let summary = Extractor::default().extract(&cli.input, &cli.output)?;

    logging::log_scan_complete(summary.total);
    logging::log_filter_complete(summary.total, summary.filtered);
    println!("{}", output::status_line(&summary, &cli.output));

    Ok(exit_codes::SUCCESS)
}
