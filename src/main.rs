use clap::Parser;
use console::style;
use env_logger::Env;

use invo::cli::{self, Args};

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level()))
        .format_timestamp_millis()
        .init();

    log::debug!("INVO starting with args: {:?}", args);

    match cli::run(&args) {
        Ok(path) => println!(
            "{} {} {}",
            style("▶").green(),
            style("Report written").bold(),
            style(path.display()).cyan()
        ),
        Err(e) => {
            eprintln!("{}", style(e).red().for_stderr());
            std::process::exit(1);
        }
    }
}
