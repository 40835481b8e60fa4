mod app;
mod cli;
mod config;
mod error;
mod output;
mod prompt;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use prompt::ProviderRegistry;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    let quiet = cli.command().is_quiet() || cli.wants_json();
    let config = if quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli, ProviderRegistry::builtin()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
