use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::output::{output_prompt_json, output_providers_json, print_providers_table};
use crate::prompt::{ProviderRegistry, Registration};
use crate::utils::{debug_log, filter_json};

/// Print JSON output, optionally filtering through jq
fn print_json(json: &str, jq_filter: Option<&str>) -> Result<(), AppError> {
    match jq_filter {
        Some(filter) => print!("{}", filter_json(json, filter)?),
        None => println!("{json}"),
    }
    Ok(())
}

fn handle_prompt(selected: &Registration, cli: &Cli) -> Result<(), AppError> {
    if cli.wants_json() {
        print_json(&output_prompt_json(selected)?, cli.jq.as_deref())
    } else {
        println!("{}", selected.provider().prompt());
        Ok(())
    }
}

fn handle_name(selected: &Registration, cli: &Cli) -> Result<(), AppError> {
    if cli.wants_json() {
        print_json(&output_prompt_json(selected)?, cli.jq.as_deref())
    } else {
        println!("{}", selected.provider().provider_name());
        Ok(())
    }
}

fn handle_providers(
    registry: &ProviderRegistry,
    selected: &Registration,
    cli: &Cli,
) -> Result<(), AppError> {
    if cli.wants_json() {
        let json = output_providers_json(registry, selected)?;
        print_json(&json, cli.jq.as_deref())
    } else {
        print_providers_table(registry, selected, cli.use_color());
        Ok(())
    }
}

pub(crate) fn run(cli: &Cli, registry: &ProviderRegistry) -> Result<(), AppError> {
    let selected = registry.resolve(cli.provider.as_deref())?;
    debug_log(format_args!(
        "Using prompt provider {} at order {} ({} registered)",
        selected.provider().name(),
        selected.order(),
        registry.len()
    ));

    match cli.command() {
        Commands::Prompt => handle_prompt(selected, cli),
        Commands::Name => handle_name(selected, cli),
        Commands::Providers => handle_providers(registry, selected, cli),
    }
}
