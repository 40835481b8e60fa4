use comfy_table::Table;

use crate::output::format::{RowStyle, providers_table};
use crate::prompt::{ProviderRegistry, Registration};

/// Build the providers table, marking the `selected` registration
fn build_providers_table(
    registry: &ProviderRegistry,
    selected: &Registration,
    use_color: bool,
) -> Table {
    let style = RowStyle { use_color };
    let mut table = providers_table();
    table.set_header(vec![
        style.header(""),
        style.header("Provider"),
        style.header("Name"),
        style.header("Prompt"),
        style.header("Order"),
    ]);

    for entry in registry.ordered() {
        let provider = entry.provider();
        let is_selected = entry.is(selected);
        table.add_row(vec![
            style.cell(if is_selected { "*" } else { "" }, is_selected),
            style.cell(provider.name(), is_selected),
            style.cell(provider.provider_name(), is_selected),
            style.cell(provider.prompt(), is_selected),
            style.cell(&entry.order().to_string(), false),
        ]);
    }

    table
}

pub(crate) fn print_providers_table(
    registry: &ProviderRegistry,
    selected: &Registration,
    use_color: bool,
) {
    println!("\n  Prompt Providers\n");
    println!("{}", build_providers_table(registry, selected, use_color));
    println!();
}
