mod format;
mod json;
mod table;

pub(crate) use json::{output_prompt_json, output_providers_json};
pub(crate) use table::print_providers_table;
