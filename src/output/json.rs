use crate::prompt::{ProviderRegistry, Registration};

fn registration_json(entry: &Registration) -> serde_json::Value {
    let provider = entry.provider();
    serde_json::json!({
        "provider": provider.name(),
        "provider_name": provider.provider_name(),
        "prompt": provider.prompt(),
        "order": entry.order().value(),
    })
}

pub(crate) fn output_prompt_json(selected: &Registration) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&registration_json(selected))
}

pub(crate) fn output_providers_json(
    registry: &ProviderRegistry,
    selected: &Registration,
) -> Result<String, serde_json::Error> {
    let output: Vec<serde_json::Value> = registry
        .ordered()
        .into_iter()
        .map(|entry| {
            let mut value = registration_json(entry);
            value["selected"] = serde_json::Value::Bool(entry.is(selected));
            value
        })
        .collect();
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{IsacPromptProvider, Order};

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn prompt_json_fields() {
        let selected = ProviderRegistry::builtin().select().unwrap();
        let value = parse(&output_prompt_json(selected).unwrap());
        assert_eq!(value["prompt"], "isac-shell>");
        assert_eq!(value["provider_name"], "Isac Prompt");
        assert_eq!(value["order"], i64::from(i32::MIN));
    }

    #[test]
    fn providers_json_marks_selected_first() {
        let registry = ProviderRegistry::builtin();
        let selected = registry.select().unwrap();
        let value = parse(&output_providers_json(registry, selected).unwrap());
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["provider"], "isac");
        assert_eq!(arr[0]["selected"], true);
        assert_eq!(arr[1]["provider"], "default");
        assert_eq!(arr[1]["selected"], false);
    }

    #[test]
    fn prompt_json_reports_registered_order() {
        let mut registry = ProviderRegistry::new();
        registry.register_with_order(Box::new(IsacPromptProvider::new()), Order(5));
        let selected = registry.select().unwrap();

        let prompt = parse(&output_prompt_json(selected).unwrap());
        let providers = parse(&output_providers_json(&registry, selected).unwrap());
        assert_eq!(prompt["order"], 5);
        assert_eq!(prompt["order"], providers[0]["order"]);
    }

    #[test]
    fn duplicate_provider_selected_once() {
        let mut registry = ProviderRegistry::new();
        registry.register(Box::new(IsacPromptProvider::new()));
        registry.register_with_order(Box::new(IsacPromptProvider::new()), Order(7));
        let selected = registry.select().unwrap();

        let value = parse(&output_providers_json(&registry, selected).unwrap());
        let arr = value.as_array().unwrap();
        let selected_rows = arr.iter().filter(|v| v["selected"] == true).count();
        assert_eq!(selected_rows, 1);
        assert_eq!(arr[0]["selected"], true);
        assert_eq!(arr[1]["order"], 7);
    }
}
