use super::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<resource_events::EventBus>>,
) -> Result<(), ConfigError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;
    let added_fields = migrate_document(&mut doc)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;
        tracing::debug!(
            "Migrated config '{}': {}",
            path.as_ref().display(),
            added_fields.join(", ")
        );

        if let Some(event_bus) = events {
            event_bus.emit(resource_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

/// Adds missing fields in place, returning what changed
pub(crate) fn migrate_document(doc: &mut DocumentMut) -> Result<Vec<String>, ConfigError> {
    let mut added_fields = Vec::new();

    migrate_server_section(doc, &mut added_fields)?;
    migrate_resources_section(doc, &mut added_fields)?;
    migrate_contexts_array(doc, &mut added_fields)?;

    Ok(added_fields)
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    ensure_table(doc, "server", added_fields);

    let server = doc["server"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError("Invalid [server] section in config".to_string()))?;
    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(8080), added_fields);
    ensure_field(server, "context_path", Value::from("/portal"), added_fields);
    ensure_field(server, "timeout_secs", Value::from(30), added_fields);
    ensure_field(
        server,
        "max_concurrent_requests",
        Value::from(1000),
        added_fields,
    );

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("server.allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_resources_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    // Older files carried the override as a plain init parameter
    let legacy_override = doc
        .get("init_params")
        .and_then(|params| params.get(resource_resolver::RESOURCE_CONTEXT_INIT_PARAM))
        .and_then(|value| value.as_str())
        .map(str::to_string);

    ensure_table(doc, "resources", added_fields);

    let resources = doc["resources"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError("Invalid [resources] section in config".to_string()))?;

    let mut migrated_legacy = false;
    if !resources.contains_key("context_path") {
        match legacy_override.as_deref() {
            Some(path) => {
                resources["context_path"] = Item::Value(Value::from(path));
                added_fields.push("resources.context_path (migrated from init_params)".to_string());
                migrated_legacy = true;
            }
            None => {
                resources["context_path"] = Item::Value(Value::from(""));
                added_fields.push("resources.context_path".to_string());
            }
        }
    }
    ensure_field(
        resources,
        "default_context",
        Value::from(resource_resolver::DEFAULT_RESOURCE_CONTEXT),
        added_fields,
    );

    if migrated_legacy {
        if let Some(params) = doc.get_mut("init_params").and_then(Item::as_table_like_mut) {
            params.remove(resource_resolver::RESOURCE_CONTEXT_INIT_PARAM);
            added_fields.push(format!(
                "removed init_params.{}",
                resource_resolver::RESOURCE_CONTEXT_INIT_PARAM
            ));
        }
    }

    Ok(())
}

fn migrate_contexts_array(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    // Only migrate an existing contexts array, never create an empty one
    if let Some(contexts) = doc
        .get_mut("contexts")
        .and_then(|c| c.as_array_of_tables_mut())
    {
        for (idx, context) in contexts.iter_mut().enumerate() {
            if !context.contains_key("enabled") {
                context.insert("enabled", Item::Value(Value::from(true)));
                added_fields.push(format!("contexts[{}].enabled", idx));
            }
        }
    }

    Ok(())
}

fn ensure_table(doc: &mut DocumentMut, key: &str, added_fields: &mut Vec<String>) {
    if !doc.contains_key(key) {
        let mut table = Table::new();
        table.set_implicit(true);
        doc[key] = Item::Table(table);
        added_fields.push(key.to_string());
    }
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_missing_fields() {
        let mut doc = "[server]\nport = 9000\n".parse::<DocumentMut>().unwrap();
        let added = migrate_document(&mut doc).unwrap();

        assert!(added.contains(&"host".to_string()));
        assert!(added.contains(&"resources".to_string()));
        assert!(added.contains(&"default_context".to_string()));
        assert_eq!(doc["server"]["port"].as_integer(), Some(9000));
        assert_eq!(
            doc["resources"]["default_context"].as_str(),
            Some("/ResourceServingWebapp")
        );
    }

    #[test]
    fn complete_document_is_untouched() {
        let mut doc = crate::DEFAULT_CONFIG_TEMPLATE.parse::<DocumentMut>().unwrap();
        let added = migrate_document(&mut doc).unwrap();
        assert!(added.is_empty(), "unexpected migration: {:?}", added);
    }

    #[test]
    fn moves_legacy_init_param_into_resources() {
        let mut doc = "[server]\n[init_params]\nresourceContextPath = \"/Legacy\"\nother = \"x\"\n"
            .parse::<DocumentMut>()
            .unwrap();
        migrate_document(&mut doc).unwrap();

        assert_eq!(doc["resources"]["context_path"].as_str(), Some("/Legacy"));
        assert!(doc["init_params"].get("resourceContextPath").is_none());
        assert_eq!(doc["init_params"]["other"].as_str(), Some("x"));
    }

    #[test]
    fn contexts_get_enabled_flag() {
        let mut doc = "[server]\n[[contexts]]\npath = \"/A\"\n".parse::<DocumentMut>().unwrap();
        let added = migrate_document(&mut doc).unwrap();

        assert!(added.contains(&"contexts[0].enabled".to_string()));
        assert_eq!(doc["contexts"][0]["enabled"].as_bool(), Some(true));
    }
}
