use serde_json::Value;

use crate::client::{ApiEndpoints, Fetcher, HttpTransport};
use crate::json::text_field;
use crate::thing::timestamp::{self, UNSET};
use crate::thing::{Thing, Variable};

pub fn unpack_variable(item: &Value) -> Variable {
    let raw_time = text_field(item, "value_updated_at", UNSET);
    Variable {
        name: text_field(item, "name", ""),
        vtype: text_field(item, "type", ""),
        value: text_field(item, "last_value", "N/A"),
        update_time: timestamp::normalize(&raw_time),
    }
}

/// Project a properties collection in response order
pub fn load_variables_from(json: &Value) -> Vec<Variable> {
    match json.as_array() {
        Some(items) => items.iter().map(unpack_variable).collect(),
        None => {
            log::warn!("expected a JSON array of properties");
            Vec::new()
        }
    }
}

/// Fetch the things collection and expand each thing named `thing_name`
/// with its properties. Other things are skipped without further requests.
///
/// None means the things collection itself was unavailable.
pub async fn expand_things<T: HttpTransport>(
    fetcher: &Fetcher<'_, T>,
    endpoints: &ApiEndpoints,
    thing_name: &str,
) -> Option<Vec<Thing>> {
    let url = endpoints.things();
    let json = fetcher.fetch(&url).await?;
    let Some(items) = json.as_array() else {
        log::error!("{}: expected a JSON array of things", url);
        return None;
    };

    let mut things = Vec::new();
    for item in items {
        let name = text_field(item, "name", "");
        if name != thing_name {
            log::debug!("thing '{}' skipped", name);
            continue;
        }

        let id = text_field(item, "id", "");
        let variables = match fetcher.fetch(&endpoints.properties(&id)).await {
            Some(json) => load_variables_from(&json),
            None => {
                log::warn!("thing '{}' ({}): properties unavailable", name, id);
                Vec::new()
            }
        };

        log::debug!("thing '{}' ({}): {} variables", name, id, variables.len());
        things.push(Thing {
            id,
            name,
            variables,
        });
    }
    Some(things)
}
