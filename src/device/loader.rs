use serde_json::Value;

use crate::client::{ApiEndpoints, Fetcher, HttpTransport};
use crate::device::{Device, DeviceListing};
use crate::json::text_field;

/// Project a devices collection. None if the body is not an array.
pub fn load_all_from(json: &Value) -> Option<DeviceListing> {
    let items = json.as_array()?;
    let devices = items
        .iter()
        .map(|item| Device {
            name: text_field(item, "name", ""),
            device_type: text_field(item, "type", ""),
        })
        .collect();
    Some(DeviceListing { devices })
}

/// Fetch the devices collection. None means no data is available.
pub async fn list_devices<T: HttpTransport>(
    fetcher: &Fetcher<'_, T>,
    endpoints: &ApiEndpoints,
) -> Option<DeviceListing> {
    let url = endpoints.devices();
    let json = fetcher.fetch(&url).await?;

    let listing = load_all_from(&json);
    match &listing {
        Some(l) => log::debug!("{}: {} devices listed", url, l.devices.len()),
        None => log::error!("{}: expected a JSON array of devices", url),
    }
    listing
}
