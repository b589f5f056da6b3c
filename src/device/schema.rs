use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
}

/// Devices in API response order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceListing {
    pub devices: Vec<Device>,
}
impl DeviceListing {
    pub fn names(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.name.clone()).collect()
    }
    pub fn types(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.device_type.clone()).collect()
    }
}
