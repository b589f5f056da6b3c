/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api2.arduino.cc";

/// Resource urls under the v2 API
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    base: String,
}
impl ApiEndpoints {
    pub fn new(base_url: &str) -> ApiEndpoints {
        ApiEndpoints {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }
    pub fn devices(&self) -> String {
        format!("{}/iot/v2/devices", self.base)
    }
    pub fn things(&self) -> String {
        format!("{}/iot/v2/things", self.base)
    }
    pub fn properties(&self, thing_id: &str) -> String {
        format!("{}/{}/properties", self.things(), thing_id)
    }
}
impl Default for ApiEndpoints {
    fn default() -> Self {
        ApiEndpoints::new(DEFAULT_BASE_URL)
    }
}
