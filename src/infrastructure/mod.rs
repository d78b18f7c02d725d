pub mod http;
pub mod rendering;
pub mod services;

/// Page-level configuration source
pub mod config_source {
    use crate::application::DashboardConfig;
    use crate::domain::errors::AppResult;

    /// Id of the `<script type="application/json">` element holding the config.
    pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

    /// Config embedded in the page; `Ok(None)` when the element is absent or blank.
    pub fn read_from_document() -> AppResult<Option<DashboardConfig>> {
        let raw = gloo::utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .unwrap_or_default();

        if raw.trim().is_empty() {
            return Ok(None);
        }
        DashboardConfig::from_json(&raw).map(Some)
    }
}
