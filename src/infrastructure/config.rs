use crate::domain::metrics::Metric;
use crate::domain::slot::SlotId;
use serde::Deserialize;

pub const DEFAULT_TOGGLE_ENDPOINT: &str = "/sysadmin/availability/toggle/";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub toggle: ToggleSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub slots: Vec<SlotSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ToggleSettings {
    /// Origin of the admin backend, e.g. `https://admin.example.edu`
    pub base_url: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie_name: String,
    /// Session cookies sent with each request, in `Cookie` header form
    #[serde(default)]
    pub cookie: String,
}

impl ToggleSettings {
    pub fn toggle_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }
}

fn default_endpoint() -> String {
    DEFAULT_TOGGLE_ENDPOINT.to_string()
}

fn default_csrf_cookie() -> String {
    DEFAULT_CSRF_COOKIE.to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AnalyticsSettings {
    #[serde(default)]
    pub data_path: Option<String>,
    #[serde(default)]
    pub regions: ChartRegions,
    /// Mount points present in the page; all configured regions when unset
    #[serde(default)]
    pub page_regions: Option<Vec<String>>,
}

/// Mount point id for each metric chart.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartRegions {
    pub status: String,
    pub monthly: String,
    pub counselor: String,
    pub timeslot: String,
    pub program: String,
}

impl Default for ChartRegions {
    fn default() -> Self {
        Self {
            status: "statusChart".to_string(),
            monthly: "trendChart".to_string(),
            counselor: "counselorChart".to_string(),
            timeslot: "timeslotChart".to_string(),
            program: "programChart".to_string(),
        }
    }
}

impl ChartRegions {
    pub fn region_for(&self, metric: Metric) -> &str {
        match metric {
            Metric::Status => &self.status,
            Metric::Monthly => &self.monthly,
            Metric::Counselor => &self.counselor,
            Metric::Timeslot => &self.timeslot,
            Metric::Program => &self.program,
        }
    }

    pub fn all(&self) -> Vec<String> {
        Metric::ALL
            .iter()
            .map(|m| self.region_for(*m).to_string())
            .collect()
    }
}

/// A slot row rendered on the availability page.
#[derive(Debug, Deserialize, Clone)]
pub struct SlotSeed {
    pub id: SlotId,
    #[serde(default)]
    pub available: bool,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_config(config::File::with_name("config/dashboard"))
}

fn build_config<S>(file: S) -> anyhow::Result<DashboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults_applied() {
        let toml = r#"
            [toggle]
            base_url = "http://localhost:8000/"
        "#;
        let cfg = build_config(File::from_str(toml, FileFormat::Toml)).unwrap();

        assert_eq!(cfg.server.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.toggle.csrf_cookie_name, "csrftoken");
        assert_eq!(
            cfg.toggle.toggle_url(),
            "http://localhost:8000/sysadmin/availability/toggle/"
        );
        assert_eq!(cfg.analytics.regions, ChartRegions::default());
        assert!(cfg.slots.is_empty());
    }

    #[test]
    fn test_slots_and_regions() {
        let toml = r#"
            [toggle]
            base_url = "http://localhost:8000"
            cookie = "sessionid=abc; csrftoken=xyz"

            [analytics]
            data_path = "data/analytics.json"
            page_regions = ["statusChart"]

            [analytics.regions]
            monthly = "monthlyChart"

            [[slots]]
            id = 12
            available = true

            [[slots]]
            id = "13"
        "#;
        let cfg = build_config(File::from_str(toml, FileFormat::Toml)).unwrap();

        assert_eq!(cfg.analytics.regions.region_for(Metric::Monthly), "monthlyChart");
        assert_eq!(cfg.analytics.regions.region_for(Metric::Status), "statusChart");
        assert_eq!(cfg.analytics.page_regions, Some(vec!["statusChart".to_string()]));
        assert_eq!(cfg.slots.len(), 2);
        assert_eq!(cfg.slots[0].id, SlotId::new("12"));
        assert!(cfg.slots[0].available);
        assert!(!cfg.slots[1].available);
    }
}
