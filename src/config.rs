use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Geocoding provider base URL (Nominatim)
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,

    // Routing provider base URL (OSRM)
    #[serde(default = "default_osrm_url")]
    pub osrm_url: String,

    // Directory holding the prebuilt frontend bundle
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,

    // Timeout for outbound provider calls, in seconds
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            nominatim_url: default_nominatim_url(),
            osrm_url: default_osrm_url(),
            frontend_dir: default_frontend_dir(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_osrm_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_frontend_dir() -> String {
    "frontend/dist".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    15
}
