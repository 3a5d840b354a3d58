#[derive(Clone)]
pub struct Config {
    pub root_dir: String,
    pub port: u16,
}

impl Config {
    /// Reads the two positional arguments: served directory, then port.
    pub fn load() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Builds a config from an argument iterator. Missing or unparsable
    /// values fall back to serving `/` on port 80.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let root_dir = args.next().unwrap_or_else(|| "/".to_string());
        let port = args.next().and_then(|p| p.parse().ok()).unwrap_or(80);
        Self { root_dir, port }
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
