//! Command-line and environment configuration for the server binary.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cartoes-server", version, about = "Client API server")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "CARTOES_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allowed CORS origins, comma separated. `*` allows any origin.
    #[arg(
        long = "cors-origin",
        env = "CARTOES_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub cors_origins: Vec<String>,

    /// Emit logs as JSON lines.
    #[arg(long, env = "CARTOES_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
