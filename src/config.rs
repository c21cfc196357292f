use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

/// Settings for the API service.
#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Key for the external AI client. Nothing calls that client yet.
    pub openai_api_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty());
        let server_addr = socket_addr("HOST", "127.0.0.1", "PORT", "3000")?;

        Ok(Config {
            server_addr,
            openai_api_key,
        })
    }
}

/// Settings for the display client.
#[derive(Clone)]
pub struct ViewerConfig {
    pub server_addr: SocketAddr,
    pub api_base_url: String,
}

impl ViewerConfig {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let server_addr = socket_addr("VIEWER_HOST", "127.0.0.1", "VIEWER_PORT", "5173")?;
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(ViewerConfig {
            server_addr,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn socket_addr(host_var: &str, default_host: &str, port_var: &str, default_port: &str) -> Result<SocketAddr> {
    let host = env::var(host_var).unwrap_or_else(|_| default_host.to_string());
    let port = env::var(port_var).unwrap_or_else(|_| default_port.to_string());
    parse_socket_addr(&host, &port)
}

fn parse_socket_addr(host: &str, port: &str) -> Result<SocketAddr> {
    let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
    let ip = IpAddr::from_str(host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;
    Ok(SocketAddr::new(ip, port))
}
