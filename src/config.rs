use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address of the Freebox (e.g., 'mafreebox.freebox.fr', '192.168.1.254')
    #[arg(long, default_value = "mafreebox.freebox.fr")]
    pub host: String,

    /// HTTP port of the Freebox API
    #[arg(short, long, default_value_t = 80)]
    pub port: u16,

    /// Use HTTPS instead of HTTP
    #[arg(long)]
    pub https: bool,

    /// Session token of an already opened session
    #[arg(short, long, env = "FREEBOX_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the DHCPv4 configuration
    Config,
    /// Replace the DHCPv4 configuration with a JSON document
    SetConfig {
        #[arg(long)]
        json: String,
    },
    /// Show the DHCPv6 configuration
    V6Config,
    /// Replace the DHCPv6 configuration with a JSON document
    SetV6Config {
        #[arg(long)]
        json: String,
    },
    /// List dynamic leases
    DynamicLeases,
    /// List static leases
    StaticLeases,
    /// Create a static lease
    AddStaticLease {
        #[arg(long)]
        ip: String,
        #[arg(long)]
        mac: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Replace an existing static lease
    EditStaticLease {
        #[arg(long)]
        id: String,
        #[arg(long)]
        ip: String,
        #[arg(long)]
        mac: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Delete a static lease
    DeleteStaticLease {
        #[arg(long)]
        id: String,
    },
    /// List AirMedia receivers
    AirmediaReceivers,
}

pub struct AccessConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub api_version: String,
    pub session_token: String,
    pub timeout: Duration,
}

impl AccessConfig {
    pub fn new(host: String, session_token: String) -> Self {
        Self {
            host,
            port: 80,
            protocol: "http".to_string(),
            api_version: "v3".to_string(),
            session_token,
            timeout: Duration::from_secs(10),
        }
    }

    /// Root every API path is resolved against, always ending with a slash.
    /// IPv6 literals are bracketed.
    pub fn base_url(&self) -> String {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        format!(
            "{}://{}:{}/api/{}/",
            self.protocol, host, self.port, self.api_version
        )
    }
}

impl From<&Args> for AccessConfig {
    fn from(args: &Args) -> Self {
        let mut config = AccessConfig::new(args.host.clone(), args.session_token.clone());
        config.port = args.port;
        if args.https {
            config.protocol = "https".to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_access_config() {
        let args = Args::try_parse_from([
            "freebox-dhcp",
            "--host",
            "192.168.1.254",
            "--port",
            "443",
            "--https",
            "--session-token",
            "abc",
            "delete-static-lease",
            "--id",
            "42",
        ])
        .unwrap();

        assert!(matches!(args.command, Command::DeleteStaticLease { ref id } if id == "42"));

        let config = AccessConfig::from(&args);
        assert_eq!(config.session_token, "abc");
        assert_eq!(config.base_url(), "https://192.168.1.254:443/api/v3/");
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        let config = AccessConfig::new("fe80::1".to_string(), "abc".to_string());
        assert_eq!(config.base_url(), "http://[fe80::1]:80/api/v3/");

        let config = AccessConfig::new("[2a01:e35::1]".to_string(), "abc".to_string());
        assert_eq!(config.base_url(), "http://[2a01:e35::1]:80/api/v3/");
    }

    #[test]
    fn test_add_static_lease_comment_defaults_to_empty() {
        let args = Args::try_parse_from([
            "freebox-dhcp",
            "--session-token",
            "abc",
            "add-static-lease",
            "--ip",
            "192.168.1.20",
            "--mac",
            "00:24:d4:7e:00:4c",
        ])
        .unwrap();

        match args.command {
            Command::AddStaticLease { ip, mac, comment } => {
                assert_eq!(ip, "192.168.1.20");
                assert_eq!(mac, "00:24:d4:7e:00:4c");
                assert!(comment.is_empty());
            }
            other => panic!("Expected AddStaticLease, got {other:?}"),
        }
    }
}
