//! Gateway configuration, read once at startup from flags or environment.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use entitle_directory::DirectoryConfig;

/// Fallback admin credential used when none (or an empty one) is supplied.
const DEFAULT_ADMIN_CREDENTIAL: &str = "admin";

/// Entitlements gateway configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "entitle-gateway")]
#[command(about = "Answers entitlement and compliance queries for x-rh-identity callers", long_about = None)]
pub struct GatewayConfig {
    /// Keycloak base URL
    #[arg(long, env = "KEYCLOAK_SERVER")]
    pub keycloak_server: String,

    /// Keycloak admin username
    #[arg(long, env = "KEYCLOAK_USERNAME", default_value = DEFAULT_ADMIN_CREDENTIAL)]
    pub keycloak_username: String,

    /// Keycloak admin password
    #[arg(long, env = "KEYCLOAK_PASSWORD", default_value = DEFAULT_ADMIN_CREDENTIAL, hide_env_values = true)]
    pub keycloak_password: String,

    /// Realm whose users are served
    #[arg(long, env = "KEYCLOAK_REALM", default_value = "redhat-external")]
    pub keycloak_realm: String,

    /// Realm issuing admin tokens
    #[arg(long, env = "KEYCLOAK_ADMIN_REALM", default_value = "master")]
    pub keycloak_admin_realm: String,

    /// OAuth2 client used for the admin password grant
    #[arg(long, env = "KEYCLOAK_CLIENT_ID", default_value = "admin-cli")]
    pub keycloak_client_id: String,

    /// Address to listen on
    #[arg(long, env = "ENTITLE_LISTEN", default_value = "0.0.0.0:8090")]
    pub listen: SocketAddr,

    /// Deadline for one directory fetch, in seconds
    #[arg(long, env = "ENTITLE_DIRECTORY_TIMEOUT_SECS", default_value_t = 10)]
    pub directory_timeout_secs: u64,
}

impl GatewayConfig {
    /// Connection settings for the directory client.
    pub fn directory_config(&self) -> DirectoryConfig {
        DirectoryConfig {
            base_url: self.keycloak_server.clone(),
            realm: self.keycloak_realm.clone(),
            admin_realm: self.keycloak_admin_realm.clone(),
            client_id: self.keycloak_client_id.clone(),
            username: or_default_credential(&self.keycloak_username),
            password: or_default_credential(&self.keycloak_password),
        }
    }

    /// Deadline applied to each directory fetch.
    pub fn directory_timeout(&self) -> Duration {
        Duration::from_secs(self.directory_timeout_secs)
    }
}

fn or_default_credential(value: &str) -> String {
    if value.is_empty() {
        DEFAULT_ADMIN_CREDENTIAL.to_string()
    } else {
        value.to_string()
    }
}
