//! Identity-provider connection settings.

/// Maximum number of users requested from the directory in one listing.
///
/// The listing is not paginated; users beyond this cap are not visible.
pub const DIRECTORY_PAGE_LIMIT: usize = 2000;

/// Connection settings for the Keycloak user directory.
///
/// Built once at startup and passed by reference into the client and token
/// cache constructors.
#[derive(Clone, Debug)]
pub struct DirectoryConfig {
    /// Base URL of the Keycloak server, e.g. `https://sso.example.com`.
    pub base_url: String,
    /// Realm whose users are listed.
    pub realm: String,
    /// Realm that issues admin tokens.
    pub admin_realm: String,
    /// OAuth2 client used for the password grant.
    pub client_id: String,
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

impl DirectoryConfig {
    /// URL listing the realm's users, capped at [`DIRECTORY_PAGE_LIMIT`].
    pub fn users_url(&self) -> String {
        format!(
            "{}/auth/admin/realms/{}/users?max={DIRECTORY_PAGE_LIMIT}",
            self.base(),
            self.realm
        )
    }

    /// OpenID Connect token endpoint of the admin realm.
    pub fn token_url(&self) -> String {
        format!(
            "{}/auth/realms/{}/protocol/openid-connect/token",
            self.base(),
            self.admin_realm
        )
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            realm: "redhat-external".to_string(),
            admin_realm: "master".to_string(),
            client_id: "admin-cli".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}
