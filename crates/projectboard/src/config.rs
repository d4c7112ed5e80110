use std::env;

/// Attribute names used for the table's partition and sort keys.
///
/// Resolved once at startup so backends never compare configured names
/// against the literal defaults per write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    pub pk_attr: String,
    pub sk_attr: String,
}

impl KeySchema {
    pub fn new(pk_attr: impl Into<String>, sk_attr: impl Into<String>) -> Self {
        Self {
            pk_attr: pk_attr.into(),
            sk_attr: sk_attr.into(),
        }
    }

    /// When the configured partition-key attribute differs from the literal
    /// `pk`, written items duplicate the value under `pk` as a compatibility
    /// shim for mismatched table setups.
    pub fn pk_alias(&self) -> Option<&'static str> {
        (self.pk_attr != "pk").then_some("pk")
    }

    /// Same shim as [`KeySchema::pk_alias`], for the sort-key attribute.
    pub fn sk_alias(&self) -> Option<&'static str> {
        (self.sk_attr != "sk").then_some("sk")
    }
}

impl Default for KeySchema {
    fn default() -> Self {
        Self::new("pk", "sk")
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the backing table (default: "projects")
    pub table: String,
    /// Resolved partition/sort key attribute names
    pub key_schema: KeySchema,
    /// CORS allow-origin header value (default: "*")
    pub allowed_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE` - Name of the backing table (default: "projects")
    /// - `PK_ATTR` - Partition-key attribute name (default: "pk")
    /// - `SK_ATTR` - Sort-key attribute name (default: "sk")
    /// - `ALLOWED_ORIGIN` - CORS allow-origin value (default: "*")
    pub fn from_env() -> Self {
        Self {
            table: env::var("TABLE").unwrap_or_else(|_| "projects".to_string()),
            key_schema: KeySchema::new(
                env::var("PK_ATTR").unwrap_or_else(|_| "pk".to_string()),
                env::var("SK_ATTR").unwrap_or_else(|_| "sk".to_string()),
            ),
            allowed_origin: env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
