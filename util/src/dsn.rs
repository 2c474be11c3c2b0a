//! Parsing and formatting of database data source names of the form
//! `user:password@protocol(address)/schema?options`.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::form_urlencoded;

/// Type alias for Result with `DsnError`
pub type Result<T> = std::result::Result<T, DsnError>;

const PASSWORD_MASK: &str = "********";

static DSN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*?)(?::(.*?))?@(\w+)\((.*?)\)(?:/([^?]+))?/?(\?)?(.*)?")
        .expect("Failed to compile DSN regex")
});

static DSN_PASSWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*):[^/]+?(@.*)$").expect("Failed to compile password regex"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DsnError {
    #[error("invalid data source name (could not parse)")]
    Unparseable,

    #[error("invalid data source name (unsupported protocol '{0}')")]
    UnsupportedProtocol(String),

    #[error("invalid data source name (could not parse query part)")]
    InvalidQuery,

    #[error("invalid data source name (schema contains whitespace)")]
    SchemaWhitespace,
}

/// A parsed data source name. The schema is empty when the DSN carries
/// none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSource {
    pub user: String,
    pub password: String,
    pub protocol: String,
    pub address: String,
    pub schema: String,
    pub options: BTreeMap<String, String>,
}

impl DataSource {
    /// Reassembles the full DSN, including the password and the options
    /// encoded with sorted keys.
    pub fn format(&self) -> String {
        let mut dsn = format!(
            "{}:{}@{}({})/{}",
            self.user, self.password, self.protocol, self.address, self.schema
        );

        if !self.options.is_empty() {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.options.iter())
                .finish();
            dsn.push('?');
            dsn.push_str(&query);
        }

        dsn
    }
}

impl fmt::Display for DataSource {
    /// Simplified representation: username, protocol, address, and schema.
    /// The password is obfuscated and options are dropped, making the
    /// result safe to log.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}@{}({})/{}",
            self.user, PASSWORD_MASK, self.protocol, self.address, self.schema
        )
    }
}

/// Parses `name` as a data source name.
pub fn parse_dsn(name: &str) -> Result<DataSource> {
    let caps = DSN_PATTERN.captures(name).ok_or(DsnError::Unparseable)?;

    let raw_protocol = caps.get(3).map_or("", |m| m.as_str());
    let protocol = raw_protocol.to_lowercase();
    if protocol != "unix" && protocol != "tcp" {
        return Err(DsnError::UnsupportedProtocol(raw_protocol.to_string()));
    }

    let schema = caps.get(5).map_or("", |m| m.as_str());
    validate_schema(schema)?;

    let options = if caps.get(6).is_some() {
        parse_query(caps.get(7).map_or("", |m| m.as_str()))?
    } else {
        BTreeMap::new()
    };

    Ok(DataSource {
        user: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        password: caps.get(2).map_or("", |m| m.as_str()).to_string(),
        protocol,
        address: caps.get(4).map_or("", |m| m.as_str()).to_string(),
        schema: schema.to_string(),
        options,
    })
}

/// Parses `dsn` and replaces the schema with `name`, returning the new DSN.
pub fn replace_database(dsn: &str, name: &str) -> Result<String> {
    let mut source = parse_dsn(dsn)?;
    source.schema = name.to_string();

    // the new schema can render the DSN invalid, so parse the result again
    let new_dsn = source.format();
    parse_dsn(&new_dsn)?;

    Ok(new_dsn)
}

/// Parses `dsn`, sets the given options, and returns the new DSN.
pub fn set_options(dsn: &str, options: &[(&str, &str)]) -> Result<String> {
    let mut source = parse_dsn(dsn)?;

    for (key, value) in options {
        source
            .options
            .insert((*key).to_string(), (*value).to_string());
    }

    Ok(source.format())
}

/// Masks the password within `dsn`, typically before displaying or logging
/// it.
///
/// When the password is empty the mask is inserted anyway. When the input
/// does not look like a DSN at all, the mask itself is returned to prevent
/// leaks by mistake.
pub fn mask_password(dsn: &str) -> String {
    let masked = if DSN_PASSWORD_PATTERN.is_match(dsn) {
        DSN_PASSWORD_PATTERN
            .replace(dsn, format!("${{1}}:{PASSWORD_MASK}${{2}}"))
            .into_owned()
    } else if dsn.contains(":@") {
        dsn.replacen(":@", &format!(":{PASSWORD_MASK}@"), 1)
    } else {
        dsn.replacen('@', &format!(":{PASSWORD_MASK}@"), 1)
    };

    if masked == dsn {
        return PASSWORD_MASK.to_string();
    }

    masked
}

fn parse_query(query: &str) -> Result<BTreeMap<String, String>> {
    // semicolons are not accepted as separators
    if query.contains(';') {
        return Err(DsnError::InvalidQuery);
    }

    Ok(form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect())
}

fn validate_schema(name: &str) -> Result<()> {
    if name.contains([' ', '\t', '\n', '\r', '\x0b', '\x0c']) {
        return Err(DsnError::SchemaWhitespace);
    }

    Ok(())
}
