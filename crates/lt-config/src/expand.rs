//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use lt_linkify::LinkifyOptions;

use crate::ConfigError;

/// Expand `${VAR}` references in one linkify option value.
///
/// `field` is the option path reported when a variable is unset, such as
/// `linkify.default_scheme` or `linkify.attributes.rel`. Values without a
/// `${` are returned as written, so a literal `$` in an attribute value
/// (a `title` mentioning a price, say) is never treated as a variable.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |var: &str| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(found) => Ok(Some(found)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    };
    match shellexpand::env_with_context(value, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(e) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.var_name),
        }),
    }
}

/// Expand the string-valued linkify options.
///
/// Covers `linkify.default_scheme` and every `linkify.attributes.*` value.
pub(crate) fn expand_options(raw: &LinkifyOptions) -> Result<LinkifyOptions, ConfigError> {
    let mut options = raw.clone();
    options.default_scheme = expand_env(&raw.default_scheme, "linkify.default_scheme")?;
    for (name, value) in &mut options.attributes {
        *value = expand_env(value, &format!("linkify.attributes.{name}"))?;
    }
    Ok(options)
}

/// Unset variable met while expanding an option value.
struct LookupError {
    var_name: String,
}
