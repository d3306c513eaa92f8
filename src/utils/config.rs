/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default` when
/// the variable is unset or does not parse
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads a mandatory, non-empty environment variable
///
/// # Errors
/// Returns `AppError::Configuration` naming the variable when it is unset or blank
pub fn get_env_required(env_var: &str) -> Result<String, AppError> {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(AppError::Configuration(format!(
            "environment variable {env_var} is required"
        ))),
    }
}
