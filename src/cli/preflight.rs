//! Pre-flight checks before startup work.
//!
//! Validates that the credential, data source and page assets are present
//! before any embedding request is made.

use crate::config::Settings;
use crate::error::{FaqbotError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Serving the page needs the key, the data and the logo.
    Serve,
    /// Terminal chat and search need the key and the data.
    Chat,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or the first error found.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    Settings::api_key()?;
    check_data_source(settings)?;
    if let Operation::Serve = operation {
        check_logo(settings)?;
    }
    Ok(())
}

fn check_data_source(settings: &Settings) -> Result<()> {
    let path = settings.data_path();
    if path.exists() {
        Ok(())
    } else {
        Err(FaqbotError::MissingDataSource(path))
    }
}

fn check_logo(settings: &Settings) -> Result<()> {
    match settings.logo_path() {
        Some(path) if !path.exists() => Err(FaqbotError::Config(format!(
            "Logo file not found: {}. Fix ui.logo_path or set it to \"\" to disable the logo.",
            path.display()
        ))),
        _ => Ok(()),
    }
}
