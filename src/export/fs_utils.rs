// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, Write};
use std::path::Path;

/// Refuse to clobber an existing output file without consent.
///
/// Missing file or `force` → Ok. Otherwise ask on stdin; anything but
/// y/yes aborts the export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        )),
    }
}
