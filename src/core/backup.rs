use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipping it.
    ///
    /// Returns the final path, or `None` when the operator declined to
    /// overwrite an existing file.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if compress && target == dest {
            return Err(AppError::InvalidInput(format!(
                "compressed backup would replace its own source: {}",
                dest.display()
            )));
        }

        // with --compress the plain copy at `dest` is an intermediate that
        // gets removed, so an existing file there is lost as well
        let existing = [target.as_path(), dest].into_iter().find(|p| p.exists());
        if let Some(existing) = existing
            && !confirm_overwrite(existing)?
        {
            return Ok(None);
        }

        fs::copy(src, dest)?;

        let final_path = if compress {
            let compressed = compress_backup(dest, &target)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        let conn = Connection::open(src)?;
        audit(
            &conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!(
        "The file '{}' already exists. Overwrite it? [y/N]",
        dest.display()
    ));
    eprint!("> ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

/// Compress a backup into a sibling `.zip`.
fn compress_backup(path: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rpayroll.sqlite".to_string());

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path.to_path_buf())
}
