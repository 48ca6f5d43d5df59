use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

fn confirm_overwrite(dest: &Path) -> bool {
    warning(format!(
        "The file '{}' already exists. Do you want to overwrite it?",
        dest.display()
    ));
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl BackupLogic {
    /// Copy the storage file of the configured backend to `dest_file`,
    /// optionally zipping it. Returns the written path, or `None` if the
    /// user declined to overwrite.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(cfg.storage_path());
        let dest = Path::new(dest_file);

        // 1️⃣ Check storage exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Storage file not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask unless forced
        let final_dest = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if final_dest.exists() && !force && !confirm_overwrite(&final_dest) {
            info("Backup cancelled.");
            return Ok(None);
        }

        // 4️⃣ Copy or compress
        if compress {
            compress_into(src, &final_dest)?;
        } else {
            fs::copy(src, &final_dest)?;
        }

        success(format!("Backup created: {}", final_dest.display()));
        Ok(Some(final_dest))
    }
}

/// Write `src` as the single entry of a deflated .zip at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rendezvous.data".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
