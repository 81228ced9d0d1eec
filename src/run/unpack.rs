//! Archive extraction

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::Result;

/// Expand the zip archive at `archive_path` into `dest_dir`
///
/// The destination directory is created first, then every entry is written
/// beneath it with its archived path. Entries whose names would escape the
/// destination are skipped. Unix file modes are restored when the archive
/// records them.
///
/// Returns the number of entries in the archive. Nothing is cleaned up on
/// failure; a partially extracted tree is left as-is.
pub fn extract(archive_path: &Path, dest_dir: &Path) -> Result<usize> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;

    fs::create_dir_all(dest_dir)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let Some(relative) = entry.enclosed_name() else {
            log::warn!("skipping unsafe archive entry {:?}", entry.name());
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        let outpath = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&outpath)?;
        io::copy(&mut entry, &mut outfile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }
    }

    Ok(archive.len())
}
