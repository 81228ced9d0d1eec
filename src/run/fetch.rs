//! Archive download

use std::fs::{self, File};
use std::io;
use std::path::Path;

use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Download `url` to `dest`, creating or overwriting the file
///
/// The response body is streamed straight to disk. No retries and no
/// integrity checks are performed on the result; a non-success status is
/// the only failure beyond transport and filesystem errors.
pub fn download(url: &str, dest: &Path) -> Result<u64> {
    let client = Client::builder().build()?;
    let mut response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(dest)?;
    let written = io::copy(&mut response, &mut file)?;
    log::debug!("wrote {} bytes to {}", written, dest.display());

    Ok(written)
}
