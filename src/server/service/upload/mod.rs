//! Logo file storage.
//!
//! Logos are written to `<upload dir>/logos/` and referenced from the café record by their
//! public path `uploads/logos/<file>`, which the router serves from the same directory.

#[cfg(test)]
mod tests;

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::Utc;
use dioxus_logger::tracing;

use crate::server::{
    error::{upload::UploadError, Error},
    model::upload::LogoUpload,
};

/// Largest accepted logo, in bytes
pub const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

/// Prefix of the public path stored on the café record
pub const PUBLIC_LOGO_PREFIX: &str = "uploads/logos/";

const LOGO_SUBDIR: &str = "logos";
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];
const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Writes and removes uploaded café logos under the configured upload directory.
#[derive(Clone, Debug)]
pub struct LogoStore {
    dir: PathBuf,
}

impl LogoStore {
    /// Creates a new instance of [`LogoStore`] rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Upload directory served under `/uploads`
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn logo_dir(&self) -> PathBuf {
        self.dir.join(LOGO_SUBDIR)
    }

    /// Creates the logo directory if it does not exist yet.
    pub async fn ensure_dirs(&self) -> Result<(), Error> {
        tokio::fs::create_dir_all(self.logo_dir()).await?;

        Ok(())
    }

    /// Checks a logo's type and size without touching the filesystem.
    ///
    /// Both the file extension and the declared content type must name a JPEG, PNG or GIF.
    ///
    /// # Returns
    /// - `Ok(())` - Logo may be saved
    /// - `Err(UploadError::UnsupportedFileType)` - Extension or content type is not an accepted image
    /// - `Err(UploadError::FileTooLarge)` - Logo exceeds [`MAX_LOGO_BYTES`]
    pub fn check(&self, logo: &LogoUpload) -> Result<(), UploadError> {
        let extension = Path::new(&logo.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let extension_allowed = extension
            .as_deref()
            .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext));
        let content_type_allowed = logo
            .content_type
            .as_deref()
            .is_some_and(|content_type| ALLOWED_CONTENT_TYPES.contains(&content_type));

        if !extension_allowed || !content_type_allowed {
            return Err(UploadError::UnsupportedFileType);
        }

        if logo.data.len() > MAX_LOGO_BYTES {
            return Err(UploadError::FileTooLarge);
        }

        Ok(())
    }

    /// Checks and writes a logo, returning the public path to store on the café.
    ///
    /// The file is named `<unix millis>-<sanitised original name>`.
    ///
    /// # Returns
    /// - `Ok(String)` - Public path, e.g. `uploads/logos/1700000000000-logo.png`
    /// - `Err(Error::UploadError)` - Logo failed [`LogoStore::check`]
    /// - `Err(Error::IoError)` - Logo could not be written
    pub async fn save(&self, logo: LogoUpload) -> Result<String, Error> {
        self.check(&logo)?;
        self.ensure_dirs().await?;

        let file_name = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(&logo.file_name)
        );
        tokio::fs::write(self.logo_dir().join(&file_name), &logo.data).await?;

        tracing::debug!("Stored logo {}", file_name);

        Ok(format!("{}{}", PUBLIC_LOGO_PREFIX, file_name))
    }

    /// Removes a logo previously returned by [`LogoStore::save`].
    ///
    /// Paths outside the logo directory and files that no longer exist are ignored.
    pub async fn remove(&self, public_path: &str) -> Result<(), Error> {
        let Some(file_name) = public_path.strip_prefix(PUBLIC_LOGO_PREFIX) else {
            return Ok(());
        };
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.contains("..") {
            return Ok(());
        }

        match tokio::fs::remove_file(self.logo_dir().join(file_name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
fn sanitize_file_name(file_name: &str) -> String {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("logo");

    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
