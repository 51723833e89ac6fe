use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::ImageFormat;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config;
use crate::services::ServiceError;

const ACCEPTED_TYPES: &[&str] = &["image/jpg", "image/jpeg", "image/png", "image/gif"];

/// Resize an uploaded staff photo to fit the configured bounds, re-encode as
/// PNG under a uuid filename, and return the relative URL the frontend stores.
pub async fn save_staff_image(
    bytes: Vec<u8>,
    content_type: Option<&str>,
) -> Result<String, ServiceError> {
    if bytes.is_empty() {
        return Err(ServiceError::bad_request("No file uploaded"));
    }

    match content_type {
        Some(mime) if ACCEPTED_TYPES.contains(&mime) => {}
        _ => return Err(ServiceError::bad_request("Unsupported file type")),
    }

    let upload = &config::config().upload;
    tokio::fs::create_dir_all(&upload.staff_image_dir).await?;

    let filename = format!("{}.png", Uuid::new_v4());
    let filepath = Path::new(&upload.staff_image_dir).join(&filename);

    let (max_w, max_h) = (upload.max_image_width, upload.max_image_height);

    // Decoding and re-encoding are CPU-bound; keep them off the async workers
    let path_for_task = filepath.clone();
    tokio::task::spawn_blocking(move || write_resized(&bytes, &path_for_task, max_w, max_h))
        .await
        .map_err(|e| ServiceError::Image(e.to_string()))??;

    info!("Stored staff image {}", filepath.display());
    Ok(format!("/uploads/staff/{}", filename))
}

fn write_resized(bytes: &[u8], path: &PathBuf, max_w: u32, max_h: u32) -> Result<(), ServiceError> {
    let img = image::load_from_memory(bytes).map_err(|e| ServiceError::Image(e.to_string()))?;

    // Fit within bounds, keep aspect ratio, never enlarge
    let resized = if img.width() > max_w || img.height() > max_h {
        img.resize(max_w, max_h, FilterType::Lanczos3)
    } else {
        img
    };

    resized
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ServiceError::Image(e.to_string()))
}

/// Remove a previously stored staff image. Missing files and filesystem
/// errors are logged and swallowed; image cleanup never fails a request.
pub async fn delete_staff_image(image_url: &str) {
    if image_url.is_empty() {
        return;
    }

    let Some(filename) = Path::new(image_url).file_name() else {
        return;
    };

    let dir = &config::config().upload.staff_image_dir;
    let filepath = Path::new(dir).join(filename);

    match tokio::fs::remove_file(&filepath).await {
        Ok(()) => info!("Deleted file: {}", filepath.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to delete file {}: {}", filepath.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_empty_uploads() {
        let err = save_staff_image(Vec::new(), Some("image/png")).await.unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));
    }

    #[tokio::test]
    async fn rejects_unsupported_types() {
        let err = save_staff_image(vec![1, 2, 3], Some("application/pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));

        let err = save_staff_image(vec![1, 2, 3], None).await.unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));
    }

    #[tokio::test]
    async fn delete_tolerates_missing_files() {
        // Must not panic or error for a file that was never stored
        delete_staff_image("/uploads/staff/does-not-exist.png").await;
        delete_staff_image("").await;
    }
}
