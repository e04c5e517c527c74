use diesel::SqliteConnection;

use crate::data::models::Interview;
use crate::data::repositories::InterviewRepository;
use crate::features::media::ObjectStorage;

fn presign(storage: &dyn ObjectStorage, key: &str) -> Option<String> {
    storage
        .presigned_get_url(key)
        .map_err(|e| log::warn!("Failed to presign {}: {}", key, e))
        .ok()
}

/// Profile images may be external links (social login) or our own object keys
pub fn profile_image_url(storage: &dyn ObjectStorage, image: Option<&str>) -> Option<String> {
    let image = image?;
    if image.contains("http://") || image.contains("https://") {
        Some(image.to_string())
    } else {
        presign(storage, image)
    }
}

pub fn video_url(storage: &dyn ObjectStorage, interview: &Interview) -> Option<String> {
    if interview.is_video_converted {
        presign(storage, &interview.video_key)
    } else {
        None
    }
}

/// Thumbnails are generated asynchronously after upload. The first time one
/// shows up in storage the interview is flagged so later reads skip the check.
pub fn thumbnail_url(
    storage: &dyn ObjectStorage,
    conn: &mut SqliteConnection,
    interview: &mut Interview,
) -> Option<String> {
    if interview.is_thumbnail_converted {
        return presign(storage, &interview.thumbnail_key);
    }

    match storage.exists(&interview.thumbnail_key) {
        Ok(true) => {
            if let Err(e) = InterviewRepository::mark_thumbnail_converted(conn, interview.interview_id) {
                log::warn!(
                    "Failed to flag thumbnail of interview {}: {}",
                    interview.interview_id,
                    e
                );
            }
            interview.is_thumbnail_converted = true;
            presign(storage, &interview.thumbnail_key)
        }
        Ok(false) => None,
        Err(e) => {
            log::error!(
                "Thumbnail check failed for interview {}: {}",
                interview.interview_id,
                e
            );
            None
        }
    }
}
