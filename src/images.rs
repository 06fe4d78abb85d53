use crate::service::ServiceError;

const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos/seed";

pub fn placeholder_image_url(seed: &str) -> String {
    format!(
        "{PLACEHOLDER_BASE_URL}/{}/800/450",
        urlencoding::encode(seed)
    )
}

/// Picks the banner image for a study pack. Never fails: anything but a
/// usable image becomes a placeholder keyed by the topic title.
pub fn resolve_topic_image(
    topic_title: &str,
    generated: Result<Option<String>, ServiceError>,
) -> String {
    match generated {
        Ok(Some(image)) if !image.trim().is_empty() => image,
        Ok(_) => {
            tracing::info!("no image generated for '{topic_title}', using placeholder");
            placeholder_image_url(topic_title)
        }
        Err(e) => {
            tracing::warn!("image generation failed for '{topic_title}': {e}");
            placeholder_image_url(topic_title)
        }
    }
}
