//! File-extension based media type guessing for NPF media blocks.

/// Guesses an image MIME type from a URL, falling back to the bare `image` type.
pub fn guess_image_mime(url: &str) -> &'static str {
    let url = url.to_lowercase();
    if url.ends_with(".jpg") || url.ends_with(".jpeg") {
        "image/jpg"
    } else if url.ends_with(".png") {
        "image/png"
    } else if url.ends_with(".gif") {
        "image/gif"
    } else {
        "image"
    }
}

/// Guesses a video MIME type from a URL.
pub fn guess_video_mime(url: &str) -> Option<&'static str> {
    let url = url.to_lowercase();
    if url.ends_with(".mp4") {
        Some("video/mp4")
    } else if url.ends_with(".webp") {
        Some("video/webp")
    } else if url.ends_with(".ogg") {
        Some("video/ogg")
    } else {
        None
    }
}
