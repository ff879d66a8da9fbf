//! Story media links: YouTube detection and image-host link fixes.
//!
//! Volunteers paste whatever the share button gave them into the `ImageUrl`
//! column: plain image links, YouTube URLs in any of their shapes, or a whole
//! `<iframe>` embed snippet. These helpers turn that into something displayable.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::ImpactStory;

static IFRAME_SRC: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r#"src="([^"]+)""#).ok());

static YOUTUBE_ID: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").ok()
});

/// Extract an 11-character YouTube video id from a URL or embed snippet.
pub fn youtube_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut url = input;
    if input.contains("<iframe") && input.contains("src=\"") {
        let src_re = IFRAME_SRC.as_ref()?;
        if let Some(src) = src_re.captures(input).and_then(|c| c.get(1)) {
            url = src.as_str();
        }
    }

    let id = YOUTUBE_ID.as_ref()?.captures(url)?.get(2)?.as_str();
    (id.len() == 11).then(|| id.to_string())
}

/// Rewrite image-host viewer pages to direct image links.
///
/// freeimage.host share links (`https://freeimage.host/i/<id>`) point at an HTML
/// viewer; the raw file lives at `https://iili.io/<id>.jpg`.
pub fn resolve_image_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if url.contains("freeimage.host/i/") {
        if let Some(id) = url.split('/').filter(|p| !p.is_empty()).last() {
            return Some(format!("https://iili.io/{id}.jpg"));
        }
    }

    Some(url.to_string())
}

/// What a story card should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoryMedia {
    Video {
        id: String,
        /// Max-resolution thumbnail; not every upload has one
        thumbnail: String,
        fallback_thumbnail: String,
    },
    Image {
        url: String,
    },
    None,
}

impl StoryMedia {
    pub fn for_story(story: &ImpactStory) -> Self {
        let raw = story.image_url.as_deref().unwrap_or("");

        if let Some(id) = youtube_id(raw) {
            return StoryMedia::Video {
                thumbnail: format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"),
                fallback_thumbnail: format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"),
                id,
            };
        }

        match resolve_image_url(raw) {
            Some(url) => StoryMedia::Image { url },
            None => StoryMedia::None,
        }
    }

    /// Link to open the media itself, for text output.
    pub fn link(&self) -> Option<String> {
        match self {
            StoryMedia::Video { id, .. } => Some(format!("https://www.youtube.com/watch?v={id}")),
            StoryMedia::Image { url } => Some(url.clone()),
            StoryMedia::None => None,
        }
    }
}
