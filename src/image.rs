//! Product image candidate filtering.

use crate::constants::{
    HIGH_RES_TOKEN, HIRES_ATTRIBUTE, IMAGE_ASSET_SEGMENT, INLINE_IMAGE_MARKER, LOW_RES_TOKEN,
};
use crate::document::DomNode;

/// Keep a candidate image URL only if it points at a product asset.
///
/// Accepted candidates reference the image asset path or carry an inline
/// base64 payload. Thumbnail size tokens are upgraded to the larger variant.
pub fn normalize_image_url(candidate: &str) -> Option<String> {
    if candidate.contains(IMAGE_ASSET_SEGMENT) || candidate.contains(INLINE_IMAGE_MARKER) {
        Some(candidate.replace(LOW_RES_TOKEN, HIGH_RES_TOKEN))
    } else {
        None
    }
}

/// Collect product images below `region` in document order.
///
/// `src` wins when the attribute exists, even empty; the high resolution
/// attribute is only consulted when `src` is missing.
pub fn collect_images<N: DomNode>(region: &N) -> Vec<String> {
    region
        .descendants_by_tag("img")
        .iter()
        .filter_map(|img| {
            img.attribute("src")
                .or_else(|| img.attribute(HIRES_ATTRIBUTE))
        })
        .filter_map(|candidate| normalize_image_url(&candidate))
        .collect()
}
