use image::RgbaImage;
use reqwest::Client;
use std::time::Duration;

use crate::api::error::ImageError;

/// Longest edge, in pixels, kept after decoding.
///
/// Panels draw at most a few dozen cells wide, so anything larger is wasted.
pub const MAX_IMAGE_EDGE: u32 = 128;

/// Upper bound on a single image download, body included.
///
/// Unlike the generation call, an image fetch is cheap to give up on: the slot
/// just keeps its placeholder.
pub const IMAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches and decodes panel images.
#[derive(Clone)]
pub struct ImageLoader {
    client: Client,
    timeout: Duration,
}

impl ImageLoader {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: IMAGE_FETCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn fetch(&self, url: &str) -> Result<RgbaImage, ImageError> {
        let fetch_err = |source| ImageError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(fetch_err)?;
        decode(url, &bytes)
    }
}

/// Decodes `bytes` and shrinks the result to fit [`MAX_IMAGE_EDGE`].
pub(crate) fn decode(url: &str, bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    let image = image::load_from_memory(bytes).map_err(|source| ImageError::Decode {
        url: url.to_string(),
        source,
    })?;

    let image = if image.width() > MAX_IMAGE_EDGE || image.height() > MAX_IMAGE_EDGE {
        image.thumbnail(MAX_IMAGE_EDGE, MAX_IMAGE_EDGE)
    } else {
        image
    };
    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 10, 10])));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn small_images_keep_their_size() {
        let image = decode("mem://small", &png(8, 6)).unwrap();
        assert_eq!(image.dimensions(), (8, 6));
        assert_eq!(image.get_pixel(0, 0).0, [200, 10, 10, 255]);
    }

    #[test]
    fn large_images_are_shrunk() {
        let image = decode("mem://large", &png(1024, 1024)).unwrap();
        assert!(image.width() <= MAX_IMAGE_EDGE);
        assert!(image.height() <= MAX_IMAGE_EDGE);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode("mem://bad", b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }
}
