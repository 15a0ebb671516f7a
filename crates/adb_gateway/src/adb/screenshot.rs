//! Screen capture to the device, to the host, or into memory

use super::gateway::AdbGateway;
use super::types::Screenshot;
use crate::error::{Error, Result};
use base64::{engine::general_purpose, Engine as _};
use tracing::{debug, warn};

impl AdbGateway {
    /// Save a PNG screenshot on the device at `device_path`
    pub async fn screencap_to_device(&self, device_path: &str) -> Result<String> {
        self.shell(&format!("screencap -p {}", device_path)).await
    }

    /// Save a PNG screenshot on the host at `host_path`.
    ///
    /// The `>` redirection is carried out by the host launcher.
    pub async fn screencap_to_host(&self, host_path: &str) -> Result<String> {
        self.shell(&format!("screencap -p > {}", host_path)).await
    }

    /// Capture the screen into memory via `exec-out`, which keeps the PNG
    /// stream free of line-ending translation
    pub async fn screenshot(&self) -> Result<Screenshot> {
        let png = self.run_bytes("exec-out screencap -p").await?;
        if png.is_empty() {
            warn!("screencap produced no data");
            return Err(Error::EmptyCapture);
        }
        debug!("Screenshot size: {} bytes", png.len());

        let img = image::load_from_memory(&png)?;
        let (width, height) = (img.width(), img.height());
        debug!("Screenshot dimensions: {}x{}", width, height);

        Ok(Screenshot {
            base64_data: general_purpose::STANDARD.encode(&png),
            width,
            height,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use crate::adb::fake_tool::FakeTool;
    use crate::error::Error;
    use base64::{engine::general_purpose, Engine as _};
    use image::{ImageBuffer, Rgb};
    use std::io::Cursor;

    #[tokio::test]
    async fn test_screenshot_decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("screen.png");
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(4, 3, Rgb([10, 20, 30]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        std::fs::write(&png_path, &buffer).unwrap();

        let fake = FakeTool::new(&format!("cat '{}'", png_path.display()));
        let shot = fake.gateway().screenshot().await.unwrap();

        assert_eq!((shot.width, shot.height), (4, 3));
        assert_eq!(
            general_purpose::STANDARD.decode(&shot.base64_data).unwrap(),
            buffer
        );
        assert_eq!(fake.calls(), vec!["exec-out screencap -p"]);
    }

    #[tokio::test]
    async fn test_screenshot_empty_capture() {
        let fake = FakeTool::new("");
        let err = fake.gateway().screenshot().await.unwrap_err();
        assert!(matches!(err, Error::EmptyCapture));
    }

    #[tokio::test]
    async fn test_screencap_to_host_redirects_on_host() {
        let dir = tempfile::tempdir().unwrap();
        let host_path = dir.path().join("cap.png");

        let fake = FakeTool::new("printf 'PNGDATA'");
        let out = fake
            .gateway()
            .screencap_to_host(&host_path.display().to_string())
            .await
            .unwrap();

        assert_eq!(out, "");
        assert_eq!(std::fs::read_to_string(&host_path).unwrap(), "PNGDATA");
        assert_eq!(fake.calls(), vec!["shell screencap -p"]);
    }

    #[tokio::test]
    async fn test_screencap_to_device() {
        let fake = FakeTool::new("");
        fake.gateway()
            .screencap_to_device("/sdcard/screen.png")
            .await
            .unwrap();
        assert_eq!(fake.calls(), vec!["shell screencap -p /sdcard/screen.png"]);
    }
}
