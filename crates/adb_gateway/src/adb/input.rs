//! Input injection: taps, swipes, text and key events
//!
//! Each operation sends one `input` shell command and then waits
//! [`SETTLE_DELAY`] so the device UI can settle before the next call.

use super::gateway::AdbGateway;
use super::types::ScreenPoint;
use crate::error::Result;
use std::time::Duration;

/// Fixed pause after every input command
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

impl AdbGateway {
    async fn send_input(&self, args: &str) -> Result<()> {
        self.shell(&format!("input {}", args)).await?;
        tokio::time::sleep(SETTLE_DELAY).await;
        Ok(())
    }

    /// Tap at the specified coordinates
    pub async fn tap(&self, x: i32, y: i32) -> Result<()> {
        self.send_input(&format!("tap {} {}", x, y)).await
    }

    pub async fn tap_point(&self, point: ScreenPoint) -> Result<()> {
        self.tap(point.x, point.y).await
    }

    /// Swipe from start to end; `duration_ms` is honoured on Android 4.4+
    pub async fn swipe(
        &self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        duration_ms: Option<u32>,
    ) -> Result<()> {
        let mut args = format!("swipe {} {} {} {}", start_x, start_y, end_x, end_y);
        if let Some(ms) = duration_ms {
            args.push_str(&format!(" {}", ms));
        }
        self.send_input(&args).await
    }

    /// Press and hold, expressed as a zero-length swipe
    pub async fn long_press(&self, x: i32, y: i32, duration_ms: u32) -> Result<()> {
        self.swipe(x, y, x, y, Some(duration_ms)).await
    }

    /// Type `text`, passed to the device shell verbatim.
    ///
    /// The line is split by the host and device shells, so surrounding
    /// whitespace is lost; escape spaces as `%s` to type them.
    pub async fn send_text(&self, text: &str) -> Result<()> {
        self.send_input(&format!("text {}", text)).await
    }

    /// Send a key event by number or `KEYCODE_*` name
    pub async fn key_event(&self, code: &str) -> Result<()> {
        self.send_input(&format!("keyevent {}", code)).await
    }

    /// Long-press a key (Android 4.4+)
    pub async fn long_key_event(&self, code: &str) -> Result<()> {
        self.send_input(&format!("keyevent --longpress {}", code)).await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::adb::fake_tool::FakeTool;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tap_waits_settle_delay() {
        let fake = FakeTool::new("");
        let gateway = fake.gateway();

        let start = Instant::now();
        gateway.tap(540, 1200).await.unwrap();
        assert!(start.elapsed() >= SETTLE_DELAY);
        assert_eq!(fake.calls(), vec!["shell input tap 540 1200"]);
    }

    #[tokio::test]
    async fn test_send_text_drops_trailing_space() {
        let fake = FakeTool::new("");
        fake.gateway().send_text("a ").await.unwrap();
        assert_eq!(fake.calls(), vec!["shell input text a"]);
    }

    #[tokio::test]
    async fn test_input_commands() {
        let fake = FakeTool::new("");
        let mut gateway = fake.gateway();
        gateway.set_device_selector(Some("emulator-5554"));

        let start = Instant::now();
        gateway.swipe(800, 500, 200, 500, None).await.unwrap();
        gateway.swipe(800, 500, 200, 500, Some(300)).await.unwrap();
        gateway.long_press(10, 20, 1000).await.unwrap();
        gateway.send_text("hello").await.unwrap();
        gateway.key_event("3").await.unwrap();
        gateway.long_key_event("KEYCODE_POWER").await.unwrap();
        gateway.tap_point(ScreenPoint::new(1, 2)).await.unwrap();
        assert!(start.elapsed() >= SETTLE_DELAY * 7);

        assert_eq!(
            fake.calls(),
            vec![
                "-s emulator-5554 shell input swipe 800 500 200 500",
                "-s emulator-5554 shell input swipe 800 500 200 500 300",
                "-s emulator-5554 shell input swipe 10 20 10 20 1000",
                "-s emulator-5554 shell input text hello",
                "-s emulator-5554 shell input keyevent 3",
                "-s emulator-5554 shell input keyevent --longpress KEYCODE_POWER",
                "-s emulator-5554 shell input tap 1 2",
            ]
        );
    }
}
