//! Device properties, focus and display queries

use super::gateway::AdbGateway;
use super::parse;
use crate::error::Result;

impl AdbGateway {
    /// Android release, e.g. `13`
    pub async fn android_version(&self) -> Result<String> {
        self.shell("getprop ro.build.version.release").await
    }

    pub async fn sdk_version(&self) -> Result<String> {
        self.shell("getprop ro.build.version.sdk").await
    }

    pub async fn device_model(&self) -> Result<String> {
        self.shell("getprop ro.product.model").await
    }

    /// Field `part` of the focused `package/activity` component (0 = package,
    /// 1 = activity), or `""` when no focus line is found
    pub async fn current_foreground_component(&self, part: usize) -> Result<String> {
        let dump = self.shell("dumpsys window w").await?;
        Ok(parse::parse_focused_component(&dump, self.terminator(), part))
    }

    pub async fn current_package(&self) -> Result<String> {
        self.current_foreground_component(0).await
    }

    pub async fn current_activity(&self) -> Result<String> {
        self.current_foreground_component(1).await
    }

    /// `(width, height)` from the stable display size
    pub async fn screen_resolution(&self) -> Result<Option<(u32, u32)>> {
        let dump = self.shell("dumpsys display").await?;
        Ok(parse::parse_stable_display_size(&dump, self.terminator()))
    }

    /// A `dumpsys battery` field such as `level`, `status`, `health` or
    /// `temperature`; `"0"` if the field is absent.
    ///
    /// `status` codes: 1 unknown, 2 charging, 3 discharging, 4 not charging,
    /// 5 full.
    pub async fn battery_field(&self, field: &str) -> Result<String> {
        let dump = self.shell("dumpsys battery").await?;
        Ok(parse::parse_battery_field(&dump, self.terminator(), field))
    }

    pub async fn reboot(&self) -> Result<String> {
        self.run_on_device("reboot").await
    }

    /// Reboot into fastboot
    pub async fn reboot_bootloader(&self) -> Result<String> {
        self.run_on_device("reboot bootloader").await
    }

    /// Open `url` in the default browser
    pub async fn start_webpage(&self, url: &str) -> Result<String> {
        self.shell(&format!("am start -a android.intent.action.VIEW -d {}", url))
            .await
    }

    /// Dial and call `number`
    pub async fn call_phone(&self, number: &str) -> Result<String> {
        self.shell(&format!(
            "am start -a android.intent.action.CALL -d tel:{}",
            number
        ))
        .await
    }
}
