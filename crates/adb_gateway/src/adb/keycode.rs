//! Android key codes by name
//!
//! See <https://developer.android.com/reference/android/view/KeyEvent>.

use phf::phf_map;

pub const HOME: u32 = 3;
pub const BACK: u32 = 4;
pub const CALL: u32 = 5;
pub const ENDCALL: u32 = 6;
pub const VOLUME_UP: u32 = 24;
pub const VOLUME_DOWN: u32 = 25;
pub const POWER: u32 = 26;
pub const CAMERA: u32 = 27;
pub const ENTER: u32 = 66;
pub const DEL: u32 = 67;
pub const MENU: u32 = 82;
pub const APP_SWITCH: u32 = 187;

/// Names accepted by [`lookup`], without the `KEYCODE_` prefix
pub static KEYCODES: phf::Map<&'static str, u32> = phf_map! {
    "HOME" => HOME,
    "BACK" => BACK,
    "CALL" => CALL,
    "ENDCALL" => ENDCALL,
    "DPAD_UP" => 19,
    "DPAD_DOWN" => 20,
    "DPAD_LEFT" => 21,
    "DPAD_RIGHT" => 22,
    "DPAD_CENTER" => 23,
    "VOLUME_UP" => VOLUME_UP,
    "VOLUME_DOWN" => VOLUME_DOWN,
    "POWER" => POWER,
    "CAMERA" => CAMERA,
    "TAB" => 61,
    "SPACE" => 62,
    "ENTER" => ENTER,
    "DEL" => DEL,
    "MENU" => MENU,
    "SEARCH" => 84,
    "MEDIA_PLAY_PAUSE" => 85,
    "PAGE_UP" => 92,
    "PAGE_DOWN" => 93,
    "ESCAPE" => 111,
    "FORWARD_DEL" => 112,
    "VOLUME_MUTE" => 164,
    "APP_SWITCH" => APP_SWITCH,
    "BRIGHTNESS_DOWN" => 220,
    "BRIGHTNESS_UP" => 221,
    "SLEEP" => 223,
    "WAKEUP" => 224,
};

/// Resolve a key given as a number, a bare name (`home`) or a full
/// `KEYCODE_HOME` name
pub fn lookup(key: &str) -> Option<u32> {
    let key = key.trim();
    if let Ok(code) = key.parse::<u32>() {
        return Some(code);
    }
    let upper = key.to_uppercase();
    let name = upper.strip_prefix("KEYCODE_").unwrap_or(&upper);
    KEYCODES.get(name).copied()
}
