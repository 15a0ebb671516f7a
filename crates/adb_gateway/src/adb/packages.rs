//! Installed-package queries and app lifecycle

use super::gateway::AdbGateway;
use super::parse;
use crate::error::Result;

impl AdbGateway {
    /// `pm list packages <filter_args>`, reduced to bare package names
    pub async fn list_packages(&self, filter_args: &str) -> Result<Vec<String>> {
        let output = self
            .shell(&format!("pm list packages {}", filter_args))
            .await?;
        Ok(parse::parse_packages(&output, self.terminator()))
    }

    pub async fn system_packages(&self) -> Result<Vec<String>> {
        self.list_packages("-s").await
    }

    pub async fn third_party_packages(&self) -> Result<Vec<String>> {
        self.list_packages("-3").await
    }

    /// Packages whose name contains `keyword`
    pub async fn match_packages(&self, keyword: &str) -> Result<Vec<String>> {
        self.list_packages(keyword).await
    }

    /// True when any installed package name contains `package`.
    ///
    /// The match is a substring match, so `com.a` is reported installed when
    /// only `com.abc` is present.
    pub async fn is_installed(&self, package: &str) -> Result<bool> {
        Ok(!self.match_packages(package).await?.is_empty())
    }

    /// Install an APK from a host path
    pub async fn install_app(&self, apk_path: &str) -> Result<String> {
        self.run_on_device(&format!("install {}", apk_path)).await
    }

    pub async fn uninstall_app(&self, package: &str) -> Result<String> {
        self.run_on_device(&format!("uninstall {}", package)).await
    }

    /// Wipe the app's user data
    pub async fn clear_app_data(&self, package: &str) -> Result<String> {
        self.shell(&format!("pm clear {}", package)).await
    }

    /// Start an activity, e.g. `com.android.settings/.Settings`
    pub async fn start_activity(&self, component: &str) -> Result<String> {
        self.shell(&format!("am start -n {}", component)).await
    }

    /// Start `component` and wait for it, returning the launch timing report
    pub async fn app_start_total_time(&self, component: &str) -> Result<String> {
        self.shell(&format!("am start -W {}", component)).await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use crate::adb::fake_tool::FakeTool;

    const PM_SCRIPT: &str = r#"case "$*" in
  *"pm list packages com.a") printf 'package:com.a\n' ;;
  *"pm list packages"*) printf 'package:com.a\npackage:com.b\n' ;;
esac"#;

    #[tokio::test]
    async fn test_list_packages() {
        let fake = FakeTool::new(PM_SCRIPT);
        let gateway = fake.gateway();
        assert_eq!(gateway.third_party_packages().await.unwrap(), vec!["com.a", "com.b"]);
        assert_eq!(fake.calls(), vec!["shell pm list packages -3"]);
    }

    #[tokio::test]
    async fn test_is_installed() {
        let fake = FakeTool::new(PM_SCRIPT);
        assert!(fake.gateway().is_installed("com.a").await.unwrap());
        assert_eq!(fake.calls(), vec!["shell pm list packages com.a"]);
    }

    #[tokio::test]
    async fn test_is_installed_matches_substrings() {
        let fake = FakeTool::new(r#"printf 'package:com.abc\n'"#);
        assert!(fake.gateway().is_installed("com.a").await.unwrap());
    }

    #[tokio::test]
    async fn test_is_installed_false_on_empty_output() {
        let fake = FakeTool::new("");
        assert!(!fake.gateway().is_installed("com.missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_app_lifecycle_commands() {
        let fake = FakeTool::new("");
        let mut gateway = fake.gateway();
        gateway.set_device_selector(Some("dev1"));

        gateway.install_app("/tmp/app.apk").await.unwrap();
        gateway.start_activity("com.a/.Main").await.unwrap();
        gateway.app_start_total_time("com.a/.Main").await.unwrap();
        gateway.clear_app_data("com.a").await.unwrap();
        gateway.uninstall_app("com.a").await.unwrap();

        assert_eq!(
            fake.calls(),
            vec![
                "-s dev1 install /tmp/app.apk",
                "-s dev1 shell am start -n com.a/.Main",
                "-s dev1 shell am start -W com.a/.Main",
                "-s dev1 shell pm clear com.a",
                "-s dev1 uninstall com.a",
            ]
        );
    }
}
