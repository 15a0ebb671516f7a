//! Server control, device discovery and network connections

use super::gateway::AdbGateway;
use super::parse;
use super::types::DeviceRecord;
use crate::error::Result;
use tracing::debug;

impl AdbGateway {
    /// Start the bridge server
    pub async fn start_server(&self) -> Result<String> {
        self.run("start-server").await
    }

    /// Stop the bridge server
    pub async fn kill_server(&self) -> Result<String> {
        self.run("kill-server").await
    }

    /// List attached devices as `(serial, state)` records
    pub async fn list_devices(&self) -> Result<Vec<DeviceRecord>> {
        let output = self.run("devices").await?;
        let devices = parse::parse_devices(&output, self.terminator());
        debug!("Found {} device(s)", devices.len());
        Ok(devices)
    }

    /// `offline`, `bootloader` or `device`
    pub async fn device_state(&self) -> Result<String> {
        self.run_on_device("get-state").await
    }

    pub async fn serial_number(&self) -> Result<String> {
        self.run_on_device("get-serialno").await
    }

    /// Make the device listen for network debugging on `port` (usually 5555)
    pub async fn set_listen_port(&self, port: u16) -> Result<String> {
        self.shell(&format!("tcpip {}", port)).await
    }

    /// Connect to a device over the network, e.g. `192.168.1.100:5555`
    pub async fn connect_device(&self, address: &str) -> Result<String> {
        self.run(&format!("connect {}", address)).await
    }

    pub async fn disconnect_device(&self, address: &str) -> Result<String> {
        self.run(&format!("disconnect {}", address)).await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use crate::adb::fake_tool::FakeTool;
    use crate::adb::DeviceRecord;

    #[tokio::test]
    async fn test_list_devices() {
        let fake = FakeTool::new(
            r#"printf 'List of devices attached\nserial1\tdevice\nserial2\toffline\n\n'"#,
        );
        let devices = fake.gateway().list_devices().await.unwrap();
        assert_eq!(
            devices,
            vec![
                DeviceRecord::new("serial1", "device"),
                DeviceRecord::new("serial2", "offline"),
            ]
        );
        assert_eq!(fake.calls(), vec!["devices"]);
    }

    #[tokio::test]
    async fn test_list_devices_ignores_selector() {
        let fake = FakeTool::new("");
        let mut gateway = fake.gateway();
        gateway.set_device_selector(Some("abc"));
        assert!(gateway.list_devices().await.unwrap().is_empty());
        assert_eq!(fake.calls(), vec!["devices"]);
    }

    #[tokio::test]
    async fn test_connection_commands() {
        let fake = FakeTool::new("");
        let mut gateway = fake.gateway();
        gateway.set_device_selector(Some("abc"));

        gateway.start_server().await.unwrap();
        gateway.connect_device("192.168.1.100:5555").await.unwrap();
        gateway.set_listen_port(5555).await.unwrap();
        gateway.device_state().await.unwrap();
        gateway.serial_number().await.unwrap();
        gateway.disconnect_device("192.168.1.100:5555").await.unwrap();
        gateway.kill_server().await.unwrap();

        assert_eq!(
            fake.calls(),
            vec![
                "start-server",
                "connect 192.168.1.100:5555",
                "-s abc shell tcpip 5555",
                "-s abc get-state",
                "-s abc get-serialno",
                "disconnect 192.168.1.100:5555",
                "kill-server",
            ]
        );
    }
}
