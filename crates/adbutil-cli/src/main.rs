//! adbutil - command-line front end for the adb gateway
//!
//! Usage:
//!     adbutil [OPTIONS] <COMMAND>
//!
//! Environment Variables:
//!     ADBUTIL_ADB_PATH: Path to the adb executable (default: adb)
//!     ADBUTIL_SERIAL: Device serial for multi-device setups
//!     ADBUTIL_ENCODING: Encoding of adb output (default: host dependent)
//!     ADBUTIL_LINE_TERMINATOR: lf, crlf or cr (default: host dependent)
//!     ADBUTIL_STRICT: Fail on spawn errors and non-zero exits

mod logging;

use adb_gateway::util::{self, parse_pairs};
use adb_gateway::{keycode, AdbGateway, LineTerminator, SessionConfig, TextEncoding};
use anyhow::{anyhow, Context, Result};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;

/// adbutil - drive Android devices through adb
#[derive(Parser, Debug)]
#[command(name = "adbutil", version)]
#[command(about = "adbutil - drive Android devices through adb")]
#[command(after_help = r#"Examples:
    # List connected devices
    adbutil devices

    # Target one device and tap the screen
    adbutil -s emulator-5554 tap 540 1200

    # Third-party packages as JSON
    adbutil --json packages --third-party

    # Read the battery level
    adbutil battery level

    # Press HOME
    adbutil key home
"#)]
struct Cli {
    /// Path to the adb executable [default: adb]
    #[arg(long = "adb", env = "ADBUTIL_ADB_PATH")]
    adb_path: Option<String>,

    /// Device serial
    #[arg(short = 's', long, env = "ADBUTIL_SERIAL")]
    serial: Option<String>,

    /// Encoding of adb output (utf-8, gbk, gb18030, ansi, ...)
    #[arg(long, env = "ADBUTIL_ENCODING")]
    encoding: Option<String>,

    /// Line terminator of adb output (lf, crlf or cr)
    #[arg(long, env = "ADBUTIL_LINE_TERMINATOR")]
    line_terminator: Option<LineTerminator>,

    /// Fail when adb cannot be spawned or exits non-zero
    #[arg(long, env = "ADBUTIL_STRICT", value_parser = BoolishValueParser::new())]
    strict: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that adb is installed and print its version
    Check,
    /// Print the effective session configuration
    Config,
    /// List attached devices
    Devices,
    /// List installed packages
    Packages {
        /// System packages only
        #[arg(long, conflicts_with_all = ["third_party", "matching"])]
        system: bool,
        /// Third-party packages only
        #[arg(long, conflicts_with = "matching")]
        third_party: bool,
        /// Packages whose name contains KEYWORD
        #[arg(long = "match", value_name = "KEYWORD")]
        matching: Option<String>,
    },
    /// Check whether a package is installed
    Installed { package: String },
    /// Install an APK
    Install { apk: String },
    /// Uninstall a package
    Uninstall { package: String },
    /// Clear a package's user data
    Clear { package: String },
    /// Start an activity (package/.Activity)
    Start { component: String },
    /// Print the focused package, or activity with --activity
    Focus {
        #[arg(long)]
        activity: bool,
    },
    /// Print the screen resolution
    Resolution,
    /// Print a battery field (level, status, health, temperature)
    Battery {
        #[arg(default_value = "level")]
        field: String,
    },
    /// Print model, Android version and SDK level
    Info,
    /// Tap a point
    Tap { x: i32, y: i32 },
    /// Swipe between two points
    Swipe {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        /// Duration in milliseconds
        #[arg(short = 'd', long)]
        duration: Option<u32>,
    },
    /// Long-press a point
    LongPress {
        x: i32,
        y: i32,
        /// Duration in milliseconds
        #[arg(short = 'd', long, default_value = "1000")]
        duration: u32,
    },
    /// Type text
    Text { text: String },
    /// Send a key event by number or name (home, back, KEYCODE_ENTER, ...)
    Key {
        key: String,
        /// Long-press the key
        #[arg(long)]
        long: bool,
    },
    /// Save a screenshot to FILE on the host, or on the device with --on-device
    Screencap {
        file: String,
        #[arg(long)]
        on_device: bool,
    },
    /// Run `adb shell ARGS...` on the selected device
    Shell {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
    /// Run `adb ARGS...` without a device selector
    Raw {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
    /// Print the MD5 of TEXT in the --encoding (default utf-8)
    Md5 { text: String },
    /// Replace text in FILE with OLD=NEW pairs, applied in order
    Replace {
        file: String,
        #[arg(required = true, value_name = "OLD=NEW")]
        pairs: Vec<String>,
    },
}

impl Cli {
    /// Environment first, then command-line flags on top
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = SessionConfig::from_env()?;
        if let Some(path) = &self.adb_path {
            config = config.with_tool_path(path.as_str());
        }
        if let Some(serial) = &self.serial {
            config = config.with_device_selector(serial.as_str());
        }
        if self.strict {
            config = config.with_strict(true);
        }
        if let Some(label) = &self.encoding {
            config = config.with_encoding(TextEncoding::for_label(label)?);
        }
        if let Some(terminator) = self.line_terminator {
            config = config.with_line_terminator(terminator);
        }
        Ok(config)
    }

    fn text_encoding(&self) -> Result<TextEncoding> {
        match &self.encoding {
            Some(label) => Ok(TextEncoding::for_label(label)?),
            None => Ok(TextEncoding::utf_8()),
        }
    }
}

/// Print a plain value, or wrap it as JSON
fn emit(json: bool, key: &str, value: &str) {
    if json {
        println!("{}", json!({ key: value }));
    } else {
        println!("{}", value);
    }
}

fn emit_list(json: bool, items: &[String]) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", item);
        }
    }
    Ok(())
}

async fn check_tool(gateway: &AdbGateway) -> Result<()> {
    let path = which::which(gateway.tool_path())
        .with_context(|| format!("{} is not installed or not in PATH", gateway.tool_path()))?;
    println!("Found {}", path.display());

    let version = gateway.run("version").await?;
    let first_line = version.lines().next().unwrap_or("unknown version");
    println!("{}", first_line);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.session_config()?;
    debug!("Session: {}", config);
    let gateway = AdbGateway::new(config);
    let json = cli.json;

    match &cli.command {
        Commands::Check => check_tool(&gateway).await?,
        Commands::Config => println!("{}", serde_json::to_string_pretty(gateway.config())?),
        Commands::Devices => {
            let devices = gateway.list_devices().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&devices)?);
            } else if devices.is_empty() {
                println!("No devices connected");
            } else {
                for device in devices {
                    println!("{}\t{}", device.serial, device.state);
                }
            }
        }
        Commands::Packages {
            system,
            third_party,
            matching,
        } => {
            let packages = if *system {
                gateway.system_packages().await?
            } else if *third_party {
                gateway.third_party_packages().await?
            } else if let Some(keyword) = matching {
                gateway.match_packages(keyword).await?
            } else {
                gateway.list_packages("").await?
            };
            emit_list(json, &packages)?;
        }
        Commands::Installed { package } => {
            let installed = gateway.is_installed(package).await?;
            if json {
                println!("{}", json!({ "package": package, "installed": installed }));
            } else {
                println!("{}", installed);
            }
        }
        Commands::Install { apk } => emit(json, "output", gateway.install_app(apk).await?.trim()),
        Commands::Uninstall { package } => {
            emit(json, "output", gateway.uninstall_app(package).await?.trim())
        }
        Commands::Clear { package } => {
            emit(json, "output", gateway.clear_app_data(package).await?.trim())
        }
        Commands::Start { component } => {
            emit(json, "output", gateway.start_activity(component).await?.trim())
        }
        Commands::Focus { activity } => {
            let part = if *activity {
                gateway.current_activity().await?
            } else {
                gateway.current_package().await?
            };
            emit(json, if *activity { "activity" } else { "package" }, &part);
        }
        Commands::Resolution => match gateway.screen_resolution().await? {
            Some((width, height)) if json => {
                println!("{}", json!({ "width": width, "height": height }))
            }
            Some((width, height)) => println!("{}x{}", width, height),
            None => return Err(anyhow!("Could not read the screen resolution")),
        },
        Commands::Battery { field } => emit(json, field, &gateway.battery_field(field).await?),
        Commands::Info => {
            let model = gateway.device_model().await?;
            let release = gateway.android_version().await?;
            let sdk = gateway.sdk_version().await?;
            if json {
                println!(
                    "{}",
                    json!({
                        "model": model.trim(),
                        "android_version": release.trim(),
                        "sdk_version": sdk.trim(),
                    })
                );
            } else {
                println!("Model:   {}", model.trim());
                println!("Android: {}", release.trim());
                println!("SDK:     {}", sdk.trim());
            }
        }
        Commands::Tap { x, y } => gateway.tap(*x, *y).await?,
        Commands::Swipe {
            x1,
            y1,
            x2,
            y2,
            duration,
        } => gateway.swipe(*x1, *y1, *x2, *y2, *duration).await?,
        Commands::LongPress { x, y, duration } => gateway.long_press(*x, *y, *duration).await?,
        Commands::Text { text } => gateway.send_text(text).await?,
        Commands::Key { key, long } => {
            let code = keycode::lookup(key)
                .ok_or_else(|| anyhow!("Unknown key: {}", key))?
                .to_string();
            if *long {
                gateway.long_key_event(&code).await?;
            } else {
                gateway.key_event(&code).await?;
            }
        }
        Commands::Screencap { file, on_device } => {
            if *on_device {
                gateway.screencap_to_device(file).await?;
            } else {
                gateway.screencap_to_host(file).await?;
            }
        }
        Commands::Shell { args } => print!("{}", gateway.shell(&args.join(" ")).await?),
        Commands::Raw { args } => print!("{}", gateway.run(&args.join(" ")).await?),
        Commands::Md5 { text } => {
            let digest = util::md5_string(text, cli.text_encoding()?)?;
            emit(json, "md5", &digest);
        }
        Commands::Replace { file, pairs } => {
            let pairs = parse_pairs(pairs);
            if pairs.is_empty() {
                return Err(anyhow!("Expected at least one OLD=NEW pair"));
            }
            util::replace_text_in_file(file, pairs, cli.text_encoding()?)
                .with_context(|| format!("Failed to rewrite {}", file))?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    run(cli).await
}
