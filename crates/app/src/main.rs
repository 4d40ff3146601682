use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{CourseProgressService, DirectoryConfig, HttpCourseDirectory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingApiKey,
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingApiKey => {
                write!(f, "an API key is required (--api-key or COURSEDESK_API_KEY)")
            }
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    course_progress: Arc<CourseProgressService>,
}

impl UiApp for DesktopApp {
    fn course_progress(&self) -> Arc<CourseProgressService> {
        Arc::clone(&self.course_progress)
    }
}

struct Args {
    api_url: String,
    api_key: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--api-key <key>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:54321");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSEDESK_API_URL, COURSEDESK_API_KEY");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var("COURSEDESK_API_URL")
            .unwrap_or_else(|_| "http://localhost:54321".into());
        let mut api_key = std::env::var("COURSEDESK_API_KEY").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = value;
                }
                "--api-key" => {
                    api_key = Some(require_value(args, "--api-key")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ArgsError::MissingApiKey)?;

        Ok(Self { api_url, api_key })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let directory = Arc::new(HttpCourseDirectory::new(DirectoryConfig {
        base_url: parsed.api_url,
        api_key: parsed.api_key,
    }));
    let course_progress = Arc::new(CourseProgressService::new(directory));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { course_progress });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Coursedesk")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,ui=info,services=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
