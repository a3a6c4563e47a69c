use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, DetectionHub, IdentityProvider, ScriptedDetector, StaticIdentityProvider,
    UserInfoClient, UserInfoConfig,
};
use signs_core::model::{GreetingId, Identity, MediaProxy};
use signs_core::{CATALOG, catalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

/// Desktop sign-language lessons.
#[derive(Parser, Debug)]
#[command(name = "signs")]
#[command(version)]
struct Args {
    /// OpenID Connect issuer whose /userinfo endpoint names the signed-in user
    #[arg(long, env = "SIGNS_AUTH_ISSUER")]
    issuer: Option<String>,

    /// Bearer token sent to the issuer
    #[arg(long, env = "SIGNS_AUTH_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Skip the issuer and sign in with this nickname
    #[arg(long, env = "SIGNS_AS_USER")]
    as_user: Option<String>,

    /// Origin serving /api/proxy-video
    #[arg(long, env = "SIGNS_MEDIA_BASE", default_value = "http://localhost:3000")]
    media_base: String,

    /// Comma-separated labels replayed as detections, e.g. "hello,goodbye"
    #[arg(long)]
    detect_script: Option<String>,

    /// Pause between scripted detections
    #[arg(long, default_value_t = 1500)]
    detect_interval_ms: u64,

    /// Lesson tab to open on launch (hello, goodbye, please, thankyou)
    #[arg(long)]
    lesson: Option<String>,
}

struct DesktopApp {
    services: AppServices,
    lesson_on_launch: Option<GreetingId>,
}

impl UiApp for DesktopApp {
    fn identity(&self) -> Arc<dyn IdentityProvider> {
        self.services.identity()
    }

    fn detections(&self) -> DetectionHub {
        self.services.detections()
    }

    fn media(&self) -> MediaProxy {
        self.services.media()
    }

    fn lesson_on_launch(&self) -> Option<GreetingId> {
        self.lesson_on_launch
    }
}

/// Checks everything that can be wrong before a window opens.
fn preflight(args: &Args) -> Result<Option<GreetingId>, signs_core::Error> {
    catalog::validate(&CATALOG)?;
    MediaProxy::new(&args.media_base)?;
    let lesson = args
        .lesson
        .as_deref()
        .map(str::parse::<GreetingId>)
        .transpose()?;
    Ok(lesson)
}

fn identity_provider(args: &Args) -> Arc<dyn IdentityProvider> {
    if let Some(nickname) = args.as_user.as_deref() {
        tracing::info!(%nickname, "using a fixed identity");
        return Arc::new(StaticIdentityProvider::signed_in(Identity::with_nickname(
            nickname,
        )));
    }

    let config = args
        .issuer
        .clone()
        .zip(args.access_token.clone())
        .and_then(|(issuer, token)| UserInfoConfig::new(issuer, token));
    match config {
        Some(config) => {
            tracing::info!(issuer = %config.issuer, "reading identity from userinfo");
            Arc::new(UserInfoClient::new(config))
        }
        None => {
            tracing::info!("no identity source configured; running signed out");
            Arc::new(StaticIdentityProvider::signed_out())
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let lesson_on_launch = preflight(&args)?;

    let detections = DetectionHub::default();
    if let Some(script) = args.detect_script.as_deref() {
        let detector =
            ScriptedDetector::parse(script, Duration::from_millis(args.detect_interval_ms));
        tracing::info!(labels = ?detector.labels(), "replaying scripted detections");
        // Runs for the lifetime of the process.
        let _detector = detector.spawn(detections.clone());
    }

    let services = AppServices::new(identity_provider(&args), detections, &args.media_base)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        lesson_on_launch,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Sign Lessons")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        // Binary edge: report once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
