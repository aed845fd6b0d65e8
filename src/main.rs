// SPDX-License-Identifier: MPL-2.0
//! `snackbar-demo`: plays one banner through its lifecycle on the headless
//! host and logs every step.
//!
//! ```text
//! snackbar-demo [--message TEXT] [--duration short|middle|long|forever]
//!               [--animation NAME] [--action TITLE] [--swipe up|down|left|right]
//!               [--width UNITS] [--config DIR]
//! ```
//!
//! Set `RUST_LOG=iced_snackbar=trace` for timer and transition detail.

use iced_snackbar::config;
use iced_snackbar::domain::snackbar::{
    ActionButton, AnimationType, DisplayDuration, SwipeDirection,
};
use iced_snackbar::infrastructure::HeadlessHost;
use iced_snackbar::ui::snackbar::Banner;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
snackbar-demo

USAGE:
  snackbar-demo [OPTIONS]

OPTIONS:
  --message TEXT      Banner message [default: Saved]
  --duration NAME     short, middle, long or forever
  --animation NAME    e.g. fade-in-fade-out, slide-from-top-back-to-top
  --action TITLE      Adds an action button and presses it after 500 ms
  --swipe DIR         Swipes the banner after 500 ms (up, down, left, right)
  --width UNITS       Main window width [default: 320]
  --config DIR        Directory holding snackbar.toml
  -h, --help          Prints this help
";

/// Simulated time after which the demo gives up waiting for dismissal.
const TIMELINE_LIMIT: Duration = Duration::from_secs(10);

/// Delay before a simulated gesture or press.
const INTERACTION_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Args {
    message: String,
    duration: Option<DisplayDuration>,
    animation: Option<AnimationType>,
    action: Option<String>,
    swipe: Option<SwipeDirection>,
    width: f32,
    config_dir: Option<PathBuf>,
}

fn parse_direction(s: &str) -> Result<SwipeDirection, String> {
    match s.to_lowercase().as_str() {
        "up" => Ok(SwipeDirection::Up),
        "down" => Ok(SwipeDirection::Down),
        "left" => Ok(SwipeDirection::Left),
        "right" => Ok(SwipeDirection::Right),
        other => Err(format!("invalid swipe direction: {}", other)),
    }
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        message: args
            .opt_value_from_str("--message")?
            .unwrap_or_else(|| "Saved".to_string()),
        duration: args.opt_value_from_fn("--duration", DisplayDuration::from_str)?,
        animation: args.opt_value_from_fn("--animation", AnimationType::from_str)?,
        action: args.opt_value_from_str("--action")?,
        swipe: args.opt_value_from_fn("--swipe", parse_direction)?,
        width: args.opt_value_from_str("--width")?.unwrap_or(320.0),
        config_dir: args.opt_value_from_str("--config")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(parsed))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_banner(args: &Args) -> Banner {
    let (preset, warning) = config::load_with_override(args.config_dir.clone());
    if let Some(warning) = warning {
        tracing::warn!(%warning, "using default style");
    }

    let mut banner = Banner::from_config(&preset);
    banner.set_message(args.message.clone());
    if let Some(duration) = args.duration {
        banner.set_duration(duration);
    }
    if let Some(animation) = args.animation {
        banner.set_animation_type(animation);
    }
    if args.swipe.is_some() {
        banner.set_dismiss_on_swipe(true);
    }
    if let Some(title) = &args.action {
        banner.set_action_title(title.clone());
        banner.set_action_callback(|banner| {
            tracing::info!(banner = banner.id().raw(), "action pressed");
        });
    }

    banner.set_tap_callback(|banner| tracing::info!(banner = banner.id().raw(), "tapped"));
    banner.set_swipe_callback(|banner, direction| {
        tracing::info!(banner = banner.id().raw(), ?direction, "swiped");
    });
    banner.set_dismiss_callback(|banner| {
        tracing::info!(banner = banner.id().raw(), "dismissed");
    });
    banner
}

fn run(args: &Args) -> iced_snackbar::error::Result<()> {
    let host = Rc::new(HeadlessHost::new(args.width));
    let mut banner = build_banner(args);

    banner.try_show(host.clone())?;
    tracing::info!(
        message = banner.message(),
        duration = %banner.duration(),
        animation = %banner.animation_type(),
        phase = ?banner.phase(),
        "showing"
    );

    host.advance_and_pump(INTERACTION_DELAY, &mut banner);
    if let Some(direction) = args.swipe {
        host.swipe(banner.id(), direction);
    } else if args.action.is_some() {
        host.press(banner.id(), ActionButton::Primary);
    }
    host.pump(&mut banner);

    let step = Duration::from_millis(100);
    while !banner.phase().is_idle() && host.now() < TIMELINE_LIMIT {
        host.advance_and_pump(step, &mut banner);
        banner.advance_indicator(step);
    }

    if banner.phase().is_idle() {
        tracing::info!(at = ?host.now(), "banner gone");
    } else {
        tracing::info!(
            phase = ?banner.phase(),
            busy = banner.elements().is_some_and(|e| e.is_busy()),
            "still on screen, dismissing"
        );
        banner.dismiss_now(false);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo failed");
            ExitCode::FAILURE
        }
    }
}
