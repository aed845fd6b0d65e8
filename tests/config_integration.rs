// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::config::{self, AnimationConfig, BehaviorConfig, Config, LayoutConfig};
use iced_snackbar::domain::layout::ConstraintKind;
use iced_snackbar::domain::snackbar::{AnimationType, DisplayDuration, Phase};
use iced_snackbar::infrastructure::HeadlessHost;
use iced_snackbar::ui::snackbar::Banner;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn preset_saved_to_disk_styles_a_shown_banner() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let preset = Config {
        layout: LayoutConfig {
            margin_left: 12.0,
            margin_right: 12.0,
            margin_top: 20.0,
            corner_radius: 10.0,
            ..LayoutConfig::default()
        },
        animation: AnimationConfig {
            animation_type: AnimationType::SlideFromTopBackToTop,
            duration_ms: 200,
            ..AnimationConfig::default()
        },
        behavior: BehaviorConfig {
            duration: DisplayDuration::Middle,
            dismiss_on_swipe: true,
        },
        ..Config::default()
    };
    config::save_with_override(&preset, Some(dir.path().to_path_buf()))
        .expect("Failed to write preset");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, preset);

    let host = Rc::new(HeadlessHost::new(320.0));
    let mut banner = Banner::from_config(&loaded);
    banner.set_message("Styled");
    banner.show(host.clone());

    let view = banner.view_id();
    let constraints = host.constraints_of(view);
    assert_eq!(constraints.constant(ConstraintKind::Left), Some(12.0));
    assert_eq!(constraints.constant(ConstraintKind::Top), Some(20.0));
    assert!(constraints.is_active(ConstraintKind::Top));
    assert_eq!(host.corner_radius(view), 10.0);
    assert_eq!(
        host.transitions()[0].timing.duration,
        Duration::from_millis(200)
    );

    // Middle: three seconds on screen, then a 200 ms exit.
    host.advance_and_pump(Duration::from_millis(3000), &mut banner);
    assert_eq!(banner.phase(), Phase::Dismissing);
    host.advance_and_pump(Duration::from_millis(200), &mut banner);
    assert_eq!(banner.phase(), Phase::Idle);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn hand_written_preset_with_unknown_values_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("snackbar.toml"),
        "[behavior]\nduration = \"eventually\"\n",
    )
    .expect("Failed to write preset");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    let warning = warning.expect("invalid preset should produce a warning");
    assert!(warning.contains("eventually"));
}

#[test]
fn hand_written_partial_preset_keeps_other_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("snackbar.toml");
    std::fs::write(
        &path,
        "[animation]\ntype = \"fade-in-fade-out\"\n\n[appearance]\nfont_size = 0.0\n",
    )
    .expect("Failed to write preset");

    let loaded = config::load_from_path(&path).expect("Failed to load preset");
    assert_eq!(loaded.animation.animation_type, AnimationType::FadeInFadeOut);
    assert_eq!(loaded.layout, LayoutConfig::default());

    let banner = Banner::from_config(&loaded);
    assert_eq!(banner.animation_type(), AnimationType::FadeInFadeOut);
    // Font sizes are floored to a visible size.
    assert_eq!(banner.content().appearance.message_font.size, 1.0);
}
