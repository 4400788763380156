use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub splash: SplashConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Splash intro timing and physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplashConfig {
    /// Text revealed by the typewriter/decrypt animation.
    #[serde(default = "default_target_text")]
    pub target_text: String,
    /// Minimum gap between two revealed characters (default: 100).
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,
    /// Frames a character scrambles before it resolves (default: 20).
    #[serde(default = "default_resolve_threshold_frames")]
    pub resolve_threshold_frames: u32,
    /// Wall-clock pause between full reveal and the dismiss wipe (default: 600).
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Wipe radius targeted once the splash settles, in percent (default: 150).
    #[serde(default = "default_wipe_open_radius")]
    pub wipe_open_radius: f64,
    /// Spring stiffness of the wipe radius (default: 0.015).
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Spring damping of the wipe radius, in (0, 1) (default: 0.85).
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Radius change per unit of scroll delta (default: 0.3).
    #[serde(default = "default_scroll_sensitivity")]
    pub scroll_sensitivity: f64,
}

/// Page transition timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Duration of the exit/enter slide (default: 500).
    #[serde(default = "default_transition_duration_ms")]
    pub duration_ms: u64,
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frame pacing interval for animations (default: 16).
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Scroll delta reported for one mouse wheel notch (default: 100).
    #[serde(default = "default_wheel_notch_delta")]
    pub wheel_notch_delta: f64,
}

fn default_target_text() -> String {
    "Adon Paul Tomy".to_string()
}

fn default_reveal_interval_ms() -> u64 {
    100
}

fn default_resolve_threshold_frames() -> u32 {
    20
}

fn default_settle_delay_ms() -> u64 {
    600
}

fn default_wipe_open_radius() -> f64 {
    150.0
}

fn default_stiffness() -> f64 {
    0.015
}

fn default_damping() -> f64 {
    0.85
}

fn default_scroll_sensitivity() -> f64 {
    0.3
}

fn default_transition_duration_ms() -> u64 {
    500
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_wheel_notch_delta() -> f64 {
    100.0
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            target_text: default_target_text(),
            reveal_interval_ms: default_reveal_interval_ms(),
            resolve_threshold_frames: default_resolve_threshold_frames(),
            settle_delay_ms: default_settle_delay_ms(),
            wipe_open_radius: default_wipe_open_radius(),
            stiffness: default_stiffness(),
            damping: default_damping(),
            scroll_sensitivity: default_scroll_sensitivity(),
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_transition_duration_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            wheel_notch_delta: default_wheel_notch_delta(),
        }
    }
}
