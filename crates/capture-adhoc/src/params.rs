use adhoc_argparse::Seconds;
use serde::{Serialize, Serializer};
use std::fmt;

/// Validated input for one capture test. One variant per command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "test", rename_all = "kebab-case")]
pub enum TestParams {
    Alpha,
    FullscreenRate(FullscreenRate),
    FullscreenTransition(FullscreenTransition),
    WindowRate(WindowRate),
    CursorDisable(CursorDisable),
    DisplayAffinity(DisplayAffinity),
    HdrContent,
    PcInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FullscreenMode {
    /// `IDXGISwapChain::SetFullscreenState`
    SetFullscreenState,
    /// Borderless window covering the monitor.
    FullscreenWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionMode {
    AdHoc,
    Automated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AffinityMode {
    None,
    Monitor,
    ExcludeFromCapture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FullscreenRate {
    pub mode: FullscreenMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FullscreenTransition {
    pub mode: TransitionMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WindowRate {
    pub window_title: String,
    #[serde(rename = "delay-secs", serialize_with = "as_secs")]
    pub delay: Seconds,
    #[serde(rename = "duration-secs", serialize_with = "as_secs")]
    pub duration: Seconds,
}

impl Default for WindowRate {
    fn default() -> Self {
        Self {
            window_title: String::new(),
            delay: Seconds(0),
            duration: Seconds(10),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CursorDisable {
    pub monitor: bool,
    pub window: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayAffinity {
    pub mode: AffinityMode,
}

fn as_secs<S: Serializer>(secs: &Seconds, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(secs.get())
}

impl TestParams {
    /// The command name this test is selected by.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::FullscreenRate(_) => "fullscreen-rate",
            Self::FullscreenTransition(_) => "fullscreen-transition",
            Self::WindowRate(_) => "window-rate",
            Self::CursorDisable(_) => "cursor-disable",
            Self::DisplayAffinity(_) => "display-affinity",
            Self::HdrContent => "hdr-content",
            Self::PcInfo => "pc-info",
        }
    }
}

impl fmt::Display for TestParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            Self::Alpha | Self::HdrContent | Self::PcInfo => Ok(()),
            Self::FullscreenRate(p) => write!(f, " (mode: {:?})", p.mode),
            Self::FullscreenTransition(p) => write!(f, " (mode: {:?})", p.mode),
            Self::WindowRate(p) => write!(
                f,
                " (window: {:?}, delay: {}, duration: {})",
                p.window_title, p.delay, p.duration
            ),
            Self::CursorDisable(p) => {
                write!(f, " (monitor: {}, window: {})", p.monitor, p.window)
            }
            Self::DisplayAffinity(p) => write!(f, " (mode: {:?})", p.mode),
        }
    }
}
