//! Command declarations for the harness and the validators that turn parsed
//! flags into [`TestParams`].

use adhoc_argparse::{Application, Argument, Command, Matches, ParseError, ParseResult, Validator};

use crate::params::{
    AffinityMode, CursorDisable, DisplayAffinity, FullscreenMode, FullscreenRate,
    FullscreenTransition, TestParams, TransitionMode, WindowRate,
};

pub type TestMatches = Matches<Validator<TestParams>>;

pub fn application() -> Application<Validator<TestParams>> {
    Application::new("capture-adhoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ad-hoc graphics capture tests. Results are verified by eye.")
        .command(Command::new("alpha", Validator::new(validate_alpha)))
        .command(
            Command::new("fullscreen-rate", Validator::new(validate_fullscreen_rate))
                .argument(
                    Argument::new("--setfullscreenstate")
                        .alias("-sfs")
                        .description("Use SetFullscreenState"),
                )
                .argument(
                    Argument::new("--fullscreenwindow")
                        .alias("-fw")
                        .description("Use a fullscreen window"),
                ),
        )
        .command(
            Command::new(
                "fullscreen-transition",
                Validator::new(validate_fullscreen_transition),
            )
            .argument(Argument::new("--adhoc").description("Toggle fullscreen by hand"))
            .argument(Argument::new("--automated").description("Toggle fullscreen on a timer")),
        )
        .command(
            Command::new("window-rate", Validator::new(validate_window_rate))
                .argument(
                    Argument::new("--window")
                        .alias("-w")
                        .required(true)
                        .takes_value(true)
                        .description("Window title"),
                )
                .argument(
                    Argument::new("--delay")
                        .alias("-d")
                        .takes_value(true)
                        .description("Seconds to wait before capturing"),
                )
                .argument(
                    Argument::new("--duration")
                        .takes_value(true)
                        .default_value("10")
                        .description("Seconds to capture for"),
                ),
        )
        .command(
            Command::new("cursor-disable", Validator::new(validate_cursor_disable))
                .argument(Argument::new("--monitor").description("Capture the primary monitor"))
                .argument(Argument::new("--window").description("Capture a test window")),
        )
        .command(
            Command::new("display-affinity", Validator::new(validate_display_affinity))
                .argument(Argument::new("--none").description("WDA_NONE"))
                .argument(Argument::new("--monitor").description("WDA_MONITOR"))
                .argument(Argument::new("--exclude").description("WDA_EXCLUDEFROMCAPTURE")),
        )
        .command(Command::new("hdr-content", Validator::new(validate_hdr_content)))
        .command(Command::new("pc-info", Validator::new(validate_pc_info)))
}

fn validate_alpha(_: &TestMatches) -> ParseResult<TestParams> {
    Ok(TestParams::Alpha)
}

fn validate_hdr_content(_: &TestMatches) -> ParseResult<TestParams> {
    Ok(TestParams::HdrContent)
}

fn validate_pc_info(_: &TestMatches) -> ParseResult<TestParams> {
    Ok(TestParams::PcInfo)
}

fn validate_fullscreen_rate(m: &TestMatches) -> ParseResult<TestParams> {
    let set_fullscreen_state = m.is_present("--setfullscreenstate");
    let fullscreen_window = m.is_present("--fullscreenwindow");
    if set_fullscreen_state == fullscreen_window {
        return Err(ParseError::invalid_input(
            "exactly one fullscreen mode required",
        ));
    }

    let mode = if set_fullscreen_state {
        FullscreenMode::SetFullscreenState
    } else {
        FullscreenMode::FullscreenWindow
    };
    Ok(TestParams::FullscreenRate(FullscreenRate { mode }))
}

fn validate_fullscreen_transition(m: &TestMatches) -> ParseResult<TestParams> {
    let ad_hoc = m.is_present("--adhoc");
    let automated = m.is_present("--automated");
    if ad_hoc == automated {
        return Err(ParseError::invalid_input("exactly one test mode required"));
    }

    let mode = if ad_hoc {
        TransitionMode::AdHoc
    } else {
        TransitionMode::Automated
    };
    Ok(TestParams::FullscreenTransition(FullscreenTransition { mode }))
}

fn validate_window_rate(m: &TestMatches) -> ParseResult<TestParams> {
    let mut params = WindowRate {
        window_title: m.value_of("--window").to_string(),
        ..Default::default()
    };
    if let Some(delay) = m.seconds_of("--delay")? {
        params.delay = delay;
    }
    if let Some(duration) = m.seconds_of("--duration")? {
        params.duration = duration;
    }
    Ok(TestParams::WindowRate(params))
}

fn validate_cursor_disable(m: &TestMatches) -> ParseResult<TestParams> {
    let monitor = m.is_present("--monitor");
    let window = m.is_present("--window");
    if !monitor && !window {
        return Err(ParseError::invalid_input("at least one capture target required"));
    }
    Ok(TestParams::CursorDisable(CursorDisable { monitor, window }))
}

fn validate_display_affinity(m: &TestMatches) -> ParseResult<TestParams> {
    let none = m.is_present("--none");
    let monitor = m.is_present("--monitor");
    let exclude = m.is_present("--exclude");
    if !none && !monitor && !exclude {
        return Err(ParseError::invalid_input("a display affinity mode is required"));
    }

    // Several flags at once: monitor beats exclude beats none.
    let mode = if monitor {
        AffinityMode::Monitor
    } else if exclude {
        AffinityMode::ExcludeFromCapture
    } else {
        AffinityMode::None
    };
    Ok(TestParams::DisplayAffinity(DisplayAffinity { mode }))
}
