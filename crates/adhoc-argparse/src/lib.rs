//! Declarative subcommand parsing and usage rendering.
//!
//! An [`Application`] holds named [`Command`]s, each with a list of
//! [`Argument`] flags. [`Application::parse`] selects a command by the first
//! token and resolves its flags from the rest into a [`Matches`].
//!
//! ```
//! use adhoc_argparse::{Application, Argument, Command};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Test {
//!     WindowRate,
//! }
//!
//! let app = Application::new("capture-adhoc").command(
//!     Command::new("window-rate", Test::WindowRate)
//!         .argument(Argument::new("--window").required(true).takes_value(true))
//!         .argument(Argument::new("--duration").takes_value(true).default_value("10")),
//! );
//!
//! let m = app.parse(&["window-rate", "--window", "MyApp"]).unwrap();
//! assert_eq!(*m.command(), Test::WindowRate);
//! assert_eq!(m.value_of("--window"), "MyApp");
//! assert_eq!(m.value_of("--duration"), "10");
//! ```
//!
//! The crate is dependency-free so the harness and any future platform
//! runner can share it.

mod application;
mod argument;
mod command;
mod error;
mod matches;
pub mod tokens;

pub use application::Application;
pub use argument::Argument;
pub use command::Command;
pub use error::{ParseError, ParseResult};
pub use matches::{Matches, Seconds, Validator};

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tag {
        WindowRate,
        FullscreenRate,
        Alpha,
    }

    fn app() -> Application<Tag> {
        Application::new("capture-adhoc")
            .version("0.1.0")
            .author("Capture Team")
            .about("Ad-hoc capture tests")
            .command(
                Command::new("window-rate", Tag::WindowRate)
                    .argument(
                        Argument::new("--window")
                            .alias("-w")
                            .required(true)
                            .takes_value(true)
                            .description("Window title"),
                    )
                    .argument(Argument::new("--delay").takes_value(true))
                    .argument(
                        Argument::new("--duration")
                            .takes_value(true)
                            .default_value("10"),
                    ),
            )
            .command(
                Command::new("fullscreen-rate", Tag::FullscreenRate)
                    .argument(Argument::new("--setfullscreenstate").alias("-sfs"))
                    .argument(Argument::new("--fullscreenwindow").alias("-fw")),
            )
            .command(Command::new("alpha", Tag::Alpha))
    }

    fn expect_invalid_input<T: std::fmt::Debug>(res: ParseResult<T>) -> String {
        match res {
            Err(ParseError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got: {other:?}"),
        }
    }

    #[test]
    fn empty_args_are_invalid_input() {
        let args: [&str; 0] = [];
        let msg = expect_invalid_input(app().parse(&args));
        assert!(msg.contains("no command"));
    }

    #[test]
    fn unknown_command_is_invalid_input() {
        let msg = expect_invalid_input(app().parse(&["unknown-command"]));
        assert!(msg.contains("unknown-command"));
    }

    #[test]
    fn window_rate_resolves_value_and_default() {
        let m = app().parse(&["window-rate", "--window", "MyApp"]).unwrap();
        assert_eq!(*m.command(), Tag::WindowRate);
        assert_eq!(m.value_of("--window"), "MyApp");
        assert_eq!(m.value_of("--duration"), "10");
        assert!(!m.is_present("--delay"));
        assert_eq!(m.value_of("--delay"), "");
    }

    #[test]
    fn required_value_missing_fails() {
        let msg = expect_invalid_input(app().parse(&["window-rate"]));
        assert!(msg.contains("--window"));
    }

    #[test]
    fn alias_and_name_give_same_value() {
        let by_alias = app().parse(&["window-rate", "-w", "v"]).unwrap();
        let by_name = app().parse(&["window-rate", "--window", "v"]).unwrap();
        assert_eq!(by_alias.value_of("--window"), "v");
        assert_eq!(by_alias, by_name);
    }

    #[test]
    fn canonical_name_wins_over_alias() {
        let m = app()
            .parse(&["window-rate", "-w", "from-alias", "--window", "from-name"])
            .unwrap();
        assert_eq!(m.value_of("--window"), "from-name");
    }

    #[test]
    fn empty_value_falls_back_to_alias() {
        let m = app()
            .parse(&["window-rate", "--window", "", "-w", "Notepad"])
            .unwrap();
        assert_eq!(m.value_of("--window"), "Notepad");
    }

    #[test]
    fn trailing_value_flag_counts_as_absent() {
        // Falls back to the default.
        let m = app()
            .parse(&["window-rate", "--window", "X", "--duration"])
            .unwrap();
        assert_eq!(m.value_of("--duration"), "10");

        // No default and required: the whole parse fails.
        expect_invalid_input(app().parse(&["window-rate", "--window"]));
    }

    #[test]
    fn first_occurrence_supplies_the_value() {
        let m = app()
            .parse(&["window-rate", "--window", "A", "--window", "B"])
            .unwrap();
        assert_eq!(m.value_of("--window"), "A");
    }

    #[test]
    fn value_is_next_token_even_if_it_looks_like_a_flag() {
        let m = app()
            .parse(&["window-rate", "--window", "--delay", "5"])
            .unwrap();
        assert_eq!(m.value_of("--window"), "--delay");
        assert_eq!(m.value_of("--delay"), "5");
    }

    #[test]
    fn boolean_flags_by_alias_and_absence() {
        let m = app().parse(&["fullscreen-rate", "-sfs"]).unwrap();
        assert_eq!(*m.command(), Tag::FullscreenRate);
        assert!(m.is_present("--setfullscreenstate"));
        assert!(!m.is_present("--fullscreenwindow"));
        assert_eq!(m.value_of("--setfullscreenstate"), "");
    }

    #[test]
    fn boolean_flag_matches_anywhere_in_stream() {
        let m = app()
            .parse(&["fullscreen-rate", "junk", "--fullscreenwindow", "more"])
            .unwrap();
        assert!(m.is_present("--fullscreenwindow"));
    }

    #[test]
    fn default_makes_required_vacuous() {
        let app = Application::new("t").command(
            Command::new("run", ()).argument(
                Argument::new("--mode")
                    .required(true)
                    .takes_value(true)
                    .default_value("auto"),
            ),
        );
        let m = app.parse(&["run"]).unwrap();
        assert_eq!(m.value_of("--mode"), "auto");
    }

    #[test]
    fn default_is_ignored_for_boolean_flags() {
        let app = Application::new("t").command(
            Command::new("run", ()).argument(Argument::new("--fast").default_value("yes")),
        );
        let m = app.parse(&["run"]).unwrap();
        assert!(!m.is_present("--fast"));
    }

    #[test]
    fn duplicate_command_names_take_first() {
        let app = Application::new("t")
            .command(Command::new("go", 1))
            .command(Command::new("go", 2));
        assert_eq!(*app.parse(&["go"]).unwrap().command(), 1);
    }

    #[test]
    fn parse_is_idempotent() {
        let app = app();
        let args = vec![
            "window-rate".to_string(),
            "--window".to_string(),
            "X".to_string(),
            "--delay".to_string(),
            "3".to_string(),
        ];
        assert_eq!(app.parse(&args).unwrap(), app.parse(&args).unwrap());
    }

    fn delay_matches(delay: &str) -> Matches<Tag> {
        app()
            .parse(&["window-rate", "--window", "X", "--delay", delay])
            .unwrap()
    }

    #[test]
    fn seconds_parse_and_reject_malformed() {
        let m = delay_matches("3");
        assert_eq!(m.seconds_of("--delay").unwrap(), Some(Seconds(3)));
        assert_eq!(m.seconds_of("--duration").unwrap(), Some(Seconds(10)));
        assert_eq!(m.int_of("--missing").unwrap(), None);

        let err = delay_matches("abc").seconds_of("--delay").unwrap_err();
        assert!(!err.is_invalid_input());
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                name: "--delay".to_string(),
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn numbers_read_leading_digits_like_stoi() {
        assert_eq!(delay_matches("10abc").int_of("--delay").unwrap(), Some(10));
        assert_eq!(delay_matches(" 7").int_of("--delay").unwrap(), Some(7));
        assert_eq!(delay_matches("\t+7s").int_of("--delay").unwrap(), Some(7));
        assert_eq!(delay_matches("007").int_of("--delay").unwrap(), Some(7));
        assert_eq!(
            delay_matches("-2147483648").int_of("--delay").unwrap(),
            Some(i32::MIN)
        );

        for bad in ["-", "+x", "x10", " ", "2147483648", "99999999999999999999999"] {
            assert!(
                matches!(
                    delay_matches(bad).int_of("--delay"),
                    Err(ParseError::InvalidNumber { .. })
                ),
                "expected InvalidNumber for {bad:?}"
            );
        }
    }

    #[test]
    fn negative_seconds_are_kept() {
        let secs = delay_matches("-4").seconds_of("--delay").unwrap().unwrap();
        assert_eq!(secs, Seconds(-4));
        assert_eq!(secs.get(), -4);
        assert_eq!(secs.to_string(), "-4s");
        assert_eq!(secs.to_duration(), Duration::ZERO);
        assert_eq!(Seconds(5).to_duration(), Duration::from_secs(5));
    }

    #[test]
    fn required_boolean_flag() {
        let app = Application::new("t").command(
            Command::new("run", ()).argument(Argument::new("--force").alias("-f").required(true)),
        );
        let msg = expect_invalid_input(app.parse(&["run"]));
        assert!(msg.contains("--force"));

        let m = app.parse(&["run", "-f"]).unwrap();
        assert!(m.is_present("--force"));
        assert_eq!(m.value_of("--force"), "");
    }

    #[test]
    fn usage_lists_commands_and_annotations() {
        let app = app();
        let _ = app.parse(&["unknown-command"]);
        let text = app.usage();
        assert!(text.starts_with("capture-adhoc usage:\n\t<command> <flags...>\n\n"));
        assert!(text.contains(
            "\twindow-rate\t--window (-w) <Window title, required> --delay <optional> --duration <optional, default 10>\n"
        ));
        assert!(text.contains("\tfullscreen-rate\t--setfullscreenstate (-sfs) <optional>"));
        assert!(text.contains("\talpha\n"));

        let mut sink = Vec::new();
        app.write_usage(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), text);
    }

    #[test]
    fn version_line_includes_metadata() {
        let text = app().version_line();
        assert_eq!(text, "capture-adhoc 0.1.0\nby Capture Team\nAd-hoc capture tests\n");
        assert_eq!(Application::<()>::new("bare").version_line(), "bare\n");
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Params {
        Window { title: String, delay: Seconds },
        Alpha,
    }

    fn validate_window(m: &Matches<Validator<Params>>) -> ParseResult<Params> {
        Ok(Params::Window {
            title: m.value_of("--window").to_string(),
            delay: m.seconds_of("--delay")?.unwrap_or_default(),
        })
    }

    fn validate_alpha(_: &Matches<Validator<Params>>) -> ParseResult<Params> {
        Ok(Params::Alpha)
    }

    fn validated_app() -> Application<Validator<Params>> {
        Application::new("t")
            .command(
                Command::new("window-rate", Validator::new(validate_window))
                    .argument(Argument::new("--window").required(true).takes_value(true))
                    .argument(Argument::new("--delay").takes_value(true)),
            )
            .command(Command::new("alpha", Validator::new(validate_alpha)))
    }

    #[test]
    fn validator_produces_typed_params() {
        let params = validated_app()
            .parse_validated(&["window-rate", "--window", "X", "--delay", "2"])
            .unwrap();
        assert_eq!(
            params,
            Params::Window {
                title: "X".to_string(),
                delay: Seconds(2),
            }
        );
        assert_eq!(validated_app().parse_validated(&["alpha"]).unwrap(), Params::Alpha);
    }

    #[test]
    fn validator_surfaces_number_errors() {
        let err = validated_app()
            .parse_validated(&["window-rate", "--window", "X", "--delay", "abc"])
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn token_helpers() {
        let argv = ["--a", "1", "-b"];
        assert!(tokens::flag_present(&argv, ["-b"]));
        assert!(tokens::flag_present(&argv, ["--x", "--a"]));
        assert!(tokens::flag_present(&argv, vec!["--c", "1"]));
        assert!(!tokens::flag_present(&argv, [""]));
        assert_eq!(tokens::flag_value(&argv, "--a"), Some("1"));
        assert_eq!(tokens::flag_value(&argv, "-b"), None);
        assert_eq!(tokens::flag_value(&argv, "--c"), None);
    }
}
