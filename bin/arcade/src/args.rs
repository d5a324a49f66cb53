use clap::Parser;
use rps_core::*;
use rps_gameplay::TimerConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Gesture rock-paper-scissors over recorded hand-tracking frames.
///
/// Frames are JSON objects, one per line:
/// {"t": 0.0, "hands": [[[x, y, z], ...21 points]], "start": false, "quit": false}
#[derive(Debug, Parser)]
#[command(name = "arcade")]
pub struct Args {
    /// JSON Lines frame file; `-` or nothing reads stdin.
    #[arg(long)]
    pub replay: Option<PathBuf>,
    /// Seed the computer's moves for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Countdown steps before the reveal.
    #[arg(long, default_value_t = COUNTDOWN)]
    pub countdown: Countdown,
    /// Milliseconds per countdown step.
    #[arg(long, default_value_t = COUNTDOWN_INTERVAL.as_millis() as u64)]
    pub interval_ms: u64,
    /// Milliseconds landmarks stay drawn after a round resolves.
    #[arg(long, default_value_t = OVERLAY_WINDOW.as_millis() as u64)]
    pub overlay_ms: u64,
    /// Emit every render as one JSON line instead of colored text.
    #[arg(long)]
    pub json: bool,
    /// Do not initialize logging.
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    pub fn config(&self) -> TimerConfig {
        TimerConfig {
            countdown: self.countdown,
            interval: Duration::from_millis(self.interval_ms),
            overlay: Duration::from_millis(self.overlay_ms),
        }
    }
    /// Replay path, or `None` for stdin.
    pub fn source(&self) -> Option<&PathBuf> {
        self.replay.as_ref().filter(|p| p.as_os_str() != "-")
    }
    /// Terminal and file logging would interleave with JSON on stdout.
    pub fn logging(&self) -> bool {
        !self.quiet && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_core_constants() {
        let args = Args::try_parse_from(["arcade"]).unwrap();
        assert_eq!(args.config(), TimerConfig::default());
        assert!(args.source().is_none());
        assert!(args.logging());
    }

    #[test]
    fn dash_means_stdin() {
        let args = Args::try_parse_from(["arcade", "--replay", "-"]).unwrap();
        assert!(args.source().is_none());
        let args = Args::try_parse_from(["arcade", "--replay", "demos/session.jsonl"]).unwrap();
        assert_eq!(args.source(), Some(&PathBuf::from("demos/session.jsonl")));
    }

    #[test]
    fn overrides_timing() {
        let args = Args::try_parse_from([
            "arcade",
            "--countdown",
            "5",
            "--interval-ms",
            "250",
            "--overlay-ms",
            "0",
            "--seed",
            "9",
            "--json",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(config.countdown, 5);
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.overlay, Duration::ZERO);
        assert_eq!(args.seed, Some(9));
        assert!(!args.logging());
    }
}
