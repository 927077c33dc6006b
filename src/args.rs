pub mod cli_args {
    use crate::http::http::DEFAULT_TIMEOUT_SECS;
    use clap::Parser;
    use std::ffi::OsString;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Download per-country route data from bestbikingroads.com into a local
    /// directory. Countries whose file already exists and is not empty are skipped.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct CliArgs {
        /// Run with debug level logging
        #[arg(short, long)]
        pub debug: bool,

        /// Directory to save JSON files
        #[arg(long, default_value = "data", allow_hyphen_values = true)]
        pub out: PathBuf,

        /// Timeout in seconds for each HTTP request
        #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS,
              value_parser = clap::value_parser!(u64).range(1..))]
        pub timeout: u64,
    }

    impl CliArgs {
        pub fn get_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout)
        }
    }

    /// Accept the single dash `-out` spelling by rewriting it to `--out`.
    /// The token following an out flag is a value and is never rewritten.
    fn normalise_args<I>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut normalised = Vec::new();
        let mut is_value = false;

        for arg in args {
            if is_value {
                is_value = false;
                normalised.push(arg);
                continue;
            }

            let arg = match arg.to_str() {
                Some("-out") | Some("--out") => {
                    is_value = true;
                    OsString::from("--out")
                }
                Some(s) if s.starts_with("-out=") => OsString::from(format!("-{}", s)),
                _ => arg,
            };
            normalised.push(arg);
        }

        normalised
    }

    pub fn parse_cli_arg() -> CliArgs {
        CliArgs::parse_from(normalise_args(std::env::args_os()))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn parse(args: &[&str]) -> CliArgs {
            CliArgs::try_parse_from(normalise_args(args.iter().map(OsString::from))).unwrap()
        }

        #[test]
        fn test_defaults() {
            let args = parse(&["bbr-country-cache"]);
            assert_eq!(args.out, PathBuf::from("data"));
            assert!(!args.debug);
            assert_eq!(args.get_timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        }

        #[test]
        fn test_out_spellings() {
            for argv in [
                vec!["bbr-country-cache", "-out", "cache"],
                vec!["bbr-country-cache", "-out=cache"],
                vec!["bbr-country-cache", "--out", "cache"],
                vec!["bbr-country-cache", "--out=cache"],
            ] {
                assert_eq!(parse(&argv).out, PathBuf::from("cache"), "{:?}", argv);
            }
        }

        #[test]
        fn test_out_value_not_rewritten() {
            // Only flags are rewritten, a directory literally named -out is kept
            let args = parse(&["bbr-country-cache", "--out=-out", "-d"]);
            assert_eq!(args.out, PathBuf::from("-out"));
            assert!(args.debug);
        }

        #[test]
        fn test_out_value_after_flag_kept() {
            for argv in [
                vec!["bbr-country-cache", "--out", "-out"],
                vec!["bbr-country-cache", "-out", "-out", "-d"],
            ] {
                let args = parse(&argv);
                assert_eq!(args.out, PathBuf::from("-out"), "{:?}", argv);
            }
        }

        #[test]
        fn test_zero_timeout_rejected() {
            let argv = normalise_args(["bbr-country-cache", "-t", "0"].iter().map(OsString::from));
            assert!(CliArgs::try_parse_from(argv).is_err());
        }
    }
}
