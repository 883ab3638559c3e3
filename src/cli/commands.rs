use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// The defaults for `-s` and `-v` are sentinels: leaving `-s` untouched prints
/// a usage hint instead of fetching, and an untouched `-v` resolves to the
/// current-version stage at fetch time.
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(about = "Fetch a secret from AWS Secrets Manager", long_about = None)]
pub struct Cli {
    #[arg(short = 's', long, default_value = "secret", help = "Secret to fetch")]
    pub secret: String,

    #[arg(
        short = 'v',
        long = "version-stage",
        default_value = "version",
        help = "Version stage or id of the secret to fetch"
    )]
    pub version: String,

    #[arg(short = 'r', long, default_value = "us-east-1", help = "AWS region")]
    pub region: String,

    #[arg(
        short = 'p',
        long,
        default_value = "default",
        help = "Credentials profile to use"
    )]
    pub profile: String,

    #[arg(
        short = 'k',
        long = "skip-profile",
        help = "Skip the profile check and use ambient credentials"
    )]
    pub skip_profile: bool,

    #[arg(
        short = 'c',
        long = "credentials-file",
        help = "Full path to the credentials file [default: <home>/.aws/credentials]"
    )]
    pub credentials_file: Option<PathBuf>,

    #[arg(
        short = 'e',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        help = "Print only the secret payload instead of the full JSON record"
    )]
    pub extract: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sf"]);
        assert_eq!(cli.secret, "secret");
        assert_eq!(cli.version, "version");
        assert_eq!(cli.region, "us-east-1");
        assert_eq!(cli.profile, "default");
        assert!(!cli.skip_profile);
        assert_eq!(cli.credentials_file, None);
        assert!(cli.extract);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "sf", "-s", "db-pass", "-v", "AWSPREVIOUS", "-r", "eu-west-1", "-p", "staging", "-k",
            "-c", "/tmp/creds", "-e", "false",
        ]);
        assert_eq!(cli.secret, "db-pass");
        assert_eq!(cli.version, "AWSPREVIOUS");
        assert_eq!(cli.region, "eu-west-1");
        assert_eq!(cli.profile, "staging");
        assert!(cli.skip_profile);
        assert_eq!(cli.credentials_file, Some(PathBuf::from("/tmp/creds")));
        assert!(!cli.extract);
    }

    #[test]
    fn test_extract_flag_without_value() {
        let cli = Cli::parse_from(["sf", "-s", "db-pass", "-e"]);
        assert!(cli.extract);
    }
}
