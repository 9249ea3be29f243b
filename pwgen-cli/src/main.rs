mod clipboard;
mod error;
mod password;

use clap::Parser;
use log::debug;

use pwgen_lib::charset::CharacterClasses;
use pwgen_lib::request::{GeneratedOutput, GenerationRequest};
use pwgen_lib::strength::evaluate;

use crate::clipboard::copy_to_clipboard;
use crate::error::CliError;
use crate::password::request_password;

#[derive(Parser, Debug)]
#[command(version, about = "Generate random passwords and rate their strength")]
struct Args {
    /// Password length
    #[arg(
        short = 'n',
        long,
        value_name = "length",
        default_value = "16",
        allow_hyphen_values = true
    )]
    length: String,

    /// Include uppercase letters
    #[arg(short, long)]
    uppercase: bool,

    /// Include lowercase letters
    #[arg(short, long)]
    lowercase: bool,

    /// Include digits
    #[arg(short, long)]
    digits: bool,

    /// Include special characters !@#$%^&*()-_=+
    #[arg(short, long)]
    special: bool,

    /// Include every character class, the default when no class is given
    #[arg(short, long)]
    all: bool,

    /// Print the password instead of asterisks
    #[arg(long)]
    show: bool,

    /// Copy the password to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Rate an existing password instead of generating one
    #[arg(long)]
    check: bool,
}

impl Args {
    // No class flag at all means every class
    fn classes(&self) -> CharacterClasses {
        let selected = CharacterClasses {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            digits: self.digits,
            special: self.special,
        };

        if self.all || selected.is_empty() {
            return CharacterClasses::all();
        }

        selected
    }
}

fn check_password() -> Result<(), CliError> {
    let password = request_password("Password to check: ")?;
    let score = evaluate(&password);

    println!("Password Strength: {} ({}/6)", score.label(), score);

    Ok(())
}

fn generate(args: &Args) -> Result<GeneratedOutput, CliError> {
    let request = GenerationRequest::parse(args.length.as_str(), args.classes())?;
    debug!("request {:?}", request);

    Ok(request.run(args.show)?)
}

fn report(output: &GeneratedOutput) -> [String; 2] {
    [
        format!("Your Password: {}", output.display.as_str()),
        format!("Password Strength: {}", output.label),
    ]
}

fn run(args: Args) -> Result<(), CliError> {
    if args.check {
        return check_password();
    }

    let output = generate(&args)?;
    for line in report(&output) {
        println!("{}", line);
    }

    if args.copy {
        copy_to_clipboard(output.password.as_str())?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::{generate, report, run, Args};
    use crate::error::CliError;
    use clap::{CommandFactory, Parser};
    use pwgen_lib::charset::CharacterClasses;
    use pwgen_lib::error::RequestError;
    use pwgen_lib::strength::evaluate;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pwgen-cli"]).unwrap();
        assert_eq!(args.length, "16");
        assert_eq!(args.classes(), CharacterClasses::all());
        assert!(!args.show);
        assert!(!args.copy);
        assert!(!args.check);
    }

    #[test]
    fn test_classes() {
        let args = Args::try_parse_from(["pwgen-cli", "-u", "-d", "-n", "24"]).unwrap();
        assert_eq!(args.length, "24");
        assert_eq!(
            args.classes(),
            CharacterClasses {
                uppercase: true,
                lowercase: false,
                digits: true,
                special: false,
            }
        );

        let args = Args::try_parse_from(["pwgen-cli", "--all"]).unwrap();
        assert_eq!(args.classes(), CharacterClasses::all());
    }

    #[test]
    fn test_negative_length_is_a_value() {
        let args = Args::try_parse_from(["pwgen-cli", "--length", "-5", "-a"]).unwrap();
        assert_eq!(args.length, "-5");
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::try_parse_from(["pwgen-cli", "-lsc", "--show"]).unwrap();
        assert!(args.lowercase);
        assert!(args.special);
        assert!(args.copy);
        assert!(args.show);
        assert!(!args.uppercase);
    }

    #[test]
    fn test_generate_report_masked() {
        let args = Args::try_parse_from(["pwgen-cli", "-n", "12", "-l"]).unwrap();
        let output = generate(&args).unwrap();

        assert_eq!(output.password.len(), 12);
        assert!(output.password.chars().all(|c| c.is_ascii_lowercase()));

        let lines = report(&output);
        assert_eq!(lines[0], "Your Password: ************");
        assert_eq!(
            lines[1],
            format!("Password Strength: {}", evaluate(&output.password).label())
        );
    }

    #[test]
    fn test_generate_report_shown() {
        let args = Args::try_parse_from(["pwgen-cli", "-n", "20", "--show"]).unwrap();
        let output = generate(&args).unwrap();

        let lines = report(&output);
        assert_eq!(lines[0], format!("Your Password: {}", output.password.as_str()));
        assert!(output.password.chars().any(|c| c != '*'));
    }

    #[test]
    fn test_run_invalid_length() {
        let args = Args::try_parse_from(["pwgen-cli", "-n", "abc", "-a"]).unwrap();
        let error = run(args).unwrap_err();

        assert!(matches!(error, CliError::Request(RequestError::InvalidInput)));
        assert_eq!(error.to_string(), "Your Password: Invalid Input");
    }

    #[test]
    fn test_run_non_positive_length() {
        let args = Args::try_parse_from(["pwgen-cli", "--length", "0"]).unwrap();
        let error = run(args).unwrap_err();
        assert!(matches!(error, CliError::Request(RequestError::InvalidInput)));
    }

    #[test]
    fn test_run_without_copy() {
        let args = Args::try_parse_from(["pwgen-cli", "-n", "8", "-d"]).unwrap();
        assert!(run(args).is_ok());
    }
}
