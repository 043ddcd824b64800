use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simai-renamer")]
#[command(version = "1.0")]
#[command(about = "Renames simai chart directories to the title in their maidata.txt", long_about = None)]
pub struct Cli {
    /// Rename the working directory itself to the title specified by the
    /// maidata.txt file under it, instead of renaming its subdirectories
    #[arg(short = 'l', long = "level-directory")]
    pub level_directory: bool,

    /// Overwrite existing directories without confirmation
    #[arg(short = 'f', long = "force-overwrite")]
    pub force_overwrite: bool,

    /// Working directory (defaults to the current directory)
    pub directory: Option<String>,
}

impl Cli {
    /// Resolves the working directory, stripping quotes some shells leave
    /// around the positional argument.
    pub fn working_directory(&self) -> io::Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(PathBuf::from(dir.trim_matches('"'))),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_mode_flags() {
        let cli = Cli::parse_from(["simai-renamer", "-l", "-f", "charts"]);
        assert!(cli.level_directory);
        assert!(cli.force_overwrite);
        assert_eq!(cli.directory.as_deref(), Some("charts"));
    }

    #[test]
    fn strips_surrounding_quotes_from_directory() {
        let cli = Cli::parse_from(["simai-renamer", "\"my charts\""]);
        assert_eq!(cli.working_directory().unwrap(), PathBuf::from("my charts"));
    }

    #[test]
    fn defaults_to_batch_mode() {
        let cli = Cli::parse_from(["simai-renamer"]);
        assert!(!cli.level_directory);
        assert!(!cli.force_overwrite);
        assert!(cli.directory.is_none());
    }
}
