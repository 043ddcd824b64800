use clap::Parser;
use std::path::Path;
use simai_renamer::{
    cli::commands::Cli,
    renamer::directory::{DirectoryRenamer, RenameOptions, RenameOutcome, SkipReason},
    utils::{file_ops::DiskFs, prompt::ConsolePrompt},
};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let working_directory = match cli.working_directory() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Could not determine the working directory: {}", e);
            return;
        }
    };

    if !working_directory.is_dir() {
        println!("The directory {} does not exist.", working_directory.display());
        return;
    }

    // Try to get canonical path so the rename target resolves against the
    // real parent even for inputs like "."
    let working_directory = match std::fs::canonicalize(&working_directory) {
        Ok(canonical) => canonical,
        Err(_) => working_directory,
    };

    let options = RenameOptions {
        force_overwrite: cli.force_overwrite,
    };
    let renamer = DirectoryRenamer::new(DiskFs, ConsolePrompt, options);

    if cli.level_directory {
        match renamer.rename(&working_directory) {
            Ok(outcome) => report_outcome(&working_directory, &outcome),
            Err(e) => eprintln!("Error renaming {}: {}", working_directory.display(), e),
        }
        return;
    }

    // Batch mode: every immediate subdirectory, one at a time
    let results = match renamer.rename_all(&working_directory) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error scanning {}: {}", working_directory.display(), e);
            return;
        }
    };

    let mut renamed = 0;
    for (directory, result) in &results {
        match result {
            Ok(outcome) => {
                if matches!(outcome, RenameOutcome::Renamed { .. }) {
                    renamed += 1;
                }
                report_outcome(directory, outcome);
            }
            Err(e) => eprintln!("Error renaming {}: {}", directory.display(), e),
        }
    }

    println!("\nProcessed {} directories, renamed {}", results.len(), renamed);
}

fn report_outcome(directory: &Path, outcome: &RenameOutcome) {
    match outcome {
        RenameOutcome::Renamed { from, to } => {
            println!("Renamed {} -> {}", from.display(), to.display());
        }
        RenameOutcome::Skipped(reason) => match reason {
            SkipReason::NoMetadata => println!(
                "The directory {} does not contain a maidata.txt file.",
                name_of(directory)
            ),
            SkipReason::MissingTitle => println!(
                "The maidata.txt in {} has no title field.",
                name_of(directory)
            ),
            SkipReason::AlreadyNamed => {
                log::debug!("{} is already named after its title", directory.display());
            }
            SkipReason::UserDeclined => println!("Skipped {}.", name_of(directory)),
        },
    }
}

fn name_of(directory: &Path) -> String {
    directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}
