use std::path::{Path, PathBuf};
use crate::maidata::reader::MaidataFile;
use crate::utils::file_ops::FileSystem;
use crate::utils::prompt::Confirm;
use crate::{RenameError, Result};

/// Expected metadata filename, matched case-insensitively.
pub const MAIDATA_FILE_NAME: &str = "maidata.txt";

/// Characters that cannot appear in a directory name. The Windows set is a
/// superset of the Unix one, so it is used on every platform to keep renamed
/// directories portable.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    pub force_overwrite: bool,
}

/// Result of processing one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No maidata.txt in the directory.
    NoMetadata,
    /// The maidata file has no usable title field.
    MissingTitle,
    /// The directory already carries its title as its name.
    AlreadyNamed,
    /// The operator answered the confirmation prompt with anything but 'y'.
    UserDeclined,
}

pub struct DirectoryRenamer<F, C> {
    fs: F,
    confirm: C,
    options: RenameOptions,
}

impl<F: FileSystem, C: Confirm> DirectoryRenamer<F, C> {
    pub fn new(fs: F, confirm: C, options: RenameOptions) -> Self {
        Self {
            fs,
            confirm,
            options,
        }
    }

    /// Renames a single directory to the title found in its maidata.txt.
    ///
    /// Skip conditions (missing metadata, missing title, already named,
    /// declined prompt) are normal outcomes; only filesystem failures during
    /// the delete/move sequence are errors.
    pub fn rename(&self, directory: &Path) -> Result<RenameOutcome> {
        let Some(maidata_path) = self.find_maidata(directory)? else {
            return Ok(RenameOutcome::Skipped(SkipReason::NoMetadata));
        };

        let content = self.fs.read_to_string(&maidata_path)?;
        let maidata = MaidataFile::parse(&content);
        let title = match maidata.get_value("title") {
            Ok(title) if !title.is_empty() => title,
            _ => return Ok(RenameOutcome::Skipped(SkipReason::MissingTitle)),
        };

        let candidate = sanitize_title(title);
        let parent = directory
            .parent()
            .ok_or_else(|| RenameError::NoParent(directory.to_path_buf()))?;
        let target = parent.join(&candidate);
        log::debug!("target for {} is {}", directory.display(), target.display());

        if paths_equivalent(directory, &target) {
            return Ok(RenameOutcome::Skipped(SkipReason::AlreadyNamed));
        }

        if self.fs.is_dir(&target) {
            if !self.options.force_overwrite {
                let prompt = format!(
                    "The directory {} already exists. Would you like to overwrite it? (y/n)",
                    target.display()
                );
                if !self.confirm.confirm(&prompt) {
                    return Ok(RenameOutcome::Skipped(SkipReason::UserDeclined));
                }
            }
            // Destructive and irreversible, the original tree is not backed up
            self.fs.remove_dir_all(&target)?;
        } else if !self.options.force_overwrite {
            let prompt = format!("Rename {} to {}? (y/n)", display_name(directory), candidate);
            if !self.confirm.confirm(&prompt) {
                return Ok(RenameOutcome::Skipped(SkipReason::UserDeclined));
            }
        }

        self.fs.rename(directory, &target)?;
        Ok(RenameOutcome::Renamed {
            from: directory.to_path_buf(),
            to: target,
        })
    }

    /// Batch mode: processes every immediate subdirectory of `root`,
    /// sequentially and independently. One directory's failure never stops
    /// the others; each result is collected alongside its source path.
    pub fn rename_all(&self, root: &Path) -> Result<Vec<(PathBuf, Result<RenameOutcome>)>> {
        let mut subdirs: Vec<PathBuf> = self
            .fs
            .read_dir(root)?
            .into_iter()
            .filter(|p| self.fs.is_dir(p))
            .collect();
        subdirs.sort();

        let mut results = Vec::with_capacity(subdirs.len());
        for subdir in subdirs {
            let outcome = self.rename(&subdir);
            results.push((subdir, outcome));
        }
        Ok(results)
    }

    fn find_maidata(&self, directory: &Path) -> Result<Option<PathBuf>> {
        for entry in self.fs.read_dir(directory)? {
            if self.fs.is_dir(&entry) {
                continue;
            }
            let matches = entry
                .file_name()
                .map(|n| n.to_string_lossy().eq_ignore_ascii_case(MAIDATA_FILE_NAME))
                .unwrap_or(false);
            if matches {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}

/// Replaces every filesystem-reserved character (and control characters)
/// with '_', one for one, leaving everything else untouched.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if RESERVED_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Case-insensitive, trailing-separator-insensitive path comparison.
pub fn paths_equivalent(a: &Path, b: &Path) -> bool {
    normalized(a) == normalized(b)
}

fn normalized(path: &Path) -> Vec<String> {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
        .collect()
}

fn display_name(directory: &Path) -> String {
    directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}
