// crates/infra/src/git.rs
use std::{
    path::PathBuf,
    process::{Command, Output},
};

use usage_trends_ports::repository::{CommitRef, FileCountDto, HistorySource};
use usage_trends_shared_kernel::{
    CommitId, InfraResult, InfrastructureError, OccurrenceCount, Result,
};

/// `HistorySource` over the `git` binary. Counting passes the commit as
/// a tree argument to `git grep`, so the worktree is never touched.
pub struct GitCli {
    repo_dir: PathBuf,
    revision: String,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>, revision: impl Into<String>) -> Self {
        Self { repo_dir: repo_dir.into(), revision: revision.into() }
    }

    /// Cheap sanity check before a long scan starts.
    pub fn verify_worktree(&self) -> Result<()> {
        let stdout = self.run_checked("rev-parse", &["rev-parse", "--is-inside-work-tree"])?;
        if String::from_utf8_lossy(&stdout).trim() == "true" {
            Ok(())
        } else {
            Err(InfrastructureError::GitError {
                operation: "rev-parse".to_string(),
                details: format!("{} is not a git worktree", self.repo_dir.display()),
            }
            .into())
        }
    }

    fn invoke(&self, operation: &str, args: &[&str]) -> InfraResult<Output> {
        Command::new("git")
            .arg("-C")
            .arg(&self.repo_dir)
            .args(args)
            .output()
            .map_err(|e| InfrastructureError::GitError {
                operation: operation.to_string(),
                details: format!("failed to launch git: {e}"),
            })
    }

    fn run_checked(&self, operation: &str, args: &[&str]) -> InfraResult<Vec<u8>> {
        let output = self.invoke(operation, args)?;
        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(git_failure(operation, &output))
        }
    }

    /// Runs `git grep`, where exit status 1 means "no matches" rather
    /// than failure.
    fn run_grep(&self, args: &[&str]) -> InfraResult<String> {
        let output = self.invoke("grep", args)?;
        match output.status.code() {
            Some(0) | Some(1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
            _ => Err(git_failure("grep", &output)),
        }
    }
}

impl HistorySource for GitCli {
    fn fetch(&self) -> Result<()> {
        self.run_checked("fetch", &["fetch"])?;
        Ok(())
    }

    fn matching_commits(&self, pattern: &str) -> Result<Vec<CommitRef>> {
        let pickaxe = format!("-G{pattern}");
        let stdout = self.run_checked(
            "log",
            &["log", &pickaxe, &self.revision, "--reverse", "--format=%H %ct"],
        )?;
        parse_log(&String::from_utf8_lossy(&stdout))
    }

    fn count_occurrences(
        &self,
        commit: &CommitId,
        pattern: &str,
        ignored: &[String],
    ) -> Result<OccurrenceCount> {
        let pathspecs = exclude_pathspecs(ignored);
        let mut args = vec!["grep", "-wE", pattern, commit.as_str(), "--"];
        args.extend(pathspecs.iter().map(String::as_str));
        let stdout = self.run_grep(&args)?;
        Ok(OccurrenceCount::new(stdout.lines().count() as u64))
    }

    fn count_by_file(
        &self,
        rev: &str,
        pattern: &str,
        ignored: &[String],
    ) -> Result<Vec<FileCountDto>> {
        let pathspecs = exclude_pathspecs(ignored);
        let mut args = vec!["grep", "-wcE", pattern, rev, "--"];
        args.extend(pathspecs.iter().map(String::as_str));
        let stdout = self.run_grep(&args)?;
        parse_file_counts(&stdout)
    }
}

fn git_failure(operation: &str, output: &Output) -> InfrastructureError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    InfrastructureError::GitError {
        operation: operation.to_string(),
        details: stderr.trim().to_string(),
    }
}

/// `:!spec` pathspec magic excludes `spec` from the grep.
fn exclude_pathspecs(ignored: &[String]) -> Vec<String> {
    ignored.iter().map(|spec| format!(":!{spec}")).collect()
}

/// Parses `git log --format=%H %ct` output into commit refs.
pub(crate) fn parse_log(stdout: &str) -> Result<Vec<CommitRef>> {
    let mut refs = Vec::new();
    for line in stdout.lines() {
        let (hash, timestamp) = line.split_once(' ').ok_or_else(|| malformed("log", line))?;
        let id = CommitId::new(hash).map_err(|_| malformed("log", line))?;
        let timestamp: i64 = timestamp.trim().parse().map_err(|_| malformed("log", line))?;
        refs.push(CommitRef { id, timestamp });
    }
    Ok(refs)
}

/// Parses `git grep -c` output. With a tree argument each line reads
/// `rev:path:count`; the path itself may contain colons, the count may
/// not.
pub(crate) fn parse_file_counts(stdout: &str) -> Result<Vec<FileCountDto>> {
    let mut rows = Vec::new();
    for line in stdout.lines() {
        let (_, rest) = line.split_once(':').ok_or_else(|| malformed("grep -c", line))?;
        let (path, count) = rest.rsplit_once(':').ok_or_else(|| malformed("grep -c", line))?;
        let count: u64 = count.trim().parse().map_err(|_| malformed("grep -c", line))?;
        rows.push(FileCountDto { path: path.to_string(), count });
    }
    Ok(rows)
}

fn malformed(source: &str, line: &str) -> usage_trends_shared_kernel::UsageTrendsError {
    InfrastructureError::SerializationError {
        format: format!("git {source}"),
        details: format!("unexpected line {line:?}"),
    }
    .into()
}
