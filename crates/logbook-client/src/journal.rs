//! Journal source — a child `journalctl` process read line by line.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStdout, Command};

use crate::error::ShipError;

/// `journalctl -f -o json`, optionally narrowed to one `_COMM`.
pub fn journalctl_command(comm: Option<&str>) -> Command {
    let mut cmd = Command::new("journalctl");
    cmd.args(["-f", "-o", "json"]);
    if let Some(comm) = comm {
        cmd.arg(format!("_COMM={comm}"));
    }
    cmd
}

/// Lines from a child process's stdout. The child is killed on drop.
pub struct JournalFeed {
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
}

impl JournalFeed {
    pub fn spawn(mut command: Command) -> Result<Self, ShipError> {
        let mut child = command
            .stdout(Stdio::piped())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(ShipError::Spawn)?;
        let stdout = child.stdout.take().ok_or(ShipError::NoStdout)?;

        Ok(Self {
            child,
            lines: BufReader::new(stdout).lines(),
        })
    }

    /// OS pid of the reader, while it runs.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Next line, or `None` once the child closes stdout.
    pub async fn next_line(&mut self) -> Result<Option<String>, ShipError> {
        self.lines.next_line().await.map_err(ShipError::Read)
    }
}
