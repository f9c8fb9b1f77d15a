use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;

type BoxedLineSource = Box<dyn AsyncBufRead + Unpin + Send>;

/// Line source shared by the console view and the permission prompt.
pub struct ConsoleInput {
    lines: Mutex<Lines<BoxedLineSource>>,
}

impl ConsoleInput {
    pub fn from_stdin() -> Self {
        log::debug!("[CONSOLE] reading actions from stdin");
        Self::from_reader(Box::new(BufReader::new(tokio::io::stdin())))
    }

    pub fn from_reader(reader: BoxedLineSource) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }

    pub async fn next_line(&self) -> Result<Option<String>> {
        let mut lines = self.lines.lock().await;
        lines
            .next_line()
            .await
            .context("failed to read console input")
    }
}
