use crate::*;
use anyhow::Context;
use rps_core::MAX_HANDS;
use std::io::BufRead;

/// Reads recorded frames, one JSON object per line.
///
/// Blank lines and lines starting with `#` are skipped. A line that fails
/// to parse is reported with its line number.
pub struct Replay<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R> From<R> for Replay<R>
where
    R: BufRead,
{
    fn from(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R> Replay<R> {
    /// Line number of the most recently read line, 1-indexed.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R> Iterator for Replay<R>
where
    R: BufRead,
{
    type Item = anyhow::Result<Frame>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e).context(format!("read line {}", self.line + 1))),
            };
            self.line += 1;
            let text = text.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let frame = serde_json::from_str::<Frame>(text)
                .with_context(|| format!("parse frame on line {}", self.line));
            if let Ok(ref frame) = frame {
                if frame.hands.len() > MAX_HANDS {
                    log::warn!(
                        "line {}: {} hands reported, tracker maximum is {}",
                        self.line,
                        frame.hands.len(),
                        MAX_HANDS
                    );
                }
            }
            return Some(frame);
        }
    }
}
