//! Filesystem helpers for persisting the answer record

use crate::answers::AnswerRecord;
use crate::error::{Error, Result};
use std::path::Path;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Serialize the finished record as pretty-printed JSON and write it to
/// `dest_path`, creating parent directories as needed.
pub fn write_answer_record<P: AsRef<Path>>(
    dest_path: P,
    record: &AnswerRecord,
) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(record).map_err(Error::SerializeError)?;
    std::fs::write(dest_path, content).map_err(Error::IoError)?;

    log::debug!("Answer record written to '{}'", dest_path.display());
    Ok(())
}
