use std::{
    collections::VecDeque,
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use super::HistoryError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn load_entries(&self) -> Result<VecDeque<String>, HistoryError> {
        let mut entries = VecDeque::new();

        if self.file_path.exists() {
            let file = File::open(&self.file_path)?;
            let reader = BufReader::new(file);

            for line in reader.lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    entries.push_back(line);
                }
            }
        }

        Ok(entries)
    }

    pub fn append_entry(&self, entry: &str) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)?;

        writeln!(file, "{}", entry)?;
        Ok(())
    }

    pub fn rewrite<'a>(
        &self,
        entries: impl Iterator<Item = &'a String>,
    ) -> Result<(), HistoryError> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}
