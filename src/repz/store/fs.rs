use super::DataStore;
use crate::error::{RepzError, Result};
use crate::model::Entry;
use crate::schema;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".csv".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    /// The path a dataset of this name maps to, whether or not it exists.
    pub fn dataset_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, self.file_ext))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RepzError::Io)?;
        }
        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<()> {
        // Names become file names inside the root; anything that could
        // escape the directory is rejected here.
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(RepzError::Store(format!(
                "Invalid dataset name: '{}'",
                name
            )));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_entries(&self, name: &str) -> Result<Vec<Entry>> {
        self.check_name(name)?;
        let path = self.dataset_path(name);
        if !path.is_file() {
            return Err(RepzError::NotFound(name.to_string()));
        }
        read_entries(&path)
    }

    fn save_entries(&mut self, name: &str, entries: &[Entry]) -> Result<()> {
        self.check_name(name)?;
        self.ensure_root()?;

        // Full rewrite through a temp file in the same directory, then an
        // atomic rename over the target.
        let target = self.dataset_path(name);
        let tmp = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        write_entries(&tmp, entries)?;
        fs::rename(&tmp, &target).map_err(RepzError::Io)?;

        Ok(())
    }

    fn create_dataset(&mut self, name: &str) -> Result<()> {
        self.check_name(name)?;
        if self.dataset_path(name).is_file() {
            return Ok(());
        }
        self.save_entries(name, &[])
    }

    fn dataset_exists(&self, name: &str) -> bool {
        self.dataset_path(name).is_file()
    }

    fn list_dataset_names(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(RepzError::Io)? {
            let entry = entry.map_err(RepzError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|s| s.to_str()) {
                if file_name.starts_with('.') {
                    continue;
                }
                if let Some(name) = file_name.strip_suffix(self.file_ext.as_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Read a dataset file: check the header, then decode every row.
///
/// Also used by `merge` for external files, so an incoming dataset gets the
/// same header check as the active one. A header differing in names or
/// count is a [`RepzError::SchemaMismatch`].
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let mut reader = csv::Reader::from_path(path)?;
    check_header(reader.headers()?)?;

    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}

fn check_header(found: &csv::StringRecord) -> Result<()> {
    if found.len() != schema::HEADER.len()
        || found.iter().zip(schema::HEADER).any(|(got, want)| got != want)
    {
        return Err(RepzError::SchemaMismatch {
            expected: schema::HEADER.join(","),
            found: found.iter().collect::<Vec<_>>().join(","),
        });
    }
    Ok(())
}

fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    // has_headers(false): the header is written explicitly so that an empty
    // dataset still gets one.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(schema::HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush().map_err(RepzError::Io)?;
    Ok(())
}
