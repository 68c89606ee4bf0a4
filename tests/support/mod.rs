use std::fs;
use std::path::PathBuf;

use pk::task::Task;
use tempfile::TempDir;

pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn file_arg(&self) -> String {
        self.file().display().to_string()
    }

    #[allow(dead_code)]
    pub fn write_raw(&self, contents: &str) {
        fs::write(self.file(), contents).expect("failed to seed store file");
    }

    #[allow(dead_code)]
    pub fn read_raw(&self) -> Vec<u8> {
        fs::read(self.file()).expect("failed to read store file")
    }

    #[allow(dead_code)]
    pub fn read_tasks(&self) -> Vec<Task> {
        let contents = fs::read_to_string(self.file()).expect("failed to read store file");
        serde_json::from_str(&contents).expect("store file is not a task array")
    }
}
