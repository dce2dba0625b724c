use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is nothing stored yet and defaults apply.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.file_path.display(), e))
    }
}

#[derive(Default)]
pub struct InMemoryConfigContentProvider {
    content: RefCell<Option<String>>,
}

impl InMemoryConfigContentProvider {
    pub fn new(content: Option<String>) -> Self {
        Self {
            content: RefCell::new(content),
        }
    }
}

impl ConfigContentProvider for InMemoryConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        Ok(self.content.borrow().clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        *self.content.borrow_mut() = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_none() {
        let provider = FileContentConfigProvider::new("this_config_file_does_not_exist.yaml");

        let result = provider.get_config_content();

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_in_memory_provider_stores_content() {
        let provider = InMemoryConfigContentProvider::default();

        provider.set_config_content("a: 1").unwrap();

        assert_eq!(provider.get_config_content(), Ok(Some("a: 1".to_string())));
    }
}
