use crate::areas::diff_service::DiffService;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// State shared by every CLI command: the diff service and where output goes.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    service: DiffService,
}

impl Session {
    pub fn new(service: DiffService, writer: Box<dyn std::io::Write>) -> Self {
        Session {
            writer: RefCell::new(writer),
            service,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn service(&self) -> &DiffService {
        &self.service
    }

    pub fn read_text(&self, path: &Path) -> anyhow::Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))
    }
}
