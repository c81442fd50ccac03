pub mod dashboard;
pub mod ocr;
pub mod report;
pub mod shell;
pub mod summarize;
pub mod transcribe;
pub mod translate;
pub mod upload;
pub mod widgets;

use std::path::PathBuf;
use std::rc::Rc;

use newsdesk::export::ExportDocument;
use newsdesk::panels::Work;

/// What a mounted view may ask of the application.
#[derive(Clone)]
pub struct ViewContext {
    /// Run work on the background runtime; the outcome comes back through `finish`.
    pub run: Rc<dyn Fn(Work)>,
    /// Short toast message.
    pub notify: Rc<dyn Fn(&str)>,
    pub export_dir: PathBuf,
}

impl ViewContext {
    /// Write an export and report where it went. Returns the error text on failure.
    pub fn export(&self, document: Option<ExportDocument>) -> Result<(), String> {
        let Some(document) = document else {
            return Ok(());
        };
        match document.write_to(&self.export_dir) {
            Ok(path) => {
                (self.notify)(&format!("Saved {}", path.display()));
                Ok(())
            }
            Err(e) => {
                log::warn!("Export failed: {e}");
                Err(e.to_string())
            }
        }
    }
}
