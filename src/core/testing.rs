use crate::core::parser::infer_value;
use crate::domain::model::Record;
use crate::domain::ports::Reporter;
use std::cell::RefCell;

#[derive(Default)]
pub struct RecordingReporter {
    pub warnings: RefCell<Vec<String>>,
    pub infos: RefCell<Vec<String>>,
}

impl Reporter for RecordingReporter {
    fn debug(&self, _message: &str) {}

    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

/// Builds a record the way the parser would from raw cells.
pub fn row(cells: &[(&str, &str)]) -> Record {
    Record::with_raw(
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), infer_value(v)))
            .collect(),
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}
