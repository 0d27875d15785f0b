// Pattern: Template Method
// A provided trait method fixes the workflow; implementors fill in the steps.

use crate::transcript::Transcript;

pub trait DataImporter {
    /// The template method. Implementors should not override it.
    fn import_data(&self, out: &mut Transcript) {
        self.open_file(out);
        self.parse_data(out);
        self.close_file(out);
    }

    fn open_file(&self, out: &mut Transcript) {
        out.line("Opening file...");
    }

    /// The one step every importer must supply.
    fn parse_data(&self, out: &mut Transcript);

    fn close_file(&self, out: &mut Transcript) {
        out.line("Closing file...");
    }
}

pub struct CsvImporter;

impl DataImporter for CsvImporter {
    fn parse_data(&self, out: &mut Transcript) {
        out.line("Parsing CSV data.");
    }
}

pub struct JsonImporter;

impl DataImporter for JsonImporter {
    fn parse_data(&self, out: &mut Transcript) {
        out.line("Parsing JSON data.");
    }
}

/// Overrides an optional hook as well as the required step.
pub struct ArchiveImporter;

impl DataImporter for ArchiveImporter {
    fn open_file(&self, out: &mut Transcript) {
        out.line("Opening file...");
        out.line("Unpacking archive...");
    }

    fn parse_data(&self, out: &mut Transcript) {
        out.line("Parsing archived records.");
    }
}

pub fn demo(out: &mut Transcript) {
    let importers: [&dyn DataImporter; 3] = [&CsvImporter, &JsonImporter, &ArchiveImporter];
    for importer in importers {
        importer.import_data(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_order() {
        let mut out = Transcript::new();
        CsvImporter.import_data(&mut out);
        assert_eq!(
            out.lines(),
            ["Opening file...", "Parsing CSV data.", "Closing file..."]
        );
    }

    #[test]
    fn test_hook_override_keeps_skeleton() {
        let mut out = Transcript::new();
        ArchiveImporter.import_data(&mut out);
        assert_eq!(out.lines().first().map(String::as_str), Some("Opening file..."));
        assert_eq!(out.lines().last().map(String::as_str), Some("Closing file..."));
        assert!(out.contains("Unpacking archive..."));
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(out.len(), 10);
        assert!(out.contains("Parsing JSON data."));
    }
}
