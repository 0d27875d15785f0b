// Pattern: Adapter
// Wrap an incompatible type so it satisfies the interface a client expects.

use crate::transcript::Transcript;

// ============================================================================
// Example: Adapter with Trait Objects
// ============================================================================

pub trait Printing {
    fn dispatch_printed_docs(&self) -> String;
}

/// Legacy API that predates `Printing`.
pub struct OldPrinter;

impl OldPrinter {
    pub fn print_document(&self) -> String {
        "Printing a Document...".to_string()
    }
}

pub struct NewPrinter;

impl Printing for NewPrinter {
    fn dispatch_printed_docs(&self) -> String {
        "Printing or photocopying the doc...".to_string()
    }
}

pub struct PrinterAdapter {
    old_printer: OldPrinter,
}

impl PrinterAdapter {
    pub fn new(old_printer: OldPrinter) -> Self {
        Self { old_printer }
    }
}

impl Printing for PrinterAdapter {
    fn dispatch_printed_docs(&self) -> String {
        self.old_printer.print_document()
    }
}

pub fn client_code(printer: &dyn Printing) -> String {
    printer.dispatch_printed_docs()
}

// ============================================================================
// Example: Zero-cost Adapter with Generics
// ============================================================================

pub trait LegacyPrint {
    fn print_document(&self) -> String;
}

impl LegacyPrint for OldPrinter {
    fn print_document(&self) -> String {
        OldPrinter::print_document(self)
    }
}

pub struct Adapted<T>(pub T);

impl<T: LegacyPrint> Printing for Adapted<T> {
    fn dispatch_printed_docs(&self) -> String {
        self.0.print_document()
    }
}

pub fn demo(out: &mut Transcript) {
    let adapter = PrinterAdapter::new(OldPrinter);
    out.line(client_code(&adapter));
    out.line(client_code(&NewPrinter));
    out.line(format!("Generic adapter: {}", client_code(&Adapted(OldPrinter))));
}
