// Pattern: Visitor
// New operations over a fixed element set, without touching the elements.

use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub items: Vec<FileSystemItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSystemItem {
    File(File),
    Folder(Folder),
}

impl FileSystemItem {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        FileSystemItem::File(File {
            name: name.into(),
            size,
        })
    }

    pub fn folder(name: impl Into<String>, items: Vec<FileSystemItem>) -> Self {
        FileSystemItem::Folder(Folder {
            name: name.into(),
            items,
        })
    }

    pub fn accept(&self, visitor: &mut impl FileSystemVisitor) {
        match self {
            FileSystemItem::File(file) => visitor.visit_file(file),
            FileSystemItem::Folder(folder) => visitor.visit_folder(folder),
        }
    }
}

pub trait FileSystemVisitor: Sized {
    fn visit_file(&mut self, file: &File);

    /// Default traversal: visit every child.
    fn visit_folder(&mut self, folder: &Folder) {
        for item in &folder.items {
            item.accept(self);
        }
    }
}

#[derive(Debug, Default)]
pub struct SizeCalculator {
    pub total_size: u64,
}

impl FileSystemVisitor for SizeCalculator {
    fn visit_file(&mut self, file: &File) {
        self.total_size += file.size;
    }
}

pub struct NamePrinter<'a> {
    out: &'a mut Transcript,
    depth: usize,
}

impl<'a> NamePrinter<'a> {
    pub fn new(out: &'a mut Transcript) -> Self {
        Self { out, depth: 0 }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl FileSystemVisitor for NamePrinter<'_> {
    fn visit_file(&mut self, file: &File) {
        let line = format!("{}File: {}", self.indent(), file.name);
        self.out.line(line);
    }

    fn visit_folder(&mut self, folder: &Folder) {
        let line = format!("{}Folder: {}", self.indent(), folder.name);
        self.out.line(line);
        self.depth += 1;
        for item in &folder.items {
            item.accept(self);
        }
        self.depth -= 1;
    }
}

pub fn sample_tree() -> FileSystemItem {
    FileSystemItem::folder(
        "MyFiles",
        vec![
            FileSystemItem::file("Document.pdf", 200),
            FileSystemItem::file("Photo.jpg", 500),
        ],
    )
}

pub fn demo(out: &mut Transcript) {
    let tree = sample_tree();

    let mut sizes = SizeCalculator::default();
    tree.accept(&mut sizes);
    out.line(format!("Total size: {}", sizes.total_size));

    tree.accept(&mut NamePrinter::new(out));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_size_calculator() {
        let mut sizes = SizeCalculator::default();
        sample_tree().accept(&mut sizes);
        assert_eq!(sizes.total_size, 700);
    }

    #[test]
    fn test_nested_folders() {
        let tree = FileSystemItem::folder(
            "root",
            vec![
                FileSystemItem::file("a", 1),
                FileSystemItem::folder("sub", vec![FileSystemItem::file("b", 2)]),
            ],
        );

        let mut sizes = SizeCalculator::default();
        tree.accept(&mut sizes);
        assert_eq!(sizes.total_size, 3);

        let mut out = Transcript::new();
        tree.accept(&mut NamePrinter::new(&mut out));
        assert_eq!(
            out.lines(),
            ["Folder: root", "  File: a", "  Folder: sub", "    File: b"]
        );
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Total size: 700",
                "Folder: MyFiles",
                "  File: Document.pdf",
                "  File: Photo.jpg",
            ]
        );
    }
}
