// Pattern: Composite
// Leaves and containers share one interface, so a tree is handled uniformly.

use crate::transcript::Transcript;

pub trait FileComponent {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
    fn render(&self, indent: &str, out: &mut Transcript);
}

pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl FileComponent for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn render(&self, indent: &str, out: &mut Transcript) {
        out.line(format!("{indent}- File: {}", self.name));
    }
}

pub struct Folder {
    name: String,
    children: Vec<Box<dyn FileComponent>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, component: impl FileComponent + 'static) -> &mut Self {
        self.children.push(Box::new(component));
        self
    }

    pub fn children(&self) -> &[Box<dyn FileComponent>] {
        &self.children
    }
}

impl FileComponent for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(|child| child.size()).sum()
    }

    fn render(&self, indent: &str, out: &mut Transcript) {
        out.line(format!("{indent}+ Folder: {}", self.name));
        let nested = format!("{indent}  ");
        for child in &self.children {
            child.render(&nested, out);
        }
    }
}

pub fn sample_tree() -> Folder {
    let mut personal = Folder::new("Personal");
    personal
        .add(File::new("resume.pdf", 120))
        .add(File::new("coverletter.doc", 40));

    let mut work = Folder::new("Work");
    work.add(File::new("project.rs", 8));

    let mut root = Folder::new("Root");
    root.add(personal).add(work);
    root
}

pub fn demo(out: &mut Transcript) {
    let root = sample_tree();
    root.render("", out);
    out.line(format!("Total size of {}: {} KB", root.name(), root.size()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_indents_children() {
        let mut out = Transcript::new();
        sample_tree().render("", &mut out);

        assert_eq!(
            out.lines(),
            [
                "+ Folder: Root",
                "  + Folder: Personal",
                "    - File: resume.pdf",
                "    - File: coverletter.doc",
                "  + Folder: Work",
                "    - File: project.rs",
            ]
        );
    }

    #[test]
    fn test_size_is_recursive() {
        let root = sample_tree();
        assert_eq!(root.size(), 168);
        assert_eq!(root.children()[0].size(), 160);
    }

    #[test]
    fn test_empty_folder() {
        let folder = Folder::new("Empty");
        let mut out = Transcript::new();
        folder.render("", &mut out);
        assert_eq!(folder.size(), 0);
        assert_eq!(out.lines(), ["+ Folder: Empty"]);
    }
}
