// Pattern: Abstract Factory
// One factory per platform; each produces a matching family of widgets.

use crate::transcript::Transcript;

pub trait Button {
    fn display(&self) -> String;
}

pub trait Checkbox {
    fn display(&self) -> String;
}

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

// Each platform only differs by label, so one macro stamps out the family.
macro_rules! widget_family {
    ($factory:ident, $button:ident, $checkbox:ident, $label:literal) => {
        pub struct $button;
        impl Button for $button {
            fn display(&self) -> String {
                concat!($label, " style button.").to_string()
            }
        }

        pub struct $checkbox;
        impl Checkbox for $checkbox {
            fn display(&self) -> String {
                concat!($label, " style checkbox.").to_string()
            }
        }

        pub struct $factory;
        impl GuiFactory for $factory {
            fn create_button(&self) -> Box<dyn Button> {
                Box::new($button)
            }

            fn create_checkbox(&self) -> Box<dyn Checkbox> {
                Box::new($checkbox)
            }
        }
    };
}

widget_family!(IosFactory, IosButton, IosCheckbox, "iPhone");
widget_family!(MacFactory, MacButton, MacCheckbox, "Mac");
widget_family!(WindowsFactory, WindowsButton, WindowsCheckbox, "Windows");

pub struct Application<'a> {
    factory: &'a dyn GuiFactory,
}

impl<'a> Application<'a> {
    pub fn new(factory: &'a dyn GuiFactory) -> Self {
        Self { factory }
    }

    /// Render one button and one checkbox from the same family.
    pub fn create_ui(&self) -> [String; 2] {
        [
            self.factory.create_button().display(),
            self.factory.create_checkbox().display(),
        ]
    }
}

pub fn demo(out: &mut Transcript) {
    let factories: [&dyn GuiFactory; 3] = [&IosFactory, &MacFactory, &WindowsFactory];
    for factory in factories {
        for line in Application::new(factory).create_ui() {
            out.line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_do_not_mix() {
        let cases: [(&dyn GuiFactory, &str); 3] = [
            (&IosFactory, "iPhone"),
            (&MacFactory, "Mac"),
            (&WindowsFactory, "Windows"),
        ];
        for (factory, label) in cases {
            let [button, checkbox] = Application::new(factory).create_ui();
            assert!(button.starts_with(label));
            assert!(checkbox.starts_with(label));
        }
    }

    #[test]
    fn test_widget_text() {
        assert_eq!(MacFactory.create_button().display(), "Mac style button.");
        assert_eq!(WindowsFactory.create_checkbox().display(), "Windows style checkbox.");
    }

    #[test]
    fn test_demo_renders_three_families() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(out.len(), 6);
        assert_eq!(out.lines()[0], "iPhone style button.");
    }
}
