//! Language metadata and default source templates.
//!
//! The registry is static: every [`Language`] has a config and a
//! template, so both lookups are total and never fail.

use crate::types::Language;

/// Display metadata for a supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Human-readable name
    pub name: &'static str,
    /// Syntax-mode identifier for the editing surface
    pub editor_mode: &'static str,
}

const CPP_TEMPLATE: &str = r#"#include <iostream>
using namespace std;

int main() {
    cout << "Hello, World!" << endl;
    return 0;
}"#;

const C_TEMPLATE: &str = r#"#include <stdio.h>

int main() {
    printf("Hello, World!\n");
    return 0;
}"#;

const JAVA_TEMPLATE: &str = r#"public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}"#;

const PYTHON_TEMPLATE: &str = r#"print("Hello, World!")"#;

/// Default source snippet used to seed the editor on a language switch.
pub fn template(language: Language) -> &'static str {
    match language {
        Language::Cpp => CPP_TEMPLATE,
        Language::C => C_TEMPLATE,
        Language::Java => JAVA_TEMPLATE,
        Language::Python => PYTHON_TEMPLATE,
    }
}

/// Display metadata for a language.
pub fn config(language: Language) -> &'static LanguageConfig {
    match language {
        Language::Cpp => &LanguageConfig {
            name: "C++",
            editor_mode: "cpp",
        },
        Language::C => &LanguageConfig {
            name: "C",
            editor_mode: "c",
        },
        Language::Java => &LanguageConfig {
            name: "Java",
            editor_mode: "java",
        },
        Language::Python => &LanguageConfig {
            name: "Python",
            editor_mode: "python",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_total() {
        for language in Language::ALL {
            assert!(!template(language).is_empty());
            assert!(!config(language).name.is_empty());
            assert!(!config(language).editor_mode.is_empty());
        }
    }

    #[test]
    fn templates_print_hello_world() {
        for language in Language::ALL {
            assert!(template(language).contains("Hello, World!"));
        }
    }
}
