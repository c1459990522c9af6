use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages navigation is offered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Cpp,
    Java,
}

pub const SUPPORTED_LANGUAGES: [Language; 3] = [Language::Python, Language::Cpp, Language::Java];

impl Language {
    /// Map an editor language id (`"python"`, `"cpp"`, ...) to a language.
    pub fn from_language_id(language_id: &str) -> Option<Self> {
        match language_id.trim().to_ascii_lowercase().as_str() {
            "python" => Some(Language::Python),
            "cpp" | "c++" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Guess from a file extension, for clients that open documents with a
    /// generic language id.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "py" | "pyw" | "pyi" => Some(Language::Python),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" | "h" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.language_id())
    }
}

pub fn is_supported_language(language_id: &str) -> bool {
    Language::from_language_id(language_id).is_some()
}

#[cfg(test)]
#[path = "../tests/src/language_tests.rs"]
mod tests;
