//! Identifier case conversion for templates

use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;

/// Case style for identifiers in generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// PascalCase (e.g., HelloWorld)
    Pascal,
    /// camelCase (e.g., helloWorld)
    Camel,
    /// snake_case (e.g., hello_world)
    Snake,
    /// CONSTANT_CASE (e.g., HELLO_WORLD)
    Constant,
    /// kebab-case (e.g., hello-world)
    Kebab,
}

impl CaseStyle {
    /// All styles, in display order
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Pascal,
        CaseStyle::Camel,
        CaseStyle::Snake,
        CaseStyle::Constant,
        CaseStyle::Kebab,
    ];

    /// Convert an identifier written in any supported style
    pub fn apply(&self, input: &str) -> String {
        use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase};

        match self {
            CaseStyle::Pascal => input.to_pascal_case(),
            CaseStyle::Camel => input.to_lower_camel_case(),
            CaseStyle::Snake => input.to_snake_case(),
            CaseStyle::Constant => input.to_shouty_snake_case(),
            CaseStyle::Kebab => input.to_kebab_case(),
        }
    }

    /// Name used on the command line and in templates
    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Pascal => "pascal",
            CaseStyle::Camel => "camel",
            CaseStyle::Snake => "snake",
            CaseStyle::Constant => "constant",
            CaseStyle::Kebab => "kebab",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GenerationError::UnknownCaseStyle(s.to_string()))
    }
}
