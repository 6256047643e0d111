//! Glob patterns derived from a rule's languages.

const LANGUAGE_GLOBS: &[(&str, &[&str])] = &[
    ("c", &["**/*.c", "**/*.h"]),
    ("cpp", &["**/*.cpp", "**/*.cc", "**/*.cxx", "**/*.hpp"]),
    ("csharp", &["**/*.cs"]),
    ("docker", &["**/Dockerfile", "**/*.dockerfile"]),
    ("go", &["**/*.go"]),
    ("html", &["**/*.html", "**/*.htm"]),
    ("java", &["**/*.java"]),
    ("javascript", &["**/*.js", "**/*.jsx", "**/*.mjs"]),
    ("kotlin", &["**/*.kt", "**/*.kts"]),
    ("php", &["**/*.php"]),
    ("python", &["**/*.py"]),
    ("ruby", &["**/*.rb"]),
    ("rust", &["**/*.rs"]),
    ("shell", &["**/*.sh", "**/*.bash"]),
    ("sql", &["**/*.sql"]),
    ("swift", &["**/*.swift"]),
    ("terraform", &["**/*.tf", "**/*.tfvars"]),
    ("typescript", &["**/*.ts", "**/*.tsx"]),
    ("xml", &["**/*.xml"]),
    ("yaml", &["**/*.yaml", "**/*.yml"]),
];

pub fn patterns_for(language: &str) -> &'static [&'static str] {
    LANGUAGE_GLOBS
        .iter()
        .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
        .map(|(_, globs)| *globs)
        .unwrap_or(&[])
}

/// Join the patterns of every known language, in order, without duplicates.
/// Unknown languages contribute nothing.
pub fn globs_for_languages<S: AsRef<str>>(languages: &[S]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for lang in languages {
        for glob in patterns_for(lang.as_ref()) {
            if !seen.contains(glob) {
                seen.push(glob);
            }
        }
    }
    seen.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_in_order() {
        assert_eq!(globs_for_languages(&["python", "go"]), "**/*.py, **/*.go");
    }

    #[test]
    fn duplicates_and_unknowns_dropped() {
        assert_eq!(
            globs_for_languages(&["go", "cobol", "GO"]),
            "**/*.go"
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        let none: [&str; 0] = [];
        assert_eq!(globs_for_languages(&none), "");
    }
}
