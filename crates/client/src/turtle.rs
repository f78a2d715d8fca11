//! Turtle to SPARQL `DELETE DATA` translation.
//!
//! A Turtle document is split into its directive lines (`@prefix`, `@base`)
//! and everything else. Directives become the SPARQL prologue, the remaining
//! lines become the body of a `DELETE DATA` block. Nothing here validates the
//! RDF itself: malformed Turtle yields malformed SPARQL and the server is the
//! one to reject it.

/// Classification of a single trimmed Turtle line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurtleLine<'a> {
    /// `@prefix f: <...> .` turned into `prefix f: <...>`
    Directive(&'a str),
    Data(&'a str),
}

impl<'a> TurtleLine<'a> {
    /// Classifies one line of a Turtle document.
    ///
    /// A line is a directive when, once trimmed, it starts with `@` and has
    /// something after it. A bare `@` carries no directive and is kept as a
    /// data line so the server reports it instead of it vanishing.
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        match line.strip_prefix('@') {
            Some(rest) if !rest.is_empty() => {
                let rest = rest.strip_suffix('.').unwrap_or(rest);
                TurtleLine::Directive(rest.trim_end())
            }
            _ => TurtleLine::Data(line),
        }
    }
}

/// Translates the lines of a Turtle document into a `DELETE DATA` update
/// removing the same triples.
///
/// Directives keep their relative order and all precede the data block. Data
/// lines are trimmed but otherwise copied verbatim, blank ones included. With
/// no directives the prologue is an empty line.
///
/// ```
/// use pgraphdb_client::turtle_to_deletion_sparql;
///
/// let sparql = turtle_to_deletion_sparql([
///     "@prefix ex: <http://example.org/> .",
///     "ex:a ex:b ex:c .",
/// ]);
/// assert_eq!(
///     sparql,
///     "prefix ex: <http://example.org/>\nDELETE DATA {\nex:a ex:b ex:c .\n}"
/// );
/// ```
pub fn turtle_to_deletion_sparql<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut prefixes = Vec::new();
    let mut body = Vec::new();

    for line in lines {
        match TurtleLine::classify(line.as_ref()) {
            TurtleLine::Directive(directive) => prefixes.push(directive.to_string()),
            TurtleLine::Data(data) => body.push(data.to_string()),
        }
    }

    format!(
        "{}\nDELETE DATA {{\n{}\n}}",
        prefixes.join("\n"),
        body.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prefix_and_triple() {
        let sparql = turtle_to_deletion_sparql([
            "@prefix ex: <http://example.org/> .",
            "ex:a ex:b ex:c .",
        ]);
        assert_eq!(
            sparql,
            "prefix ex: <http://example.org/>\nDELETE DATA {\nex:a ex:b ex:c .\n}"
        );
    }

    #[test]
    fn test_no_directives_gives_empty_prologue() {
        let sparql = turtle_to_deletion_sparql(["ex:a ex:b ex:c ."]);
        assert_eq!(sparql, "\nDELETE DATA {\nex:a ex:b ex:c .\n}");
    }

    #[test]
    fn test_directives_hoisted_in_order() {
        let sparql = turtle_to_deletion_sparql([
            "@prefix a: <http://a/> .",
            "a:x a:y a:z .",
            "  @prefix b: <http://b/> .  ",
            "b:x b:y b:z .",
            "@base <http://base/> .",
        ]);
        assert_eq!(
            sparql,
            "prefix a: <http://a/>\nprefix b: <http://b/>\nbase <http://base/>\n\
             DELETE DATA {\na:x a:y a:z .\nb:x b:y b:z .\n}"
        );
    }

    #[test]
    fn test_blank_lines_kept_as_empty_entries() {
        let sparql = turtle_to_deletion_sparql(["ex:a ex:b ex:c .", "   ", "\tex:d ex:e ex:f .\n"]);
        assert_eq!(sparql, "\nDELETE DATA {\nex:a ex:b ex:c .\n\nex:d ex:e ex:f .\n}");
    }

    #[test]
    fn test_bare_at_sign_is_data() {
        assert_eq!(TurtleLine::classify("@"), TurtleLine::Data("@"));
        assert_eq!(TurtleLine::classify("  @  "), TurtleLine::Data("@"));
        let sparql = turtle_to_deletion_sparql(["@"]);
        assert_eq!(sparql, "\nDELETE DATA {\n@\n}");
    }

    #[test]
    fn test_directive_without_trailing_dot() {
        assert_eq!(
            TurtleLine::classify("@prefix ex: <http://example.org/>"),
            TurtleLine::Directive("prefix ex: <http://example.org/>")
        );
    }

    #[test]
    fn test_translation_is_deterministic() {
        let lines = vec![
            "@prefix ex: <http://example.org/> .".to_string(),
            "ex:a ex:b \"lit\" .".to_string(),
        ];
        assert_eq!(
            turtle_to_deletion_sparql(&lines),
            turtle_to_deletion_sparql(&lines)
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(turtle_to_deletion_sparql(Vec::<&str>::new()), "\nDELETE DATA {\n\n}");
    }
}
