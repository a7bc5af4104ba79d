//! Clause-sequence matcher for the site's fixed prose templates.
//!
//! A template is an ordered list of clauses. Each clause is a regex fragment
//! that may declare named captures (the fields) and may contain the
//! [`HEADWORD`] placeholder wherever the headword has to be repeated. The
//! clauses are concatenated into one regex anchored at both ends of the
//! description; optional clauses match zero or one time at their position.
//! Text the clauses do not account for is a mismatch.
//!
//! The `regex` crate has no back-references, so every placeholder becomes a
//! capture of its own and is compared with the headword after the match.

use regex::Regex;

use crate::error::TemplateError;
use crate::field_map::FieldMap;

/// Placeholder for a repetition of the headword inside a clause pattern.
pub const HEADWORD: &str = "{headword}";

const BACKREF_GROUP: &str = "backref";

#[derive(Debug, Clone, Copy)]
pub struct Clause {
    pub name: &'static str,
    pub pattern: &'static str,
    pub optional: bool,
}

impl Clause {
    pub const fn required(name: &'static str, pattern: &'static str) -> Self {
        Self {
            name,
            pattern,
            optional: false,
        }
    }

    pub const fn optional(name: &'static str, pattern: &'static str) -> Self {
        Self {
            name,
            pattern,
            optional: true,
        }
    }
}

struct BackReference {
    group: String,
    clause: &'static str,
}

/// A compiled clause sequence.
pub struct Template {
    name: &'static str,
    headword: &'static str,
    clauses: Vec<Clause>,
    regex: Regex,
    /// `prefixes[i]` matches clauses `0..=i` without the end anchor; used to
    /// name the failing clause
    prefixes: Vec<Regex>,
    backrefs: Vec<BackReference>,
    fields: Vec<String>,
}

impl Template {
    /// Compile `clauses` in order. `headword` names the capture of the first
    /// clause every [`HEADWORD`] placeholder has to repeat.
    ///
    /// # Panics
    /// If no clause captures `headword`.
    pub fn new(
        name: &'static str,
        headword: &'static str,
        clauses: &[Clause],
    ) -> Result<Self, regex::Error> {
        let mut backrefs = Vec::new();
        let mut fragments = Vec::with_capacity(clauses.len());

        for clause in clauses {
            let mut fragment = String::with_capacity(clause.pattern.len());
            let mut rest = clause.pattern;
            while let Some(at) = rest.find(HEADWORD) {
                fragment.push_str(&rest[..at]);
                let group = format!("{BACKREF_GROUP}{}", backrefs.len());
                fragment.push_str(&format!(r"(?P<{group}>\S+)"));
                backrefs.push(BackReference {
                    group,
                    clause: clause.name,
                });
                rest = &rest[at + HEADWORD.len()..];
            }
            fragment.push_str(rest);

            if clause.optional {
                fragments.push(format!("(?:{fragment})?"));
            } else {
                fragments.push(format!("(?:{fragment})"));
            }
        }

        let regex = Regex::new(&format!(r"\A{}\z", fragments.concat()))?;
        let prefixes = (1..=fragments.len())
            .map(|n| Regex::new(&format!(r"\A{}", fragments[..n].concat())))
            .collect::<Result<Vec<_>, _>>()?;

        let fields: Vec<String> = regex
            .capture_names()
            .flatten()
            .filter(|group| !group.starts_with(BACKREF_GROUP))
            .map(str::to_string)
            .collect();
        assert!(
            fields.iter().any(|field| field == headword),
            "{name} template has no `{headword}` capture"
        );

        Ok(Self {
            name,
            headword,
            clauses: clauses.to_vec(),
            regex,
            prefixes,
            backrefs,
            fields,
        })
    }

    /// Match `description` against the whole clause sequence.
    pub fn apply(&self, description: &str) -> Result<FieldMap, TemplateError> {
        let Some(captures) = self.regex.captures(description) else {
            return Err(TemplateError::Mismatch {
                template: self.name,
                clause: self.failing_clause(description),
                description: description.to_string(),
            });
        };

        let headword = captures
            .name(self.headword)
            .map(|m| m.as_str())
            .unwrap_or_default();

        for backref in &self.backrefs {
            let Some(found) = captures.name(&backref.group) else {
                // optional clause did not match
                continue;
            };
            if found.as_str() != headword {
                return Err(TemplateError::BackReference {
                    template: self.name,
                    clause: backref.clause,
                    expected: headword.to_string(),
                    found: found.as_str().to_string(),
                    description: description.to_string(),
                });
            }
        }

        let mut fields = FieldMap::new();
        for field in &self.fields {
            let value = captures.name(field).map(|m| m.as_str().to_string());
            fields.insert(field.clone(), value);
        }
        Ok(fields)
    }

    /// First clause whose prefix does not match. When every prefix matches,
    /// the text left over after the last clause is blamed on that clause.
    fn failing_clause(&self, description: &str) -> &'static str {
        self.prefixes
            .iter()
            .zip(&self.clauses)
            .find(|(prefix, _)| !prefix.is_match(description))
            .or_else(|| self.prefixes.iter().zip(&self.clauses).last())
            .map(|(_, clause)| clause.name)
            .unwrap_or(self.name)
    }
}
