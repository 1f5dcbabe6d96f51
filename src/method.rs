//! Answering methods offered by the service.

use serde::{Deserialize, Serialize};

/// Strategy the answering service uses to pick the most relevant chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Method {
    /// Sentence-embedding similarity.
    #[default]
    #[serde(rename = "llm2")]
    Llm2,
    /// TF-IDF cosine similarity.
    #[serde(rename = "tfidf")]
    Tfidf,
}

/// Wire name and display label for every method.
const METHODS: &[(Method, &str, &str)] = &[
    (Method::Llm2, "llm2", "LLM2"),
    (Method::Tfidf, "tfidf", "TFIDF"),
];

impl Method {
    /// All selectable methods, in display order.
    pub fn all() -> impl Iterator<Item = Method> {
        METHODS.iter().map(|(method, _, _)| *method)
    }

    /// Name sent to the answering service.
    pub fn wire_name(self) -> &'static str {
        Self::entry(self).1
    }

    /// Name shown to the user.
    pub fn label(self) -> &'static str {
        Self::entry(self).2
    }

    fn entry(self) -> &'static (Method, &'static str, &'static str) {
        METHODS
            .iter()
            .find(|(method, _, _)| *method == self)
            .unwrap_or(&METHODS[0])
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        METHODS
            .iter()
            .find(|(_, wire, label)| s.eq_ignore_ascii_case(wire) || s.eq_ignore_ascii_case(label))
            .map(|(method, _, _)| *method)
            .ok_or_else(|| format!("Unknown method: {} (expected llm2 or tfidf)", s))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Method::Llm2.wire_name(), "llm2");
        assert_eq!(Method::Tfidf.wire_name(), "tfidf");
        assert_eq!(serde_json::to_string(&Method::Tfidf).unwrap(), "\"tfidf\"");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LLM2".parse::<Method>().unwrap(), Method::Llm2);
        assert_eq!("tfidf".parse::<Method>().unwrap(), Method::Tfidf);
        assert_eq!("TfIdf".parse::<Method>().unwrap(), Method::Tfidf);
        assert!("bm25".parse::<Method>().is_err());
    }

    #[test]
    fn test_default_is_llm2() {
        assert_eq!(Method::default(), Method::Llm2);
        assert_eq!(Method::all().collect::<Vec<_>>(), vec![Method::Llm2, Method::Tfidf]);
    }
}
