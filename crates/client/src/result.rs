use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single solution of a SELECT query: variable name to bound value.
/// Unbound variables are simply absent.
pub type Binding = HashMap<String, BindingValue>;

/// SPARQL 1.1 Query Results JSON document
/// (<https://www.w3.org/TR/sparql11-results-json/>).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparqlResults {
    pub head: ResultsHead,
    #[serde(default)]
    pub results: ResultsBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsBody {
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// An RDF term as it appears in a binding row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BindingValue {
    Uri {
        value: String,
    },
    Literal {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none", rename = "xml:lang")]
        lang: Option<String>,
    },
    Bnode {
        value: String,
    },
    /// Older servers label typed literals separately.
    #[serde(rename = "typed-literal")]
    TypedLiteral {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },
}

impl BindingValue {
    /// Lexical value of the term, without datatype or language.
    pub fn value(&self) -> &str {
        match self {
            BindingValue::Uri { value }
            | BindingValue::Literal { value, .. }
            | BindingValue::Bnode { value }
            | BindingValue::TypedLiteral { value, .. } => value,
        }
    }
}

impl SparqlResults {
    pub fn vars(&self) -> &[String] {
        &self.head.vars
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.results.bindings
    }

    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    /// Iterates the rows with cells ordered like `head.vars`; `None` marks an
    /// unbound variable.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&BindingValue>>> + '_ {
        self.results.bindings.iter().map(move |binding| {
            self.head
                .vars
                .iter()
                .map(|var| binding.get(var))
                .collect()
        })
    }
}

/// Decoded answer of a SPARQL query, shaped by the requested
/// [`ResponseFormat`](crate::ResponseFormat).
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Bindings(SparqlResults),
    Turtle(String),
}

impl QueryResult {
    pub fn into_bindings(self) -> Option<SparqlResults> {
        match self {
            QueryResult::Bindings(results) => Some(results),
            QueryResult::Turtle(_) => None,
        }
    }

    pub fn into_turtle(self) -> Option<String> {
        match self {
            QueryResult::Turtle(turtle) => Some(turtle),
            QueryResult::Bindings(_) => None,
        }
    }
}

/// Acknowledgement of a SPARQL update. GraphDB answers successful updates
/// with `204 No Content`, in which case there is no JSON to decode.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub status: u16,
    /// Decoded body, when the server sent JSON.
    pub json: Option<Value>,
    /// Body as received; non-JSON acknowledgements only show up here.
    pub body: String,
}
