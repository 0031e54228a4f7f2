//! Parameterized query values.

use rusqlite::types::{ToSql, ToSqlOutput};

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(v.to_string())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Text(v)
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(v)
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Float(v)
    }
}

impl ToSql for Param {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Param::Text(s) => ToSqlOutput::from(s.as_str()),
            Param::Int(v) => ToSqlOutput::from(*v),
            Param::Float(v) => ToSqlOutput::from(*v),
        })
    }
}

/// SQL flavour of a backend. Decides placeholder syntax and which
/// functions a catalog query may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    /// Placeholder for the `n`th (1-based) parameter.
    pub fn placeholder(&self, n: usize) -> String {
        match self {
            Dialect::Postgres => format!("${}", n),
            Dialect::Sqlite => format!("?{}", n),
        }
    }
}

/// SQL text plus the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Short name used in logs and shape errors.
    pub name: &'static str,
    pub sql: String,
    pub params: Vec<Param>,
}

impl Query {
    pub fn new(name: &'static str, sql: impl Into<String>) -> Self {
        Self {
            name,
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_per_dialect() {
        assert_eq!(Dialect::Postgres.placeholder(1), "$1");
        assert_eq!(Dialect::Sqlite.placeholder(2), "?2");
    }

    #[test]
    fn bind_appends_in_order() {
        let q = Query::new("q", "SELECT ?1, ?2").bind("a").bind(3i64);
        assert_eq!(q.params, vec![Param::Text("a".into()), Param::Int(3)]);
    }
}
