use crate::query::ast::select::{JoinClause, Select};

/// A table joined into a query under an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedTable {
    pub table: String,
    pub alias: String,
}

/// Joins already established for a query, looked up by alias.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinRegistry {
    joins: Vec<JoinedTable>,
}

impl JoinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a join; a later join with the same alias replaces the earlier one.
    pub fn register(&mut self, table: &str, alias: &str) {
        let joined = JoinedTable {
            table: table.to_string(),
            alias: alias.to_string(),
        };
        match self.joins.iter_mut().find(|j| j.alias == alias) {
            Some(existing) => *existing = joined,
            None => self.joins.push(joined),
        }
    }

    pub fn find(&self, alias: &str) -> Option<&JoinedTable> {
        self.joins.iter().find(|j| j.alias == alias)
    }

    pub fn from_joins(joins: &[JoinClause]) -> Self {
        let mut registry = JoinRegistry::new();
        for join in joins {
            let alias = join.alias.as_deref().unwrap_or(&join.table.name);
            registry.register(&join.table.name, alias);
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }
}

/// The root table of a query together with its established joins.
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub alias: String,
    pub joins: JoinRegistry,
}

impl Root {
    pub fn new(alias: &str) -> Self {
        Root {
            alias: alias.to_string(),
            joins: JoinRegistry::new(),
        }
    }

    pub fn with_joins(mut self, joins: JoinRegistry) -> Self {
        self.joins = joins;
        self
    }

    /// Derives the root from a built `SELECT`; `None` when it has no `FROM`.
    pub fn from_select(select: &Select) -> Option<Root> {
        let from = select.from.as_ref()?;
        let alias = from.alias.as_deref().unwrap_or(&from.table.name);
        Some(Root::new(alias).with_joins(JoinRegistry::from_joins(&select.joins)))
    }
}
