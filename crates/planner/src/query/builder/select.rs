//! Typestate builder for `Select` ASTs: `SELECT` must come before `FROM`, and
//! joins or conditions only after `FROM`.

use crate::query::ast::{
    common::{JoinKind, TableRef},
    expr::Expr,
    select::{FromClause, JoinClause, Select},
};

#[derive(Debug, Default, Clone)]
pub struct InitialState;

#[derive(Debug, Default, Clone)]
pub struct SelectState;

#[derive(Debug, Default, Clone)]
pub struct FromState;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    state: State,
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            state: InitialState,
        }
    }

    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        SelectBuilder {
            ast: self.ast,
            state: SelectState,
        }
    }
}

impl SelectBuilder<SelectState> {
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(FromClause {
            table,
            alias: alias.map(String::from),
        });
        SelectBuilder {
            ast: self.ast,
            state: FromState,
        }
    }
}

impl SelectBuilder<FromState> {
    pub fn join(mut self, kind: JoinKind, table: TableRef, alias: Option<&str>, on: Expr) -> Self {
        self.ast.joins.push(JoinClause {
            kind,
            table,
            alias: alias.map(String::from),
            on,
        });
        self
    }

    /// Sets the `WHERE` condition, replacing any previous one.
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    /// ANDs a condition onto the existing `WHERE` clause.
    pub fn and_where(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(match self.ast.where_clause.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    /// Joins already established on this query.
    pub fn joins(&self) -> &[JoinClause] {
        &self.ast.joins
    }

    pub fn build(self) -> Select {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;

    use crate::{
        query::{ast::common::JoinKind, builder::select::SelectBuilder, ident, qualified},
        table_ref,
    };

    #[test]
    fn test_build_simple_select() {
        let ast = SelectBuilder::new()
            .select(vec![ident("uid"), ident("name")])
            .from(table_ref!("program"), None)
            .build();

        assert_eq!(ast.columns, vec![ident("uid"), ident("name")]);
        assert_eq!(ast.from.unwrap().table.name, "program");
        assert!(ast.where_clause.is_none());
    }

    #[test]
    fn test_and_where_combines_conditions() {
        let first = qualified("p", "code").in_list(vec![Value::from("A")]);
        let second = qualified("p", "version").in_list(vec![Value::Int(1)]);

        let ast = SelectBuilder::new()
            .select(vec![ident("uid")])
            .from(table_ref!("program"), Some("p"))
            .and_where(first.clone())
            .and_where(second.clone())
            .build();

        assert_eq!(ast.where_clause, Some(first.and(second)));
    }

    #[test]
    fn test_where_clause_replaces_condition() {
        let ast = SelectBuilder::new()
            .select(vec![ident("uid")])
            .from(table_ref!("program"), None)
            .where_clause(ident("a").in_list(vec![Value::Int(1)]))
            .where_clause(ident("b").in_list(vec![Value::Int(2)]))
            .build();

        assert_eq!(
            ast.where_clause,
            Some(ident("b").in_list(vec![Value::Int(2)]))
        );
    }

    #[test]
    fn test_joins_are_visible_while_building() {
        let builder = SelectBuilder::new()
            .select(vec![qualified("e", "uid")])
            .from(table_ref!("enrollment"), Some("e"))
            .join(
                JoinKind::Left,
                table_ref!("program"),
                Some("program"),
                qualified("e", "programid").equals(qualified("program", "programid")),
            );

        assert_eq!(builder.joins().len(), 1);
        assert_eq!(builder.joins()[0].alias.as_deref(), Some("program"));
        assert_eq!(builder.build().joins.len(), 1);
    }
}
