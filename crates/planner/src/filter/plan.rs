use crate::{
    error::QueryError,
    filter::Filter,
    joins::{JoinRegistry, Root},
    operator::{self, Operator, criterion::Criterion},
    path::QueryPath,
    query::{
        ast::{common::JoinKind, expr::Expr, select::Select},
        builder::select::{FromState, SelectBuilder},
        qualified,
    },
    table_ref,
};
use model::{
    error::SchemaError,
    records::row::RowData,
    schema::registry::{Schema, SchemaRegistry},
};
use std::collections::HashSet;
use tracing::debug;

/// A filter resolved against the schemas, ready for translation or evaluation.
#[derive(Debug)]
pub struct PlannedFilter {
    pub path: QueryPath,
    pub operator: Box<dyn Operator>,
}

/// Resolved filters of one query rooted at a schema.
#[derive(Debug)]
pub struct FilterPlan {
    root_schema: String,
    filters: Vec<PlannedFilter>,
}

impl FilterPlan {
    pub fn build(
        registry: &SchemaRegistry,
        root_schema: &str,
        filters: &[Filter],
    ) -> Result<Self, QueryError> {
        registry.get(root_schema)?;

        let filters = filters
            .iter()
            .map(|filter| {
                let path = QueryPath::resolve(registry, root_schema, &filter.path)?;
                let operator = operator::create(&filter.operator, filter.arg.clone())?;
                debug!(
                    path = %path.path,
                    operator = operator.name(),
                    aliases = ?path.alias,
                    "Planned filter"
                );
                Ok(PlannedFilter { path, operator })
            })
            .collect::<Result<Vec<_>, QueryError>>()?;

        Ok(FilterPlan {
            root_schema: root_schema.to_string(),
            filters,
        })
    }

    pub fn root_schema(&self) -> &str {
        &self.root_schema
    }

    pub fn filters(&self) -> &[PlannedFilter] {
        &self.filters
    }

    pub fn criteria(&self) -> Result<Vec<Criterion>, QueryError> {
        self.filters
            .iter()
            .map(|f| f.operator.to_criterion(&f.path))
            .collect()
    }

    /// `AND` of every filter's predicate; `None` when the plan has no filters.
    pub fn where_clause(&self, root: &Root) -> Result<Option<Expr>, QueryError> {
        let mut clause: Option<Expr> = None;
        for filter in &self.filters {
            let predicate = filter.operator.to_predicate(root, &filter.path)?;
            clause = Some(match clause {
                Some(existing) => existing.and(predicate),
                None => predicate,
            });
        }
        Ok(clause)
    }

    /// Builds a `SELECT` of the root schema's scalar columns, joining every
    /// reference crossed by a filter path.
    pub fn select(&self, registry: &SchemaRegistry) -> Result<Select, QueryError> {
        let schema = registry.get(&self.root_schema)?;
        let root_alias = schema.name.as_str();

        let columns = schema
            .properties
            .iter()
            .filter(|p| !p.is_collection())
            .map(|p| qualified(root_alias, p.field_name()))
            .collect();

        let mut builder = SelectBuilder::new()
            .select(columns)
            .from(table_ref!(schema.table), Some(root_alias));

        let mut joined = HashSet::new();
        for filter in &self.filters {
            builder = add_joins(builder, registry, schema, &filter.path, &mut joined)?;
        }

        let root = Root::new(root_alias).with_joins(JoinRegistry::from_joins(builder.joins()));
        if let Some(condition) = self.where_clause(&root)? {
            builder = builder.where_clause(condition);
        }

        Ok(builder.build())
    }

    /// True when the row passes every filter.
    pub fn matches(&self, row: &RowData) -> bool {
        self.filters
            .iter()
            .all(|f| f.operator.test(&row.get_value(&f.path.path)))
    }

    /// Keeps the rows that pass every filter.
    pub fn apply(&self, rows: Vec<RowData>) -> Vec<RowData> {
        let total = rows.len();
        let kept: Vec<RowData> = rows.into_iter().filter(|row| self.matches(row)).collect();
        debug!(total, kept = kept.len(), "Post-filtered rows");
        kept
    }
}

fn add_joins(
    mut builder: SelectBuilder<FromState>,
    registry: &SchemaRegistry,
    root: &Schema,
    path: &QueryPath,
    joined: &mut HashSet<String>,
) -> Result<SelectBuilder<FromState>, QueryError> {
    let mut schema = root;
    let mut qualifier = root.name.clone();

    for (property, alias) in path.crossed() {
        let reference = registry.property(&schema.name, property)?;
        let Some(target_name) = &reference.reference else {
            return Err(SchemaError::NotAReference {
                schema: schema.name.clone(),
                property: property.to_string(),
            }
            .into());
        };
        let target = registry.get(target_name)?;

        if joined.insert(alias.to_string()) {
            let on = qualified(&qualifier, reference.field_name())
                .equals(qualified(alias, &target.primary_key));
            builder = builder.join(JoinKind::Inner, table_ref!(target.table), Some(alias), on);
        }

        qualifier = alias.to_string();
        schema = target;
    }

    Ok(builder)
}
