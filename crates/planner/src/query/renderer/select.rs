use crate::query::{
    ast::{
        common::{JoinKind, TableRef},
        select::{FromClause, JoinClause, Select},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        for join in &self.joins {
            r.sql.push(' ');
            join.render(r);
        }

        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }
    }
}

fn render_table(r: &mut Renderer, table: &TableRef, alias: Option<&str>) {
    if let Some(schema) = &table.schema {
        r.sql.push_str(&r.dialect.quote_identifier(schema));
        r.sql.push('.');
    }
    r.sql.push_str(&r.dialect.quote_identifier(&table.name));
    if let Some(alias) = alias {
        r.sql.push_str(" AS ");
        r.sql.push_str(&r.dialect.quote_identifier(alias));
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        render_table(r, &self.table, self.alias.as_deref());
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(match self.kind {
            JoinKind::Inner => "INNER JOIN ",
            JoinKind::Left => "LEFT JOIN ",
        });
        render_table(r, &self.table, self.alias.as_deref());
        r.sql.push_str(" ON ");
        self.on.render(r);
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;

    use crate::{
        query::{
            ast::{
                common::JoinKind,
                select::{FromClause, JoinClause, Select},
            },
            dialect::{MySql, Postgres},
            ident, qualified,
            renderer::{Render, Renderer, render},
        },
        table_ref,
    };

    #[test]
    fn test_simple_select_postgres() {
        let ast = Select {
            columns: vec![ident("uid"), ident("name")],
            from: Some(FromClause {
                table: table_ref!("program"),
                alias: None,
            }),
            where_clause: Some(ident("code").in_list(vec![Value::from("P1")])),
            ..Default::default()
        };

        let dialect = Postgres;
        let mut renderer = Renderer::new(&dialect);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            sql,
            r#"SELECT "uid", "name" FROM "program" WHERE ("code" IN ($1))"#
        );
        assert_eq!(params, vec![Value::from("P1")]);
    }

    #[test]
    fn test_schema_qualified_select_mysql() {
        let ast = Select {
            columns: vec![qualified("p", "uid")],
            from: Some(FromClause {
                table: table_ref!("dhis", "program"),
                alias: Some("p".to_string()),
            }),
            where_clause: Some(qualified("p", "version").equals(ident("latest"))),
            ..Default::default()
        };

        let (sql, params) = render(&ast, &MySql);

        assert_eq!(
            sql,
            "SELECT `p`.`uid` FROM `dhis`.`program` AS `p` WHERE (`p`.`version` = `latest`)"
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_joined_select_postgres() {
        let ast = Select {
            columns: vec![qualified("e", "uid"), qualified("p", "name")],
            from: Some(FromClause {
                table: table_ref!("enrollment"),
                alias: Some("e".to_string()),
            }),
            joins: vec![JoinClause {
                kind: JoinKind::Left,
                table: table_ref!("program"),
                alias: Some("p".to_string()),
                on: qualified("e", "programid").equals(qualified("p", "programid")),
            }],
            where_clause: Some(qualified("e", "status").in_list(vec![
                Value::Enum("EnrollmentStatus".into(), "ACTIVE".into()),
                Value::Enum("EnrollmentStatus".into(), "COMPLETED".into()),
            ])),
        };

        let (sql, params) = render(&ast, &Postgres);

        let expected_sql = r#"SELECT "e"."uid", "p"."name" FROM "enrollment" AS "e" LEFT JOIN "program" AS "p" ON ("e"."programid" = "p"."programid") WHERE ("e"."status" IN ($1, $2))"#;
        assert_eq!(sql, expected_sql);
        assert_eq!(params.len(), 2);
        assert_eq!(
            params[1],
            Value::Enum("EnrollmentStatus".into(), "COMPLETED".into())
        );
    }
}
