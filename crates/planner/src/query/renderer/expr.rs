use crate::query::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, Ident},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::BinaryOp(op) => op.render(r),
            Expr::InList {
                expr,
                list,
                negated,
            } => {
                r.sql.push('(');
                expr.render(r);
                r.sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    item.render(r);
                }
                r.sql.push_str("))");
            }
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::And => " AND ",
            BinaryOperator::Or => " OR ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
        r.sql.push(')');
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;

    use crate::query::{
        ast::expr::{BinaryOp, BinaryOperator, Expr},
        dialect::{MySql, Postgres},
        qualified,
        renderer::render,
    };

    #[test]
    fn test_in_list_postgres() {
        let expr = qualified("de", "code").in_list(vec![Value::from("A"), Value::from("B")]);

        let (sql, params) = render(&expr, &Postgres);

        assert_eq!(sql, r#"("de"."code" IN ($1, $2))"#);
        assert_eq!(params, vec![Value::from("A"), Value::from("B")]);
    }

    #[test]
    fn test_negated_in_list_mysql() {
        let expr = Expr::InList {
            expr: Box::new(qualified("de", "version")),
            list: vec![Expr::Value(Value::Int(1))],
            negated: true,
        };

        let (sql, params) = render(&expr, &MySql);

        assert_eq!(sql, "(`de`.`version` NOT IN (?))");
        assert_eq!(params, vec![Value::Int(1)]);
    }

    #[test]
    fn test_or_of_conditions() {
        let expr = Expr::BinaryOp(Box::new(BinaryOp {
            left: qualified("e", "status").in_list(vec![Value::from("ACTIVE")]),
            op: BinaryOperator::Or,
            right: qualified("e", "deleted").equals(Expr::Value(Value::Boolean(true))),
        }));

        let (sql, params) = render(&expr, &Postgres);

        assert_eq!(
            sql,
            r#"(("e"."status" IN ($1)) OR ("e"."deleted" = $2))"#
        );
        assert_eq!(params.len(), 2);
    }
}
