use sea_orm::{
    sea_query::{BinOper, Expr, Func, SimpleExpr},
    ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Select,
};

use crate::models::warehouse::{Column, Entity};
use crate::models::WarehouseStatus;

const LIKE_ESCAPE: char = '!';

/// Search filters for warehouse listings.
///
/// Blank inputs are treated as absent. Inactive listings are always excluded.
/// Case folding happens in the database on both sides of each comparison, so
/// it follows the backend's `LOWER`: ASCII only on SQLite, full Unicode on
/// Postgres.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseFilter {
    q: Option<String>,
    state: Option<String>,
    city: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Escapes LIKE wildcards so user input is matched literally.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn lower(column: Column) -> Expr {
    Expr::expr(Func::lower(Expr::col(column)))
}

fn lower_val(value: String) -> SimpleExpr {
    SimpleExpr::FunctionCall(Func::lower(Expr::val(value)))
}

fn equals_ci(column: Column, value: &str) -> SimpleExpr {
    lower(column).eq(lower_val(value.to_string()))
}

/// `LOWER(column) LIKE LOWER('%needle%') ESCAPE '!'`
fn contains_ci(column: Column, needle: &str) -> SimpleExpr {
    let pattern = lower_val(format!("%{}%", escape_like(needle)));
    lower(column).binary(
        BinOper::Like,
        SimpleExpr::Binary(
            Box::new(pattern),
            BinOper::Escape,
            Box::new(SimpleExpr::Constant(LIKE_ESCAPE.into())),
        ),
    )
}

impl WarehouseFilter {
    pub fn new(q: Option<&str>, state: Option<&str>, city: Option<&str>) -> Self {
        Self {
            q: non_blank(q),
            state: non_blank(state),
            city: non_blank(city),
        }
    }

    /// A filter with only the base predicate.
    pub fn visible() -> Self {
        Self::default()
    }

    /// Base predicate plus every supplied criterion, ANDed.
    pub fn to_condition(&self) -> Condition {
        let mut condition = Condition::all().add(Column::Status.ne(WarehouseStatus::InActive));

        if let Some(state) = &self.state {
            condition = condition.add(equals_ci(Column::State, state));
        }
        if let Some(city) = &self.city {
            condition = condition.add(contains_ci(Column::City, city));
        }
        if let Some(q) = &self.q {
            condition = condition.add(
                Condition::any()
                    .add(contains_ci(Column::WarehouseName, q))
                    .add(contains_ci(Column::AreaLocality, q))
                    .add(contains_ci(Column::City, q))
                    .add(contains_ci(Column::State, q)),
            );
        }
        condition
    }

    /// Filtered select in listing order: newest first, then by id.
    pub fn select(&self) -> Select<Entity> {
        Entity::find()
            .filter(self.to_condition())
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
    }
}
