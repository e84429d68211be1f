//! Named monotonic counters. The `ticket_number` row hands out human-facing ticket numbers.
//!
//! Allocation takes the SQLite write lock with its first statement, so two creations that
//! run [`Model::next_ticket_number`] inside their own transactions are serialized and can
//! never observe the same value.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ConnectionTrait, Set};

use super::ticket;

pub const TICKET_NUMBER: &str = "ticket_number";

/// Number given to the first ticket of an empty database.
pub const FIRST_TICKET_NUMBER: i64 = 1001;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_counters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    /// Last value handed out.
    pub value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Allocates the next ticket number.
    ///
    /// Must run on the same transaction as the insert that consumes the number. The result
    /// is always greater than every `ticket_number` already stored, so rows written before
    /// the counter existed are respected.
    pub async fn next_ticket_number<C: ConnectionTrait>(db: &C) -> Result<i64, DbErr> {
        Entity::insert(ActiveModel {
            name: Set(TICKET_NUMBER.to_owned()),
            value: Set(FIRST_TICKET_NUMBER - 1),
        })
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

        Entity::update_many()
            .col_expr(Column::Value, Expr::col(Column::Value).add(1))
            .filter(Column::Name.eq(TICKET_NUMBER))
            .exec(db)
            .await?;

        let counter = Entity::find_by_id(TICKET_NUMBER.to_owned())
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("ticket_number counter missing".into()))?;

        let floor = ticket::Model::highest_ticket_number(db)
            .await?
            .map_or(FIRST_TICKET_NUMBER, |highest| highest + 1);

        if counter.value >= floor {
            return Ok(counter.value);
        }

        let mut active: ActiveModel = counter.into();
        active.value = Set(floor);
        active.update(db).await?;
        Ok(floor)
    }
}
