use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510170003_create_tickets"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("tickets"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("ticket_number")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("name")).text().not_null())
                    .col(ColumnDef::new(Alias::new("description")).text().not_null())
                    .col(
                        ColumnDef::new(Alias::new("priority"))
                            .enumeration(
                                Alias::new("ticket_priority"),
                                vec![Alias::new("High"), Alias::new("Medium"), Alias::new("Low")],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("creator")).text().not_null())
                    .col(ColumnDef::new(Alias::new("assigned_to_id")).string().null())
                    .col(ColumnDef::new(Alias::new("assigned_to_name")).text().null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(
                                Alias::new("ticket_status"),
                                vec![
                                    Alias::new("Not Started"),
                                    Alias::new("In Progress"),
                                    Alias::new("On Hold"),
                                    Alias::new("Solved"),
                                ],
                            )
                            .not_null()
                            .default("Not Started"),
                    )
                    .col(ColumnDef::new(Alias::new("cause")).text().null())
                    .col(ColumnDef::new(Alias::new("solution")).text().null())
                    .col(ColumnDef::new(Alias::new("hold_reason")).text().null())
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(
                        ColumnDef::new(Alias::new("updated_at"))
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("tickets"), Alias::new("assigned_to_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Display numbers are not unique: the counter guarantees monotonic allocation but
        // rows predating it may share a number.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tickets_ticket_number")
                    .table(Alias::new("tickets"))
                    .col(Alias::new("ticket_number"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tickets_assigned_to_id")
                    .table(Alias::new("tickets"))
                    .col(Alias::new("assigned_to_id"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("tickets")).to_owned())
            .await
    }
}
