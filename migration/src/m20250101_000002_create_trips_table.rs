use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trips::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trips::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(ColumnDef::new(Trips::HostId).integer().not_null())
                    .col(ColumnDef::new(Trips::Destination).string_len(50).not_null())
                    .col(ColumnDef::new(Trips::StartDate).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Trips::EndDate).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Trips::AvailableSeats).integer().null())
                    .col(ColumnDef::new(Trips::Description).string_len(200).not_null())
                    .col(ColumnDef::new(Trips::Photo).string_len(255).null())
                    .col(ColumnDef::new(Trips::Budget).integer().not_null())
                    .col(ColumnDef::new(Trips::BudgetCurrency).string_len(8).not_null())
                    .col(ColumnDef::new(Trips::AgeMin).integer().null())
                    .col(ColumnDef::new(Trips::AgeMax).integer().null())
                    .col(ColumnDef::new(Trips::Status).string_len(16).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_host")
                            .from(Trips::Table, Trips::HostId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trips_host")
                    .table(Trips::Table)
                    .col(Trips::HostId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trips::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Trips {
    Table,
    Id,
    HostId,
    Destination,
    StartDate,
    EndDate,
    AvailableSeats,
    Description,
    Photo,
    Budget,
    BudgetCurrency,
    AgeMin,
    AgeMax,
    Status,
}
