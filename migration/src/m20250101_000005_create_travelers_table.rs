use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_users_table::Users;
use crate::m20250101_000002_create_trips_table::Trips;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Travelers {
    Table,
    Id,
    TripId,
    TravelerId,
    Status,
    CreatedAt,
    ApprovedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Travelers::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Travelers::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(Travelers::TripId).integer().not_null())
                .col(ColumnDef::new(Travelers::TravelerId).integer().not_null())
                .col(ColumnDef::new(Travelers::Status).string_len(16).not_null())
                .col(ColumnDef::new(Travelers::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Travelers::ApprovedAt).timestamp_with_time_zone().null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_travelers_trip")
                        .from(Travelers::Table, Travelers::TripId)
                        .to(Trips::Table, Trips::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_travelers_user")
                        .from(Travelers::Table, Travelers::TravelerId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_travelers_trip")
                .table(Travelers::Table)
                .col(Travelers::TripId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Travelers::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
