use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_users_table::Users;
use crate::m20250101_000002_create_trips_table::Trips;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    TripId,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Favorites::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Favorites::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(Favorites::TripId).integer().not_null())
                .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_favorites_trip")
                        .from(Favorites::Table, Favorites::TripId)
                        .to(Trips::Table, Trips::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_favorites_user")
                        .from(Favorites::Table, Favorites::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // One bookmark per (trip, user)
        m.create_index(
            Index::create()
                .name("uq_favorites_trip_user")
                .table(Favorites::Table)
                .col(Favorites::TripId)
                .col(Favorites::UserId)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_favorites_user")
                .table(Favorites::Table)
                .col(Favorites::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Favorites::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
