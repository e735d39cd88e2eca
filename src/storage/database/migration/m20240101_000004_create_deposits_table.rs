use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deposits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deposits::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Deposits::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Deposits::MineralTypeId).integer().null())
                    .col(ColumnDef::new(Deposits::OreTypeId).integer().null())
                    .col(ColumnDef::new(Deposits::LocationName).string_len(200).null())
                    .col(ColumnDef::new(Deposits::Latitude).double().not_null())
                    .col(ColumnDef::new(Deposits::Longitude).double().not_null())
                    .col(ColumnDef::new(Deposits::Country).string_len(100).null())
                    .col(ColumnDef::new(Deposits::Region).string_len(100).null())
                    .col(ColumnDef::new(Deposits::EstimatedReservesTonnes).double().null())
                    .col(ColumnDef::new(Deposits::AverageGrade).double().null())
                    .col(ColumnDef::new(Deposits::ConfidenceLevel).string_len(20).null())
                    .col(ColumnDef::new(Deposits::DiscoveryYear).integer().null())
                    .col(
                        ColumnDef::new(Deposits::Status)
                            .string_len(50)
                            .not_null()
                            .default("Prospect"),
                    )
                    .col(ColumnDef::new(Deposits::Notes).text().null())
                    .col(ColumnDef::new(Deposits::CreatedBy).uuid().null())
                    .col(
                        ColumnDef::new(Deposits::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deposits_mineral_type_id")
                            .from(Deposits::Table, Deposits::MineralTypeId)
                            .to(MineralTypes::Table, MineralTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deposits_ore_type_id")
                            .from(Deposits::Table, Deposits::OreTypeId)
                            .to(OreTypes::Table, OreTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deposits_created_by")
                            .from(Deposits::Table, Deposits::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Import de-duplication looks up by this triple
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deposits_name_location")
                    .table(Deposits::Table)
                    .col(Deposits::Name)
                    .col(Deposits::Latitude)
                    .col(Deposits::Longitude)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deposits_created_by")
                    .table(Deposits::Table)
                    .col(Deposits::CreatedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deposits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Deposits {
    Table,
    Id,
    Name,
    MineralTypeId,
    OreTypeId,
    LocationName,
    Latitude,
    Longitude,
    Country,
    Region,
    EstimatedReservesTonnes,
    AverageGrade,
    ConfidenceLevel,
    DiscoveryYear,
    Status,
    Notes,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MineralTypes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum OreTypes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
