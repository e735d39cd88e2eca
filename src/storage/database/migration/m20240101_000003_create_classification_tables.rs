use sea_orm_migration::prelude::*;

/// Name of the catch-all classification that imports fall back to
const UNCLASSIFIED: &str = "Unclassified";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MineralTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MineralTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MineralTypes::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(MineralTypes::Description).text().null())
                    .col(ColumnDef::new(MineralTypes::Category).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OreTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OreTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OreTypes::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(OreTypes::Description).text().null())
                    .col(
                        ColumnDef::new(OreTypes::ExtractionDifficulty)
                            .string_len(20)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Fresh tables, so these rows receive id 1
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(MineralTypes::Table)
                    .columns([MineralTypes::Name, MineralTypes::Description])
                    .values_panic([
                        UNCLASSIFIED.into(),
                        "Deposits whose mineral has not been classified yet".into(),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(OreTypes::Table)
                    .columns([OreTypes::Name, OreTypes::Description])
                    .values_panic([
                        UNCLASSIFIED.into(),
                        "Deposits whose ore has not been classified yet".into(),
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OreTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MineralTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MineralTypes {
    Table,
    Id,
    Name,
    Description,
    Category,
}

#[derive(DeriveIden)]
enum OreTypes {
    Table,
    Id,
    Name,
    Description,
    ExtractionDifficulty,
}
