use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Minerals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Minerals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Minerals::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Minerals::Formula).string_len(100).null())
                    .col(ColumnDef::new(Minerals::Properties).text().null())
                    .col(ColumnDef::new(Minerals::Uses).text().null())
                    .col(ColumnDef::new(Minerals::Economic).text().null())
                    .col(ColumnDef::new(Minerals::Countries).string_len(255).null())
                    .col(ColumnDef::new(Minerals::Image).string_len(255).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_minerals_name")
                    .table(Minerals::Table)
                    .col(Minerals::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SsRegulations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SsRegulations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SsRegulations::Title).string_len(200).not_null())
                    .col(ColumnDef::new(SsRegulations::Description).text().null())
                    .col(ColumnDef::new(SsRegulations::ApplicableStates).text().null())
                    .col(ColumnDef::new(SsRegulations::Requirements).text().null())
                    .col(
                        ColumnDef::new(SsRegulations::ContactAuthority)
                            .string_len(200)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SsRegulations::LastUpdated)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(SsRegulations::DocumentUrl).string_len(500).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LearningContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LearningContent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LearningContent::Title).string_len(200).not_null())
                    .col(ColumnDef::new(LearningContent::Category).string_len(50).not_null())
                    .col(ColumnDef::new(LearningContent::Content).text().not_null())
                    .col(ColumnDef::new(LearningContent::Summary).text().null())
                    .col(ColumnDef::new(LearningContent::RelatedMinerals).text().null())
                    .col(
                        ColumnDef::new(LearningContent::DifficultyLevel)
                            .string_len(20)
                            .not_null()
                            .default("Beginner"),
                    )
                    .col(
                        ColumnDef::new(LearningContent::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LearningContent::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SsRegulations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Minerals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Minerals {
    Table,
    Id,
    Name,
    Formula,
    Properties,
    Uses,
    Economic,
    Countries,
    Image,
}

#[derive(DeriveIden)]
enum SsRegulations {
    Table,
    Id,
    Title,
    Description,
    ApplicableStates,
    Requirements,
    ContactAuthority,
    LastUpdated,
    DocumentUrl,
}

#[derive(DeriveIden)]
enum LearningContent {
    Table,
    Id,
    Title,
    Category,
    Content,
    Summary,
    RelatedMinerals,
    DifficultyLevel,
    CreatedAt,
}
