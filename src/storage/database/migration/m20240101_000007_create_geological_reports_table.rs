use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeologicalReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GeologicalReports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GeologicalReports::DepositId).integer().not_null())
                    .col(ColumnDef::new(GeologicalReports::ReportType).string_len(50).null())
                    .col(ColumnDef::new(GeologicalReports::Title).string_len(200).not_null())
                    .col(ColumnDef::new(GeologicalReports::Summary).text().null())
                    .col(ColumnDef::new(GeologicalReports::AuthorId).uuid().null())
                    .col(
                        ColumnDef::new(GeologicalReports::ReportDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GeologicalReports::AccessLevel)
                            .string_len(20)
                            .null()
                            .default("public"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_geological_reports_deposit_id")
                            .from(GeologicalReports::Table, GeologicalReports::DepositId)
                            .to(Deposits::Table, Deposits::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_geological_reports_author_id")
                            .from(GeologicalReports::Table, GeologicalReports::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GeologicalReports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GeologicalReports {
    Table,
    Id,
    DepositId,
    ReportType,
    Title,
    Summary,
    AuthorId,
    ReportDate,
    AccessLevel,
}

#[derive(DeriveIden)]
enum Deposits {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
