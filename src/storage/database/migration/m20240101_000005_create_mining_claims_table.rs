use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MiningClaims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MiningClaims::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MiningClaims::ClaimId)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MiningClaims::DepositId).integer().null())
                    .col(ColumnDef::new(MiningClaims::OwnerId).uuid().null())
                    .col(ColumnDef::new(MiningClaims::CompanyName).string_len(200).null())
                    .col(ColumnDef::new(MiningClaims::LocationDescription).text().null())
                    .col(ColumnDef::new(MiningClaims::AreaHectares).double().null())
                    .col(
                        ColumnDef::new(MiningClaims::ClaimType)
                            .string_len(50)
                            .not_null()
                            .default("Exploration"),
                    )
                    .col(ColumnDef::new(MiningClaims::IssueDate).date().null())
                    .col(ColumnDef::new(MiningClaims::ExpiryDate).date().null())
                    .col(
                        ColumnDef::new(MiningClaims::Status)
                            .string_len(50)
                            .not_null()
                            .default("Active"),
                    )
                    .col(ColumnDef::new(MiningClaims::Latitude).double().null())
                    .col(ColumnDef::new(MiningClaims::Longitude).double().null())
                    .col(
                        ColumnDef::new(MiningClaims::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mining_claims_deposit_id")
                            .from(MiningClaims::Table, MiningClaims::DepositId)
                            .to(Deposits::Table, Deposits::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mining_claims_owner_id")
                            .from(MiningClaims::Table, MiningClaims::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mining_claims_claim_id")
                    .table(MiningClaims::Table)
                    .col(MiningClaims::ClaimId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mining_claims_owner_id")
                    .table(MiningClaims::Table)
                    .col(MiningClaims::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MiningClaims::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MiningClaims {
    Table,
    Id,
    ClaimId,
    DepositId,
    OwnerId,
    CompanyName,
    LocationDescription,
    AreaHectares,
    ClaimType,
    IssueDate,
    ExpiryDate,
    Status,
    Latitude,
    Longitude,
    CreatedAt,
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
