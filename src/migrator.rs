use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240601_000001_create_warehouses_table::Migration)]
    }
}

mod m20240601_000001_create_warehouses_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000001_create_warehouses_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Warehouses::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Warehouses::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Warehouses::WarehouseId).string().not_null())
                        .col(ColumnDef::new(Warehouses::WarehouseName).string().not_null())
                        .col(ColumnDef::new(Warehouses::Address1).string().not_null())
                        .col(ColumnDef::new(Warehouses::Address2).string().null())
                        .col(ColumnDef::new(Warehouses::AreaLocality).string().not_null())
                        .col(ColumnDef::new(Warehouses::State).string().not_null())
                        .col(ColumnDef::new(Warehouses::City).string().not_null())
                        .col(
                            ColumnDef::new(Warehouses::Pincode)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(Warehouses::Gstno).string().null())
                        .col(ColumnDef::new(Warehouses::TotalLotArea).double().not_null())
                        .col(ColumnDef::new(Warehouses::CoveredArea).double().not_null())
                        .col(ColumnDef::new(Warehouses::NoOfDocs).double().null())
                        .col(ColumnDef::new(Warehouses::NoOfGate).double().null())
                        .col(ColumnDef::new(Warehouses::StorageHeight).double().null())
                        .col(ColumnDef::new(Warehouses::ParkingArea).double().null())
                        .col(
                            ColumnDef::new(Warehouses::Status)
                                .string_len(16)
                                .not_null()
                                .default("unpublish"),
                        )
                        .col(ColumnDef::new(Warehouses::WarehouseImages).json().not_null())
                        .col(
                            ColumnDef::new(Warehouses::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Warehouses::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_warehouses_warehouse_id")
                        .table(Warehouses::Table)
                        .col(Warehouses::WarehouseId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_warehouses_status_created_at")
                        .table(Warehouses::Table)
                        .col(Warehouses::Status)
                        .col(Warehouses::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Warehouses::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Warehouses {
        Table,
        Id,
        WarehouseId,
        WarehouseName,
        Address1,
        Address2,
        AreaLocality,
        State,
        City,
        Pincode,
        Gstno,
        TotalLotArea,
        CoveredArea,
        NoOfDocs,
        NoOfGate,
        StorageHeight,
        ParkingArea,
        Status,
        WarehouseImages,
        CreatedAt,
        UpdatedAt,
    }
}
