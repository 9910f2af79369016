pub use sea_orm_migration::prelude::*;

mod m20250912_create_all_tables;
mod m20250918_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250912_create_all_tables::Migration),
            Box::new(m20250918_add_indexes::Migration),
        ]
    }
}
