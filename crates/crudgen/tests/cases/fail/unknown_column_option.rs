use crudgen::Entity;

#[derive(Entity, Clone, Default)]
pub struct Sku {
    #[column(unique)]
    pub code: String,
}

fn main() {}
