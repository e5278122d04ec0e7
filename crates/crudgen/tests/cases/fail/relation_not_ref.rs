use crudgen::Entity;

#[derive(Entity, Clone, Default)]
pub struct Order {
    #[id]
    pub id: i64,
    #[relation]
    pub customer: i64,
}

fn main() {}
