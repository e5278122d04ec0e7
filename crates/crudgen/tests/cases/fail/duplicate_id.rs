use crudgen::Entity;

#[derive(Entity, Clone, Default)]
pub struct Account {
    #[id]
    pub id: i64,
    #[id]
    pub key: i64,
}

fn main() {}
