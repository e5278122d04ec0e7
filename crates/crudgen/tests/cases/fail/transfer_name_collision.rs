use crudgen::{Entity, Ref};

#[derive(Entity, Clone, Default)]
pub struct Employee {
    #[id]
    pub id: i64,
    pub manager_id: Option<i64>,
    #[relation]
    pub manager: Option<Ref<Employee>>,
}

fn main() {}
