use crudgen::{Entity, Ref};

#[derive(Entity, Debug, Clone, Default, PartialEq)]
pub struct Department {
    #[id]
    pub code: String,
}

#[derive(Entity, Debug, Clone, Default, PartialEq)]
pub struct Employee {
    #[id]
    pub id: i64,
    #[relation]
    pub department: Ref<Department>,
    #[relation]
    pub previous: Option<Ref<Department>>,
}

fn main() {
    let mut data = EmployeeData::default();
    data.set_department_id("R&D".to_string());
    data.set_previous_id(None);
    let code: &String = data.department_id();
    assert_eq!(code, "R&D");
}
