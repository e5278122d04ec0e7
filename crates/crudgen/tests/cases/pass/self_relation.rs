use crudgen::{Entity, Ref};

#[derive(Entity, Debug, Clone, Default, PartialEq)]
#[entity(module = "hr")]
pub struct Employee {
    #[id]
    pub id: i64,
    pub name: String,
    pub salary: Option<f64>,
    #[relation]
    pub manager: Option<Ref<Employee>>,
}

fn assert_crud<T: EmployeeCrud>() {}

fn main() {
    let mut data = EmployeeData::default();
    data.set_manager_id(Some(7));
    let manager: &Option<i64> = data.manager_id();
    assert_eq!(*manager, Some(7));
    assert_eq!(<Employee as crudgen::Entity>::NAME, "hr::Employee");

    let _ = assert_crud::<()>;
}

impl EmployeeCrud for () {
    type Session = NoSession;

    fn persistence_context(&mut self) -> &mut NoSession {
        unimplemented!()
    }
}

pub struct NoSession;

#[derive(Debug)]
pub struct NoError;

impl std::fmt::Display for NoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("no session")
    }
}

impl std::error::Error for NoError {}

impl crudgen::PersistenceSession<Employee> for NoSession {
    type Error = NoError;
    type Predicate = ();
    type Order = ();

    fn count(&mut self, _: crudgen::CriteriaQuery<(), ()>) -> Result<u64, NoError> {
        Err(NoError)
    }

    fn list(&mut self, _: crudgen::TypedQuery<(), ()>) -> Result<Vec<Employee>, NoError> {
        Err(NoError)
    }

    fn find(&mut self, _: &i64, _: crudgen::LockMode) -> Result<Option<Employee>, NoError> {
        Err(NoError)
    }

    fn persist(&mut self, _: &mut Employee) -> Result<(), NoError> {
        Err(NoError)
    }

    fn merge(&mut self, _: &Employee) -> Result<(), NoError> {
        Err(NoError)
    }

    fn remove(&mut self, _: &Employee) -> Result<(), NoError> {
        Err(NoError)
    }

    fn flush(&mut self) -> Result<(), NoError> {
        Err(NoError)
    }
}
