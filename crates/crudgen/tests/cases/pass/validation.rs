use crudgen::Entity;
use validator::Validate;

#[derive(Entity, Debug, Clone, Default, PartialEq)]
pub struct Account {
    #[id]
    pub id: i64,
    #[validate(length(min = 3, max = 32))]
    pub login: String,
    #[validate(email)]
    pub email: String,
}

fn main() {
    let mut data = AccountData::default();
    data.set_login("ab".to_string());
    data.set_email("not-an-email".to_string());
    assert!(data.validate().is_err());

    data.set_login("abc".to_string());
    data.set_email("abc@example.com".to_string());
    assert!(data.validate().is_ok());
}
