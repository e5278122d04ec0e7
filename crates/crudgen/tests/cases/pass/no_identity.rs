use crudgen::{Entity, TransferObject};

#[derive(Entity, Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub label: String,
    pub weight: u8,
}

fn main() {
    let tag = Tag {
        label:  "rust".to_string(),
        weight: 3,
    };
    let data = TagData::from_entity(&tag);
    assert_eq!(data.label(), "rust");
    assert_eq!(*data.weight(), 3);
    assert_eq!(<Tag as crudgen::Entity>::NAME, "Tag");
}
