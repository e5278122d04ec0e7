use crudgen::Entity;

#[derive(Entity, Debug, Clone, Default, PartialEq)]
#[entity(
    module = "billing",
    transfer = "InvoiceDto",
    transfer_trait = "InvoiceView",
    crud = "InvoiceRepository"
)]
pub struct Invoice {
    #[id]
    pub number: Option<u64>,
    #[auto]
    pub issued: u64,
    #[column(updatable = false)]
    pub currency: String,
}

fn takes_view<T: InvoiceView>(_: &T) {}

fn assert_repository<T: InvoiceRepository>() {}

fn main() {
    let dto = InvoiceDto::default();
    takes_view(&dto);
    assert_eq!(crudgen::IdentifiedTransfer::<Invoice>::identity(&dto), None);
}
