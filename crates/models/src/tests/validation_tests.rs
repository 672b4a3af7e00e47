use crate::{bike, catalog, client, shop};

#[test]
fn shop_name_must_be_three_chars() {
    assert!(shop::validate_name("ok").is_err());
    assert!(shop::validate_name("  a ").is_err());
    assert!(shop::validate_name("Carrefour").is_ok());
}

#[test]
fn shop_address_required() {
    assert!(shop::validate_address("").is_err());
    assert!(shop::validate_address("   ").is_err());
    assert!(shop::validate_address("Main St").is_ok());
}

#[test]
fn client_rules_match_shop_rules() {
    assert!(client::validate_name("Al").is_err());
    assert!(client::validate_name("Alan").is_ok());
    assert!(client::validate_address("").is_err());
}

#[test]
fn bike_requires_brand() {
    assert!(bike::validate_brand("").is_err());
    assert!(bike::validate_brand("Trek").is_ok());
    assert!(bike::validate_name("Trek X").is_ok());
}

#[test]
fn catalog_requires_name_and_pdf() {
    assert!(catalog::validate_name("").is_err());
    assert!(catalog::validate_pdf_url(" ").is_err());
    assert!(catalog::validate_name("Bikes catalog").is_ok());
    assert!(catalog::validate_pdf_url("data/catalogs/bikes.pdf").is_ok());
}
