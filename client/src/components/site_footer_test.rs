use super::*;

#[test]
fn copyright_line_includes_year_and_brand() {
    assert_eq!(
        copyright_line(2025),
        "© 2025 IPCE Gestión de Edificios. Todos los derechos reservados."
    );
}

#[test]
fn link_columns_are_product_company_legal() {
    let headings: Vec<_> = LINK_COLUMNS.iter().map(|(heading, _)| *heading).collect();
    assert_eq!(headings, ["Producto", "Empresa", "Legal"]);
}
