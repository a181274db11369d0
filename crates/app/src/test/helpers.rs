//! Test Helpers

use crate::{
    domain::{
        categories::{
            CategoriesService, CategoriesServiceError,
            data::NewCategory,
            records::{CategoryRecord, CategoryUuid},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
        transactions::{
            TransactionsService, TransactionsServiceError, data::CheckoutItem,
            records::TransactionRecord,
        },
    },
    test::TestContext,
};

pub(crate) async fn create_category(
    ctx: &TestContext,
    name: &str,
) -> Result<CategoryRecord, CategoriesServiceError> {
    ctx.categories
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: name.to_string(),
            description: None,
        })
        .await
}

/// Create an uncategorised product.
pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: u64,
    stock: u32,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            price,
            stock,
            category: None,
        })
        .await
}

pub(crate) async fn checkout(
    ctx: &TestContext,
    items: &[(ProductUuid, u32)],
) -> Result<TransactionRecord, TransactionsServiceError> {
    let items = items
        .iter()
        .map(|&(product, quantity)| CheckoutItem { product, quantity })
        .collect();

    ctx.transactions.checkout(items).await
}
